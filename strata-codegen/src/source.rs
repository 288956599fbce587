//! Fragment accumulation and deterministic source rendering.

use crate::{ImportRegistry, Result};

/// Metadata rendered as the file's leading doc comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Short title, e.g. "Product entities".
    pub title: String,
    /// One-sentence description of the file's role.
    pub description: String,
    /// Module path, e.g. "@acme/product".
    pub module_path: String,
}

impl FileHeader {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        module_path: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            module_path: module_path.into(),
        }
    }
}

/// One accumulated unit of output text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Leading doc comment, always rendered first.
    Header(FileHeader),
    /// Section divider comment.
    SectionComment(String),
    /// Raw source text, emitted verbatim.
    Raw(String),
    /// Blank line; consecutive runs collapse to one.
    Blank,
}

/// Append-only fragment accumulator with a deterministic `render`.
///
/// A builder is owned exclusively by the single file-generation call
/// that created it. Rendering reads nothing but the accumulated
/// fragments and the import registry: no clock, no randomness, no
/// process-global state. Inputs like a generation timestamp must arrive
/// as explicit fragment payloads.
#[derive(Debug, Clone, Default)]
pub struct SourceBuilder {
    fragments: Vec<Fragment>,
    imports: ImportRegistry,
}

impl SourceBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the file header. Rendered first regardless of insertion order.
    pub fn add_header(&mut self, header: FileHeader) -> &mut Self {
        self.fragments.push(Fragment::Header(header));
        self
    }

    /// Add a section divider comment.
    pub fn add_section_comment(&mut self, text: impl Into<String>) -> &mut Self {
        self.fragments.push(Fragment::SectionComment(text.into()));
        self
    }

    /// Add a raw block of source text.
    pub fn add_raw(&mut self, text: impl Into<String>) -> &mut Self {
        self.fragments.push(Fragment::Raw(text.into()));
        self
    }

    /// Add a blank line.
    pub fn add_blank(&mut self) -> &mut Self {
        self.fragments.push(Fragment::Blank);
        self
    }

    /// Access the import registry scoped to this file.
    pub fn imports(&mut self) -> &mut ImportRegistry {
        &mut self.imports
    }

    /// Check if nothing has been accumulated.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty() && self.imports.is_empty()
    }

    /// Render the accumulated fragments to source text.
    ///
    /// Order: header doc comment, consolidated import block, then every
    /// remaining fragment in insertion order. Runs of two or more blank
    /// fragments collapse to exactly one blank line. Calling `render`
    /// twice on the same builder yields byte-identical text.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::ImportConflict`](crate::Error::ImportConflict)
    /// from the import registry.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();

        let header = self.fragments.iter().find_map(|f| match f {
            Fragment::Header(h) => Some(h),
            _ => None,
        });
        if let Some(header) = header {
            out.push_str("/**\n");
            out.push_str(&format!(" * {}\n", header.title));
            out.push_str(" *\n");
            out.push_str(&format!(" * {}\n", header.description));
            out.push_str(" *\n");
            out.push_str(&format!(" * @module {}\n", header.module_path));
            out.push_str(" */\n");
        }

        let import_block = self.imports.render()?;
        if !import_block.is_empty() {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&import_block);
            out.push('\n');
        }

        // Blocks are separated by exactly one blank line; a section
        // comment sticks to the block that follows it. Runs of explicit
        // blank fragments collapse into that single separator.
        let mut pending_blank = false;
        let mut glued = false;
        for fragment in &self.fragments {
            match fragment {
                Fragment::Header(_) => {}
                Fragment::Blank => pending_blank = true,
                Fragment::SectionComment(text) => {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str(&format!("// --- {} ---\n", text));
                    pending_blank = false;
                    glued = true;
                }
                Fragment::Raw(text) => {
                    if !out.is_empty() && (!glued || pending_blank) {
                        out.push('\n');
                    }
                    out.push_str(text);
                    if !text.ends_with('\n') {
                        out.push('\n');
                    }
                    pending_blank = false;
                    glued = false;
                }
            }
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_renders_nothing() {
        let builder = SourceBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.render().unwrap(), "");
    }

    #[test]
    fn test_header_then_imports_then_body() {
        let mut builder = SourceBuilder::new();
        builder.add_raw("export const X = 1;");
        builder.add_header(FileHeader::new(
            "Product entities",
            "Contract-layer entity types for the product domain.",
            "@acme/product",
        ));
        builder.imports().type_only("./entities", "Product");

        let out = builder.render().unwrap();
        let header_pos = out.find("Product entities").unwrap();
        let import_pos = out.find("import type").unwrap();
        let body_pos = out.find("export const X").unwrap();
        assert!(header_pos < import_pos);
        assert!(import_pos < body_pos);
        assert!(out.contains("@module @acme/product"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let mut builder = SourceBuilder::new();
        builder.add_header(FileHeader::new("Title", "Description.", "@acme/x"));
        builder.add_raw("export const A = 1;");
        builder.add_blank();
        builder.add_section_comment("Queries");
        builder.add_raw("export const B = 2;");

        let first = builder.render().unwrap();
        let second = builder.render().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_blank_runs_collapse() {
        let mut builder = SourceBuilder::new();
        builder.add_raw("const a = 1;");
        builder.add_blank();
        builder.add_blank();
        builder.add_blank();
        builder.add_raw("const b = 2;");

        let out = builder.render().unwrap();
        assert_eq!(out, "const a = 1;\n\nconst b = 2;\n");
    }

    #[test]
    fn test_section_comment_format() {
        let mut builder = SourceBuilder::new();
        builder.add_section_comment("Events");
        let out = builder.render().unwrap();
        assert_eq!(out, "// --- Events ---\n");
    }

    #[test]
    fn test_fragments_keep_insertion_order() {
        let mut builder = SourceBuilder::new();
        builder.add_raw("first");
        builder.add_raw("second");
        builder.add_raw("third");

        let out = builder.render().unwrap();
        let first = out.find("first").unwrap();
        let second = out.find("second").unwrap();
        let third = out.find("third").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_import_conflict_surfaces_through_render() {
        let mut builder = SourceBuilder::new();
        builder.imports().value("./a", "Foo");
        builder.imports().value("./b", "Foo");
        builder.add_raw("export const x = Foo;");

        assert!(builder.render().is_err());
    }
}
