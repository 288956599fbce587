use miette::Diagnostic;
use thiserror::Error;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised during planning or per-task execution.
///
/// None of these are recovered locally; they propagate to the caller and
/// abort the whole run before any external side effect happens. There is
/// no partial generation mode.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("invalid name '{name}': {reason}")]
    #[diagnostic(
        code(strata::name_validation),
        help("a name needs at least one alphabetic word and must not be a TypeScript reserved word")
    )]
    NameValidation { name: String, reason: String },

    #[error("option '{option}' has no generation rule for submodule '{submodule}' (kind '{kind}')")]
    #[diagnostic(
        code(strata::option_conflict),
        help("drop the option or choose a submodule kind that supports it")
    )]
    OptionConflict {
        option: &'static str,
        submodule: String,
        kind: String,
    },

    #[error("symbol '{symbol}' requested from both '{first_module}' and '{second_module}'")]
    #[diagnostic(
        code(strata::import_conflict),
        help("rename one of the generated symbols; imports are never silently shadowed")
    )]
    ImportConflict {
        symbol: String,
        first_module: String,
        second_module: String,
    },

    #[error("file task '{task}' is not part of a valid dependency order")]
    #[diagnostic(code(strata::plan_dependency))]
    PlanDependency { task: String },
}

impl Error {
    /// Create a name validation error.
    pub fn name_validation(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::NameValidation {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::name_validation("", "name is empty");
        assert_eq!(err.to_string(), "invalid name '': name is empty");

        let err = Error::ImportConflict {
            symbol: "Foo".into(),
            first_module: "./a".into(),
            second_module: "./b".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("./a"));
        assert!(msg.contains("./b"));
    }
}
