//! Data-driven resource shape consumed by the generic renderers.
//!
//! One declarative spec of fields, error kinds, and event kinds feeds
//! every layer's template, instead of a hand-written generator function
//! per file variant.

/// One entity field beyond the id.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// camelCase field name as it appears in generated source.
    pub name: String,
    /// TypeScript type text.
    pub ty: String,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// Constructor shape of a generated error class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorShape {
    /// `constructor(id: string)`, message built from the id plus a
    /// detail phrase (e.g. "not found").
    ById { detail: &'static str },
    /// `constructor(message: string)`, message passed through.
    ByMessage,
}

/// One error class to generate: role suffix plus constructor shape.
#[derive(Debug, Clone)]
pub struct ErrorKindSpec {
    pub suffix: &'static str,
    pub shape: ErrorShape,
}

/// Payload carried by a generated event interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPayload {
    /// The full entity.
    Entity,
    /// Only the entity id.
    Id,
}

/// One event interface to generate.
#[derive(Debug, Clone)]
pub struct EventKindSpec {
    /// Interface suffix, e.g. "CreatedEvent".
    pub suffix: &'static str,
    /// Discriminant action, e.g. "created".
    pub action: &'static str,
    pub payload: EventPayload,
}

/// Declarative shape of a generated resource.
#[derive(Debug, Clone)]
pub struct ResourceSpec {
    /// Entity fields beyond the id.
    pub fields: Vec<FieldSpec>,
    /// Error classes to generate.
    pub error_kinds: Vec<ErrorKindSpec>,
    /// Event interfaces to generate.
    pub event_kinds: Vec<EventKindSpec>,
}

impl ResourceSpec {
    /// The standard resource shape: audit timestamps, not-found and
    /// validation errors, created/updated/deleted events.
    pub fn standard() -> Self {
        Self {
            fields: vec![
                FieldSpec::new("createdAt", "string"),
                FieldSpec::new("updatedAt", "string"),
            ],
            error_kinds: vec![
                ErrorKindSpec {
                    suffix: "NotFoundError",
                    shape: ErrorShape::ById {
                        detail: "not found",
                    },
                },
                ErrorKindSpec {
                    suffix: "ValidationError",
                    shape: ErrorShape::ByMessage,
                },
            ],
            event_kinds: vec![
                EventKindSpec {
                    suffix: "CreatedEvent",
                    action: "created",
                    payload: EventPayload::Entity,
                },
                EventKindSpec {
                    suffix: "UpdatedEvent",
                    action: "updated",
                    payload: EventPayload::Entity,
                },
                EventKindSpec {
                    suffix: "DeletedEvent",
                    action: "deleted",
                    payload: EventPayload::Id,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_shape() {
        let resource = ResourceSpec::standard();
        assert_eq!(resource.fields.len(), 2);
        assert_eq!(resource.error_kinds.len(), 2);
        assert_eq!(resource.event_kinds.len(), 3);
        assert_eq!(resource.error_kinds[0].suffix, "NotFoundError");
    }
}
