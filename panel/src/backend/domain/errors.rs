use shared::EntityType;

/// Recoverable errors raised by panel operations.
///
/// None of these leave the session in a partially-updated state: the
/// operation that fails performs no mutation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PanelError {
    #[error("The panel is locked")]
    Locked,
    #[error("Senha incorreta. Tente novamente.")]
    AuthenticationRejected,
    #[error("The {entity} form is missing required fields: {}", .missing.join(", "))]
    IncompleteDraft {
        entity: EntityType,
        missing: Vec<&'static str>,
    },
    #[error("Unknown {entity} field '{field}'")]
    UnknownField { entity: EntityType, field: String },
    #[error("No identifiers left for a new {entity}")]
    IdentifiersExhausted { entity: EntityType },
    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },
}

pub type PanelResult<T> = Result<T, PanelError>;
