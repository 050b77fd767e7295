use thiserror::Error;

#[derive(Debug, Error)]
pub enum NurbsError {
    #[error("Topology error: {0}")]
    Topology(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Malformed document at `{field}`: {reason}")]
    MalformedDocument { field: String, reason: String },

    #[error("Unsupported dimension {0}: only 2- and 3-dimensional geometry is supported")]
    UnsupportedDimension(usize),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl NurbsError {
    /// Shorthand for a [`NurbsError::MalformedDocument`] at `field`.
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDocument {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NurbsError>;
