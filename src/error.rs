use thiserror::Error;

/// Top-level error type for the framing engine.
#[derive(Debug, Error)]
pub enum FramingError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to the wall/panel model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid wall {wall}: {reason}")]
    InvalidWall { wall: String, reason: String },
}

/// Errors related to user configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure reported by the host application while placing or annotating members.
#[derive(Debug, Error)]
#[error("host rejected {operation}: {message}")]
pub struct HostError {
    /// The host operation that failed.
    pub operation: &'static str,
    /// Host-provided description.
    pub message: String,
}

impl HostError {
    /// Creates a new host error.
    #[must_use]
    pub fn new(operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            operation,
            message: message.into(),
        }
    }
}

/// Convenience type alias for results using [`FramingError`].
pub type Result<T> = std::result::Result<T, FramingError>;
