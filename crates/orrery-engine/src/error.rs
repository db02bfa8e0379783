/// A color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// Rejected scene configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid galaxy json")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be finite and non-negative, got {value}")]
    OutOfRange { field: &'static str, value: f32 },
    #[error("galaxy point count {count} exceeds the limit of {max}")]
    TooManyPoints { count: u32, max: u32 },
    #[error("invalid {field}")]
    Color {
        field: &'static str,
        #[source]
        source: ColorError,
    },
}
