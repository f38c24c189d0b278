/// Convenience result type used across hexmorph.
pub type HexResult<T> = Result<T, HexError>;

/// Top-level error taxonomy used by library APIs.
#[derive(thiserror::Error, Debug)]
pub enum HexError {
    /// Invalid user-provided configuration or geometry parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// A shape's point source failed to produce its seed points.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// Errors while rasterizing a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding frames to an output container.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HexError {
    /// Build a [`HexError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`HexError::Dataset`] value.
    pub fn dataset(msg: impl Into<String>) -> Self {
        Self::Dataset(msg.into())
    }

    /// Build a [`HexError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`HexError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`HexError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
