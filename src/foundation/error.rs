/// Convenience result type used across glint.
pub type GlintResult<T> = Result<T, GlintError>;

/// Top-level error taxonomy used by library APIs.
///
/// Malformed animation directives are deliberately *not* represented here: the SMIL core skips
/// them and keeps rendering.
#[derive(thiserror::Error, Debug)]
pub enum GlintError {
    /// Invalid caller-provided data (unknown emotion, bad options, broken style directory).
    #[error("validation error: {0}")]
    Validation(String),

    /// Animation driver failures that are not tied to a single directive.
    #[error("animation error: {0}")]
    Animation(String),

    /// Document parsing or rasterization failures.
    #[error("render error: {0}")]
    Render(String),

    /// Image encoding failures.
    #[error("encode error: {0}")]
    Encode(String),

    /// Remote display API failures.
    #[error("push error: {0}")]
    Push(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GlintError {
    /// Build a [`GlintError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GlintError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`GlintError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`GlintError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`GlintError::Push`] value.
    pub fn push(msg: impl Into<String>) -> Self {
        Self::Push(msg.into())
    }

    /// Build a [`GlintError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
