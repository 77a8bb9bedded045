/// Convenience alias for `Result<T, CardstockError>`.
pub type CardstockResult<T> = Result<T, CardstockError>;

/// Error type shared across the engine.
///
/// Field-level problems (missing, empty, over-length values) are never
/// errors; renderers fall back locally. Errors are reserved for bad deck
/// documents, unusable font sets, and failed export operations.
#[derive(thiserror::Error, Debug)]
pub enum CardstockError {
    /// Deck documents, options, or blueprint usage that violate the model.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font catalog preparation or shaping failures.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization failures.
    #[error("render error: {0}")]
    Render(String),

    /// Sink or file output failures; an export fails as a whole.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardstockError {
    /// Build a [`CardstockError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardstockError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CardstockError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardstockError::Export`].
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
