/// Crate-wide result alias.
pub type MaskhullResult<T> = Result<T, MaskhullError>;

/// Error type for all fallible maskhull operations.
#[derive(thiserror::Error, Debug)]
pub enum MaskhullError {
    /// Caller-supplied parameters or buffers violate a documented contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// An internal stage boundary was reached with inconsistent state.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Any other error, preserved with its source chain.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskhullError {
    /// Shorthand for [`MaskhullError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Shorthand for [`MaskhullError::Evaluation`].
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
