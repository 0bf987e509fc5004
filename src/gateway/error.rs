//! Uniform failure surface for every gateway operation.
//!
//! Callers get exactly one error type; the variants exist for logging and
//! tests, not for differentiated handling upstream.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("Transport failure: {reason}")]
    Transport { reason: String },

    #[error("Malformed response: {reason}")]
    Schema { reason: String },

    #[error("The model returned no usable content")]
    Empty,
}

pub type GenerationResult<T> = Result<T, GenerationError>;

impl GenerationError {
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport { reason: reason.into() }
    }

    pub fn schema(reason: impl Into<String>) -> Self {
        Self::Schema { reason: reason.into() }
    }
}
