use thiserror::Error;

/// Engine-level failure taxonomy.
///
/// Content and configuration problems are fatal at load time. Choice
/// eligibility violations abort the action and surface to the caller.
/// Unknown effect kinds are skipped per effect; the batch continues.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("choice {choice} of '{event}' is not eligible: {reason}")]
    IneligibleChoice {
        event: String,
        choice: usize,
        reason: String,
    },

    #[error("unknown effect kind: {0}")]
    UnknownEffect(String),
}

impl EngineError {
    pub fn configuration(message: impl Into<String>) -> Self {
        EngineError::Configuration(message.into())
    }
}
