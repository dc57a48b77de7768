use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionCode {
    ConnectionNotEstablished,
    ObligationNotFound,
    InvalidTransition,
    ResourceNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRejection {
    pub code: RejectionCode,
    pub message: String,
}

impl TransitionRejection {
    pub fn new(code: RejectionCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{code:?}: {message}")]
pub struct TransitionError {
    pub code: RejectionCode,
    pub message: String,
}

impl TransitionError {
    pub fn new(code: RejectionCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// A resource outside the provider's locker means the caller offered
    /// something it should not have; every other code is an ordinary no-op.
    pub fn is_invariant_violation(&self) -> bool {
        self.code == RejectionCode::ResourceNotFound
    }
}

impl From<TransitionError> for TransitionRejection {
    fn from(value: TransitionError) -> Self {
        Self {
            code: value.code,
            message: value.message,
        }
    }
}
