use crate::domain::InvalidReason;
use std::fmt::{Debug, Formatter};

/// Why the simulated backend turned a request down.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    #[error("Incorrect username/email or password. Please try again.")]
    InvalidCredentials,

    #[error("This email is already registered. Please log in or use another email.")]
    AlreadyRegistered,
}

#[derive(thiserror::Error)]
pub enum AuthFlowError {
    /// Raised before any simulated latency.
    #[error("{0}")]
    ValidationError(InvalidReason),
    /// Raised once the simulated latency has elapsed.
    #[error(transparent)]
    AuthError(#[from] AuthFailure),
}

impl From<InvalidReason> for AuthFlowError {
    fn from(value: InvalidReason) -> Self {
        Self::ValidationError(value)
    }
}

// We are still using a bespoke implementation of `Debug`
// to get a nice report using the error source chain
impl Debug for AuthFlowError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
