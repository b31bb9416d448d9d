use crate::domain::{AccountSecret, Identifier};
use std::fmt::{Display, Formatter};

/// A registration that passed every local check and may be handed
/// to the credential store.
#[derive(Debug)]
pub struct NewAccount {
    identifier: Identifier,
    secret: AccountSecret,
}
impl NewAccount {
    pub fn new(identifier: Identifier, secret: AccountSecret) -> Self {
        Self { identifier, secret }
    }

    pub fn identifier(&self) -> &str {
        self.identifier.as_ref()
    }

    pub fn into_parts(self) -> (Identifier, AccountSecret) {
        (self.identifier, self.secret)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    LoginFieldsMissing,

    RegisterFieldsMissing,
    SecretIsTooShort,
    SecretConfirmationMismatch,
}
impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::LoginFieldsMissing => {
                "Please enter both your username/email and password."
            }

            InvalidReason::RegisterFieldsMissing => "Please fill in all fields.",
            InvalidReason::SecretIsTooShort => "Password must be at least 6 characters.",
            InvalidReason::SecretConfirmationMismatch => "Confirmation password does not match.",
        }
    }
}

impl Display for InvalidReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
