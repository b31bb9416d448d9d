use crate::domain::{AccountSecret, Identifier};

/// A login attempt that passed the presence checks.
#[derive(Debug)]
pub struct Credentials {
    pub identifier: Identifier,
    pub secret: AccountSecret,
}
