use crate::auth::Credentials;
use crate::domain::{AccountSecret, Identifier, InvalidReason};
use secrecy::Secret;
use serde::Deserialize;

/// What the login form submits. The "remember me" checkbox has no
/// behaviour behind it and is not carried.
#[derive(Debug, Deserialize)]
pub struct LoginData {
    pub identifier: String,
    pub secret: Secret<String>,
}

impl LoginData {
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: Secret::new(secret.into()),
        }
    }
}

impl TryFrom<LoginData> for Credentials {
    type Error = InvalidReason;

    fn try_from(form: LoginData) -> Result<Self, Self::Error> {
        let identifier = Identifier::parse(form.identifier, InvalidReason::LoginFieldsMissing)?;
        let secret = AccountSecret::parse(form.secret, InvalidReason::LoginFieldsMissing)?;
        Ok(Credentials { identifier, secret })
    }
}
