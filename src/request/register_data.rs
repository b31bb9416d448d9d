use crate::domain::{AccountSecret, Identifier, InvalidReason, NewAccount};
use secrecy::Secret;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterData {
    pub identifier: String,
    pub secret: Secret<String>,
    pub confirm_secret: Secret<String>,
}

impl RegisterData {
    pub fn new(
        identifier: impl Into<String>,
        secret: impl Into<String>,
        confirm_secret: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            secret: Secret::new(secret.into()),
            confirm_secret: Secret::new(confirm_secret.into()),
        }
    }
}

impl TryFrom<RegisterData> for NewAccount {
    type Error = InvalidReason;

    fn try_from(form: RegisterData) -> Result<Self, Self::Error> {
        let identifier = Identifier::parse(form.identifier, InvalidReason::RegisterFieldsMissing)?;
        let secret = AccountSecret::parse_new(form.secret, &form.confirm_secret)?;
        Ok(NewAccount::new(identifier, secret))
    }
}
