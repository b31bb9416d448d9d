use crate::constant::{FIXTURE_SECRET, MIN_SECRET_LENGTH};
use crate::domain::InvalidReason;
use secrecy::{ExposeSecret, Secret};

/// Plaintext password of the mock. Wrapped in `Secret` so it never
/// shows up in `Debug` output or in span fields.
#[derive(Debug, Clone)]
pub struct AccountSecret(Secret<String>);
impl AccountSecret {
    /// Login only checks presence.
    pub fn parse(secret: Secret<String>, reason: InvalidReason) -> Result<Self, InvalidReason> {
        if secret.expose_secret().is_empty() {
            return Err(reason);
        }
        Ok(Self(secret))
    }

    /// Registration also checks the length and the confirmation.
    pub fn parse_new(
        secret: Secret<String>,
        confirmation: &Secret<String>,
    ) -> Result<Self, InvalidReason> {
        if secret.expose_secret().is_empty() || confirmation.expose_secret().is_empty() {
            return Err(InvalidReason::RegisterFieldsMissing);
        }

        // Length is counted in UTF-16 code units, the way a browser form
        // reports it: `👍` counts as two, a decomposed `é` as two.
        if secret.expose_secret().encode_utf16().count() < MIN_SECRET_LENGTH {
            return Err(InvalidReason::SecretIsTooShort);
        }

        if secret.expose_secret() != confirmation.expose_secret() {
            return Err(InvalidReason::SecretConfirmationMismatch);
        }

        Ok(Self(secret))
    }

    pub(crate) fn fixture() -> Self {
        Self(Secret::new(FIXTURE_SECRET.to_string()))
    }

    pub fn matches(&self, candidate: &AccountSecret) -> bool {
        self.0.expose_secret() == candidate.0.expose_secret()
    }
}
