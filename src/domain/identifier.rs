use crate::constant::FIXTURE_IDENTIFIER;
use crate::domain::InvalidReason;

/// Username or email used to look an account up.
///
/// Matching is exact and case-sensitive, so the value is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);
impl Identifier {
    /// `reason` is what the caller reports when the input is empty,
    /// login and registration word it differently. Whitespace counts as
    /// input.
    pub fn parse(identifier: String, reason: InvalidReason) -> Result<Self, InvalidReason> {
        if identifier.is_empty() {
            return Err(reason);
        }

        Ok(Self(identifier))
    }

    pub(crate) fn fixture() -> Self {
        Self(FIXTURE_IDENTIFIER.to_string())
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
