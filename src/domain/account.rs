use crate::domain::{AccountSecret, Identifier, NewAccount};

/// One registered user. Never mutated once stored.
#[derive(Debug, Clone)]
pub struct Account {
    identifier: Identifier,
    secret: AccountSecret,
}

impl Account {
    pub fn new(identifier: Identifier, secret: AccountSecret) -> Self {
        Self { identifier, secret }
    }

    /// The account every fresh store is seeded with.
    pub fn fixture() -> Self {
        Self::new(Identifier::fixture(), AccountSecret::fixture())
    }

    pub fn identifier(&self) -> &str {
        self.identifier.as_ref()
    }

    pub fn secret(&self) -> &AccountSecret {
        &self.secret
    }
}

impl From<NewAccount> for Account {
    fn from(value: NewAccount) -> Self {
        let (identifier, secret) = value.into_parts();
        Self::new(identifier, secret)
    }
}
