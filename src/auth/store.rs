use crate::auth::Credentials;
use crate::domain::Account;
use crate::error::AuthFailure;
use tokio::sync::RwLock;

/// In-memory, ordered list of registered accounts.
///
/// Accounts are only ever appended. The duplicate check and the append
/// in `insert` run under a single write guard, so two concurrent
/// registrations for the same identifier cannot both succeed.
#[derive(Debug)]
pub struct CredentialStore {
    accounts: RwLock<Vec<Account>>,
}

impl CredentialStore {
    pub fn empty() -> Self {
        Self {
            accounts: RwLock::new(Vec::new()),
        }
    }

    pub fn with_fixture(fixture: Account) -> Self {
        Self {
            accounts: RwLock::new(vec![fixture]),
        }
    }

    /// Exact, case-sensitive match on both identifier and secret.
    #[tracing::instrument(name = "Verify credentials", skip(self, credentials))]
    pub async fn verify(&self, credentials: &Credentials) -> bool {
        self.accounts.read().await.iter().any(|account| {
            account.identifier() == credentials.identifier.as_ref()
                && account.secret().matches(&credentials.secret)
        })
    }

    #[tracing::instrument(name = "Store new account", skip(self, account))]
    pub async fn insert(&self, account: Account) -> Result<(), AuthFailure> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .iter()
            .any(|stored| stored.identifier() == account.identifier())
        {
            return Err(AuthFailure::AlreadyRegistered);
        }
        accounts.push(account);
        tracing::debug!("Credential store now holds {} accounts", accounts.len());
        Ok(())
    }

    pub async fn contains(&self, identifier: &str) -> bool {
        self.accounts
            .read()
            .await
            .iter()
            .any(|account| account.identifier() == identifier)
    }

    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::with_fixture(Account::fixture())
    }
}
