mod account;
mod account_secret;
mod identifier;
mod new_account;

pub use account::Account;
pub use account_secret::AccountSecret;
pub use identifier::Identifier;
pub use new_account::{InvalidReason, NewAccount};
