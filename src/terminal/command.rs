use crate::request::{LoginData, RegisterData};

/// One line typed at the prompt.
#[derive(Debug)]
pub enum Command {
    Login(LoginData),
    Register(RegisterData),
    Switch,
    Dismiss,
    Logout,
    Help,
    Quit,
    Unknown(String),
}

impl Command {
    /// Missing arguments become empty fields, the same as submitting a
    /// half-filled form, so they surface as validation messages.
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let verb = words.next()?;
        let mut arg = || words.next().unwrap_or_default().to_string();

        let command = match verb.to_lowercase().as_str() {
            "login" => {
                let identifier = arg();
                let secret = arg();
                Command::Login(LoginData::new(identifier, secret))
            }
            "register" => {
                let identifier = arg();
                let secret = arg();
                let confirm_secret = arg();
                Command::Register(RegisterData::new(identifier, secret, confirm_secret))
            }
            "switch" => Command::Switch,
            "dismiss" => Command::Dismiss,
            "logout" => Command::Logout,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_string()),
        };
        Some(command)
    }
}

pub const HELP: &str = "\
Commands:
  login <username-or-email> <password>
  register <email> <password> <confirm-password>
  switch     toggle between the login and registration forms
  dismiss    close the message banner
  logout     leave the product listing
  help       show this text
  quit       exit";
