use crate::auth::{AuthSimulator, CredentialStore, SimulatedLatency};
use crate::configuration::Settings;
use crate::error::BizErrorEnum;
use crate::terminal::{self, Command};
use crate::view::ViewController;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// The wired-up store, simulator and controller behind the terminal front-end.
pub struct Application {
    controller: ViewController,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, BizErrorEnum> {
        let store = Arc::new(CredentialStore::with_fixture(config.fixture.account()?));
        let latency = Arc::new(SimulatedLatency::new(config.application.latency()));
        let simulator = Arc::new(AuthSimulator::new(store, latency));

        Ok(Self {
            controller: ViewController::new(simulator),
        })
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), BizErrorEnum> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run(stdin, stdout).await
    }

    /// Reads commands line by line until `quit` or end of input, printing
    /// the current screen after each one.
    pub async fn run<R, W>(mut self, input: R, mut output: W) -> Result<(), BizErrorEnum>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        write_page(&mut output, &terminal::render(self.controller.state())).await?;

        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .map_err(BizErrorEnum::ReadCommandError)?
        {
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            if matches!(command, Command::Quit) {
                break;
            }
            if let Some(notice) = self.handle(command, &mut output).await? {
                write_page(&mut output, &notice).await?;
            }
            write_page(&mut output, &terminal::render(self.controller.state())).await?;
        }
        Ok(())
    }

    /// Applies one command, returning a hint to print when the command
    /// could not be carried out.
    #[tracing::instrument(name = "Handle command", skip(self, output))]
    async fn handle<W>(
        &mut self,
        command: Command,
        output: &mut W,
    ) -> Result<Option<String>, BizErrorEnum>
    where
        W: AsyncWrite + Unpin,
    {
        let outcome = match command {
            Command::Login(data) => {
                write_page(output, "Logging in...").await?;
                self.controller.submit_login(data).await
            }
            Command::Register(data) => {
                write_page(output, "Registering...").await?;
                self.controller.submit_register(data).await
            }
            Command::Switch => match self.controller.switch_to_register() {
                Ok(()) => Ok(()),
                Err(_) => self.controller.switch_to_login(),
            },
            Command::Dismiss => {
                self.controller.dismiss_message();
                Ok(())
            }
            Command::Logout => self.controller.sign_out(),
            Command::Help => return Ok(Some(terminal::HELP.to_string())),
            Command::Unknown(verb) => {
                return Ok(Some(format!(
                    "Unknown command `{}`. Type `help` for the list.",
                    verb
                )))
            }
            Command::Quit => Ok(()),
        };
        Ok(outcome.err().map(|e| e.to_string()))
    }
}

async fn write_page<W>(output: &mut W, page: &str) -> Result<(), BizErrorEnum>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(format!("{}\n", page.trim_end()).as_bytes())
        .await
        .map_err(BizErrorEnum::WriteOutputError)?;
    output.flush().await.map_err(BizErrorEnum::WriteOutputError)
}
