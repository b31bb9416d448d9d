use crate::auth::AuthSimulator;
use crate::constant::REGISTER_SUCCESS_MSG;
use crate::request::{LoginData, RegisterData};
use crate::view::{Status, View, ViewState};
use std::sync::Arc;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    #[error("A request is already in flight.")]
    Busy,

    #[error("That action is not available on the current screen.")]
    NotAvailable,
}

/// State machine picking the screen to render from auth outcomes and
/// explicit navigation.
///
/// A submission holds `&mut self` until the simulator answers, so at
/// most one request is ever in flight per controller.
pub struct ViewController {
    simulator: Arc<AuthSimulator>,
    state: ViewState,
}

impl ViewController {
    pub fn new(simulator: Arc<AuthSimulator>) -> Self {
        Self {
            simulator,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn simulator(&self) -> &AuthSimulator {
        &self.simulator
    }

    #[tracing::instrument(name = "Submit login form", skip(self, data))]
    pub async fn submit_login(&mut self, data: LoginData) -> Result<(), ViewError> {
        self.ensure_on(View::Login)?;
        let submission = Submission::begin(&mut self.state);

        match self.simulator.login(data).await {
            Ok(()) => submission.succeed(View::ProductListing, None),
            Err(e) => submission.fail(e.to_string()),
        }
        Ok(())
    }

    #[tracing::instrument(name = "Submit registration form", skip(self, data))]
    pub async fn submit_register(&mut self, data: RegisterData) -> Result<(), ViewError> {
        self.ensure_on(View::Register)?;
        let submission = Submission::begin(&mut self.state);

        match self.simulator.register(data).await {
            Ok(()) => submission.succeed(View::Login, Some(REGISTER_SUCCESS_MSG.to_string())),
            Err(e) => submission.fail(e.to_string()),
        }
        Ok(())
    }

    pub fn switch_to_register(&mut self) -> Result<(), ViewError> {
        self.ensure_on(View::Login)?;
        self.state.show(View::Register);
        Ok(())
    }

    pub fn switch_to_login(&mut self) -> Result<(), ViewError> {
        self.ensure_on(View::Register)?;
        self.state.show(View::Login);
        Ok(())
    }

    /// The close button on the message banner. Status is left alone.
    pub fn dismiss_message(&mut self) {
        self.state.message = None;
    }

    pub fn sign_out(&mut self) -> Result<(), ViewError> {
        self.ensure_on(View::ProductListing)?;
        self.simulator.log_out();
        self.state.show(View::Login);
        Ok(())
    }

    fn ensure_on(&self, view: View) -> Result<(), ViewError> {
        if self.state.is_pending() {
            return Err(ViewError::Busy);
        }
        if self.state.view != view {
            return Err(ViewError::NotAvailable);
        }
        Ok(())
    }
}

/// Marks the state pending for the lifetime of a submission. If the
/// submitting future is dropped before the simulator answers, the screen
/// goes back to idle instead of staying pending.
struct Submission<'a>(&'a mut ViewState);

impl<'a> Submission<'a> {
    fn begin(state: &'a mut ViewState) -> Self {
        state.begin_submission();
        Self(state)
    }

    fn succeed(self, view: View, message: Option<String>) {
        self.0.succeed(view, message);
    }

    fn fail(self, message: String) {
        self.0.fail(message);
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if self.0.is_pending() {
            tracing::warn!("Submission abandoned before the auth backend answered");
            self.0.status = Status::Idle;
        }
    }
}
