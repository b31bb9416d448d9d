/// Which screen is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Login,
    Register,
    ProductListing,
}

/// Orthogonal to `View`: where the last submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Pending,
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub view: View,
    pub status: Status,
    pub message: Option<String>,
}

impl ViewState {
    pub fn is_pending(&self) -> bool {
        self.status == Status::Pending
    }

    /// Navigation always lands on a clean screen.
    pub(crate) fn show(&mut self, view: View) {
        self.view = view;
        self.status = Status::Idle;
        self.message = None;
    }

    pub(crate) fn begin_submission(&mut self) {
        self.status = Status::Pending;
        self.message = None;
    }

    pub(crate) fn succeed(&mut self, view: View, message: Option<String>) {
        self.view = view;
        self.status = Status::Success;
        self.message = message;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = Status::Error;
        self.message = Some(message);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            view: View::Login,
            status: Status::Idle,
            message: None,
        }
    }
}
