mod controller;
mod state;

pub use controller::{ViewController, ViewError};
pub use state::{Status, View, ViewState};
