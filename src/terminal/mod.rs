mod command;
mod render;

pub use command::{Command, HELP};
pub use render::render;
