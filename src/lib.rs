pub mod auth;
pub mod catalogue;
pub mod configuration;
pub mod constant;
pub mod domain;
pub mod error;
pub mod request;
pub mod session_state;
pub mod startup;
pub mod telemetry;
pub mod terminal;
pub mod view;
