mod credentials;
mod latency;
mod simulator;
mod store;

pub use credentials::*;
pub use latency::*;
pub use simulator::*;
pub use store::*;
