/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// account seeded into every fresh credential store
pub const FIXTURE_IDENTIFIER: &str = "test@example.com";
pub const FIXTURE_SECRET: &str = "123456";

/// simulated round trip of the fake auth backend
pub const DEFAULT_LATENCY_MILLISECONDS: u64 = 1500;

/// validate registration secret
pub const MIN_SECRET_LENGTH: usize = 6;

/// messages shown by the view controller
pub const REGISTER_SUCCESS_MSG: &str = "Registration successful! Please log in.";
