use std::sync::atomic::{AtomicBool, Ordering};

/// The process-wide logged-in flag. No token, no expiry.
#[derive(Debug, Default)]
pub struct SessionState(AtomicBool);

impl SessionState {
    pub fn log_in(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_logged_in(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn log_out(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
