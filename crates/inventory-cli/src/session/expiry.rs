//! Session expiry handling for the CLI.

use std::sync::atomic::{AtomicBool, Ordering};

use tally_core::SessionExpiryHandler;

use crate::output;

/// Prints re-login guidance when the session ends.
///
/// Concurrent failure paths may race into the handler; the flag keeps the
/// guidance to a single line per process.
#[derive(Debug, Default)]
pub struct CliExpiryHandler {
    notified: AtomicBool,
}

impl CliExpiryHandler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionExpiryHandler for CliExpiryHandler {
    fn on_session_expired(&self) {
        if self.notified.swap(true, Ordering::SeqCst) {
            return;
        }
        output::error("Session expired. Run 'inventory login' to sign in again.");
    }
}
