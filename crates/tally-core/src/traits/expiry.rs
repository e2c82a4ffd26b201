//! Session expiry hook.

/// Invoked when the session cannot be recovered.
///
/// The collaborator on the other side routes the user back to
/// authentication. The client invokes it at most once per irrecoverable
/// failure, but implementations must still tolerate concurrent failure
/// paths without harmful side effects.
pub trait SessionExpiryHandler: Send + Sync {
    /// React to the session ending.
    fn on_session_expired(&self);
}

/// Handler that does nothing. For embedding and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExpiryHandler;

impl SessionExpiryHandler for NoopExpiryHandler {
    fn on_session_expired(&self) {}
}
