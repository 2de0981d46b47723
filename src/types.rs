use std::fmt;

/// Name of the event carrying application errors.
pub const APP_ERROR_EVENT: &str = "appError";

/// Opaque handle for a registered listener.
///
/// Handles are allocated from a per-target counter and never reused, so a
/// stale handle can never remove somebody else's listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(raw: u64) -> Self {
        ListenerId(raw)
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

/// Per-registration options, mirroring the DOM `addEventListener` options
/// that make sense outside a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListenerOptions {
    /// Remove the listener right before its first invocation.
    pub once: bool,
}

impl ListenerOptions {
    pub fn once() -> Self {
        ListenerOptions { once: true }
    }
}
