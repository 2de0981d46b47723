use std::sync::{Arc, Mutex};

use event_error::{AppError, AppErrorEvent, EventTarget, ListenerId, ListenerOptions};

/// One listener invocation.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub label: String,
    pub kind: String,
    pub error: AppError,
}

/// Shared log of listener invocations.
///
/// Every listener created from the same recorder appends to one log, so the
/// log order is the order in which the target invoked them.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Recorded>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A listener that records each invocation under `label`.
    pub fn listener(&self, label: &str) -> impl Fn(&AppErrorEvent) + Send + Sync + use<> {
        let calls = Arc::clone(&self.calls);
        let label = label.to_string();
        move |event: &AppErrorEvent| {
            calls.lock().unwrap().push(Recorded {
                label: label.clone(),
                kind: event.kind().to_string(),
                error: event.detail().error.clone(),
            });
        }
    }

    /// Register a recording listener for `kind` on `target`.
    pub fn attach<T: EventTarget>(&self, target: &T, kind: &str, label: &str) -> ListenerId {
        target
            .add_event_listener(kind, ListenerOptions::default(), self.listener(label))
            .expect("failed to attach recording listener")
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn count_for(&self, label: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.label == label)
            .count()
    }

    pub fn labels(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.label.clone())
            .collect()
    }

    pub fn last_error(&self) -> Option<AppError> {
        self.calls.lock().unwrap().last().map(|c| c.error.clone())
    }
}
