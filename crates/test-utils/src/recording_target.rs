use std::any::Any;
use std::sync::{Arc, Mutex};

use event_error::errors::{EventErrorError, Result};
use event_error::{
    AppError, AppErrorEvent, CustomEvent, EventTarget, ListenerId, ListenerOptions,
};

/// A fake target that:
/// - accepts registrations but never invokes listeners
/// - records the kind of every dispatched event, plus the error for
///   `appError`-shaped events
/// - can be made unavailable to simulate a missing host context.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    dispatched: Arc<Mutex<Vec<(String, Option<AppError>)>>>,
    unavailable: bool,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn dispatched(&self) -> Vec<(String, Option<AppError>)> {
        self.dispatched.lock().unwrap().clone()
    }
}

impl EventTarget for RecordingTarget {
    fn add_event_listener<D, F>(
        &self,
        _kind: &str,
        _options: ListenerOptions,
        _listener: F,
    ) -> Result<ListenerId>
    where
        D: Any,
        F: Fn(&CustomEvent<D>) + Send + Sync + 'static,
    {
        Err(EventErrorError::Other(anyhow::anyhow!(
            "RecordingTarget does not support listeners"
        )))
    }

    fn remove_event_listener(&self, _id: ListenerId) -> bool {
        false
    }

    fn dispatch_event<D: Any>(&self, event: &CustomEvent<D>) -> Result<usize> {
        if self.unavailable {
            return Err(EventErrorError::TargetDetached(
                "recording target is unavailable".to_string(),
            ));
        }

        let error = (event as &dyn Any)
            .downcast_ref::<AppErrorEvent>()
            .map(|e| e.detail().error.clone());
        self.dispatched
            .lock()
            .unwrap()
            .push((event.kind().to_string(), error));
        Ok(0)
    }

    fn listener_count(&self, _kind: &str) -> usize {
        0
    }
}
