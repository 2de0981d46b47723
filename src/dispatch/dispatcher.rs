// src/dispatch/dispatcher.rs

use tracing::{trace, warn};

use crate::config::DispatcherSection;
use crate::errors::Result;
use crate::event::{CustomEvent, EventTarget};
use crate::types::APP_ERROR_EVENT;

use super::app_error::{AppError, AppErrorPayload};

/// Wraps errors into `appError` events and dispatches them on a target the
/// caller owns.
///
/// The dispatcher performs no validation of the error value and never
/// catches failures of the target: if the target cannot dispatch, its error
/// is returned unchanged and no listener has run.
#[derive(Debug, Clone)]
pub struct ErrorDispatcher<T: EventTarget> {
    target: T,
    event_name: String,
    warn_when_unheard: bool,
}

impl<T: EventTarget> ErrorDispatcher<T> {
    /// Dispatcher using the default `appError` event name.
    pub fn new(target: T) -> Self {
        Self {
            target,
            event_name: APP_ERROR_EVENT.to_string(),
            warn_when_unheard: false,
        }
    }

    pub fn from_config(target: T, cfg: &DispatcherSection) -> Self {
        Self {
            target,
            event_name: cfg.event_name.clone(),
            warn_when_unheard: cfg.warn_when_unheard,
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    /// Broadcast `error` to every listener currently registered for the
    /// event name. Listeners run synchronously, in registration order,
    /// before this returns.
    pub fn dispatch(&self, error: impl Into<AppError>) -> Result<()> {
        self.dispatch_counted(error).map(|_| ())
    }

    /// Same as [`dispatch`](Self::dispatch), returning how many listeners
    /// were notified.
    pub fn dispatch_counted(&self, error: impl Into<AppError>) -> Result<usize> {
        let event = CustomEvent::new(self.event_name.as_str(), AppErrorPayload::new(error));
        let notified = self.target.dispatch_event(&event)?;

        trace!(
            event = %self.event_name,
            error = %event.detail().error,
            notified,
            "application error dispatched"
        );
        if notified == 0 && self.warn_when_unheard {
            warn!(
                event = %self.event_name,
                error = %event.detail().error,
                "application error dispatched but nobody is listening"
            );
        }

        Ok(notified)
    }
}

/// Dispatch `error` as an `appError` event on `target`.
pub fn dispatch_error<T: EventTarget>(target: &T, error: impl Into<AppError>) -> Result<()> {
    ErrorDispatcher::new(target).dispatch(error)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::dispatch::AppErrorEvent;
    use crate::errors::EventErrorError;
    use crate::event::Document;
    use crate::types::ListenerOptions;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct TestError(String);

    #[test]
    fn dispatch_delivers_same_instance() {
        let doc = Document::new();
        let seen: Arc<Mutex<Vec<AppError>>> = Arc::default();
        let sink = Arc::clone(&seen);
        doc.add_event_listener(
            APP_ERROR_EVENT,
            ListenerOptions::default(),
            move |event: &AppErrorEvent| {
                sink.lock().unwrap().push(event.detail().error.clone());
            },
        )
        .unwrap();

        let error = AppError::new(TestError("Test Error".into()));
        dispatch_error(&doc, error.clone()).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert!(seen[0].ptr_eq(&error));
    }

    #[test]
    fn custom_event_name_from_config() {
        let doc = Document::new();
        let hits = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&hits);
        doc.add_event_listener("fatal", ListenerOptions::default(), move |_: &AppErrorEvent| {
            *counter.lock().unwrap() += 1;
        })
        .unwrap();

        let cfg = DispatcherSection {
            event_name: "fatal".to_string(),
            warn_when_unheard: true,
        };
        let dispatcher = ErrorDispatcher::from_config(doc.clone(), &cfg);

        assert_eq!(dispatcher.event_name(), "fatal");
        assert_eq!(dispatcher.dispatch_counted(AppError::absent()).unwrap(), 1);
        assert_eq!(*hits.lock().unwrap(), 1);
    }

    #[test]
    fn detached_target_error_passes_through() {
        let doc = Document::new();
        doc.detach();

        let err = dispatch_error(&doc, AppError::new(TestError("x".into()))).unwrap_err();
        assert!(matches!(err, EventErrorError::TargetDetached(_)));
    }
}
