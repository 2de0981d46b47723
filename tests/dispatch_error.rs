// tests/dispatch_error.rs

mod common;
use crate::common::{TestError, init_tracing, test_error};

use std::sync::{Arc, Mutex};

use event_error::{
    APP_ERROR_EVENT, AppError, AppErrorEvent, Document, EventTarget, ListenerOptions,
    dispatch_error,
};
use event_error_test_utils::recorder::Recorder;

#[test]
fn dispatches_app_error_event_with_the_error() {
    init_tracing();
    let document = Document::new();
    let recorder = Recorder::new();
    recorder.attach(&document, APP_ERROR_EVENT, "listener");

    let error = test_error("Test Error");
    dispatch_error(&document, error.clone()).unwrap();

    assert_eq!(recorder.count(), 1);
    let call = &recorder.calls()[0];
    assert_eq!(call.kind, "appError");
    assert!(call.error.ptr_eq(&error));
    assert_eq!(call.error.message(), "Test Error");
    assert!(call.error.downcast_ref::<TestError>().is_some());
}

#[test]
fn no_listeners_is_not_an_error() {
    init_tracing();
    let document = Document::new();

    dispatch_error(&document, test_error("x")).unwrap();
}

#[test]
fn listeners_run_once_each_in_registration_order() {
    init_tracing();
    let document = Document::new();
    let order: Arc<Mutex<Vec<&'static str>>> = Arc::default();

    for label in ["A", "B"] {
        let order = Arc::clone(&order);
        document
            .add_event_listener(
                APP_ERROR_EVENT,
                ListenerOptions::default(),
                move |_: &AppErrorEvent| {
                    // A has fully returned before B starts.
                    order.lock().unwrap().push(label);
                },
            )
            .unwrap();
    }

    dispatch_error(&document, test_error("err")).unwrap();

    assert_eq!(*order.lock().unwrap(), vec!["A", "B"]);
}

#[test]
fn late_listener_misses_earlier_dispatch() {
    init_tracing();
    let document = Document::new();
    let recorder = Recorder::new();
    recorder.attach(&document, APP_ERROR_EVENT, "early");

    dispatch_error(&document, test_error("first")).unwrap();
    recorder.attach(&document, APP_ERROR_EVENT, "late");

    assert_eq!(recorder.count_for("early"), 1);
    assert_eq!(recorder.count_for("late"), 0);

    dispatch_error(&document, test_error("second")).unwrap();
    assert_eq!(recorder.labels(), vec!["early", "early", "late"]);
}

#[test]
fn absent_error_is_forwarded_as_is() {
    init_tracing();
    let document = Document::new();
    let recorder = Recorder::new();
    recorder.attach(&document, APP_ERROR_EVENT, "listener");

    dispatch_error(&document, None::<AppError>).unwrap();

    let error = recorder.last_error().unwrap();
    assert!(error.is_absent());
}

#[test]
fn listeners_for_other_events_are_not_called() {
    init_tracing();
    let document = Document::new();
    let recorder = Recorder::new();
    recorder.attach(&document, "appWarning", "warning");

    dispatch_error(&document, test_error("x")).unwrap();

    assert_eq!(recorder.count(), 0);
}

#[test]
fn listener_can_react_by_error_type() {
    init_tracing();
    let document = Document::new();
    let alerts: Arc<Mutex<Vec<String>>> = Arc::default();

    let sink = Arc::clone(&alerts);
    document
        .add_event_listener(
            APP_ERROR_EVENT,
            ListenerOptions::default(),
            move |event: &AppErrorEvent| {
                if let Some(err) = event.detail().error.downcast_ref::<TestError>() {
                    sink.lock().unwrap().push(format!("test error: {}", err.0));
                }
            },
        )
        .unwrap();

    dispatch_error(&document, test_error("db down")).unwrap();
    dispatch_error(&document, anyhow::anyhow!("unrelated")).unwrap();

    assert_eq!(*alerts.lock().unwrap(), vec!["test error: db down"]);
}
