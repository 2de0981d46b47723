// tests/error_handling.rs

mod common;
use crate::common::{init_tracing, test_error};

use std::io::Write;
use std::sync::{Arc, Mutex};

use event_error::config::load_and_validate;
use event_error::errors::EventErrorError;
use event_error::{
    APP_ERROR_EVENT, AppError, AppErrorEvent, Document, ErrorDispatcher, EventTarget,
    ListenerOptions, dispatch_error,
};
use event_error_test_utils::recorder::Recorder;
use event_error_test_utils::recording_target::RecordingTarget;
use tempfile::NamedTempFile;

#[test]
fn detached_document_fails_before_any_listener_runs() {
    init_tracing();
    let document = Document::new();
    let recorder = Recorder::new();
    recorder.attach(&document, APP_ERROR_EVENT, "listener");

    document.detach();
    let result = dispatch_error(&document, test_error("x"));

    match result {
        Err(EventErrorError::TargetDetached(msg)) => {
            assert!(msg.contains("appError"));
        }
        Err(e) => panic!("Expected TargetDetached error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
    assert_eq!(recorder.count(), 0);
}

#[test]
fn detach_inside_listener_still_notifies_every_listener() {
    init_tracing();
    let document = Document::new();
    let log: Arc<Mutex<Vec<&'static str>>> = Arc::default();

    let inner = document.clone();
    let first = Arc::clone(&log);
    document
        .add_event_listener(
            APP_ERROR_EVENT,
            ListenerOptions::default(),
            move |_: &AppErrorEvent| {
                first.lock().unwrap().push("A");
                inner.detach();
            },
        )
        .unwrap();
    let second = Arc::clone(&log);
    document
        .add_event_listener(
            APP_ERROR_EVENT,
            ListenerOptions::default(),
            move |_: &AppErrorEvent| {
                second.lock().unwrap().push("B");
            },
        )
        .unwrap();

    dispatch_error(&document, AppError::absent()).unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["A", "B"]);
    assert!(matches!(
        dispatch_error(&document, AppError::absent()),
        Err(EventErrorError::TargetDetached(_))
    ));
}

#[test]
fn unavailable_target_error_is_passed_through() {
    init_tracing();
    let target = RecordingTarget::unavailable();
    let dispatcher = ErrorDispatcher::new(target.clone());

    let err = dispatcher.dispatch(test_error("x")).unwrap_err();

    assert!(matches!(err, EventErrorError::TargetDetached(_)));
    assert!(target.dispatched().is_empty());
}

#[test]
fn dispatcher_works_against_any_target() {
    init_tracing();
    let target = RecordingTarget::new();
    let dispatcher = ErrorDispatcher::new(&target);

    let error = test_error("recorded");
    dispatcher.dispatch(error.clone()).unwrap();

    let dispatched = target.dispatched();
    assert_eq!(dispatched.len(), 1);
    assert_eq!(dispatched[0].0, "appError");
    assert!(dispatched[0].1.as_ref().unwrap().ptr_eq(&error));
}

#[test]
fn invalid_event_name_returns_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[dispatcher]
event_name = "app error"
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());

    match result {
        Err(EventErrorError::ConfigError(msg)) => {
            assert!(msg.contains("whitespace"));
            assert!(msg.contains("app error"));
        }
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_key_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[dispatcher]
event = "appError"
"#
    )
    .unwrap();

    let result = load_and_validate(file.path());
    assert!(matches!(result, Err(EventErrorError::TomlError(_))));
}

#[test]
fn missing_file_returns_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_and_validate(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(EventErrorError::IoError(_))));
}
