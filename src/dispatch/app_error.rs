// src/dispatch/app_error.rs

//! The error value carried by `appError` events.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::errors::EventErrorError;
use crate::event::CustomEvent;

/// Any diagnosable failure a caller wants to broadcast.
///
/// Cloning is cheap and clones share the underlying allocation, so a listener
/// can hold on to the exact error instance that was dispatched (see
/// [`AppError::ptr_eq`]).
#[derive(Clone)]
pub enum AppError {
    /// A typed error value.
    Failure(Arc<dyn StdError + Send + Sync + 'static>),
    /// An `anyhow` report, with its context chain and backtrace.
    Report(Arc<anyhow::Error>),
    /// The caller had no error value; forwarded as-is.
    Absent,
}

impl AppError {
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        AppError::Failure(Arc::new(error))
    }

    pub fn from_report(report: anyhow::Error) -> Self {
        AppError::Report(Arc::new(report))
    }

    pub fn absent() -> Self {
        AppError::Absent
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, AppError::Absent)
    }

    /// Top-level message (outermost context for reports).
    pub fn message(&self) -> String {
        match self {
            AppError::Failure(err) => err.to_string(),
            AppError::Report(report) => report.to_string(),
            AppError::Absent => "<absent error>".to_string(),
        }
    }

    /// Messages of the error and all of its causes, outermost first.
    pub fn chain(&self) -> Vec<String> {
        match self {
            AppError::Failure(err) => {
                let mut messages = Vec::new();
                let mut current: Option<&(dyn StdError + 'static)> = Some(err.as_ref());
                while let Some(err) = current {
                    messages.push(err.to_string());
                    current = err.source();
                }
                messages
            }
            AppError::Report(report) => report.chain().map(|e| e.to_string()).collect(),
            AppError::Absent => Vec::new(),
        }
    }

    /// Borrow the concrete error if it is an `E`.
    ///
    /// For reports this also looks through attached context, the same way
    /// `anyhow::Error::downcast_ref` does.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + Send + Sync + 'static,
    {
        match self {
            AppError::Failure(err) => err.downcast_ref::<E>(),
            AppError::Report(report) => report.downcast_ref::<E>(),
            AppError::Absent => None,
        }
    }

    pub fn as_error(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            AppError::Failure(err) => Some(err.as_ref()),
            AppError::Report(report) => {
                let report: &anyhow::Error = report;
                Some(&**report)
            }
            AppError::Absent => None,
        }
    }

    /// Reference identity: `true` if both values wrap the same allocation.
    ///
    /// Two absent errors are considered identical.
    pub fn ptr_eq(&self, other: &AppError) -> bool {
        match (self, other) {
            (AppError::Failure(a), AppError::Failure(b)) => Arc::ptr_eq(a, b),
            (AppError::Report(a), AppError::Report(b)) => Arc::ptr_eq(a, b),
            (AppError::Absent, AppError::Absent) => true,
            _ => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Failure(err) => fmt::Display::fmt(err, f),
            AppError::Report(report) => fmt::Display::fmt(report, f),
            AppError::Absent => f.write_str("<absent error>"),
        }
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Failure(err) => f.debug_tuple("Failure").field(err).finish(),
            AppError::Report(report) => f.debug_tuple("Report").field(report).finish(),
            AppError::Absent => f.write_str("Absent"),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(report: anyhow::Error) -> Self {
        AppError::from_report(report)
    }
}

impl From<Arc<dyn StdError + Send + Sync + 'static>> for AppError {
    fn from(err: Arc<dyn StdError + Send + Sync + 'static>) -> Self {
        AppError::Failure(err)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for AppError {
    fn from(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        AppError::Failure(Arc::from(err))
    }
}

impl From<EventErrorError> for AppError {
    fn from(err: EventErrorError) -> Self {
        AppError::new(err)
    }
}

impl From<Option<AppError>> for AppError {
    fn from(err: Option<AppError>) -> Self {
        err.unwrap_or(AppError::Absent)
    }
}

/// Detail of an `appError` event.
#[derive(Debug, Clone)]
pub struct AppErrorPayload {
    pub error: AppError,
}

impl AppErrorPayload {
    pub fn new(error: impl Into<AppError>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

pub type AppErrorEvent = CustomEvent<AppErrorPayload>;
