// src/dispatch/mod.rs

//! Application error dispatching.
//!
//! - [`app_error`] defines the [`AppError`] value and the `appError` payload.
//! - [`dispatcher`] wraps errors into events and hands them to an injected
//!   [`EventTarget`](crate::event::EventTarget).
//! - [`bridge`] forwards dispatched errors into a Tokio channel.
//! - [`reporter`] is a ready-made listener that logs every dispatched error.

pub mod app_error;
pub mod bridge;
pub mod dispatcher;
pub mod reporter;

pub use app_error::{AppError, AppErrorEvent, AppErrorPayload};
pub use bridge::{ErrorSubscription, subscribe_channel};
pub use dispatcher::{ErrorDispatcher, dispatch_error};
pub use reporter::install_reporter;
