// src/event/target.rs

//! Pluggable event target abstraction.
//!
//! Dispatchers talk to an `EventTarget` handed to them by the caller rather
//! than to a process-wide singleton. Production code uses
//! [`Document`](super::Document); tests can provide their own implementation
//! that, for example, records dispatched events without any listeners.

use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::Result;
use crate::types::{ListenerId, ListenerOptions};

use super::CustomEvent;

/// Something listeners can register on and events can be dispatched to.
///
/// Implementations must deliver synchronously: by the time
/// [`dispatch_event`](EventTarget::dispatch_event) returns, every listener
/// that was registered for the event's kind when the call started has run,
/// in registration order.
pub trait EventTarget: Send + Sync + Debug {
    /// Register `listener` for events named `kind` whose detail is a `D`.
    fn add_event_listener<D, F>(
        &self,
        kind: &str,
        options: ListenerOptions,
        listener: F,
    ) -> Result<ListenerId>
    where
        D: Any,
        F: Fn(&CustomEvent<D>) + Send + Sync + 'static;

    /// Remove a listener. Returns `false` if it was already gone.
    fn remove_event_listener(&self, id: ListenerId) -> bool;

    /// Deliver `event` to the current listeners for its kind.
    ///
    /// Returns the number of listeners invoked. Fails before any listener
    /// runs if the target cannot dispatch at all.
    fn dispatch_event<D: Any>(&self, event: &CustomEvent<D>) -> Result<usize>;

    /// Number of live listeners registered for `kind`.
    fn listener_count(&self, kind: &str) -> usize;
}

impl<T: EventTarget> EventTarget for &T {
    fn add_event_listener<D, F>(
        &self,
        kind: &str,
        options: ListenerOptions,
        listener: F,
    ) -> Result<ListenerId>
    where
        D: Any,
        F: Fn(&CustomEvent<D>) + Send + Sync + 'static,
    {
        (**self).add_event_listener(kind, options, listener)
    }

    fn remove_event_listener(&self, id: ListenerId) -> bool {
        (**self).remove_event_listener(id)
    }

    fn dispatch_event<D: Any>(&self, event: &CustomEvent<D>) -> Result<usize> {
        (**self).dispatch_event(event)
    }

    fn listener_count(&self, kind: &str) -> usize {
        (**self).listener_count(kind)
    }
}

impl<T: EventTarget> EventTarget for Arc<T> {
    fn add_event_listener<D, F>(
        &self,
        kind: &str,
        options: ListenerOptions,
        listener: F,
    ) -> Result<ListenerId>
    where
        D: Any,
        F: Fn(&CustomEvent<D>) + Send + Sync + 'static,
    {
        (**self).add_event_listener(kind, options, listener)
    }

    fn remove_event_listener(&self, id: ListenerId) -> bool {
        (**self).remove_event_listener(id)
    }

    fn dispatch_event<D: Any>(&self, event: &CustomEvent<D>) -> Result<usize> {
        (**self).dispatch_event(event)
    }

    fn listener_count(&self, kind: &str) -> usize {
        (**self).listener_count(kind)
    }
}
