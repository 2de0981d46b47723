// src/dispatch/bridge.rs

//! Forward `appError` events into a Tokio channel.
//!
//! Dispatch stays synchronous: the listener only pushes a clone of the
//! payload into an unbounded channel and never awaits. Async code then
//! consumes the errors at its own pace with [`ErrorSubscription::recv`].

use tokio::sync::mpsc;
use tracing::debug;

use crate::errors::Result;
use crate::event::EventTarget;
use crate::types::{ListenerId, ListenerOptions};

use super::app_error::{AppErrorEvent, AppErrorPayload};

/// Receiving end of a channel subscription created by [`subscribe_channel`].
#[derive(Debug)]
pub struct ErrorSubscription {
    id: ListenerId,
    rx: mpsc::UnboundedReceiver<AppErrorPayload>,
}

impl ErrorSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Wait for the next forwarded error.
    ///
    /// Returns `None` once the listener has been removed from its target
    /// and every forwarded payload has been received.
    pub async fn recv(&mut self) -> Option<AppErrorPayload> {
        self.rx.recv().await
    }

    pub fn try_recv(&mut self) -> Option<AppErrorPayload> {
        self.rx.try_recv().ok()
    }

    /// Remove the forwarding listener from `target`.
    pub fn unsubscribe<T: EventTarget>(self, target: &T) -> bool {
        target.remove_event_listener(self.id)
    }
}

/// Register a listener on `target` that forwards every `kind` event's payload
/// into a new channel.
pub fn subscribe_channel<T: EventTarget>(target: &T, kind: &str) -> Result<ErrorSubscription> {
    let (tx, rx) = mpsc::unbounded_channel();

    let id = target.add_event_listener(
        kind,
        ListenerOptions::default(),
        move |event: &AppErrorEvent| {
            if tx.send(event.detail().clone()).is_err() {
                debug!("error subscription receiver dropped; event not forwarded");
            }
        },
    )?;

    debug!(%id, kind, "error channel subscribed");
    Ok(ErrorSubscription { id, rx })
}
