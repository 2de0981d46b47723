// src/event/document.rs

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::errors::{EventErrorError, Result};
use crate::types::{ListenerId, ListenerOptions};

use super::{CustomEvent, EventTarget};

type ErasedListener = Arc<dyn Fn(&dyn Any) + Send + Sync>;

#[derive(Clone)]
struct Registration {
    id: ListenerId,
    kind: String,
    detail_type: TypeId,
    once: bool,
    /// Shared with every dispatch snapshot so that removal is observed by a
    /// dispatch already in progress.
    removed: Arc<AtomicBool>,
    callback: ErasedListener,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    detached: bool,
    listeners: Vec<Registration>,
}

impl Registry {
    fn unlink(&mut self, id: ListenerId) -> bool {
        match self.listeners.iter().position(|r| r.id == id) {
            Some(idx) => {
                let registration = self.listeners.remove(idx);
                registration.removed.store(true, Ordering::Release);
                true
            }
            None => false,
        }
    }
}

/// In-process event target with DOM dispatch semantics.
///
/// Clones share the same listener registry, so a `Document` can be handed to
/// both the code that dispatches and the code that listens.
///
/// The registry lock is released before any listener runs; listeners may
/// dispatch, register or remove listeners on the same document.
#[derive(Clone, Default)]
pub struct Document {
    inner: Arc<Mutex<Registry>>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registry = self.registry();
        f.debug_struct("Document")
            .field("listeners", &registry.listeners.len())
            .field("detached", &registry.detached)
            .finish()
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tear the document down.
    ///
    /// All listeners are dropped and every later registration or dispatch
    /// fails with [`EventErrorError::TargetDetached`]. A dispatch already in
    /// progress still delivers to its whole snapshot.
    pub fn detach(&self) {
        let mut registry = self.registry();
        registry.detached = true;
        registry.listeners.clear();
        debug!("document detached");
    }

    pub fn is_detached(&self) -> bool {
        self.registry().detached
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        // The registry has no invariants spanning multiple entries, so a
        // panic in another thread cannot leave it half-updated.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EventTarget for Document {
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
        let callback: ErasedListener = Arc::new(move |event: &dyn Any| {
            if let Some(event) = event.downcast_ref::<CustomEvent<D>>() {
                listener(event);
            }
        });

        let mut registry = self.registry();
        if registry.detached {
            return Err(EventErrorError::TargetDetached(format!(
                "cannot add a '{kind}' listener to a detached document"
            )));
        }

        registry.next_id += 1;
        let id = ListenerId::new(registry.next_id);
        registry.listeners.push(Registration {
            id,
            kind: kind.to_string(),
            detail_type: TypeId::of::<D>(),
            once: options.once,
            removed: Arc::new(AtomicBool::new(false)),
            callback,
        });

        trace!(%id, kind, once = options.once, "listener registered");
        Ok(id)
    }

    fn remove_event_listener(&self, id: ListenerId) -> bool {
        let removed = self.registry().unlink(id);
        if removed {
            trace!(%id, "listener removed");
        }
        removed
    }

    fn dispatch_event<D: Any>(&self, event: &CustomEvent<D>) -> Result<usize> {
        let detail_type = TypeId::of::<D>();

        let snapshot: Vec<Registration> = {
            let registry = self.registry();
            if registry.detached {
                return Err(EventErrorError::TargetDetached(format!(
                    "cannot dispatch '{}' on a detached document",
                    event.kind()
                )));
            }
            registry
                .listeners
                .iter()
                .filter(|r| r.kind == event.kind())
                .cloned()
                .collect()
        };

        let mut invoked = 0;
        for registration in snapshot {
            if registration.detail_type != detail_type {
                debug!(
                    id = %registration.id,
                    kind = event.kind(),
                    "listener expects a different detail type; skipping"
                );
                continue;
            }

            if registration.once {
                // Claim the single invocation; a re-entrant dispatch may
                // have taken it already.
                if registration.removed.swap(true, Ordering::AcqRel) {
                    continue;
                }
                self.registry().unlink(registration.id);
            } else if registration.removed.load(Ordering::Acquire) {
                continue;
            }

            (registration.callback)(event);
            invoked += 1;
        }

        trace!(kind = event.kind(), invoked, "event dispatched");
        Ok(invoked)
    }

    fn listener_count(&self, kind: &str) -> usize {
        self.registry()
            .listeners
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }
}
