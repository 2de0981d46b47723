// src/event/mod.rs

//! Named events and the targets they are dispatched on.
//!
//! - [`CustomEvent`] is a named notification carrying an arbitrary detail.
//! - [`target`] defines the [`EventTarget`] trait: the bus callers inject
//!   instead of relying on an ambient global.
//! - [`document`] provides [`Document`], the in-process target used in
//!   production and in tests.

pub mod document;
pub mod target;

pub use document::Document;
pub use target::EventTarget;

/// A named event with an attached detail, delivered verbatim to every
/// listener registered for `kind`.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomEvent<D> {
    kind: String,
    detail: D,
}

impl<D> CustomEvent<D> {
    pub fn new(kind: impl Into<String>, detail: D) -> Self {
        Self {
            kind: kind.into(),
            detail,
        }
    }

    /// Event name listeners register for (e.g. `"appError"`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn detail(&self) -> &D {
        &self.detail
    }

    pub fn into_detail(self) -> D {
        self.detail
    }
}
