// src/dispatch/reporter.rs

use tracing::error;

use crate::config::ReporterSection;
use crate::errors::Result;
use crate::event::EventTarget;
use crate::types::{ListenerId, ListenerOptions};

use super::app_error::{AppError, AppErrorEvent};

/// Install a listener that logs every `kind` event through `tracing`.
pub fn install_reporter<T: EventTarget>(
    target: &T,
    kind: &str,
    cfg: &ReporterSection,
) -> Result<ListenerId> {
    let include_chain = cfg.include_chain;
    target.add_event_listener(
        kind,
        ListenerOptions::default(),
        move |event: &AppErrorEvent| report(&event.detail().error, include_chain),
    )
}

fn report(err: &AppError, include_chain: bool) {
    let chain = err.chain();
    if include_chain && chain.len() > 1 {
        error!(error = %err, causes = ?&chain[1..], "application error");
    } else {
        error!(error = %err, "application error");
    }
}
