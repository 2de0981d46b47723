// src/lib.rs

//! Broadcast application errors as `appError` events.
//!
//! Code that fails calls [`dispatch_error`] (or an [`ErrorDispatcher`]) with
//! the target it was given; code that wants to react registers a listener for
//! `"appError"` on the same target and reads `event.detail().error`. Nothing
//! has to thread the error through the call stack in between.
//!
//! ```
//! use event_error::{APP_ERROR_EVENT, AppError, AppErrorEvent, Document, EventTarget,
//!     ListenerOptions, dispatch_error};
//!
//! let document = Document::new();
//! document
//!     .add_event_listener(APP_ERROR_EVENT, ListenerOptions::default(), |event: &AppErrorEvent| {
//!         eprintln!("something failed: {}", event.detail().error);
//!     })
//!     .unwrap();
//!
//! dispatch_error(&document, AppError::new(std::io::Error::other("Test Error"))).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod event;
pub mod logging;
pub mod types;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{ConfigFile, load_or_default};

pub use crate::dispatch::{
    AppError, AppErrorEvent, AppErrorPayload, ErrorDispatcher, ErrorSubscription,
    dispatch_error, install_reporter, subscribe_channel,
};
pub use crate::event::{CustomEvent, Document, EventTarget};
pub use crate::types::{APP_ERROR_EVENT, ListenerId, ListenerOptions};

/// High-level entry point used by `main.rs`.
///
/// Builds a document, attaches the configured listeners, dispatches one error
/// built from the CLI arguments and waits for it to come back through the
/// channel bridge.
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_or_default(args.config.as_deref())?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let document = Document::new();
    let event_name = cfg.event_name();

    if cfg.reporter().enabled {
        let id = install_reporter(&document, event_name, cfg.reporter())?;
        debug!(%id, "reporter installed");
    }
    let mut subscription = subscribe_channel(&document, event_name)?;

    let dispatcher = ErrorDispatcher::from_config(document.clone(), cfg.dispatcher());
    let error = build_error(&args.message, &args.context);
    let notified = dispatcher.dispatch_counted(error)?;
    info!(event = event_name, notified, "error dispatched");

    let payload = subscription
        .recv()
        .await
        .context("dispatched error was not forwarded to the channel subscriber")?;

    println!(
        "dispatched '{}' to {} listener(s): {}",
        event_name, notified, payload.error
    );
    for (depth, cause) in payload.error.chain().iter().enumerate().skip(1) {
        println!("  {depth}: {cause}");
    }

    subscription.unsubscribe(&document);
    Ok(())
}

/// `message` wrapped in one context layer per entry of `contexts`.
fn build_error(message: &str, contexts: &[String]) -> AppError {
    let report = contexts
        .iter()
        .fold(anyhow::anyhow!(message.to_string()), |report, ctx| {
            report.context(ctx.clone())
        });
    AppError::from_report(report)
}

fn print_dry_run(cfg: &ConfigFile) {
    println!("event-error dry-run");
    println!("  dispatcher.event_name = {}", cfg.dispatcher().event_name);
    println!(
        "  dispatcher.warn_when_unheard = {}",
        cfg.dispatcher().warn_when_unheard
    );
    println!("  reporter.enabled = {}", cfg.reporter().enabled);
    println!("  reporter.include_chain = {}", cfg.reporter().include_chain);

    debug!("dry-run complete (nothing dispatched)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_layers_contexts_outermost_last() {
        let err = build_error(
            "disk full",
            &["saving draft".to_string(), "submitting form".to_string()],
        );
        assert_eq!(
            err.chain(),
            vec!["submitting form", "saving draft", "disk full"]
        );
    }
}
