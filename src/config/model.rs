// src/config/model.rs

use serde::Deserialize;

use crate::types::APP_ERROR_EVENT;

/// Configuration as read from a TOML file.
///
/// ```toml
/// [dispatcher]
/// event_name = "appError"
/// warn_when_unheard = false
///
/// [reporter]
/// enabled = true
/// include_chain = true
/// ```
///
/// All sections are optional and have reasonable defaults. This is the
/// unvalidated form; convert it with `ConfigFile::try_from`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub dispatcher: DispatcherSection,

    #[serde(default)]
    pub reporter: ReporterSection,
}

/// `[dispatcher]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatcherSection {
    /// Name listeners register for. Defaults to `"appError"`.
    #[serde(default = "default_event_name")]
    pub event_name: String,

    /// Log a warning when an error is dispatched with no listener attached.
    #[serde(default)]
    pub warn_when_unheard: bool,
}

fn default_event_name() -> String {
    APP_ERROR_EVENT.to_string()
}

impl Default for DispatcherSection {
    fn default() -> Self {
        Self {
            event_name: default_event_name(),
            warn_when_unheard: false,
        }
    }
}

/// `[reporter]` section: the built-in logging listener.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReporterSection {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Also log the cause chain, not just the top-level message.
    #[serde(default = "default_true")]
    pub include_chain: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ReporterSection {
    fn default() -> Self {
        Self {
            enabled: true,
            include_chain: true,
        }
    }
}

/// Validated configuration.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (or `Default`), so holders
/// can rely on the event name being well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    dispatcher: DispatcherSection,
    reporter: ReporterSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(dispatcher: DispatcherSection, reporter: ReporterSection) -> Self {
        Self {
            dispatcher,
            reporter,
        }
    }

    pub fn dispatcher(&self) -> &DispatcherSection {
        &self.dispatcher
    }

    pub fn reporter(&self) -> &ReporterSection {
        &self.reporter
    }

    pub fn event_name(&self) -> &str {
        &self.dispatcher.event_name
    }
}
