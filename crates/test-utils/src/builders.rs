#![allow(dead_code)]

use event_error::config::{ConfigFile, DispatcherSection, RawConfigFile, ReporterSection};

/// Builder for `ConfigFile` to simplify test setup.
///
/// Besides the validated config it can render the equivalent TOML, so the
/// same setup drives both in-memory and on-disk loading tests.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                dispatcher: DispatcherSection::default(),
                reporter: ReporterSection::default(),
            },
        }
    }

    pub fn event_name(mut self, name: &str) -> Self {
        self.config.dispatcher.event_name = name.to_string();
        self
    }

    pub fn warn_when_unheard(mut self, val: bool) -> Self {
        self.config.dispatcher.warn_when_unheard = val;
        self
    }

    pub fn reporter_enabled(mut self, val: bool) -> Self {
        self.config.reporter.enabled = val;
        self
    }

    pub fn include_chain(mut self, val: bool) -> Self {
        self.config.reporter.include_chain = val;
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn to_toml(&self) -> String {
        let d = &self.config.dispatcher;
        let r = &self.config.reporter;
        format!(
            "[dispatcher]\n\
             event_name = {:?}\n\
             warn_when_unheard = {}\n\
             \n\
             [reporter]\n\
             enabled = {}\n\
             include_chain = {}\n",
            d.event_name, d.warn_when_unheard, r.enabled, r.include_chain
        )
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}
