// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{EventErrorError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::EventErrorError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.dispatcher, raw.reporter))
    }
}

pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_event_name(&cfg.dispatcher.event_name)?;
    Ok(())
}

fn validate_event_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EventErrorError::ConfigError(
            "[dispatcher].event_name must not be empty".to_string(),
        ));
    }
    if !name.is_ascii() {
        return Err(EventErrorError::ConfigError(format!(
            "[dispatcher].event_name must be ASCII (got '{name}')"
        )));
    }
    if name.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(EventErrorError::ConfigError(format!(
            "[dispatcher].event_name must not contain whitespace (got '{name}')"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DispatcherSection;

    fn raw_with_name(name: &str) -> RawConfigFile {
        RawConfigFile {
            dispatcher: DispatcherSection {
                event_name: name.to_string(),
                warn_when_unheard: false,
            },
            ..RawConfigFile::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = ConfigFile::try_from(RawConfigFile::default()).unwrap();
        assert_eq!(cfg.event_name(), "appError");
        assert!(cfg.reporter().enabled);
    }

    #[test]
    fn rejects_bad_event_names() {
        for name in ["", "app error", "appÉrror", "tab\there"] {
            let err = ConfigFile::try_from(raw_with_name(name)).unwrap_err();
            assert!(
                matches!(err, EventErrorError::ConfigError(_)),
                "expected ConfigError for {name:?}, got {err:?}"
            );
        }
    }
}
