pub mod config_error;

pub use config_error::ConfigError;

use crate::codec::{Codec, CodecOptions, Policy};

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Settings as read from `config.toml`. Anything left unset falls back to the codec defaults.
#[derive(Deserialize)]
pub struct ConfigBuilder {
    pub unknown_fields: Option<Policy>,
    pub pagination: Option<Policy>,
    pub log_level: Option<String>,
}

impl ConfigBuilder {
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> Self {
        Self {
            unknown_fields: None,
            pagination: None,
            log_level: None,
        }
    }

    /// Reads the config file from the user's config directory.
    pub fn load() -> Result<Self, ConfigError> {
        match config_file() {
            Some(path) => Self::read(&path),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "No config directory on this platform").into()),
        }
    }

    /// Reads the config file at `path`. A leading `~` and environment variables are expanded.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let expanded = shellexpand::full(path)?;
        Self::read(Path::new(expanded.as_ref()))
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let mut contents = String::new();
        let mut f = File::open(path)?;
        f.read_to_string(&mut contents)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn unknown_fields(mut self, policy: Policy) -> Self {
        self.unknown_fields = Some(policy);
        self
    }

    pub fn pagination(mut self, policy: Policy) -> Self {
        self.pagination = Some(policy);
        self
    }

    pub fn log_level<S: Into<String>>(mut self, log_level: S) -> Self {
        self.log_level = Some(log_level.into());
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let log_level = match self.log_level {
            Some(value) => match LevelFilter::from_str(&value) {
                Ok(level) => level,
                Err(source) => return Err(ConfigError::InvalidLogLevel { value, source }),
            },
            None => DEFAULT_LOG_LEVEL,
        };

        let defaults = CodecOptions::default();
        let options = CodecOptions {
            unknown_fields: self.unknown_fields.unwrap_or(defaults.unknown_fields),
            pagination: self.pagination.unwrap_or(defaults.pagination),
        };

        Ok(Config { options, log_level })
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub options: CodecOptions,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn codec(&self) -> Codec {
        Codec::new(self.options.clone())
    }
}

/// Location of `config.toml`, or `None` when the platform has no config directory.
pub fn config_file() -> Option<PathBuf> {
    let mut path = if cfg!(test) {
        PathBuf::from(format!("{}/test/config", env!("CARGO_MANIFEST_DIR")))
    } else {
        dirs::config_dir()?
    };

    path.push(env!("CARGO_CRATE_NAME"));
    path.push("config.toml");
    Some(path)
}

#[cfg(test)]
mod tests {
    use crate::codec::{CodecOptions, Policy};
    use crate::config::{self, ConfigBuilder, ConfigError};
    use log::LevelFilter;

    #[test]
    fn read_policies() -> Result<(), ConfigError> {
        let path = config::config_file().unwrap();
        assert!(path.ends_with("test/config/cfschema/config.toml"));
        let config = ConfigBuilder::load()?.build()?;
        assert_eq!(config.options.unknown_fields, Policy::Warn);
        assert_eq!(config.options.pagination, Policy::Reject);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.codec().options(), &config.options);
        Ok(())
    }

    #[test]
    fn expand_path() -> Result<(), ConfigError> {
        let builder = ConfigBuilder::load_from("$CARGO_MANIFEST_DIR/test/config/cfschema/config.toml")?;
        assert_eq!(builder.pagination, Some(Policy::Reject));
        Ok(())
    }

    #[test]
    fn setters_override() -> Result<(), ConfigError> {
        let config = ConfigBuilder::load()?
            .pagination(Policy::Ignore)
            .log_level("trace")
            .build()?;
        assert_eq!(config.options.pagination, Policy::Ignore);
        assert_eq!(config.options.unknown_fields, Policy::Warn);
        assert_eq!(config.log_level, LevelFilter::Trace);
        Ok(())
    }

    #[test]
    fn defaults() -> Result<(), ConfigError> {
        let config = ConfigBuilder::default().build()?;
        assert_eq!(config.options, CodecOptions::default());
        assert_eq!(config.log_level, LevelFilter::Warn);
        Ok(())
    }

    #[test]
    fn bad_log_level() {
        let res = ConfigBuilder::default().log_level("loud").build();
        assert!(matches!(res, Err(ConfigError::InvalidLogLevel { value, .. }) if value == "loud"));
    }

    #[test]
    fn missing_file() {
        let res = ConfigBuilder::load_from("/nonexistent/cfschema/config.toml");
        assert!(matches!(res, Err(ConfigError::IOError { .. })));
    }

    #[test]
    fn bad_policy_name() {
        let res: Result<ConfigBuilder, _> = toml::from_str("pagination = \"sometimes\"");
        assert!(res.is_err());
    }
}
