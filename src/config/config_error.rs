use log::ParseLevelError;
use std::env::VarError;
use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum ConfigError {
    IOError { source: io::Error },
    DeserializationError { source: toml::de::Error },
    PathExpansion { source: shellexpand::LookupError<VarError> },
    InvalidLogLevel { value: String, source: ParseLevelError },
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::IOError { ref source } => Some(source),
            ConfigError::DeserializationError { ref source } => Some(source),
            ConfigError::PathExpansion { ref source } => Some(source),
            ConfigError::InvalidLogLevel { ref source, .. } => Some(source),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::IOError { source } => source.fmt(f),
            ConfigError::DeserializationError { source } => source.fmt(f),
            ConfigError::PathExpansion { source } => source.fmt(f),
            ConfigError::InvalidLogLevel { value, .. } => write!(f, "Invalid log level: {:?}", value),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IOError { source: error }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        ConfigError::DeserializationError { source: error }
    }
}

impl From<shellexpand::LookupError<VarError>> for ConfigError {
    fn from(error: shellexpand::LookupError<VarError>) -> Self {
        ConfigError::PathExpansion { source: error }
    }
}
