//! Errors for the fallible edges of the game: configuration and terminal I/O.
//!
//! The simulation step itself cannot fail. Terminal conditions (player hit,
//! formation breach, cleared wave) are restarts, not errors.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum GameError {
    /// Terminal or file I/O failed.
    Io(std::io::Error),

    /// A configuration file was read but is not valid TOML for `GameConfig`.
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A configuration value is outside what the simulation can run with.
    InvalidConfig {
        name: &'static str,
        reason: &'static str,
    },

    /// A colour string that is not `#rrggbb`.
    InvalidColor(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(err) => write!(f, "i/o error: {}", err),
            GameError::ConfigParse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
            GameError::InvalidConfig { name, reason } => {
                write!(f, "invalid config value '{}': {}", name, reason)
            }
            GameError::InvalidColor(value) => {
                write!(f, "invalid colour '{}': expected #rrggbb", value)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(err) => Some(err),
            GameError::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}
