use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PatternError>;

/// Errors surfaced by the catalogue. The examples themselves never fail on
/// their own inputs; everything here comes from the console or the CLI.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("failed to write example output: {0}")]
    Io(#[from] io::Error),

    #[error("unknown pattern '{name}'{}", suggestion_hint(.suggestion))]
    UnknownPattern {
        name: String,
        suggestion: Option<String>,
    },

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl PatternError {
    pub fn unknown_pattern(name: impl Into<String>, suggestion: Option<&str>) -> Self {
        Self::UnknownPattern {
            name: name.into(),
            suggestion: suggestion.map(str::to_string),
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!("\n  Hint: did you mean '{name}'? Run `patterns list` to see them all"),
        None => "\n  Hint: run `patterns list` to see every pattern".to_string(),
    }
}
