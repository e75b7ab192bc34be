use std::{env, fs, io, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

pub const FORMAT_VAR: &str = "FLOWSCRIPT_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{}`", other)),
        }
    }
}

/// Output settings for the `flowscript` binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub show_tokens: bool,
    pub show_variables: bool,
    pub show_source: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config::with_format_var(env::var(FORMAT_VAR).ok().as_deref())
    }
}

impl Config {
    /// Defaults with the format taken from a `FLOWSCRIPT_FORMAT` value.
    /// Unknown values fall back to text.
    pub fn with_format_var(value: Option<&str>) -> Self {
        let format = value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        Config {
            format,
            show_tokens: true,
            show_variables: false,
            show_source: false,
        }
    }

    /// Reads a JSON config file. Missing keys fall back to the defaults.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn from_json(contents: &str) -> serde_json::Result<Self> {
        serde_json::from_str(contents)
    }
}
