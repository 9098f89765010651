//! Configuration file handling.
//!
//! Settings live in an INI file, by default
//! `<config dir>/gatecross/config.ini`:
//!
//! ```ini
//! [gate]
//! x1 = 1000.0
//! y1 = 500.0
//! x2 = 1000.0
//! y2 = 1500.0
//!
//! [track]
//! coordinates = planar
//!
//! [output]
//! format = text
//! position = segment_start
//!
//! [logging]
//! level = warn
//! ```
//!
//! A missing file is not an error; every setting has a default except the
//! gate, which may instead be supplied on the command line.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ini::Ini;
use thiserror::Error;
use tracing::debug;

use crate::geometry::Point;
use crate::projection::CoordinateSystem;
use crate::track::PositionMode;

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "gatecross";

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "config.ini";

/// Default log filter when none is configured.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error reading or writing the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid INI.
    #[error("Invalid config file: {0}")]
    Parse(#[from] ini::ParseError),

    /// A key required by its section is absent.
    #[error("Missing key '{key}' in section [{section}]")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },

    /// A value could not be interpreted.
    #[error("Invalid value for {section}.{key}: {message}")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        message: String,
    },

    /// No platform config directory could be determined.
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human-readable line per event.
    #[default]
    Text,
    /// A JSON array of events.
    Json,
}

impl OutputFormat {
    /// Name used in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

/// The two points defining the reference gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateSettings {
    pub p1: Point,
    pub p2: Point,
}

/// `[track]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackSettings {
    pub coordinates: CoordinateSystem,
}

/// `[output]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub position: PositionMode,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// A tracing filter directive, e.g. `info` or `gatecross=debug`.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Parsed configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFile {
    pub gate: Option<GateSettings>,
    pub track: TrackSettings,
    pub output: OutputSettings,
    pub logging: LoggingSettings,
}

/// Default config file location.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

impl ConfigFile {
    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path()?)
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse INI content.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let ini = Ini::load_from_str(content)?;
        let mut config = Self::default();

        if let Some(section) = ini.section(Some("gate")) {
            let coord = |key: &'static str| -> Result<f64, ConfigError> {
                let value = section
                    .get(key)
                    .ok_or(ConfigError::MissingKey { section: "gate", key })?;
                parse_value("gate", key, value)
            };
            config.gate = Some(GateSettings {
                p1: Point::new(coord("x1")?, coord("y1")?),
                p2: Point::new(coord("x2")?, coord("y2")?),
            });
        }

        if let Some(section) = ini.section(Some("track")) {
            if let Some(value) = section.get("coordinates") {
                config.track.coordinates = parse_value("track", "coordinates", value)?;
            }
        }

        if let Some(section) = ini.section(Some("output")) {
            if let Some(value) = section.get("format") {
                config.output.format = parse_value("output", "format", value)?;
            }
            if let Some(value) = section.get("position") {
                config.output.position = parse_value("output", "position", value)?;
            }
        }

        if let Some(section) = ini.section(Some("logging")) {
            if let Some(value) = section.get("level") {
                config.logging.level = value.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Write to `path`, creating its parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        self.to_ini().write_to_file(path)?;
        Ok(())
    }

    /// Render as an INI document.
    pub fn to_ini(&self) -> Ini {
        let mut ini = Ini::new();

        if let Some(gate) = &self.gate {
            ini.with_section(Some("gate"))
                .set("x1", gate.p1.x.to_string())
                .set("y1", gate.p1.y.to_string())
                .set("x2", gate.p2.x.to_string())
                .set("y2", gate.p2.y.to_string());
        }
        ini.with_section(Some("track"))
            .set("coordinates", self.track.coordinates.as_str());
        ini.with_section(Some("output"))
            .set("format", self.output.format.as_str())
            .set("position", self.output.position.as_str());
        ini.with_section(Some("logging"))
            .set("level", self.logging.level.as_str());

        ini
    }
}

fn parse_value<T>(section: &'static str, key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| ConfigError::InvalidValue {
            section,
            key,
            message: e.to_string(),
        })
}
