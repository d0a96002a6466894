//! CLI configuration, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    pub display: DisplayConfig,
    pub render: RenderConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: "warn".to_string(),
            display: DisplayConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

/// Terminal board glyphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub fox: char,
    pub goose: char,
    pub empty: char,
    pub out_of_play: char,
    /// Marks the legal destinations of the selected piece.
    pub destination: char,
    pub show_coordinates: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            fox: 'F',
            goose: 'G',
            empty: '.',
            out_of_play: ' ',
            destination: '*',
            show_coordinates: true,
        }
    }
}

/// SVG output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Distance between neighbouring points, in pixels.
    pub cell_size: f32,
    pub background: String,
    pub line: String,
    pub point: String,
    pub fox: String,
    pub goose: String,
    pub highlight: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        // Tan board with brown lines.
        RenderConfig {
            cell_size: 96.0,
            background: "#d2b48c".to_string(),
            line: "#654321".to_string(),
            point: "#000000".to_string(),
            fox: "#ff4500".to_string(),
            goose: "#dcdcdc".to_string(),
            highlight: "#ffff00".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: CliConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.render.cell_size > 0.0) {
            return Err(ConfigError::Validation("render.cell_size must be > 0".into()));
        }

        let d = &self.display;
        let glyphs = [d.fox, d.goose, d.empty, d.destination];
        for (i, a) in glyphs.iter().enumerate() {
            if glyphs[i + 1..].contains(a) {
                return Err(ConfigError::Validation(format!(
                    "display glyph {:?} is used for more than one thing",
                    a
                )));
            }
        }
        if glyphs.contains(&d.out_of_play) {
            return Err(ConfigError::Validation(
                "display.out_of_play must differ from the other glyphs".into(),
            ));
        }

        Ok(())
    }
}
