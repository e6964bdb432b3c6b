use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::quickcheck::Assumptions;

/// Anwendungseinstellungen: Sprache und zuletzt verwendete Eckdaten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Sprachcode (auto/de-ch/en-us)
    pub language: String,
    /// Zuletzt verwendete Eckdaten, werden beim Beenden gespeichert
    pub assumptions: Assumptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            assumptions: Assumptions::default(),
        }
    }
}

/// Fehler beim Laden/Speichern der Einstellungen.
#[derive(Debug)]
pub enum ConfigError {
    /// Datei-Ein-/Ausgabe
    Io(std::io::Error),
    /// TOML-Deserialisierung
    Serde(toml::de::Error),
    /// TOML-Serialisierung
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Dateifehler: {e}"),
            ConfigError::Serde(e) => write!(f, "Einstellungen nicht lesbar: {e}"),
            ConfigError::Serialize(e) => write!(f, "Einstellungen nicht schreibbar: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// Lädt config.toml oder legt beim ersten Start Standardwerte an.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// Speichert die Einstellungen in config.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
