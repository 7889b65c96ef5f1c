//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web, read from a JSON file natively.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{PROMPT_X, PROMPT_Y};
use crate::tuning::Tuning;

/// Why a settings document could not be used
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Physics and obstacle balance
    pub tuning: Tuning,

    // === Idle prompt ===
    pub prompt_text: String,
    /// CSS font shorthand
    pub prompt_font: String,
    /// CSS color
    pub prompt_color: String,
    pub prompt_x: f32,
    pub prompt_y: f32,

    /// Fixed RNG seed for reproducible runs (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),

            prompt_text: "Press Space to Start".to_string(),
            prompt_font: "20px Arial".to_string(),
            prompt_color: "#000".to_string(),
            prompt_x: PROMPT_X,
            prompt_y: PROMPT_Y,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate a settings document. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.tuning.validate().map_err(SettingsError::InvalidTuning)
    }

    /// Seed to use for the next run
    pub fn resolve_seed(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Read settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "gapflap_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }
}
