use crate::models::settings::PickerSettings;
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const SETTINGS_FILE_NAME: &str = "picker.toml";

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service bound to the platform config directory, falling back to the
    /// working directory when no home directory is known.
    pub fn from_default_location() -> Self {
        let path = if let Some(proj_dirs) = ProjectDirs::from("com", "KenBoyle", "MonthPicker") {
            proj_dirs.config_dir().join(SETTINGS_FILE_NAME)
        } else {
            log::warn!("No config directory available; using ./{}", SETTINGS_FILE_NAME);
            PathBuf::from(SETTINGS_FILE_NAME)
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings. A missing file yields the defaults.
    pub fn load(&self, current_year: i32) -> Result<PickerSettings> {
        if !self.path.exists() {
            log::info!("No settings at {}; using defaults", self.path.display());
            return Ok(PickerSettings::default());
        }

        let raw = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        let settings: PickerSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings in {}", self.path.display()))?;

        settings
            .validate(current_year)
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        Ok(settings)
    }

    /// Load settings, logging and falling back to defaults on any failure.
    pub fn load_or_default(&self, current_year: i32) -> PickerSettings {
        match self.load(current_year) {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("{:#}; using default settings", err);
                PickerSettings::default()
            }
        }
    }

    pub fn save(&self, settings: &PickerSettings, current_year: i32) -> Result<()> {
        settings
            .validate(current_year)
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(settings).context("Failed to serialize settings")?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))?;

        Ok(())
    }
}
