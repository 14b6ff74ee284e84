use crate::error::ConfigError;
use crate::layout::{FractionBounds, DEFAULT_FRACTION, DEFAULT_MIN_PANEL_WIDTH_PX};
use crate::models::{FeatureId, PanelSlot};
use crate::window::{GeometryTable, ModeInput, SpringSettings, TransitionTiming, WindowMode};
use eframe::egui;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "lifetrace-island";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Theme,
    pub layout_settings: LayoutSettings,
    pub island_settings: IslandSettings,
    pub key_bindings: KeyBindings,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub min_panel_width_px: f32,
    pub fraction_bounds: FractionBounds,
    pub width_fraction: f32,
    pub chat_width_fraction: f32,
    pub resize_debounce_ms: u64,
    pub default_open: Vec<PanelSlot>,
    pub assignments: Vec<(PanelSlot, FeatureId)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IslandSettings {
    pub geometry: GeometryTable,
    pub spring: SpringSettings,
    pub timing: TransitionTiming,
}

/// Key names as accepted by `egui::Key::from_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub float: String,
    pub popup: String,
    pub sidebar: String,
    pub fullscreen: String,
    pub back: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            layout_settings: LayoutSettings::default(),
            island_settings: IslandSettings::default(),
            key_bindings: KeyBindings::default(),
        }
    }
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            min_panel_width_px: DEFAULT_MIN_PANEL_WIDTH_PX,
            fraction_bounds: FractionBounds::default(),
            width_fraction: DEFAULT_FRACTION,
            chat_width_fraction: 0.3,
            resize_debounce_ms: 200,
            default_open: vec![PanelSlot::Left, PanelSlot::Middle],
            assignments: vec![
                (PanelSlot::Left, FeatureId::Calendar),
                (PanelSlot::Middle, FeatureId::Todos),
                (PanelSlot::Right, FeatureId::Chat),
            ],
        }
    }
}

impl Default for IslandSettings {
    fn default() -> Self {
        Self {
            geometry: GeometryTable::default(),
            spring: SpringSettings::default(),
            timing: TransitionTiming::default(),
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            float: "1".to_string(),
            popup: "2".to_string(),
            sidebar: "3".to_string(),
            fullscreen: "4".to_string(),
            back: "Escape".to_string(),
        }
    }
}

impl KeyBindings {
    /// Parses every binding; names must be known keys and pairwise distinct.
    pub fn resolve(&self) -> Result<Vec<(egui::Key, ModeInput)>, ConfigError> {
        let entries = [
            ("float", &self.float, ModeInput::Shortcut(WindowMode::Float)),
            ("popup", &self.popup, ModeInput::Shortcut(WindowMode::Popup)),
            ("sidebar", &self.sidebar, ModeInput::Shortcut(WindowMode::Sidebar)),
            (
                "fullscreen",
                &self.fullscreen,
                ModeInput::Shortcut(WindowMode::Fullscreen),
            ),
            ("back", &self.back, ModeInput::Escape),
        ];

        let mut resolved: Vec<(egui::Key, ModeInput)> = Vec::with_capacity(entries.len());
        for (setting, name, input) in entries {
            let key = egui::Key::from_name(name).ok_or_else(|| {
                ConfigError::invalid(
                    format!("key_bindings.{}", setting),
                    format!("unknown key '{}'", name),
                )
            })?;
            if resolved.iter().any(|(k, _)| *k == key) {
                return Err(ConfigError::invalid(
                    format!("key_bindings.{}", setting),
                    format!("key '{}' is bound twice", name),
                ));
            }
            resolved.push((key, input));
        }
        Ok(resolved)
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.fraction_bounds.validate()?;
        if !(self.min_panel_width_px.is_finite() && self.min_panel_width_px > 0.0) {
            return Err(ConfigError::invalid(
                "layout_settings.min_panel_width_px",
                "must be a positive number",
            ));
        }
        if self.resize_debounce_ms > 5_000 {
            return Err(ConfigError::invalid(
                "layout_settings.resize_debounce_ms",
                "must not exceed 5000ms",
            ));
        }
        Ok(())
    }
}

impl IslandSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geometry.validate()?;
        self.spring.validate()?;
        self.timing.validate()?;
        Ok(())
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Loads the user config, falling back to defaults when it is missing or unusable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "Ignoring config at {}: {}; using defaults",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.layout_settings.validate()?;
        self.island_settings.validate()?;
        self.key_bindings.resolve()?;
        Ok(())
    }
}
