use eframe::egui;
use lifetrace_island::app::IslandApp;
use lifetrace_island::models::PanelSlot;
use lifetrace_island::state::{AppConfig, Theme};
use pretty_assertions::assert_eq;
use serial_test::serial;
use std::ffi::OsString;
use tempfile::TempDir;

/// Points the user config directory at a temp dir for the guard's lifetime.
struct ConfigHome {
    _dir: TempDir,
    saved: Vec<(&'static str, Option<OsString>)>,
}

impl ConfigHome {
    fn new() -> anyhow::Result<Self> {
        let dir = TempDir::new()?;
        let saved = ["HOME", "XDG_CONFIG_HOME"]
            .into_iter()
            .map(|key| (key, std::env::var_os(key)))
            .collect();
        std::env::set_var("HOME", dir.path());
        std::env::set_var("XDG_CONFIG_HOME", dir.path().join(".config"));
        Ok(Self { _dir: dir, saved })
    }
}

impl Drop for ConfigHome {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
    }
}

/// In-memory eframe storage for driving the app's exit hook.
#[derive(Default)]
struct MemoryStorage {
    entries: Vec<(String, String)>,
}

impl eframe::Storage for MemoryStorage {
    fn get_string(&self, key: &str) -> Option<String> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.entries.retain(|(k, _)| k != key);
        self.entries.push((key.to_string(), value));
    }

    fn flush(&mut self) {}
}

#[test]
#[serial]
fn test_missing_config_loads_defaults() -> anyhow::Result<()> {
    let _home = ConfigHome::new()?;
    assert_eq!(AppConfig::load(), AppConfig::default());
    Ok(())
}

#[test]
#[serial]
fn test_saved_config_is_loaded_back() -> anyhow::Result<()> {
    let _home = ConfigHome::new()?;

    let mut config = AppConfig::default();
    config.theme = Theme::Light;
    config.layout_settings.min_panel_width_px = 280.0;
    config.layout_settings.default_open = vec![PanelSlot::Middle, PanelSlot::Right];
    config.key_bindings.sidebar = "S".to_string();
    config.save()?;

    let path = AppConfig::config_path().expect("config dir");
    assert!(path.exists());
    assert_eq!(AppConfig::load(), config);
    Ok(())
}

#[test]
#[serial]
fn test_unusable_config_falls_back_to_defaults() -> anyhow::Result<()> {
    let _home = ConfigHome::new()?;
    let path = AppConfig::config_path().expect("config dir");
    std::fs::create_dir_all(path.parent().expect("parent"))?;

    std::fs::write(&path, r#"{ "key_bindings": { "float": "2", "popup": "2" } }"#)?;
    assert_eq!(AppConfig::load(), AppConfig::default());

    std::fs::write(&path, "not json at all")?;
    assert_eq!(AppConfig::load(), AppConfig::default());
    Ok(())
}

#[test]
#[serial]
fn test_exit_leaves_rejected_user_config_untouched() -> anyhow::Result<()> {
    let _home = ConfigHome::new()?;
    let path = AppConfig::config_path().expect("config dir");
    std::fs::create_dir_all(path.parent().expect("parent"))?;
    let original = r#"{ "island_settings": { "spring": { "stiffness": 260.0, "damping": 0.0 } } }"#;
    std::fs::write(&path, original)?;

    let mut app = IslandApp::with_config(&egui::Context::default(), AppConfig::load());
    let mut storage = MemoryStorage::default();
    eframe::App::save(&mut app, &mut storage);
    drop(app);

    assert_eq!(std::fs::read_to_string(&path)?, original);
    Ok(())
}

#[test]
#[serial]
fn test_exit_does_not_create_config_file() -> anyhow::Result<()> {
    let _home = ConfigHome::new()?;
    let path = AppConfig::config_path().expect("config dir");

    let mut app = IslandApp::with_config(&egui::Context::default(), AppConfig::load());
    eframe::App::save(&mut app, &mut MemoryStorage::default());

    assert!(!path.exists());
    Ok(())
}
