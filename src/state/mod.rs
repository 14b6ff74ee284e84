pub mod app_state;
pub mod config;
pub mod ui_store;

pub use app_state::AppState;
pub use config::{AppConfig, IslandSettings, KeyBindings, LayoutSettings, Theme};
pub use ui_store::{FeatureActivation, UiStore};
