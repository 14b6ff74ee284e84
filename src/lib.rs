//! # lifetrace-island
//!
//! A floating "Dynamic Island" desktop companion built on egui.
//!
//! The window lives in one of four modes (a small float pill, a notification
//! popup, a docked sidebar and fullscreen) and animates between them with a
//! spring. Sidebar and fullscreen host a three-slot panel workspace that closes
//! panels when the container gets too narrow and restores them, most recent
//! first, once there is room again.
//!
//! ## Architecture
//!
//! - [`layout`] - Panel slots, width fractions, and adaptive auto-close
//! - [`window`] - Window modes, geometry, animation, and the native shell boundary
//! - [`state`] - The UI store, application state, and persisted configuration
//! - [`models`] - Features, slots, and notifications
//! - [`ui`] - egui rendering of the island and workspace
//!
//! ## Example
//!
//! ```rust
//! use lifetrace_island::layout::AdaptivePanelController;
//! use lifetrace_island::models::PanelSlot;
//! use lifetrace_island::state::UiStore;
//!
//! let mut store = UiStore::default();
//! store.open(PanelSlot::Right);
//!
//! let mut adaptive = AdaptivePanelController::default();
//! adaptive.on_width_settled(&mut store, 650.0);
//! assert_eq!(store.layout().open_count(), 2);
//! ```

pub mod app;
pub mod error;
pub mod layout;
pub mod models;
pub mod state;
pub mod ui;
pub mod window;

pub use app::IslandApp;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
