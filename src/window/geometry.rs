use crate::error::ConfigError;
use crate::window::mode::WindowMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Absolute window placement in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// How a mode is pinned to the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Distance from the right and bottom screen edges.
    Corner { right: f32, bottom: f32 },
    Fill,
}

/// Fully resolved target for one mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeGeometry {
    pub rect: WindowRect,
    pub corner_radius: f32,
    pub anchor: Anchor,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedSize {
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SidebarSize {
    pub width: f32,
    /// Share of the screen height left after the bottom margin.
    pub height_ratio: f32,
    pub corner_radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerMargin {
    pub right: f32,
    pub bottom: f32,
}

/// Per-mode sizes; Fullscreen always fills the screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryTable {
    pub float: FixedSize,
    pub popup: FixedSize,
    pub sidebar: SidebarSize,
    pub margin: CornerMargin,
}

impl Default for GeometryTable {
    fn default() -> Self {
        Self {
            float: FixedSize {
                width: 180.0,
                height: 48.0,
                corner_radius: 24.0,
            },
            popup: FixedSize {
                width: 340.0,
                height: 110.0,
                corner_radius: 20.0,
            },
            sidebar: SidebarSize {
                width: 420.0,
                height_ratio: 0.9,
                corner_radius: 16.0,
            },
            margin: CornerMargin {
                right: 32.0,
                bottom: 32.0,
            },
        }
    }
}

impl GeometryTable {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, size) in [("float", self.float), ("popup", self.popup)] {
            if !(size.width > 0.0 && size.height > 0.0) {
                return Err(ConfigError::invalid(
                    format!("island.geometry.{}", name),
                    "width and height must be positive",
                ));
            }
            if size.corner_radius < 0.0 {
                return Err(ConfigError::invalid(
                    format!("island.geometry.{}.corner_radius", name),
                    "must not be negative",
                ));
            }
        }
        if !(self.sidebar.width > 0.0) {
            return Err(ConfigError::invalid(
                "island.geometry.sidebar.width",
                "must be positive",
            ));
        }
        if !(self.sidebar.height_ratio > 0.0 && self.sidebar.height_ratio <= 1.0) {
            return Err(ConfigError::invalid(
                "island.geometry.sidebar.height_ratio",
                "must be in (0, 1]",
            ));
        }
        if self.margin.right < 0.0 || self.margin.bottom < 0.0 {
            return Err(ConfigError::invalid(
                "island.geometry.margin",
                "margins must not be negative",
            ));
        }
        Ok(())
    }

    /// Resolves `mode` to an absolute placement on `screen`.
    ///
    /// Anchored sizes are capped to the space left of the margins so a small
    /// screen never yields a negative origin.
    pub fn resolve(&self, mode: WindowMode, screen: ScreenSize) -> ModeGeometry {
        let CornerMargin { right, bottom } = self.margin;
        let avail_w = (screen.width - right).max(0.0);
        let avail_h = (screen.height - bottom).max(0.0);

        let (width, height, corner_radius) = match mode {
            WindowMode::Float => (self.float.width, self.float.height, self.float.corner_radius),
            WindowMode::Popup => (self.popup.width, self.popup.height, self.popup.corner_radius),
            WindowMode::Sidebar => (
                self.sidebar.width,
                avail_h * self.sidebar.height_ratio,
                self.sidebar.corner_radius,
            ),
            WindowMode::Fullscreen => {
                return ModeGeometry {
                    rect: WindowRect {
                        x: 0.0,
                        y: 0.0,
                        width: screen.width.max(0.0),
                        height: screen.height.max(0.0),
                    },
                    corner_radius: 0.0,
                    anchor: Anchor::Fill,
                };
            }
        };

        let width = width.min(avail_w);
        let height = height.min(avail_h);
        ModeGeometry {
            rect: WindowRect {
                x: avail_w - width,
                y: avail_h - height,
                width,
                height,
            },
            corner_radius,
            anchor: Anchor::Corner { right, bottom },
        }
    }
}
