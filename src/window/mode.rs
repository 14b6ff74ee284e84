use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation of the island window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    /// Collapsed pill.
    #[default]
    Float,
    /// Notification card.
    Popup,
    /// Tall side panel hosting the workspace.
    Sidebar,
    Fullscreen,
}

impl WindowMode {
    pub const ALL: [WindowMode; 4] = [
        WindowMode::Float,
        WindowMode::Popup,
        WindowMode::Sidebar,
        WindowMode::Fullscreen,
    ];

    /// Modes directly reachable from this one.
    pub fn exits(self) -> &'static [WindowMode] {
        match self {
            WindowMode::Float => &[WindowMode::Popup, WindowMode::Sidebar, WindowMode::Fullscreen],
            WindowMode::Popup => &[WindowMode::Float],
            WindowMode::Sidebar => &[WindowMode::Float, WindowMode::Fullscreen],
            WindowMode::Fullscreen => &[WindowMode::Sidebar],
        }
    }

    pub fn can_enter(self, target: WindowMode) -> bool {
        self.exits().contains(&target)
    }

    /// Where Escape leads.
    pub fn back(self) -> WindowMode {
        match self {
            WindowMode::Float => WindowMode::Float,
            WindowMode::Popup => WindowMode::Float,
            WindowMode::Sidebar => WindowMode::Float,
            WindowMode::Fullscreen => WindowMode::Sidebar,
        }
    }

    /// Fullscreen always captures input; the others pass clicks through outside the hover area.
    pub fn captures_all_input(self) -> bool {
        matches!(self, WindowMode::Fullscreen)
    }

    /// Whether the mode renders the panel workspace.
    pub fn shows_workspace(self) -> bool {
        matches!(self, WindowMode::Sidebar | WindowMode::Fullscreen)
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowMode::Float => write!(f, "float"),
            WindowMode::Popup => write!(f, "popup"),
            WindowMode::Sidebar => write!(f, "sidebar"),
            WindowMode::Fullscreen => write!(f, "fullscreen"),
        }
    }
}

/// Everything that can ask the island to change mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeInput {
    /// Shortcut keys 1-4 or toolbar buttons naming a mode.
    Shortcut(WindowMode),
    Escape,
    /// Popup dismissed.
    Dismiss,
    /// Sidebar collapse button.
    Collapse,
    /// Sidebar expand button.
    Expand,
    Notification,
}

/// Total transition function. Inputs that name an edge outside the mode
/// table leave the mode unchanged.
pub fn next_mode(current: WindowMode, input: ModeInput) -> WindowMode {
    let target = match input {
        ModeInput::Shortcut(target) => target,
        ModeInput::Escape => return current.back(),
        ModeInput::Dismiss => match current {
            WindowMode::Popup => WindowMode::Float,
            other => return other,
        },
        ModeInput::Collapse => match current {
            WindowMode::Sidebar => WindowMode::Float,
            other => return other,
        },
        ModeInput::Expand => match current {
            WindowMode::Sidebar => WindowMode::Fullscreen,
            other => return other,
        },
        ModeInput::Notification => WindowMode::Popup,
    };

    if target == current || current.can_enter(target) {
        target
    } else {
        current
    }
}
