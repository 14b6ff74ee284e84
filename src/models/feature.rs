use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed structural position in the workspace, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelSlot {
    Left,
    Middle,
    Right,
}

impl PanelSlot {
    pub const ALL: [PanelSlot; 3] = [PanelSlot::Left, PanelSlot::Middle, PanelSlot::Right];

    /// Order in which the adaptive controller gives up slots: rightmost first.
    pub const AUTO_CLOSE_PRIORITY: [PanelSlot; 3] =
        [PanelSlot::Right, PanelSlot::Middle, PanelSlot::Left];

    pub fn index(self) -> usize {
        match self {
            PanelSlot::Left => 0,
            PanelSlot::Middle => 1,
            PanelSlot::Right => 2,
        }
    }

    /// Slot opened alongside this one when it is the only open slot and gets toggled.
    pub fn partner(self) -> PanelSlot {
        match self {
            PanelSlot::Left => PanelSlot::Middle,
            PanelSlot::Middle => PanelSlot::Left,
            PanelSlot::Right => PanelSlot::Middle,
        }
    }
}

impl fmt::Display for PanelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelSlot::Left => write!(f, "left"),
            PanelSlot::Middle => write!(f, "middle"),
            PanelSlot::Right => write!(f, "right"),
        }
    }
}

/// Logical panel content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureId {
    Calendar,
    Todos,
    Chat,
    Activity,
    Settings,
    Achievements,
    CostTracking,
    TodoDetail,
    Diary,
    Debug,
}

impl FeatureId {
    pub const ALL: [FeatureId; 10] = [
        FeatureId::Calendar,
        FeatureId::Todos,
        FeatureId::Chat,
        FeatureId::Activity,
        FeatureId::Settings,
        FeatureId::Achievements,
        FeatureId::CostTracking,
        FeatureId::TodoDetail,
        FeatureId::Diary,
        FeatureId::Debug,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeatureId::Calendar => "Calendar",
            FeatureId::Todos => "Todos",
            FeatureId::Chat => "Chat",
            FeatureId::Activity => "Activity",
            FeatureId::Settings => "Settings",
            FeatureId::Achievements => "Achievements",
            FeatureId::CostTracking => "Cost Tracking",
            FeatureId::TodoDetail => "Todo Detail",
            FeatureId::Diary => "Diary",
            FeatureId::Debug => "Debug",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FeatureId::Calendar => "📅",
            FeatureId::Todos => "✅",
            FeatureId::Chat => "💬",
            FeatureId::Activity => "📊",
            FeatureId::Settings => "⚙",
            FeatureId::Achievements => "🏆",
            FeatureId::CostTracking => "💰",
            FeatureId::TodoDetail => "📝",
            FeatureId::Diary => "📓",
            FeatureId::Debug => "🐞",
        }
    }

    /// Slot a feature lands in when activated from the dock without a current slot.
    pub fn default_slot(self) -> PanelSlot {
        match self {
            FeatureId::Calendar | FeatureId::Activity | FeatureId::Diary => PanelSlot::Left,
            FeatureId::Todos
            | FeatureId::TodoDetail
            | FeatureId::Achievements
            | FeatureId::CostTracking => PanelSlot::Middle,
            FeatureId::Chat | FeatureId::Settings | FeatureId::Debug => PanelSlot::Right,
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
