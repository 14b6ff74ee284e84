use crate::layout::Divider;
use crate::models::{FeatureId, PanelSlot};
use crate::state::{AppConfig, AppState};
use crate::window::WindowMode;
use eframe::egui;

/// Requests from panel content that need more than the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    SendTestNotification,
    ClearNotifications,
    ShowShortcuts,
}

/// Read-only context panels render against.
pub struct PanelContext<'a> {
    pub config: &'a AppConfig,
    pub mode: WindowMode,
    pub container_width: f32,
    pub max_panels: usize,
}

/// Draws one slot: header with its feature and a close button, then the body.
pub fn show_panel(
    ui: &mut egui::Ui,
    slot: PanelSlot,
    state: &mut AppState,
    context: &PanelContext<'_>,
    actions: &mut Vec<PanelAction>,
) {
    let feature = state.store.assignment().feature_in(slot);

    ui.horizontal(|ui| {
        match feature {
            Some(feature) => ui.strong(format!("{} {}", feature.icon(), feature.label())),
            None => ui.weak("Empty"),
        };
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let can_close = state.store.layout().open_count() > 1;
            if ui
                .add_enabled(can_close, egui::Button::new("✕").small())
                .on_hover_text(format!("Close {} panel", slot))
                .clicked()
            {
                state.store.close(slot);
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical()
        .id_salt(("panel", slot.index()))
        .auto_shrink([false, false])
        .show(ui, |ui| match feature {
            Some(FeatureId::Debug) => show_debug(ui, state, context, actions),
            Some(FeatureId::Settings) => show_settings(ui, context, actions),
            Some(feature) => show_placeholder(ui, feature),
            None => {
                ui.weak("Pick a feature from the dock");
            }
        });
}

fn show_placeholder(ui: &mut egui::Ui, feature: FeatureId) {
    let hint = match feature {
        FeatureId::Calendar => "Upcoming events for the week",
        FeatureId::Todos => "Open todos grouped by project",
        FeatureId::Chat => "Conversation with the assistant",
        FeatureId::Activity => "Recent activity timeline",
        FeatureId::Achievements => "Milestones reached this month",
        FeatureId::CostTracking => "Model usage and spend",
        FeatureId::TodoDetail => "Details of the selected todo",
        FeatureId::Diary => "Daily journal entries",
        FeatureId::Settings | FeatureId::Debug => "",
    };
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.heading(feature.icon());
        ui.label(hint);
    });
}

fn show_settings(ui: &mut egui::Ui, context: &PanelContext<'_>, actions: &mut Vec<PanelAction>) {
    let layout = &context.config.layout_settings;
    egui::Grid::new("settings_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("Theme");
            ui.label(format!("{:?}", context.config.theme));
            ui.end_row();

            ui.label("Min panel width");
            ui.label(format!("{:.0}px", layout.min_panel_width_px));
            ui.end_row();

            ui.label("Resize debounce");
            ui.label(format!("{}ms", layout.resize_debounce_ms));
            ui.end_row();

            ui.label("Divider range");
            ui.label(format!(
                "{:.0}%..{:.0}%",
                layout.fraction_bounds.min * 100.0,
                layout.fraction_bounds.max * 100.0
            ));
            ui.end_row();
        });

    ui.add_space(8.0);
    if ui.button("Keyboard shortcuts").clicked() {
        actions.push(PanelAction::ShowShortcuts);
    }
}

fn show_debug(
    ui: &mut egui::Ui,
    state: &AppState,
    context: &PanelContext<'_>,
    actions: &mut Vec<PanelAction>,
) {
    let store = &state.store;
    let layout = store.layout();

    egui::Grid::new("debug_grid")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            ui.label("Mode");
            ui.label(context.mode.to_string());
            ui.end_row();

            ui.label("Container");
            ui.label(format!(
                "{:.0}px, fits {}",
                context.container_width, context.max_panels
            ));
            ui.end_row();

            ui.label("Open");
            let open: Vec<String> = layout.open_slots().iter().map(|s| s.to_string()).collect();
            ui.label(open.join(", "));
            ui.end_row();

            ui.label("Auto-closed");
            let stacked: Vec<String> = store
                .auto_closed()
                .as_slice()
                .iter()
                .map(|s| s.to_string())
                .collect();
            ui.label(if stacked.is_empty() {
                "-".to_string()
            } else {
                stacked.join(" < ")
            });
            ui.end_row();

            ui.label("Fractions");
            ui.label(format!(
                "{:.2} / {:.2}",
                layout.width_fraction(Divider::Primary),
                layout.width_fraction(Divider::Secondary)
            ));
            ui.end_row();

            ui.label("Revision");
            ui.label(store.revision().to_string());
            ui.end_row();

            ui.label("Notifications");
            ui.label(state.notifications.count().to_string());
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button("Send test notification").clicked() {
            actions.push(PanelAction::SendTestNotification);
        }
        if ui
            .add_enabled(!state.notifications.is_empty(), egui::Button::new("Clear all"))
            .clicked()
        {
            actions.push(PanelAction::ClearNotifications);
        }
    });
}
