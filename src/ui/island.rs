use crate::layout::AdaptivePanelController;
use crate::state::{AppConfig, AppState};
use crate::ui::panels::PanelAction;
use crate::ui::workspace::Workspace;
use crate::window::{ModeInput, WindowMode, WindowModeController};
use eframe::egui;

#[derive(Default)]
pub struct IslandOutput {
    pub inputs: Vec<ModeInput>,
    pub actions: Vec<PanelAction>,
    /// Pointer is over the island's painted surface.
    pub hovering: bool,
    /// Present only while the workspace is on screen.
    pub container_width: Option<f32>,
}

/// Paints whatever the content mode calls for inside the current window frame.
pub struct IslandView {
    workspace: Workspace,
}

impl Default for IslandView {
    fn default() -> Self {
        Self::new()
    }
}

impl IslandView {
    pub fn new() -> Self {
        Self {
            workspace: Workspace::new(),
        }
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        config: &AppConfig,
        adaptive: &AdaptivePanelController,
        controller: &WindowModeController,
    ) -> IslandOutput {
        let mut output = IslandOutput::default();
        let surface = ui.max_rect();
        let radius = controller.frame().radius;

        ui.painter()
            .rect_filled(surface, radius, ui.visuals().panel_fill);

        output.hovering = ui
            .ctx()
            .pointer_hover_pos()
            .is_some_and(|pos| surface.contains(pos));

        let inner = surface.shrink(if controller.content_mode() == WindowMode::Float {
            4.0
        } else {
            10.0
        });

        ui.scope_builder(egui::UiBuilder::new().max_rect(inner), |ui| {
            match controller.content_mode() {
                WindowMode::Float => self.show_pill(ui, state, &mut output),
                WindowMode::Popup => self.show_popup(ui, state, &mut output),
                WindowMode::Sidebar | WindowMode::Fullscreen => {
                    self.show_toolbar(ui, state, controller.content_mode(), &mut output);
                    let workspace = self.workspace.show(
                        ui,
                        state,
                        config,
                        adaptive,
                        controller.content_mode(),
                    );
                    output.container_width = Some(workspace.container_width);
                    output.actions.extend(workspace.actions);
                }
            }
        });

        output
    }

    fn show_pill(&mut self, ui: &mut egui::Ui, state: &AppState, output: &mut IslandOutput) {
        let response = ui
            .centered_and_justified(|ui| {
                let unread = state.notifications.count();
                let text = if unread > 0 {
                    format!("● LifeTrace  {}", unread)
                } else {
                    "● LifeTrace".to_string()
                };
                ui.add(egui::Label::new(egui::RichText::new(text).strong()).sense(egui::Sense::click()))
            })
            .inner;

        if response.on_hover_text("Open workspace").clicked() {
            output.inputs.push(ModeInput::Shortcut(WindowMode::Sidebar));
        }
    }

    fn show_popup(&mut self, ui: &mut egui::Ui, state: &AppState, output: &mut IslandOutput) {
        match state.latest_notification() {
            Some(notification) => {
                ui.horizontal(|ui| {
                    ui.strong(&notification.title);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(notification.timestamp.format("%H:%M").to_string());
                    });
                });
                ui.add(egui::Label::new(&notification.content).truncate());
                if let Some(todo_id) = notification.todo_id {
                    ui.weak(format!("Todo #{}", todo_id));
                }
            }
            None => {
                ui.weak("No notifications");
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Max), |ui| {
            if ui.small_button("Dismiss").clicked() {
                output.inputs.push(ModeInput::Dismiss);
            }
        });
    }

    fn show_toolbar(
        &mut self,
        ui: &mut egui::Ui,
        state: &AppState,
        mode: WindowMode,
        output: &mut IslandOutput,
    ) {
        ui.horizontal(|ui| {
            ui.strong("LifeTrace");
            if let Some(status) = &state.status_message {
                ui.separator();
                ui.weak(status);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| match mode {
                WindowMode::Sidebar => {
                    if ui.button("⛶").on_hover_text("Expand to fullscreen").clicked() {
                        output.inputs.push(ModeInput::Expand);
                    }
                    if ui.button("▁").on_hover_text("Collapse to island").clicked() {
                        output.inputs.push(ModeInput::Collapse);
                    }
                }
                WindowMode::Fullscreen => {
                    if ui.button("⤡").on_hover_text("Back to sidebar").clicked() {
                        output.inputs.push(ModeInput::Escape);
                    }
                }
                WindowMode::Float | WindowMode::Popup => {}
            });
        });
        ui.separator();
    }
}
