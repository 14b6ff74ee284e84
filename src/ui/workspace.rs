use crate::layout::{AdaptivePanelController, Divider, DragRegion, PanelRect};
use crate::models::{FeatureId, PanelSlot};
use crate::state::{AppConfig, AppState};
use crate::ui::panels::{show_panel, PanelAction, PanelContext};
use crate::window::WindowMode;
use eframe::egui;

const PANEL_GAP: f32 = 6.0;
const HANDLE_WIDTH: f32 = 8.0;
const PANEL_PADDING: f32 = 8.0;

pub struct WorkspaceOutput {
    /// Measured width of the panel row, fed to the adaptive controller.
    pub container_width: f32,
    pub actions: Vec<PanelAction>,
}

/// Where a divider sits and the span its drag is measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DividerHandle {
    pub divider: Divider,
    pub x: f32,
    pub region: DragRegion,
}

/// Handles for the dividers that have both neighbours on screen.
pub fn divider_handles(rects: &[PanelRect], left: f32, width: f32) -> Vec<DividerHandle> {
    let find = |slot: PanelSlot| rects.iter().find(|r| r.slot == slot);
    let mut handles = Vec::new();

    if let (Some(l), Some(m)) = (find(PanelSlot::Left), find(PanelSlot::Middle)) {
        handles.push(DividerHandle {
            divider: Divider::Primary,
            x: m.x,
            region: DragRegion {
                left: l.x,
                width: l.width + m.width,
            },
        });
    }

    if let Some(r) = find(PanelSlot::Right) {
        if rects.len() > 1 {
            handles.push(DividerHandle {
                divider: Divider::Secondary,
                x: r.x,
                region: DragRegion { left, width },
            });
        }
    }

    handles
}

/// Dock plus the three-slot panel row shown in sidebar and fullscreen modes.
#[derive(Default)]
pub struct Workspace;

impl Workspace {
    pub fn new() -> Self {
        Self
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        config: &AppConfig,
        adaptive: &AdaptivePanelController,
        mode: WindowMode,
    ) -> WorkspaceOutput {
        let mut actions = Vec::new();

        self.show_dock(ui, state);
        ui.add_space(4.0);

        let rect = ui.available_rect_before_wrap();
        let container_width = rect.width();
        let context = PanelContext {
            config,
            mode,
            container_width,
            max_panels: adaptive.max_panels(container_width),
        };

        let rects = state.store.layout().layout().rects(rect.left(), rect.width());
        for panel in &rects {
            let panel_rect = egui::Rect::from_min_size(
                egui::pos2(panel.x, rect.top()),
                egui::vec2(panel.width, rect.height()),
            )
            .shrink2(egui::vec2(PANEL_GAP / 2.0, 0.0));

            let visuals = ui.visuals();
            ui.painter()
                .rect_filled(panel_rect, 8.0, visuals.faint_bg_color);
            ui.painter().rect_stroke(
                panel_rect,
                8.0,
                visuals.widgets.noninteractive.bg_stroke,
                egui::StrokeKind::Inside,
            );

            ui.scope_builder(
                egui::UiBuilder::new()
                    .max_rect(panel_rect.shrink(PANEL_PADDING))
                    .id_salt(("slot", panel.slot.index())),
                |ui| show_panel(ui, panel.slot, state, &context, &mut actions),
            );
        }

        for handle in divider_handles(&rects, rect.left(), rect.width()) {
            self.show_divider(ui, state, handle, rect);
        }

        ui.allocate_rect(rect, egui::Sense::hover());

        WorkspaceOutput {
            container_width,
            actions,
        }
    }

    fn show_dock(&self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            for feature in FeatureId::ALL {
                let active = state
                    .store
                    .assignment()
                    .slot_of(feature)
                    .is_some_and(|slot| state.store.layout().is_open(slot));

                if ui
                    .selectable_label(active, feature.icon())
                    .on_hover_text(feature.label())
                    .clicked()
                {
                    state.store.activate_feature(feature);
                }
            }
        });
    }

    fn show_divider(
        &self,
        ui: &mut egui::Ui,
        state: &mut AppState,
        handle: DividerHandle,
        row: egui::Rect,
    ) {
        let handle_rect = egui::Rect::from_center_size(
            egui::pos2(handle.x, row.center().y),
            egui::vec2(HANDLE_WIDTH, row.height()),
        );
        let id = ui.id().with(("divider", handle.divider));
        let response = ui.interact(handle_rect, id, egui::Sense::drag());

        if response.drag_started() {
            state.store.begin_drag(handle.divider, handle.region);
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                state.store.drag_to(pos.x);
            }
        }
        if response.drag_stopped() {
            state.store.end_drag();
        }

        if response.hovered() || response.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
            let stroke = ui.visuals().widgets.active.fg_stroke;
            ui.painter()
                .vline(handle.x, row.y_range().shrink(12.0), stroke);
        }
    }
}
