//! The SmudgePad window: toolbar, palette, and the canvas widget.
//!
//! The app owns the session, the canvas raster, and the palette panel; every
//! toolbar control maps to one session command, and pointer events over the
//! canvas are forwarded to the session's dispatcher.

use eframe::egui;
use egui::{Color32, Stroke, Vec2};

use crate::canvas::CanvasState;
use crate::cli::LaunchArgs;
use crate::components::palette::PalettePanel;
use crate::i18n;
use crate::session::{MAX_RADIUS, MIN_RADIUS, PaintSession, PointerOutcome};

pub struct SmudgePadApp {
    session: PaintSession,
    canvas: CanvasState,
    palette: PalettePanel,
}

impl SmudgePadApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, args: LaunchArgs) -> Self {
        let canvas = CanvasState::new(args.width, args.height);
        let mut session = PaintSession::new(canvas.width, canvas.height);
        session.set_paint_radius(args.brush_size);
        session.set_smear_radius(args.smear_size);
        if let Some(color) = args.color {
            session.set_color(color);
        }
        crate::logger::write(
            "INFO",
            &format!(
                "session {} started: canvas {}×{}, brush {}px, smear {}px",
                session.id,
                canvas.width,
                canvas.height,
                session.paint_radius(),
                session.smear_radius()
            ),
        );
        Self {
            session,
            canvas,
            palette: PalettePanel::default(),
        }
    }

    // ====================================================================
    // Toolbar
    // ====================================================================

    fn show_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            // -- mode toggle --
            let coloring = !self.session.is_smearing();
            if ui
                .selectable_label(coloring, t!("toolbar.mode_paint"))
                .clicked()
            {
                self.session.set_smearing(false);
            }
            if ui
                .selectable_label(!coloring, t!("toolbar.mode_smear"))
                .clicked()
            {
                self.session.set_smearing(true);
            }

            ui.separator();

            // -- transient pick mode --
            let armed = self.session.pick_armed();
            if ui.selectable_label(armed, t!("toolbar.pick")).clicked() {
                self.session.arm_pick(!armed);
            }

            ui.separator();

            if ui.button(t!("toolbar.clear")).clicked() {
                self.session.clear(&mut self.canvas);
            }

            ui.separator();

            // -- brush radii --
            ui.label(t!("toolbar.brush_size"));
            let mut brush = self.session.paint_radius();
            if ui
                .add(
                    egui::DragValue::new(&mut brush)
                        .clamp_range(MIN_RADIUS..=MAX_RADIUS)
                        .speed(1),
                )
                .changed()
            {
                self.session.set_paint_radius(brush);
            }
            ui.label(t!("toolbar.smear_size"));
            let mut smear = self.session.smear_radius();
            if ui
                .add(
                    egui::DragValue::new(&mut smear)
                        .clamp_range(MIN_RADIUS..=MAX_RADIUS)
                        .speed(1),
                )
                .changed()
            {
                self.session.set_smear_radius(smear);
            }

            ui.separator();

            // -- language --
            let current = i18n::current_language();
            let current_name = i18n::LANGUAGES
                .iter()
                .find(|(code, _)| *code == current)
                .map(|(_, name)| *name)
                .unwrap_or("English");
            egui::ComboBox::from_id_source("smudgepad.language")
                .selected_text(current_name)
                .show_ui(ui, |ui| {
                    for &(code, name) in i18n::LANGUAGES {
                        if ui.selectable_label(current == code, name).clicked() {
                            i18n::set_language(code);
                        }
                    }
                });
        });
    }

    // ====================================================================
    // Canvas widget
    // ====================================================================

    fn show_canvas(&mut self, ui: &mut egui::Ui) {
        let size = Vec2::new(self.canvas.width as f32, self.canvas.height as f32);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        self.canvas.ensure_texture(ui.ctx());
        if ui.is_rect_visible(rect)
            && let Some(id) = self.canvas.texture_id()
        {
            ui.painter().image(
                id,
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
            ui.painter().rect_stroke(
                rect,
                0.0,
                Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
            );
        }
        let response = response.on_hover_cursor(egui::CursorIcon::Crosshair);

        // -- pointer dispatch: one stamp per event, no interpolation --
        let pressed = ui.input(|i| i.pointer.primary_pressed());
        let down = ui.input(|i| i.pointer.primary_down());
        let released = ui.input(|i| i.pointer.primary_released());
        let hover = response.hover_pos();

        if let Some(pos) = hover {
            let cx = pos.x - rect.min.x;
            let cy = pos.y - rect.min.y;
            if pressed {
                if let PointerOutcome::Picked(color) =
                    self.session.pointer_down(&mut self.canvas, cx, cy)
                {
                    self.palette.set_picked(color);
                }
            } else if down {
                self.session.pointer_move(&mut self.canvas, cx, cy);
            }
        }
        // Releasing the button or leaving the canvas both end the stroke.
        if released || hover.is_none() {
            self.session.pointer_up();
        }
    }
}

impl eframe::App for SmudgePadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("smudgepad.toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_toolbar(ui);
            ui.add_space(4.0);
            self.palette.show(ui, &mut self.session);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("smudgepad.status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(t!("status.samples", n = self.session.sample_count()));
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.show_canvas(ui);
            });
        });
    }
}
