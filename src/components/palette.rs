use eframe::egui;
use egui::{Color32, Stroke, Vec2};

use crate::color::{PALETTE, Rgb};
use crate::session::PaintSession;

/// Swatches per row before the strip wraps.
const SWATCHES_PER_ROW: usize = 15;
const SWATCH_SIZE: f32 = 24.0;

// ============================================================================
// PalettePanel — swatch strip + custom hex entry + picked-color readout
// ============================================================================

pub struct PalettePanel {
    /// The 14 stock swatches plus any confirmed custom colors, in the order
    /// they were added.
    swatches: Vec<Rgb>,
    hex_input: String,
    hex_invalid: bool,
    /// Last color taken off the canvas with the pick tool, for the readout.
    picked: Option<Rgb>,
}

impl Default for PalettePanel {
    fn default() -> Self {
        Self {
            swatches: PALETTE.to_vec(),
            hex_input: String::new(),
            hex_invalid: false,
            picked: None,
        }
    }
}

impl PalettePanel {
    /// Record a pick-tool result: shows up in the readout and pre-fills the
    /// custom hex field so the picked color can be re-confirmed or tweaked.
    pub fn set_picked(&mut self, color: Rgb) {
        self.picked = Some(color);
        self.hex_input = color.to_hex();
        self.hex_invalid = false;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, session: &mut PaintSession) {
        self.draw_swatch_rows(ui, session);
        ui.add_space(4.0);
        self.draw_hex_row(ui, session);
        self.draw_picked_readout(ui);
    }

    // -- swatch strip ---------------------------------------------------------

    fn draw_swatch_rows(&mut self, ui: &mut egui::Ui, session: &mut PaintSession) {
        let selected = session.selected_color();
        let mut clicked: Option<Rgb> = None;

        for row in self.swatches.chunks(SWATCHES_PER_ROW) {
            ui.horizontal(|ui| {
                for &color in row {
                    if Self::draw_swatch(ui, color, color == selected).clicked() {
                        clicked = Some(color);
                    }
                }
            });
        }

        if let Some(color) = clicked {
            session.set_color(color);
        }
    }

    fn draw_swatch(ui: &mut egui::Ui, color: Rgb, selected: bool) -> egui::Response {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), egui::Sense::click());
        if ui.is_rect_visible(rect) {
            let p = ui.painter();
            p.rect_filled(rect, 3.0, color.to_color32());
            let border = if selected {
                Stroke::new(2.0, ui.visuals().selection.stroke.color)
            } else {
                Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
            };
            p.rect_stroke(rect, 3.0, border);
        }
        response.on_hover_text(color.to_hex())
    }

    // -- custom hex entry -----------------------------------------------------

    fn draw_hex_row(&mut self, ui: &mut egui::Ui, session: &mut PaintSession) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("#").monospace().strong());

            // The field holds the digits only; the '#' lives in the label.
            let mut digits = self
                .hex_input
                .strip_prefix('#')
                .unwrap_or(&self.hex_input)
                .to_string();
            let edit = ui.add_sized(
                [64.0, 18.0],
                egui::TextEdit::singleline(&mut digits)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("RRGGBB"),
            );
            if edit.changed() {
                self.hex_input = format!("#{}", digits.trim());
                self.hex_invalid = false;
            }

            let confirm = ui.button(t!("toolbar.confirm")).clicked();
            let entered = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if confirm || entered {
                self.confirm_custom(session);
            }

            if self.hex_invalid {
                ui.colored_label(Color32::from_rgb(210, 90, 90), t!("palette.invalid_hex"));
            }
        });
    }

    fn confirm_custom(&mut self, session: &mut PaintSession) {
        match Rgb::from_hex(&self.hex_input) {
            Ok(color) => {
                session.set_color(color);
                if !self.swatches.contains(&color) {
                    self.swatches.push(color);
                }
                self.hex_invalid = false;
            }
            Err(e) => {
                self.hex_invalid = true;
                crate::logger::write(
                    "WARN",
                    &format!("rejected custom color {:?}: {}", self.hex_input, e),
                );
            }
        }
    }

    // -- picked-color readout -------------------------------------------------

    fn draw_picked_readout(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            match self.picked {
                Some(c) => {
                    ui.label(t!("status.picked_rgb", r = c.r, g = c.g, b = c.b));
                    let (rect, _) =
                        ui.allocate_exact_size(Vec2::new(18.0, 12.0), egui::Sense::hover());
                    if ui.is_rect_visible(rect) {
                        let p = ui.painter();
                        p.rect_filled(rect, 2.0, c.to_color32());
                        p.rect_stroke(
                            rect,
                            2.0,
                            Stroke::new(1.0, Color32::from_black_alpha(60)),
                        );
                    }
                }
                None => {
                    ui.label(t!("status.nothing_picked"));
                }
            }
        });
    }
}
