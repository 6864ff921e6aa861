//! The paint session: all mutable tool state and the pointer dispatcher.
//!
//! UI controls never mutate brush or canvas state directly — they issue
//! commands against the session (`set_color`, `set_smearing`, `arm_pick`,
//! `clear`, …) and forward pointer events to it.  The session decides
//! whether a pointer-down starts a stroke, performs a color pick, and what
//! each stamp does in the current mode.

use uuid::Uuid;

use crate::blend::blend_weighted;
use crate::canvas::CanvasState;
use crate::color::Rgb;
use crate::samples::{Sample, SampleStore};

/// Default coloring brush radius, in canvas pixels.
pub const DEFAULT_PAINT_RADIUS: f32 = 15.0;
/// Default smearing brush radius.  Deliberately much larger than the
/// coloring radius so a smear gathers a wide neighborhood.
pub const DEFAULT_SMEAR_RADIUS: f32 = 90.0;

pub const MIN_RADIUS: f32 = 1.0;
pub const MAX_RADIUS: f32 = 256.0;

/// What a pointer-down ended up doing — surfaced so the UI can react
/// (e.g. update the picked-color readout) without inspecting internals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    /// A coloring or smearing stamp was applied and a stroke is active.
    Stamped,
    /// Pick mode consumed the event; the carried color is now selected.
    Picked(Rgb),
    /// Nothing happened (e.g. a move event with no active stroke).
    Ignored,
}

pub struct PaintSession {
    pub id: Uuid,
    selected_color: Rgb,
    paint_radius: f32,
    smear_radius: f32,
    smearing: bool,
    pick_armed: bool,
    painting: bool,
    samples: SampleStore,
}

impl PaintSession {
    pub fn new(canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            selected_color: Rgb::BLACK,
            paint_radius: DEFAULT_PAINT_RADIUS,
            smear_radius: DEFAULT_SMEAR_RADIUS,
            smearing: false,
            pick_armed: false,
            painting: false,
            samples: SampleStore::new(canvas_width, canvas_height),
        }
    }

    // ---- pointer dispatch ---------------------------------------------------

    /// Pointer pressed over the canvas.
    ///
    /// While pick mode is armed the event samples the canvas instead of
    /// painting: the pixel under the cursor (clamped into bounds) becomes
    /// the selected color and pick mode disarms itself.  Otherwise a stroke
    /// begins with one stamp.
    pub fn pointer_down(&mut self, canvas: &mut CanvasState, x: f32, y: f32) -> PointerOutcome {
        if self.pick_armed {
            self.pick_armed = false;
            let px = (x.max(0.0) as u32).min(canvas.width - 1);
            let py = (y.max(0.0) as u32).min(canvas.height - 1);
            return match canvas.read_pixel(px, py) {
                Some(color) => {
                    self.selected_color = color;
                    crate::logger::write(
                        "INFO",
                        &format!("picked {} at ({}, {})", color, px, py),
                    );
                    PointerOutcome::Picked(color)
                }
                None => PointerOutcome::Ignored,
            };
        }
        self.painting = true;
        self.stamp(canvas, x, y);
        PointerOutcome::Stamped
    }

    /// Pointer moved.  One stamp per event while a stroke is active; there
    /// is no interpolation between successive positions, so fast drags leave
    /// gaps just as single stamps do.
    pub fn pointer_move(&mut self, canvas: &mut CanvasState, x: f32, y: f32) -> PointerOutcome {
        if !self.painting {
            return PointerOutcome::Ignored;
        }
        self.stamp(canvas, x, y);
        PointerOutcome::Stamped
    }

    /// Pointer released or left the canvas: the stroke ends.
    pub fn pointer_up(&mut self) {
        self.painting = false;
    }

    fn stamp(&mut self, canvas: &mut CanvasState, x: f32, y: f32) {
        if self.smearing {
            let neighborhood = self.samples.within_radius(x, y, self.smear_radius);
            let blended = blend_weighted(&neighborhood, (x, y), self.smear_radius);
            canvas.fill_circle(x, y, self.smear_radius, blended);
        } else {
            canvas.fill_circle(x, y, self.paint_radius, self.selected_color);
            self.samples.push(Sample {
                x,
                y,
                color: self.selected_color,
            });
        }
    }

    // ---- commands from UI controls ------------------------------------------

    pub fn set_color(&mut self, color: Rgb) {
        self.selected_color = color;
    }

    pub fn selected_color(&self) -> Rgb {
        self.selected_color
    }

    /// Switch between coloring and smearing.  Mode changes mid-stroke take
    /// effect on the next stamp.
    pub fn set_smearing(&mut self, smearing: bool) {
        if self.smearing != smearing {
            self.smearing = smearing;
            crate::logger::write(
                "INFO",
                if smearing { "mode: smearing" } else { "mode: coloring" },
            );
        }
    }

    pub fn is_smearing(&self) -> bool {
        self.smearing
    }

    /// Arm (or disarm) the transient pick mode.  When armed, the next
    /// pointer-down picks a color instead of painting.
    pub fn arm_pick(&mut self, armed: bool) {
        self.pick_armed = armed;
    }

    pub fn pick_armed(&self) -> bool {
        self.pick_armed
    }

    pub fn is_painting(&self) -> bool {
        self.painting
    }

    pub fn set_paint_radius(&mut self, radius: f32) {
        self.paint_radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn paint_radius(&self) -> f32 {
        self.paint_radius
    }

    pub fn set_smear_radius(&mut self, radius: f32) {
        self.smear_radius = radius.clamp(MIN_RADIUS, MAX_RADIUS);
    }

    pub fn smear_radius(&self) -> f32 {
        self.smear_radius
    }

    /// Wipe the canvas back to white and drop the whole sample history.
    pub fn clear(&mut self, canvas: &mut CanvasState) {
        canvas.clear();
        self.samples.clear();
        self.painting = false;
        crate::logger::write(
            "INFO",
            &format!("canvas cleared ({}×{})", canvas.width, canvas.height),
        );
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (PaintSession, CanvasState) {
        (PaintSession::new(200, 200), CanvasState::new(200, 200))
    }

    #[test]
    fn coloring_stamp_paints_a_circle_and_records_one_sample() {
        let (mut session, mut canvas) = setup();
        session.set_color(Rgb::from_hex("#FF0000").unwrap());
        let outcome = session.pointer_down(&mut canvas, 10.0, 10.0);

        assert_eq!(outcome, PointerOutcome::Stamped);
        assert_eq!(session.sample_count(), 1);
        let red = Rgb::new(255, 0, 0);
        assert_eq!(canvas.read_pixel(10, 10), Some(red));
        // Rim of the default radius-15 brush.
        assert_eq!(canvas.read_pixel(25, 10), Some(red));
        assert_eq!(canvas.read_pixel(26, 10), Some(Rgb::WHITE));
    }

    #[test]
    fn move_without_a_stroke_is_ignored() {
        let (mut session, mut canvas) = setup();
        assert_eq!(
            session.pointer_move(&mut canvas, 50.0, 50.0),
            PointerOutcome::Ignored
        );
        assert_eq!(session.sample_count(), 0);
    }

    #[test]
    fn each_move_event_stamps_once_with_no_interpolation() {
        let (mut session, mut canvas) = setup();
        session.pointer_down(&mut canvas, 20.0, 20.0);
        session.pointer_move(&mut canvas, 120.0, 20.0);
        session.pointer_up();

        assert_eq!(session.sample_count(), 2);
        // A fast drag leaves the gap between the stamps unpainted.
        assert_eq!(canvas.read_pixel(70, 20), Some(Rgb::WHITE));
    }

    #[test]
    fn stroke_ends_on_pointer_up() {
        let (mut session, mut canvas) = setup();
        session.pointer_down(&mut canvas, 20.0, 20.0);
        session.pointer_up();
        assert!(!session.is_painting());
        assert_eq!(
            session.pointer_move(&mut canvas, 60.0, 60.0),
            PointerOutcome::Ignored
        );
    }

    #[test]
    fn smearing_two_coincident_stamps_blends_to_purple() {
        let (mut session, mut canvas) = setup();
        session.set_color(Rgb::new(255, 0, 0));
        session.pointer_down(&mut canvas, 5.0, 5.0);
        session.pointer_up();
        session.set_color(Rgb::new(0, 0, 255));
        session.pointer_down(&mut canvas, 5.0, 5.0);
        session.pointer_up();

        session.set_smearing(true);
        session.pointer_down(&mut canvas, 5.0, 5.0);
        session.pointer_up();

        // Equal weights at distance zero: each channel averages, 127.5 → 128.
        assert_eq!(canvas.read_pixel(5, 5), Some(Rgb::new(128, 0, 128)));
        // Smearing added no samples to the history.
        assert_eq!(session.sample_count(), 2);
    }

    #[test]
    fn smearing_virgin_canvas_paints_white() {
        let (mut session, mut canvas) = setup();
        session.set_smearing(true);
        session.pointer_down(&mut canvas, 100.0, 100.0);
        assert_eq!(canvas.read_pixel(100, 100), Some(Rgb::WHITE));
        assert_eq!(session.sample_count(), 0);
    }

    #[test]
    fn armed_pick_consumes_the_event_and_disarms() {
        let (mut session, mut canvas) = setup();
        session.set_color(Rgb::new(255, 0, 0));
        session.pointer_down(&mut canvas, 30.0, 30.0);
        session.pointer_up();

        session.arm_pick(true);
        let outcome = session.pointer_down(&mut canvas, 30.0, 30.0);
        assert_eq!(outcome, PointerOutcome::Picked(Rgb::new(255, 0, 0)));
        assert_eq!(session.selected_color(), Rgb::new(255, 0, 0));
        assert!(!session.pick_armed());
        // No stroke started: picking does not paint.
        assert!(!session.is_painting());
        assert_eq!(session.sample_count(), 1);
    }

    #[test]
    fn pick_positions_are_clamped_into_bounds() {
        let (mut session, mut canvas) = setup();
        session.arm_pick(true);
        let outcome = session.pointer_down(&mut canvas, 5000.0, -12.0);
        assert_eq!(outcome, PointerOutcome::Picked(Rgb::WHITE));
    }

    #[test]
    fn clear_resets_canvas_and_history_so_picks_read_white() {
        let (mut session, mut canvas) = setup();
        session.set_color(Rgb::new(10, 200, 30));
        session.pointer_down(&mut canvas, 50.0, 50.0);
        session.pointer_up();

        session.clear(&mut canvas);
        assert_eq!(session.sample_count(), 0);
        for (x, y) in [(50u32, 50u32), (0, 0), (199, 199)] {
            assert_eq!(canvas.read_pixel(x, y), Some(Rgb::WHITE));
        }

        session.arm_pick(true);
        let outcome = session.pointer_down(&mut canvas, 50.0, 50.0);
        assert_eq!(outcome, PointerOutcome::Picked(Rgb::WHITE));
    }

    #[test]
    fn radius_setters_clamp_to_sane_bounds() {
        let (mut session, _) = setup();
        session.set_paint_radius(0.0);
        assert_eq!(session.paint_radius(), MIN_RADIUS);
        session.set_smear_radius(1e9);
        assert_eq!(session.smear_radius(), MAX_RADIUS);
    }
}
