//! SmudgePad — a pixel painting tool with a smearing brush.
//!
//! Paint with a selectable color, smear previously painted strokes into
//! each other with a distance-weighted blend, and pick colors back off the
//! canvas.  The binary in `main.rs` wires these modules to an eframe
//! window; everything stateful hangs off [`session::PaintSession`] and
//! [`canvas::CanvasState`].

#[macro_use]
pub mod i18n;

pub mod app;
pub mod blend;
pub mod canvas;
pub mod cli;
pub mod color;
pub mod components;
pub mod logger;
pub mod samples;
pub mod session;
