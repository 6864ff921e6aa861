// ============================================================================
// SmudgePad launch options
// ============================================================================
//
// Everything here configures the session before the window opens; there is
// no headless mode — the tool's state is ephemeral and nothing is imported
// or exported.
//
//   smudgepad --width 1024 --height 768 --color "#FF0000"
//   smudgepad --brush-size 8 --smear-size 60 --lang zh-CN

use clap::Parser;

use crate::canvas::MAX_CANVAS_EDGE;
use crate::color::Rgb;
use crate::session::{MAX_RADIUS, MIN_RADIUS};

/// SmudgePad — paint, smear, and pick colors on a pixel canvas.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "smudgepad",
    about = "Pixel painting with a smearing brush",
    long_about = "A pixel painting tool: paint with a selectable color, smear\n\
                  previously painted strokes into each other, and pick colors\n\
                  back off the canvas.  All options only configure the session;\n\
                  nothing is read from or written to disk."
)]
pub struct LaunchArgs {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 800, value_name = "PX")]
    pub width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 600, value_name = "PX")]
    pub height: u32,

    /// Coloring brush radius in pixels.
    #[arg(long, default_value_t = 15.0, value_name = "PX")]
    pub brush_size: f32,

    /// Smearing brush radius in pixels.
    #[arg(long, default_value_t = 90.0, value_name = "PX")]
    pub smear_size: f32,

    /// Starting brush color as a #RRGGBB hex string.
    #[arg(long, value_name = "HEX", value_parser = parse_color_arg)]
    pub color: Option<Rgb>,

    /// UI language code (en, zh-CN).  Defaults to the system locale.
    #[arg(long, value_name = "CODE")]
    pub lang: Option<String>,
}

impl LaunchArgs {
    /// Clamp every numeric option into its supported range.  Bad values are
    /// not an error — a windowed tool should open with something sane rather
    /// than refuse to start.
    pub fn sanitized(mut self) -> Self {
        self.width = self.width.clamp(1, MAX_CANVAS_EDGE);
        self.height = self.height.clamp(1, MAX_CANVAS_EDGE);
        self.brush_size = self.brush_size.clamp(MIN_RADIUS, MAX_RADIUS);
        self.smear_size = self.smear_size.clamp(MIN_RADIUS, MAX_RADIUS);
        self
    }
}

fn parse_color_arg(s: &str) -> Result<Rgb, String> {
    Rgb::from_hex(s).map_err(|e| format!("{e} (expected #RRGGBB)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_brush() {
        let args = LaunchArgs::try_parse_from(["smudgepad"]).unwrap();
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.brush_size, 15.0);
        assert_eq!(args.smear_size, 90.0);
        assert!(args.color.is_none());
    }

    #[test]
    fn color_is_validated_through_the_codec() {
        let args =
            LaunchArgs::try_parse_from(["smudgepad", "--color", "#00ff7f"]).unwrap();
        assert_eq!(args.color, Some(Rgb::new(0, 255, 127)));

        assert!(LaunchArgs::try_parse_from(["smudgepad", "--color", "red"]).is_err());
        assert!(LaunchArgs::try_parse_from(["smudgepad", "--color", "#12345"]).is_err());
    }

    #[test]
    fn sanitize_clamps_sizes() {
        let args = LaunchArgs::try_parse_from([
            "smudgepad",
            "--width",
            "100000",
            "--height",
            "0",
            "--brush-size",
            "0",
        ])
        .unwrap()
        .sanitized();
        assert_eq!(args.width, MAX_CANVAS_EDGE);
        assert_eq!(args.height, 1);
        assert_eq!(args.brush_size, MIN_RADIUS);
    }
}
