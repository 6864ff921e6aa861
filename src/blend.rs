//! Distance-weighted color blending for the smear brush.
//!
//! Pure functions: a smear stamp collects the samples under the brush, blends
//! them here, and paints the result — the sample history itself is never
//! mutated by smearing.

use crate::color::Rgb;
use crate::samples::Sample;

/// Blend `samples` into a single color, weighting each sample by
/// `exp(-distance / radius)` from `cursor`.  The weight approaches 1 at the
/// cursor and decays smoothly outward; there is no hard cutoff here because
/// the neighborhood query already bounded the set to `distance <= radius`.
///
/// An empty sample set blends to white (the canvas background), as does a
/// degenerate zero total weight.
pub fn blend_weighted(samples: &[Sample], cursor: (f32, f32), radius: f32) -> Rgb {
    if samples.is_empty() {
        return Rgb::WHITE;
    }

    let (cx, cy) = (cursor.0 as f64, cursor.1 as f64);
    let radius = radius as f64;

    let mut r = 0.0f64;
    let mut g = 0.0f64;
    let mut b = 0.0f64;
    let mut total_weight = 0.0f64;

    for sample in samples {
        let dx = sample.x as f64 - cx;
        let dy = sample.y as f64 - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        let weight = (-distance / radius).exp();

        r += sample.color.r as f64 * weight;
        g += sample.color.g as f64 * weight;
        b += sample.color.b as f64 * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        Rgb::from_f64(r / total_weight, g / total_weight, b / total_weight)
    } else {
        Rgb::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    fn sample(x: f32, y: f32, color: Rgb) -> Sample {
        Sample { x, y, color }
    }

    #[test]
    fn empty_set_blends_to_white() {
        assert_eq!(blend_weighted(&[], (10.0, 10.0), 90.0), Rgb::WHITE);
    }

    #[test]
    fn single_sample_at_cursor_returns_its_color() {
        let red = Rgb::new(255, 0, 0);
        let got = blend_weighted(&[sample(5.0, 5.0, red)], (5.0, 5.0), 90.0);
        assert_eq!(got, red);
    }

    #[test]
    fn uniform_color_blends_to_itself() {
        let c = Rgb::new(40, 90, 200);
        let set = [
            sample(0.0, 0.0, c),
            sample(12.0, 3.0, c),
            sample(-7.5, 30.0, c),
        ];
        assert_eq!(blend_weighted(&set, (4.0, 4.0), 50.0), c);
    }

    #[test]
    fn equal_weight_red_blue_gives_purple() {
        // Both samples sit exactly at the cursor, so both weigh 1.0 and each
        // of red/blue averages to 127.5, which rounds up to 128.
        let set = [
            sample(5.0, 5.0, Rgb::new(255, 0, 0)),
            sample(5.0, 5.0, Rgb::new(0, 0, 255)),
        ];
        assert_eq!(blend_weighted(&set, (5.0, 5.0), 90.0), Rgb::new(128, 0, 128));
    }

    #[test]
    fn nearer_sample_dominates() {
        let set = [
            sample(0.0, 0.0, Rgb::new(255, 0, 0)),
            sample(80.0, 0.0, Rgb::new(0, 0, 255)),
        ];
        let got = blend_weighted(&set, (0.0, 0.0), 90.0);
        assert!(got.r > got.b, "expected red to dominate, got {got}");
    }
}
