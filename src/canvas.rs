//! Canvas raster state: a flat RGBA pixel buffer plus the egui texture it is
//! displayed through.
//!
//! The raster starts out — and clears back to — opaque white.  Paint and
//! smear stamps write circles into the buffer and mark it dirty; the next
//! frame re-uploads the whole raster as one texture (full re-upload keeps
//! the adapter simple; the canvases this tool targets are small).

use eframe::egui;
use egui::{Color32, ColorImage, TextureFilter, TextureOptions};
use image::{Rgba, RgbaImage};
use rayon::prelude::*;

use crate::color::Rgb;

/// Largest accepted canvas edge.  Dimensions beyond this are clamped at
/// construction, mirroring the launch-option bounds.
pub const MAX_CANVAS_EDGE: u32 = 4096;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub struct CanvasState {
    pub width: u32,
    pub height: u32,
    pixels: RgbaImage,
    dirty: bool,
    texture: Option<egui::TextureHandle>,
}

impl CanvasState {
    /// Create a white canvas.  Degenerate or oversized dimensions are
    /// clamped into `[1, MAX_CANVAS_EDGE]`.
    pub fn new(width: u32, height: u32) -> Self {
        let clamped_w = width.clamp(1, MAX_CANVAS_EDGE);
        let clamped_h = height.clamp(1, MAX_CANVAS_EDGE);
        if (clamped_w, clamped_h) != (width, height) {
            crate::logger::write(
                "WARN",
                &format!(
                    "canvas size {}×{} out of range, clamped to {}×{}",
                    width, height, clamped_w, clamped_h
                ),
            );
        }
        Self {
            width: clamped_w,
            height: clamped_h,
            pixels: RgbaImage::from_pixel(clamped_w, clamped_h, BACKGROUND),
            dirty: true,
            texture: None,
        }
    }

    /// Fill the circle of `radius` around `(cx, cy)` with `color`.  A raster
    /// pixel is inside when its center lies within `radius` of the stamp
    /// center (inclusive); the circle is intersected with the raster bounds,
    /// so stamps near or past the edge just truncate.
    pub fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) {
        if radius < 0.0 {
            return;
        }
        let px = Rgba([color.r, color.g, color.b, 255]);
        let min_x = ((cx - radius).floor() as i64).clamp(0, self.width as i64 - 1) as u32;
        let max_x = ((cx + radius).ceil() as i64).clamp(0, self.width as i64 - 1) as u32;
        let min_y = ((cy - radius).floor() as i64).clamp(0, self.height as i64 - 1) as u32;
        let max_y = ((cy + radius).ceil() as i64).clamp(0, self.height as i64 - 1) as u32;
        let radius_sq = radius * radius;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 - cx;
                let dy = y as f32 - cy;
                if dx * dx + dy * dy <= radius_sq {
                    self.pixels.put_pixel(x, y, px);
                }
            }
        }
        self.dirty = true;
    }

    /// Read one pixel back as an opaque color.  `None` outside the raster.
    pub fn read_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let p = self.pixels.get_pixel(x, y);
        Some(Rgb::new(p.0[0], p.0[1], p.0[2]))
    }

    /// Reset every pixel to white.
    pub fn clear(&mut self) {
        for p in self.pixels.pixels_mut() {
            *p = BACKGROUND;
        }
        self.dirty = true;
    }

    /// Re-upload the raster if it changed since the last frame.  Rows are
    /// converted to `Color32` in parallel; the canvas is opaque so no
    /// premultiplication is involved.
    pub fn ensure_texture(&mut self, ctx: &egui::Context) {
        if !self.dirty && self.texture.is_some() {
            return;
        }
        let pixels: Vec<Color32> = self
            .pixels
            .as_raw()
            .par_chunks_exact(4)
            .map(|p| Color32::from_rgb(p[0], p[1], p[2]))
            .collect();
        let img = ColorImage {
            size: [self.width as usize, self.height as usize],
            pixels,
        };
        let options = TextureOptions {
            magnification: TextureFilter::Nearest,
            minification: TextureFilter::Linear,
        };
        match self.texture.as_mut() {
            Some(tex) => tex.set(img, options),
            None => self.texture = Some(ctx.load_texture("smudgepad.canvas", img, options)),
        }
        self.dirty = false;
    }

    /// Texture id for painting; `None` until the first `ensure_texture`.
    pub fn texture_id(&self) -> Option<egui::TextureId> {
        self.texture.as_ref().map(|t| t.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_white_everywhere() {
        let canvas = CanvasState::new(32, 16);
        assert_eq!(canvas.read_pixel(0, 0), Some(Rgb::WHITE));
        assert_eq!(canvas.read_pixel(31, 15), Some(Rgb::WHITE));
    }

    #[test]
    fn fill_circle_is_inclusive_at_the_radius() {
        let mut canvas = CanvasState::new(64, 64);
        let red = Rgb::new(255, 0, 0);
        canvas.fill_circle(30.0, 30.0, 5.0, red);
        // Pixel centers exactly on the rim are painted...
        assert_eq!(canvas.read_pixel(35, 30), Some(red));
        assert_eq!(canvas.read_pixel(30, 25), Some(red));
        // ...one past it is not.
        assert_eq!(canvas.read_pixel(36, 30), Some(Rgb::WHITE));
        // (3, 4, 5) diagonal rim point.
        assert_eq!(canvas.read_pixel(33, 34), Some(red));
        assert_eq!(canvas.read_pixel(34, 34), Some(Rgb::WHITE));
    }

    #[test]
    fn fill_circle_truncates_at_the_edges() {
        let mut canvas = CanvasState::new(20, 20);
        let blue = Rgb::new(0, 0, 255);
        canvas.fill_circle(0.0, 0.0, 6.0, blue);
        canvas.fill_circle(25.0, 19.0, 10.0, blue);
        assert_eq!(canvas.read_pixel(0, 0), Some(blue));
        assert_eq!(canvas.read_pixel(19, 19), Some(blue));
        // Entirely out-of-bounds stamp is a no-op.
        canvas.fill_circle(-100.0, -100.0, 3.0, blue);
        assert_eq!(canvas.read_pixel(0, 5), Some(blue));
    }

    #[test]
    fn read_pixel_rejects_out_of_bounds() {
        let canvas = CanvasState::new(10, 10);
        assert_eq!(canvas.read_pixel(10, 0), None);
        assert_eq!(canvas.read_pixel(0, 10), None);
    }

    #[test]
    fn clear_resets_to_white() {
        let mut canvas = CanvasState::new(40, 40);
        canvas.fill_circle(20.0, 20.0, 15.0, Rgb::new(0, 200, 10));
        canvas.clear();
        for (x, y) in [(0u32, 0u32), (20, 20), (39, 39), (5, 33)] {
            assert_eq!(canvas.read_pixel(x, y), Some(Rgb::WHITE));
        }
    }

    #[test]
    fn degenerate_dimensions_are_clamped() {
        let canvas = CanvasState::new(0, 9999);
        assert_eq!(canvas.width, 1);
        assert_eq!(canvas.height, MAX_CANVAS_EDGE);
    }
}
