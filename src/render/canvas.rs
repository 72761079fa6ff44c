use crate::foundation::{
    core::{FrameRGBA, HEIGHT, WIDTH},
    error::{GlintError, GlintResult},
};

/// Straight-alpha RGBA8 color.
pub type Rgba = [u8; 4];

/// Opaque white.
pub const WHITE: Rgba = [255, 255, 255, 255];
/// Opaque black.
pub const BLACK: Rgba = [0, 0, 0, 255];

/// Display-sized RGBA8 pixel buffer with clipped drawing primitives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelCanvas {
    data: Vec<u8>,
}

impl Default for PixelCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl PixelCanvas {
    /// A canvas cleared to opaque black.
    pub fn new() -> Self {
        let mut canvas = Self {
            data: vec![0; (WIDTH * HEIGHT * 4) as usize],
        };
        canvas.clear(BLACK);
        canvas
    }

    /// Adopt a display-sized frame, flattening any transparency over black.
    pub fn from_frame(frame: &FrameRGBA) -> GlintResult<Self> {
        if (frame.width, frame.height) != (WIDTH, HEIGHT) {
            return Err(GlintError::validation(format!(
                "canvas frames must be {WIDTH}x{HEIGHT}, got {}x{}",
                frame.width, frame.height
            )));
        }
        Ok(Self {
            data: frame.flatten_over_black(),
        })
    }

    /// Fill every pixel with `color`.
    pub fn clear(&mut self, color: Rgba) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    /// Set one pixel; coordinates outside the display are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let idx = ((y as u32 * WIDTH + x as u32) * 4) as usize;
        self.data[idx..idx + 4].copy_from_slice(&color);
    }

    /// Read one pixel.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return None;
        }
        let idx = ((y as u32 * WIDTH + x as u32) * 4) as usize;
        let px = &self.data[idx..idx + 4];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Fill a `w x h` rectangle with its top-left corner at `(x, y)`, clipped to the display.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        for py in y..y + h {
            for px in x..x + w {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// A white eye of `width x height` centered on `(cx, cy)` with a square black pupil.
    pub fn draw_eye(&mut self, cx: f64, cy: f64, width: i32, height: i32, pupil: i32) {
        let eye_x = round_half_up(cx - f64::from(width) / 2.0);
        let eye_y = round_half_up(cy - f64::from(height) / 2.0);
        self.fill_rect(eye_x, eye_y, width, height, WHITE);

        let pupil_x = round_half_up(cx - f64::from(pupil) / 2.0);
        let pupil_y = round_half_up(cy - f64::from(pupil) / 2.0);
        self.fill_rect(pupil_x, pupil_y, pupil, pupil, BLACK);
    }

    /// A flat white eyebrow centered on `cx` with its top row at `y`.
    pub fn draw_eyebrow(&mut self, cx: f64, y: i32, width: i32, height: i32) {
        let x = round_half_up(cx - f64::from(width) / 2.0);
        self.fill_rect(x, y, width, height, WHITE);
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Hand the pixels over as a straight-alpha frame.
    pub fn into_frame(self) -> FrameRGBA {
        FrameRGBA {
            width: WIDTH,
            height: HEIGHT,
            data: self.data,
            premultiplied: false,
        }
    }
}

/// Pixel rounding used by every painter: ties round toward +inf, so `-0.5` becomes `0`.
pub(crate) fn round_half_up(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
