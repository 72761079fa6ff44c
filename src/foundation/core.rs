/// Display width of the target pixel matrix.
pub const WIDTH: u32 = 64;
/// Display height of the target pixel matrix.
pub const HEIGHT: u32 = 32;

/// A rendered frame as RGBA8 pixels.
///
/// Frames produced by the SVG rasterizer are **premultiplied alpha**; frames painted by the
/// pixel canvas or decoded from PNG are straight alpha. The `premultiplied` flag makes this
/// explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// RGBA of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Composite the frame over opaque black and return opaque RGBA8.
    ///
    /// The display has no alpha channel, so this is what ends up on screen.
    pub fn flatten_over_black(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            if !self.premultiplied {
                let a = u16::from(px[3]);
                px[0] = ((u16::from(px[0]) * a + 127) / 255) as u8;
                px[1] = ((u16::from(px[1]) * a + 127) / 255) as u8;
                px[2] = ((u16::from(px[2]) * a + 127) / 255) as u8;
            }
            px[3] = 255;
        }
        out
    }
}
