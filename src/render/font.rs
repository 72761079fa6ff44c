//! 3x5 bitmap font for crisp labels on the LED matrix.

use crate::{
    foundation::core::{HEIGHT, WIDTH},
    render::canvas::{PixelCanvas, Rgba},
};

/// Glyph width in pixels.
pub const CHAR_WIDTH: i32 = 3;
/// Glyph height in pixels.
pub const CHAR_HEIGHT: i32 = 5;
/// Blank columns between glyphs.
pub const CHAR_SPACING: i32 = 1;

// Five rows per glyph, three bits per row, most significant bit leftmost.
fn glyph(c: char) -> Option<[u8; 5]> {
    let rows = match c.to_ascii_lowercase() {
        'a' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'b' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'c' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'd' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'e' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'f' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'g' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'h' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'i' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'j' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'k' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'l' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'm' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'n' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'o' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'p' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'r' => [0b110, 0b101, 0b110, 0b101, 0b101],
        's' => [0b011, 0b100, 0b010, 0b001, 0b110],
        't' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'u' => [0b101, 0b101, 0b101, 0b101, 0b011],
        'v' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'w' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'x' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        ' ' => [0; 5],
        _ => return None,
    };
    Some(rows)
}

/// Rendered width of `text` in pixels (0 for empty text).
pub fn text_width(text: &str) -> i32 {
    let n = text.chars().count() as i32;
    if n == 0 {
        return 0;
    }
    n * (CHAR_WIDTH + CHAR_SPACING) - CHAR_SPACING
}

/// Draw `text` with its top-left corner at `(x, y)`.
///
/// Case-insensitive; characters without a glyph leave a blank cell.
pub fn draw_text(canvas: &mut PixelCanvas, x: i32, y: i32, text: &str, color: Rgba) {
    let mut pen_x = x;
    for c in text.chars() {
        if let Some(rows) = glyph(c) {
            for (row, bits) in (0..).zip(rows) {
                for col in 0..CHAR_WIDTH {
                    if (bits >> (CHAR_WIDTH - 1 - col)) & 1 == 1 {
                        canvas.set_pixel(pen_x + col, y + row, color);
                    }
                }
            }
        }
        pen_x += CHAR_WIDTH + CHAR_SPACING;
    }
}

/// Draw `text` horizontally centered on the bottom glyph band of the display.
pub fn draw_label(canvas: &mut PixelCanvas, text: &str, color: Rgba) {
    let x = (WIDTH as i32 - text_width(text)) / 2;
    let y = HEIGHT as i32 - CHAR_HEIGHT;
    draw_text(canvas, x, y, text, color);
}
