//! Programmatic eyes-and-eyebrows painter for the built-in `default` style.

use crate::{
    emotion::EmotionConfig,
    foundation::core::{FrameRGBA, HEIGHT},
    render::canvas::{PixelCanvas, WHITE, round_half_up},
};

const EYE_WIDTH: i32 = 18;
const BROW_WIDTH: i32 = 20;
const BROW_HEIGHT: i32 = 2;
const BROW_GAP: i32 = 2;
const LEFT_EYE_X: f64 = 16.0;
const RIGHT_EYE_X: f64 = 48.0;
// Slightly below center to leave room for the brows.
const EYE_CENTER_Y: f64 = HEIGHT as f64 / 2.0 + 2.0;

/// Which side of the face an eyebrow belongs to. The inner end faces the other eye.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Viewer's left; inner end on the right.
    Left,
    /// Viewer's right; inner end on the left.
    Right,
}

/// Paint both eyes and eyebrows for `emotion` onto a fresh canvas.
pub fn draw_emotion(emotion: &EmotionConfig) -> PixelCanvas {
    let mut canvas = PixelCanvas::new();

    let eye_height = round_half_up(6.0 + 10.0 * emotion.eye_openness);
    let pupil = round_half_up(3.0 + 5.0 * emotion.pupil_size);
    let brow_raise = round_half_up(4.0 * (emotion.eyebrow_height - 0.5));
    let base_brow_y = round_half_up(
        EYE_CENTER_Y - f64::from(eye_height) / 2.0 - f64::from(BROW_GAP + BROW_HEIGHT),
    );
    let brow_y = base_brow_y - brow_raise;

    for (cx, side) in [(LEFT_EYE_X, Side::Left), (RIGHT_EYE_X, Side::Right)] {
        draw_angled_eyebrow(&mut canvas, cx, brow_y, emotion.eyebrow_angle, side);
        canvas.draw_eye(cx, EYE_CENTER_Y, EYE_WIDTH, eye_height, pupil);
    }
    canvas
}

/// [`draw_emotion`] as a display frame.
pub fn render_emotion_frame(emotion: &EmotionConfig) -> FrameRGBA {
    draw_emotion(emotion).into_frame()
}

/// An eyebrow sloped by `angle` (-1..1), at most 3 px end to end, mirrored per side.
pub fn draw_angled_eyebrow(
    canvas: &mut PixelCanvas,
    cx: f64,
    base_y: i32,
    angle: f64,
    side: Side,
) {
    let start_x = round_half_up(cx - f64::from(BROW_WIDTH) / 2.0);
    let slope = f64::from(round_half_up(angle * 3.0));

    for x in 0..BROW_WIDTH {
        let progress = f64::from(x) / f64::from(BROW_WIDTH - 1);
        let y_offset = match side {
            Side::Left => round_half_up(slope * (progress - 0.5) * 2.0),
            Side::Right => round_half_up(slope * (0.5 - progress) * 2.0),
        };
        for h in 0..BROW_HEIGHT {
            canvas.set_pixel(start_x + x, base_y + y_offset + h, WHITE);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/draw.rs"]
mod tests;
