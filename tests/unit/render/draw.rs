use super::*;
use crate::{emotion::get_emotion, render::canvas::BLACK};

fn white_rows_in_column(canvas: &PixelCanvas, x: i32) -> Vec<i32> {
    (0..32)
        .filter(|&y| canvas.pixel(x, y) == Some(WHITE))
        .collect()
}

#[test]
fn neutral_face_layout() {
    let canvas = draw_emotion(get_emotion("neutral").unwrap());
    // Flat brows on rows 8..10, a gap, then the eye from row 12 down to row 24.
    assert_eq!(canvas.pixel(16, 8), Some(WHITE));
    assert_eq!(canvas.pixel(16, 9), Some(WHITE));
    assert_eq!(canvas.pixel(16, 10), Some(BLACK));
    assert_eq!(canvas.pixel(7, 12), Some(WHITE));
    assert_eq!(canvas.pixel(7, 24), Some(WHITE));
    assert_eq!(canvas.pixel(7, 25), Some(BLACK));
    assert_eq!(canvas.pixel(16, 18), Some(BLACK), "pupil");
    assert_eq!(canvas.pixel(48, 8), Some(WHITE));
}

#[test]
fn openness_changes_eye_height() {
    let sleepy = draw_emotion(get_emotion("sleepy").unwrap());
    let surprised = draw_emotion(get_emotion("surprised").unwrap());
    // Column 8 is inside the eye but outside pupil and brow slope extremes.
    let sleepy_rows = white_rows_in_column(&sleepy, 8).len();
    let surprised_rows = white_rows_in_column(&surprised, 8).len();
    assert!(sleepy_rows < surprised_rows, "{sleepy_rows} vs {surprised_rows}");
}

#[test]
fn eyebrows_mirror_between_eyes() {
    for name in ["neutral", "angry", "surprised", "worried"] {
        let emotion = get_emotion(name).unwrap();
        let canvas = draw_emotion(emotion);
        let eye_h = (6.0 + 10.0 * emotion.eye_openness + 0.5).floor();
        let eye_top = (18.0 - eye_h / 2.0).round() as i32;
        for y in 0..eye_top {
            for x in 0..64 {
                assert_eq!(
                    canvas.pixel(x, y),
                    canvas.pixel(63 - x, y),
                    "{name} at ({x}, {y})"
                );
            }
        }
    }
}

#[test]
fn angled_brow_slopes_up_to_three_pixels() {
    let mut canvas = PixelCanvas::new();
    draw_angled_eyebrow(&mut canvas, 16.0, 10, 1.0, Side::Left);
    // Outer end raised, inner end lowered by the full slope.
    assert_eq!(white_rows_in_column(&canvas, 6), [7, 8]);
    assert_eq!(white_rows_in_column(&canvas, 25), [13, 14]);

    let mut canvas = PixelCanvas::new();
    draw_angled_eyebrow(&mut canvas, 48.0, 10, 1.0, Side::Right);
    assert_eq!(white_rows_in_column(&canvas, 38), [13, 14]);
    assert_eq!(white_rows_in_column(&canvas, 57), [7, 8]);
}

#[test]
fn frame_matches_canvas() {
    let emotion = get_emotion("happy").unwrap();
    let frame = render_emotion_frame(emotion);
    assert_eq!(frame.data, draw_emotion(emotion).as_bytes());
}
