use std::io::Cursor;

use image::{AnimationDecoder as _, codecs::gif::GifDecoder};

use super::*;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: rgba.repeat((width * height) as usize),
        premultiplied: true,
    }
}

fn decode(bytes: &[u8]) -> Vec<image::Frame> {
    GifDecoder::new(Cursor::new(bytes))
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

#[test]
fn empty_input_is_an_encode_error() {
    let err = encode_gif(&[], 75).unwrap_err();
    assert!(matches!(err, GlintError::Encode(_)), "{err}");
}

#[test]
fn gif_keeps_frame_count_size_and_delay() {
    let frames = [
        solid(64, 32, [255, 255, 255, 255]),
        solid(64, 32, [0, 0, 0, 255]),
        solid(64, 32, [255, 0, 0, 255]),
    ];
    let bytes = encode_gif(&frames, 100).unwrap();
    assert!(bytes.starts_with(b"GIF89a"));

    let decoded = decode(&bytes);
    assert_eq!(decoded.len(), 3);
    for frame in &decoded {
        assert_eq!(frame.buffer().dimensions(), (64, 32));
        let (num, den) = frame.delay().numer_denom_ms();
        assert_eq!(num / den, 100);
    }
    assert_eq!(decoded[0].buffer().get_pixel(5, 5).0, [255, 255, 255, 255]);
    assert_eq!(decoded[1].buffer().get_pixel(5, 5).0, [0, 0, 0, 255]);
}

#[test]
fn transparent_pixels_become_black() {
    let bytes = encode_gif(&[solid(4, 4, [0, 0, 0, 0])], 75).unwrap();
    let decoded = decode(&bytes);
    let px = decoded[0].buffer().get_pixel(0, 0).0;
    assert_eq!(&px[..3], &[0, 0, 0]);
}

#[test]
fn gif_loops_forever() {
    let bytes = encode_gif(&[solid(2, 2, [9, 9, 9, 255])], 75).unwrap();
    assert!(
        bytes.windows(11).any(|w| w == b"NETSCAPE2.0"),
        "missing loop extension"
    );
}

#[test]
fn mismatched_frame_sizes_are_rejected() {
    let err = encode_gif(&[solid(4, 4, [0; 4]), solid(2, 2, [0; 4])], 75).unwrap_err();
    assert!(err.to_string().contains("frame 1 is 2x2"), "{err}");
}

#[test]
fn short_buffer_is_rejected() {
    let mut frame = solid(4, 4, [0; 4]);
    frame.data.truncate(10);
    assert!(matches!(encode_png(&frame), Err(GlintError::Encode(_))));
}

#[test]
fn png_is_opaque() {
    let bytes = encode_png(&solid(3, 2, [0, 128, 0, 128])).unwrap();
    let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(1, 1).0, [0, 128, 0, 255]);
}

#[test]
fn base64_uses_standard_alphabet_with_padding() {
    assert_eq!(to_base64(b"glint"), "Z2xpbnQ=");
    assert_eq!(to_base64(&[0xfb, 0xff]), "+/8=");
}
