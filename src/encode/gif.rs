use base64::Engine as _;
use image::{
    Delay, ExtendedColorType, Frame, ImageEncoder as _, RgbaImage,
    codecs::{
        gif::{GifEncoder, Repeat},
        png::PngEncoder,
    },
};

use crate::foundation::{
    core::FrameRGBA,
    error::{GlintError, GlintResult},
};

/// Encode `frames` as a looping GIF with `delay_ms` between frames.
///
/// Frames are composited over black first; all frames must share the first frame's size.
#[tracing::instrument(level = "debug", skip(frames), fields(frames = frames.len()))]
pub fn encode_gif(frames: &[FrameRGBA], delay_ms: u32) -> GlintResult<Vec<u8>> {
    let Some(first) = frames.first() else {
        return Err(GlintError::encode("no frames to encode"));
    };
    let (width, height) = (first.width, first.height);

    let mut out = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut out, 10);
        encoder
            .set_repeat(Repeat::Infinite)
            .map_err(|e| GlintError::encode(format!("gif repeat: {e}")))?;
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        for (idx, frame) in frames.iter().enumerate() {
            if (frame.width, frame.height) != (width, height) {
                return Err(GlintError::encode(format!(
                    "frame {idx} is {}x{}, expected {width}x{height}",
                    frame.width, frame.height
                )));
            }
            let img = opaque_image(frame)?;
            encoder
                .encode_frame(Frame::from_parts(img, 0, 0, delay))
                .map_err(|e| GlintError::encode(format!("gif frame {idx}: {e}")))?;
        }
    }
    Ok(out)
}

/// Encode one frame as an opaque PNG.
pub fn encode_png(frame: &FrameRGBA) -> GlintResult<Vec<u8>> {
    let img = opaque_image(frame)?;
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(img.as_raw(), frame.width, frame.height, ExtendedColorType::Rgba8)
        .map_err(|e| GlintError::encode(format!("png: {e}")))?;
    Ok(out)
}

/// Standard base64 with padding, as the display API expects.
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

fn opaque_image(frame: &FrameRGBA) -> GlintResult<RgbaImage> {
    RgbaImage::from_raw(frame.width, frame.height, frame.flatten_over_black()).ok_or_else(|| {
        GlintError::encode(format!(
            "frame buffer has {} bytes, expected {}x{}x4",
            frame.data.len(),
            frame.width,
            frame.height
        ))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
