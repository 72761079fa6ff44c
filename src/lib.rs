//! glint shows emotion eyes on a 64x32 Tidbyt display.
//!
//! Artwork comes from a built-in pixel painter, from PNG files, or from SVG files that may carry
//! SMIL animation. Animated SVG is sampled at fixed intervals: every sample resolves the
//! `<animate>`/`<animateTransform>` directives to concrete attribute values, strips them, and
//! hands the static markup to a rasterizer.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `svg source + time -> static svg` ([`apply_animations_at_time`])
//! 2. **Rasterize**: `static svg -> FrameRGBA` ([`Rasterizer`], [`ResvgRasterizer`])
//! 3. **Drive**: sample `fps x duration` points in time ([`render_frames`])
//! 4. **Encode**: frames to a looping GIF ([`encode_gif`]) and push it ([`TidbytClient`])
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

/// User configuration and value precedence.
pub mod config;
/// Named emotion parameters.
pub mod emotion;
/// GIF/PNG output encodings.
pub mod encode;
/// Remote display push client.
pub mod push;
/// Pixel canvas, painter, bitmap font, and rasterizer.
pub mod render;
/// SMIL animation resolution and frame sampling.
pub mod smil;
/// Emotion styles and style directory validation.
pub mod style;
/// Owned, mutable SVG document tree.
pub mod svg;

pub use config::{GlintConfig, resolve};
pub use emotion::{EMOTIONS, EmotionConfig, get_emotion, list_emotions};
pub use encode::{encode_gif, encode_png, to_base64};
pub use foundation::core::{FrameRGBA, HEIGHT, WIDTH};
pub use foundation::error::{GlintError, GlintResult};
pub use push::TidbytClient;
pub use render::canvas::PixelCanvas;
pub use render::draw::{draw_emotion, render_emotion_frame};
pub use render::raster::{Rasterizer, ResvgRasterizer};
pub use smil::apply::{apply_animations_at_time, is_animated};
pub use smil::directive::{AnimationDirective, DirectiveKind};
pub use smil::driver::{FrameDriverOpts, FrameRequest, render_frames, render_svg};
pub use smil::interp::{RepeatPolicy, interpolate, lerp};
pub use smil::time::{parse_begin, parse_duration};
pub use style::validate::{ValidationReport, validate_style_dir};
pub use style::{RenderedEmotion, Style, StyleCatalog, StyleKind};
pub use svg::doc::SvgDocument;
