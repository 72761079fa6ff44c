//! Emotion styles: the built-in painter plus directories of SVG or PNG artwork.

pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    emotion::EmotionConfig,
    foundation::{
        core::{FrameRGBA, HEIGHT, WIDTH},
        error::{GlintError, GlintResult},
    },
    render::{
        canvas::{PixelCanvas, WHITE},
        draw::render_emotion_frame,
        font::draw_label,
        raster::Rasterizer,
    },
    smil::driver::{FrameDriverOpts, render_svg},
};

/// Name of the built-in programmatic style.
pub const DEFAULT_STYLE: &str = "default";

/// Display delay for frames that are not driven by an animation clock.
pub const STATIC_FRAME_DELAY_MS: u32 = 75;

/// How a style produces pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StyleKind {
    /// Painted in code.
    Programmatic,
    /// One SVG per emotion, optionally SMIL-animated.
    Svg,
    /// One PNG per emotion, resized to the display.
    Image,
}

impl StyleKind {
    /// Short lower-case label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Programmatic => "programmatic",
            Self::Svg => "svg",
            Self::Image => "image",
        }
    }

    /// Asset file extension for directory styles.
    pub fn extension(self) -> Option<&'static str> {
        match self {
            Self::Programmatic => None,
            Self::Svg => Some("svg"),
            Self::Image => Some("png"),
        }
    }
}

/// Optional `style.json` next to a style's assets.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
struct StyleManifest {
    description: Option<String>,
}

/// A resolved style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Style {
    /// Style name (directory name for directory styles).
    pub name: String,
    /// Rendering strategy.
    pub kind: StyleKind,
    /// Human readable summary.
    pub description: String,
    /// Asset directory, `None` for programmatic styles.
    pub dir: Option<PathBuf>,
}

/// Frames for one emotion plus their display delay.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedEmotion {
    /// Frames in display order, never empty.
    pub frames: Vec<FrameRGBA>,
    /// Per-frame delay in milliseconds.
    pub delay_ms: u32,
}

impl RenderedEmotion {
    /// Stamp `text` along the bottom of every frame.
    pub fn with_label(self, text: &str) -> GlintResult<Self> {
        let frames = self
            .frames
            .iter()
            .map(|frame| {
                let mut canvas = PixelCanvas::from_frame(frame)?;
                draw_label(&mut canvas, text, WHITE);
                Ok(canvas.into_frame())
            })
            .collect::<GlintResult<Vec<_>>>()?;
        Ok(Self { frames, ..self })
    }
}

impl Style {
    /// The built-in programmatic style.
    pub fn builtin() -> Self {
        Self {
            name: DEFAULT_STYLE.to_owned(),
            kind: StyleKind::Programmatic,
            description: "Programmatic cartoon eyes with eyebrows".to_owned(),
            dir: None,
        }
    }

    /// Load a directory style, or `None` when `dir` holds no SVG or PNG assets.
    ///
    /// SVG assets take precedence when both kinds are present.
    pub fn from_dir(dir: &Path) -> GlintResult<Option<Self>> {
        let name = dir
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                GlintError::validation(format!("bad style dir '{}'", dir.display()))
            })?
            .to_owned();

        let kind = if !asset_stems(dir, "svg")?.is_empty() {
            StyleKind::Svg
        } else if !asset_stems(dir, "png")?.is_empty() {
            StyleKind::Image
        } else {
            return Ok(None);
        };

        let manifest_path = dir.join("style.json");
        let manifest = if manifest_path.is_file() {
            let raw = std::fs::read_to_string(&manifest_path)
                .with_context(|| format!("read '{}'", manifest_path.display()))?;
            serde_json::from_str::<StyleManifest>(&raw).map_err(|e| {
                GlintError::serde(format!("parse '{}': {e}", manifest_path.display()))
            })?
        } else {
            StyleManifest::default()
        };

        Ok(Some(Self {
            description: manifest
                .description
                .unwrap_or_else(|| format!("{} artwork in {}", kind.as_str(), dir.display())),
            name,
            kind,
            dir: Some(dir.to_path_buf()),
        }))
    }

    /// Emotion names this style has artwork for, sorted. Programmatic styles return none.
    pub fn emotions(&self) -> GlintResult<Vec<String>> {
        match (self.kind.extension(), &self.dir) {
            (Some(ext), Some(dir)) => asset_stems(dir, ext),
            _ => Ok(Vec::new()),
        }
    }

    /// Produce the frames for `emotion` in this style.
    ///
    /// SVG artwork goes through [`render_svg`], so animated artwork yields one frame per
    /// sample of `opts` and static artwork a single frame.
    pub fn render_emotion(
        &self,
        emotion: &EmotionConfig,
        opts: &FrameDriverOpts,
        rasterizer: &dyn Rasterizer,
    ) -> GlintResult<RenderedEmotion> {
        let single = |frame: FrameRGBA| RenderedEmotion {
            frames: vec![frame],
            delay_ms: STATIC_FRAME_DELAY_MS,
        };

        match self.kind {
            StyleKind::Programmatic => Ok(single(render_emotion_frame(emotion))),
            StyleKind::Svg => {
                let path = self.asset_path(emotion.name)?;
                let source = std::fs::read_to_string(&path)
                    .with_context(|| format!("read svg '{}'", path.display()))?;
                let frames = render_svg(&source, opts, rasterizer)?;
                if frames.is_empty() {
                    return Err(GlintError::animation(format!(
                        "animated svg '{}' produced no frames",
                        path.display()
                    )));
                }
                let delay_ms = if frames.len() > 1 {
                    opts.frame_delay_ms()
                } else {
                    STATIC_FRAME_DELAY_MS
                };
                Ok(RenderedEmotion { frames, delay_ms })
            }
            StyleKind::Image => {
                let path = self.asset_path(emotion.name)?;
                Ok(single(load_png_frame(&path)?))
            }
        }
    }

    fn asset_path(&self, emotion: &str) -> GlintResult<PathBuf> {
        let (Some(ext), Some(dir)) = (self.kind.extension(), &self.dir) else {
            return Err(GlintError::validation(format!(
                "style '{}' has no asset directory",
                self.name
            )));
        };
        let path = dir.join(format!("{emotion}.{ext}"));
        if !path.is_file() {
            return Err(GlintError::validation(format!(
                "no {ext} found for emotion '{emotion}' in style '{}'",
                self.name
            )));
        }
        Ok(path)
    }
}

/// Decode a PNG and stretch it to the display size.
pub fn load_png_frame(path: &Path) -> GlintResult<FrameRGBA> {
    let img = image::open(path)
        .with_context(|| format!("decode image '{}'", path.display()))?
        .to_rgba8();
    let img = if img.dimensions() == (WIDTH, HEIGHT) {
        img
    } else {
        image::imageops::resize(&img, WIDTH, HEIGHT, image::imageops::FilterType::Lanczos3)
    };
    Ok(FrameRGBA {
        width: WIDTH,
        height: HEIGHT,
        data: img.into_raw(),
        premultiplied: false,
    })
}

/// Built-in style plus every asset directory under a styles root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleCatalog {
    styles: Vec<Style>,
}

impl StyleCatalog {
    /// Scan `root` (if any) for style directories. A missing root is not an error.
    ///
    /// Directory styles are sorted by name; one named `default` is shadowed by the built-in.
    pub fn discover(root: Option<&Path>) -> GlintResult<Self> {
        let mut styles = vec![Style::builtin()];
        let Some(root) = root.filter(|r| r.is_dir()) else {
            return Ok(Self { styles });
        };

        let mut dirs = std::fs::read_dir(root)
            .with_context(|| format!("read styles dir '{}'", root.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_dir())
            .collect::<Vec<_>>();
        dirs.sort();

        for dir in dirs {
            match Style::from_dir(&dir)? {
                Some(style) if style.name == DEFAULT_STYLE => {
                    tracing::warn!(dir = %dir.display(), "style dir shadowed by built-in style");
                }
                Some(style) => styles.push(style),
                None => tracing::debug!(dir = %dir.display(), "no svg or png assets, skipping"),
            }
        }
        Ok(Self { styles })
    }

    /// All styles, built-in first.
    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    /// Look up a style by name.
    pub fn get(&self, name: &str) -> GlintResult<&Style> {
        self.styles.iter().find(|s| s.name == name).ok_or_else(|| {
            let names = self
                .styles
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>();
            GlintError::validation(format!(
                "unknown style '{name}'; available: {}",
                names.join(", ")
            ))
        })
    }
}

/// Sorted file stems in `dir` with extension `ext`.
pub(crate) fn asset_stems(dir: &Path, ext: &str) -> GlintResult<Vec<String>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read style dir '{}'", dir.display()))?;
    let mut stems = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some(ext))
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(str::to_owned))
        .collect::<Vec<_>>();
    stems.sort();
    Ok(stems)
}

#[cfg(test)]
#[path = "../../tests/unit/style/catalog.rs"]
mod tests;
