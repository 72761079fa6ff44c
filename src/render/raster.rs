use std::path::PathBuf;

use crate::foundation::{
    core::FrameRGBA,
    error::{GlintError, GlintResult},
};

// Avoid pathological allocations from a bad width/height request.
const MAX_DIM: u32 = 16_384;

/// Turns static SVG markup into pixels.
///
/// `Sync` so the frame driver can share one rasterizer across worker threads.
pub trait Rasterizer: Sync {
    /// Rasterize `markup` stretched to exactly `width x height`.
    fn render(&self, markup: &str, width: u32, height: u32) -> GlintResult<FrameRGBA>;
}

/// CPU rasterizer backed by `usvg` + `resvg`. Output is premultiplied RGBA8.
#[derive(Clone, Debug, Default)]
pub struct ResvgRasterizer {
    /// Directory used to resolve relative `href`s inside the markup.
    pub resources_dir: Option<PathBuf>,
}

impl ResvgRasterizer {
    /// Rasterizer with no resources directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative `href`s against `dir`.
    pub fn with_resources_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            resources_dir: Some(dir.into()),
        }
    }

    fn parse(&self, markup: &str) -> GlintResult<usvg::Tree> {
        let opts = usvg::Options {
            resources_dir: self.resources_dir.clone(),
            ..usvg::Options::default()
        };
        usvg::Tree::from_str(markup, &opts)
            .map_err(|e| GlintError::render(format!("parse svg tree: {e}")))
    }
}

impl Rasterizer for ResvgRasterizer {
    fn render(&self, markup: &str, width: u32, height: u32) -> GlintResult<FrameRGBA> {
        if width == 0 || height == 0 {
            return Err(GlintError::render(format!(
                "raster size must be non-zero, got {width}x{height}"
            )));
        }
        if width > MAX_DIM || height > MAX_DIM {
            return Err(GlintError::render(format!(
                "raster size too large: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
            )));
        }

        let tree = self.parse(markup)?;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| GlintError::render("failed to allocate svg pixmap"))?;

        let sx = (width as f32) / tree.size().width();
        let sy = (height as f32) / tree.size().height();
        let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

        resvg::render(&tree, xform, &mut pixmap.as_mut());
        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.take(),
            premultiplied: true,
        })
    }
}
