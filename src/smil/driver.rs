//! Sampling a document over time and rasterizing every sample.

use rayon::prelude::*;

use crate::{
    foundation::{
        core::{FrameRGBA, HEIGHT, WIDTH},
        error::{GlintError, GlintResult},
    },
    render::raster::Rasterizer,
    smil::apply::{apply_animations_at_time, is_animated},
};

/// Upper bound on `ceil(fps * duration_secs)`.
pub const MAX_FRAMES: usize = 10_000;

/// Sampling and output configuration for [`render_frames`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameDriverOpts {
    /// Samples per second. Must be finite and > 0.
    pub fps: f64,
    /// Total sampled span in seconds. Must be finite and >= 0.
    pub duration_secs: f64,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Render frames on a rayon pool instead of sequentially.
    pub parallel: bool,
    /// Worker count for parallel rendering (`None` = rayon default).
    pub threads: Option<usize>,
}

impl Default for FrameDriverOpts {
    fn default() -> Self {
        Self {
            fps: 15.0,
            duration_secs: 3.0,
            width: WIDTH,
            height: HEIGHT,
            parallel: false,
            threads: None,
        }
    }
}

/// One sampled point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameRequest {
    /// Position in the output sequence.
    pub index: usize,
    /// Query time, `index / fps`.
    pub time_secs: f64,
}

impl FrameDriverOpts {
    /// Check sampling parameters.
    pub fn validate(&self) -> GlintResult<()> {
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(GlintError::validation(format!(
                "fps must be finite and > 0, got {}",
                self.fps
            )));
        }
        if !(self.duration_secs.is_finite() && self.duration_secs >= 0.0) {
            return Err(GlintError::validation(format!(
                "duration must be finite and >= 0, got {}",
                self.duration_secs
            )));
        }
        let samples = (self.fps * self.duration_secs).ceil();
        if !(samples.is_finite() && samples <= MAX_FRAMES as f64) {
            return Err(GlintError::validation(format!(
                "fps x duration must yield at most {MAX_FRAMES} frames, got {} x {}",
                self.fps, self.duration_secs
            )));
        }
        if self.threads == Some(0) {
            return Err(GlintError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// `ceil(fps * duration)`. Only meaningful for options that pass [`Self::validate`].
    pub fn frame_count(&self) -> usize {
        (self.fps * self.duration_secs).ceil().max(0.0) as usize
    }

    /// The sampled times, in output order.
    pub fn frame_requests(&self) -> impl Iterator<Item = FrameRequest> + '_ {
        (0..self.frame_count()).map(move |index| FrameRequest {
            index,
            time_secs: index as f64 / self.fps,
        })
    }

    /// Per-frame display delay in milliseconds for encoders.
    pub fn frame_delay_ms(&self) -> u32 {
        (1000.0 / self.fps).round().clamp(1.0, f64::from(u32::MAX)) as u32
    }
}

/// Render an animated document into one frame per sampled time.
///
/// Every frame re-resolves `source` from scratch, so frames are independent and may be
/// rendered in parallel; the returned sequence is always ordered by frame index. A rasterizer
/// failure aborts the whole call with the lowest failing frame's error; no placeholder frame
/// is substituted.
#[tracing::instrument(skip(source, rasterizer))]
pub fn render_frames(
    source: &str,
    opts: &FrameDriverOpts,
    rasterizer: &dyn Rasterizer,
) -> GlintResult<Vec<FrameRGBA>> {
    opts.validate()?;

    let render_one = |req: FrameRequest| -> GlintResult<FrameRGBA> {
        let markup = apply_animations_at_time(source, req.time_secs)?;
        rasterizer.render(&markup, opts.width, opts.height)
    };

    if !opts.parallel {
        return opts.frame_requests().map(render_one).collect();
    }

    let requests = opts.frame_requests().collect::<Vec<_>>();
    let pool = build_thread_pool(opts.threads)?;
    let rendered = pool.install(|| {
        requests
            .into_par_iter()
            .map(render_one)
            .collect::<Vec<_>>()
    });
    // Report the earliest failing frame, independent of completion order.
    rendered.into_iter().collect()
}

/// Render a document that may or may not be animated.
///
/// Static documents take the cheap path: a single rasterization, no directive resolution.
pub fn render_svg(
    source: &str,
    opts: &FrameDriverOpts,
    rasterizer: &dyn Rasterizer,
) -> GlintResult<Vec<FrameRGBA>> {
    if is_animated(source) {
        render_frames(source, opts, rasterizer)
    } else {
        Ok(vec![rasterizer.render(source, opts.width, opts.height)?])
    }
}

fn build_thread_pool(threads: Option<usize>) -> GlintResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GlintError::animation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/smil/driver.rs"]
mod tests;
