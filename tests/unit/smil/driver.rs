use std::sync::Mutex;

use super::*;

const SLIDE: &str = r#"<svg viewBox="0 0 64 32"><rect x="0" y="0" width="8" height="8"><animate attributeName="x" values="0;56" dur="1s" repeatCount="indefinite"/></rect></svg>"#;

/// Echoes the resolved markup back as the frame payload.
#[derive(Default)]
struct RecordingRasterizer {
    calls: Mutex<Vec<(String, u32, u32)>>,
    fail_on: Option<&'static str>,
    fail_from_x: Option<f64>,
}

fn resolved_x(markup: &str) -> Option<f64> {
    let rest = &markup[markup.find(r#" x=""#)? + 4..];
    rest[..rest.find('"')?].parse().ok()
}

impl Rasterizer for RecordingRasterizer {
    fn render(&self, markup: &str, width: u32, height: u32) -> GlintResult<FrameRGBA> {
        self.calls
            .lock()
            .unwrap()
            .push((markup.to_owned(), width, height));
        if let Some(needle) = self.fail_on
            && markup.contains(needle)
        {
            return Err(GlintError::render(format!("cannot draw {needle}")));
        }
        if let (Some(limit), Some(x)) = (self.fail_from_x, resolved_x(markup))
            && x >= limit
        {
            return Err(GlintError::render(format!("cannot draw x={x}")));
        }
        Ok(FrameRGBA {
            width,
            height,
            data: markup.as_bytes().to_vec(),
            premultiplied: true,
        })
    }
}

fn payload(frame: &FrameRGBA) -> &str {
    std::str::from_utf8(&frame.data).unwrap()
}

#[test]
fn two_fps_for_one_second_samples_zero_and_half() {
    let opts = FrameDriverOpts {
        fps: 2.0,
        duration_secs: 1.0,
        ..FrameDriverOpts::default()
    };
    let times: Vec<_> = opts.frame_requests().map(|r| r.time_secs).collect();
    assert_eq!(times, [0.0, 0.5]);

    let r = RecordingRasterizer::default();
    let frames = render_frames(SLIDE, &opts, &r).unwrap();
    assert_eq!(frames.len(), 2);
    assert!(payload(&frames[0]).contains(r#"x="0""#));
    assert!(payload(&frames[1]).contains(r#"x="28""#));
    for frame in &frames {
        assert!(!payload(frame).contains("<animate"));
    }
}

#[test]
fn defaults_match_the_display() {
    let opts = FrameDriverOpts::default();
    assert_eq!(opts.frame_count(), 45);
    assert_eq!(opts.frame_delay_ms(), 67);

    let r = RecordingRasterizer::default();
    let frames = render_frames(SLIDE, &opts, &r).unwrap();
    assert_eq!(frames.len(), 45);
    let calls = r.calls.lock().unwrap();
    assert!(calls.iter().all(|(_, w, h)| (*w, *h) == (64, 32)));
}

#[test]
fn frame_count_rounds_up() {
    let opts = FrameDriverOpts {
        fps: 4.0,
        duration_secs: 1.1,
        ..FrameDriverOpts::default()
    };
    assert_eq!(opts.frame_count(), 5);
    let zero = FrameDriverOpts {
        duration_secs: 0.0,
        ..FrameDriverOpts::default()
    };
    assert_eq!(zero.frame_count(), 0);
}

#[test]
fn rasterizer_failure_is_fatal() {
    let r = RecordingRasterizer {
        fail_on: Some(r#"x="28""#),
        ..RecordingRasterizer::default()
    };
    let opts = FrameDriverOpts {
        fps: 4.0,
        duration_secs: 1.0,
        ..FrameDriverOpts::default()
    };
    let err = render_frames(SLIDE, &opts, &r).unwrap_err();
    assert!(err.to_string().contains("cannot draw"));
    // Sequential rendering stops at the failing frame.
    assert_eq!(r.calls.lock().unwrap().len(), 3);
}

#[test]
fn parallel_output_matches_sequential_order() {
    let seq_opts = FrameDriverOpts {
        fps: 10.0,
        duration_secs: 2.0,
        ..FrameDriverOpts::default()
    };
    let par_opts = FrameDriverOpts {
        parallel: true,
        threads: Some(3),
        ..seq_opts.clone()
    };
    let seq = render_frames(SLIDE, &seq_opts, &RecordingRasterizer::default()).unwrap();
    let par = render_frames(SLIDE, &par_opts, &RecordingRasterizer::default()).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn parallel_failure_reports_lowest_frame() {
    // x = 0, 7, 14, .. 49; frames 4..=7 fail.
    let r = RecordingRasterizer {
        fail_from_x: Some(28.0),
        ..RecordingRasterizer::default()
    };
    let opts = FrameDriverOpts {
        fps: 8.0,
        duration_secs: 1.0,
        parallel: true,
        threads: Some(4),
        ..FrameDriverOpts::default()
    };
    for _ in 0..8 {
        let err = render_frames(SLIDE, &opts, &r).unwrap_err();
        assert!(err.to_string().contains("cannot draw x=28"), "{err}");
    }
    let sequential = FrameDriverOpts {
        parallel: false,
        ..opts.clone()
    };
    let err = render_frames(SLIDE, &sequential, &r).unwrap_err();
    assert!(err.to_string().contains("cannot draw x=28"), "{err}");
}

#[test]
fn static_documents_take_the_single_frame_path() {
    let src = r#"<svg viewBox="0 0 64 32"><rect width="8" height="8"/></svg>"#;
    let r = RecordingRasterizer::default();
    let frames = render_svg(src, &FrameDriverOpts::default(), &r).unwrap();
    assert_eq!(frames.len(), 1);
    let calls = r.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, src);
}

#[test]
fn animated_documents_take_the_driver_path() {
    let r = RecordingRasterizer::default();
    let frames = render_svg(SLIDE, &FrameDriverOpts::default(), &r).unwrap();
    assert_eq!(frames.len(), 45);
}

#[test]
fn invalid_options_are_rejected() {
    let r = RecordingRasterizer::default();
    for opts in [
        FrameDriverOpts {
            fps: 0.0,
            ..FrameDriverOpts::default()
        },
        FrameDriverOpts {
            fps: f64::NAN,
            ..FrameDriverOpts::default()
        },
        FrameDriverOpts {
            duration_secs: -1.0,
            ..FrameDriverOpts::default()
        },
        FrameDriverOpts {
            parallel: true,
            threads: Some(0),
            ..FrameDriverOpts::default()
        },
        FrameDriverOpts {
            fps: 1e30,
            parallel: true,
            ..FrameDriverOpts::default()
        },
        FrameDriverOpts {
            fps: f64::MAX,
            duration_secs: 10.0,
            ..FrameDriverOpts::default()
        },
    ] {
        let err = render_frames(SLIDE, &opts, &r).unwrap_err();
        assert!(err.to_string().contains("validation error:"));
    }
    assert!(r.calls.lock().unwrap().is_empty());
}

#[test]
fn frame_cap_is_inclusive() {
    let at_cap = FrameDriverOpts {
        fps: MAX_FRAMES as f64,
        duration_secs: 1.0,
        ..FrameDriverOpts::default()
    };
    assert!(at_cap.validate().is_ok());
    let over = FrameDriverOpts {
        duration_secs: 1.001,
        ..at_cap
    };
    let err = over.validate().unwrap_err();
    assert!(err.to_string().contains("at most 10000 frames"), "{err}");
}
