use crate::foundation::error::{GlintError, GlintResult};

/// Face parameters for one named emotion. All factors are unit-less.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmotionConfig {
    /// Lower-case emotion name.
    pub name: &'static str,
    /// 0 = closed, 1 = fully open.
    pub eye_openness: f64,
    /// -1 = sad/worried (outer ends down) .. 1 = angry (inner ends down).
    pub eyebrow_angle: f64,
    /// 0..1 vertical eyebrow position, 0.5 = neutral.
    pub eyebrow_height: f64,
    /// 0..1 pupil size.
    pub pupil_size: f64,
}

const fn emotion(
    name: &'static str,
    eye_openness: f64,
    eyebrow_angle: f64,
    eyebrow_height: f64,
    pupil_size: f64,
) -> EmotionConfig {
    EmotionConfig {
        name,
        eye_openness,
        eyebrow_angle,
        eyebrow_height,
        pupil_size,
    }
}

/// Every built-in emotion, in display order.
pub const EMOTIONS: [EmotionConfig; 10] = [
    emotion("neutral", 0.7, 0.0, 0.5, 0.5),
    emotion("happy", 0.6, 0.3, 0.6, 0.6),
    emotion("sad", 0.5, -0.5, 0.4, 0.4),
    emotion("angry", 0.8, -0.8, 0.3, 0.3),
    emotion("surprised", 1.0, 0.8, 0.8, 0.7),
    emotion("worried", 0.6, -0.3, 0.6, 0.5),
    emotion("sleepy", 0.3, 0.0, 0.5, 0.4),
    emotion("excited", 0.9, 0.5, 0.7, 0.8),
    emotion("confused", 0.6, 0.2, 0.6, 0.5),
    emotion("focused", 0.7, -0.2, 0.4, 0.4),
];

/// Look up an emotion by name, ignoring case.
pub fn get_emotion(name: &str) -> GlintResult<&'static EmotionConfig> {
    let wanted = name.trim().to_lowercase();
    EMOTIONS.iter().find(|e| e.name == wanted).ok_or_else(|| {
        GlintError::validation(format!(
            "unknown emotion '{name}'; available: {}",
            list_emotions().join(", ")
        ))
    })
}

/// Names of all built-in emotions.
pub fn list_emotions() -> Vec<&'static str> {
    EMOTIONS.iter().map(|e| e.name).collect()
}
