//! Checks a style directory before it is installed or published.

use std::path::Path;

use crate::{
    emotion::list_emotions,
    foundation::core::{HEIGHT, WIDTH},
    style::asset_stems,
};

/// Largest accepted SVG asset.
pub const MAX_SVG_BYTES: u64 = 100 * 1024;

const EXPECTED_EXTENSIONS: [&str; 5] = ["svg", "png", "json", "md", "gif"];

/// Outcome of [`validate_style_dir`]. Warnings never make a directory invalid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the style unusable.
    pub errors: Vec<String>,
    /// Suspicious but tolerated findings.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// `true` when no errors were found.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a directory of emotion artwork.
///
/// SVG artwork must contain an `<svg` tag and a `viewBox` and stay under [`MAX_SVG_BYTES`];
/// PNG artwork must match the display size exactly. Every built-in emotion needs an asset.
pub fn validate_style_dir(dir: &Path) -> ValidationReport {
    let mut report = ValidationReport::default();
    if !dir.is_dir() {
        report
            .errors
            .push(format!("directory does not exist: {}", dir.display()));
        return report;
    }

    let (svgs, pngs) = match (asset_stems(dir, "svg"), asset_stems(dir, "png")) {
        (Ok(svgs), Ok(pngs)) => (svgs, pngs),
        (Err(e), _) | (_, Err(e)) => {
            report.errors.push(e.to_string());
            return report;
        }
    };
    if svgs.is_empty() && pngs.is_empty() {
        report.errors.push("no SVG or PNG files found".to_owned());
        return report;
    }
    if !svgs.is_empty() && !pngs.is_empty() {
        report
            .warnings
            .push("both SVG and PNG files found; SVG takes precedence".to_owned());
    }

    let (stems, ext) = if svgs.is_empty() {
        (pngs, "png")
    } else {
        (svgs, "svg")
    };

    let missing = list_emotions()
        .into_iter()
        .filter(|e| !stems.iter().any(|s| s == e))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        report
            .errors
            .push(format!("missing emotions: {}", missing.join(", ")));
    }

    let mut wrong_size = Vec::new();
    for stem in &stems {
        let file = format!("{stem}.{ext}");
        let path = dir.join(&file);
        if ext == "svg" {
            if let Err(msg) = check_svg(&path) {
                report.errors.push(format!("{file}: {msg}"));
            }
            continue;
        }
        match image::image_dimensions(&path) {
            Ok((w, h)) if (w, h) != (WIDTH, HEIGHT) => {
                wrong_size.push(format!("{file} is {w}x{h}, expected {WIDTH}x{HEIGHT}"));
            }
            Ok(_) => {}
            Err(e) => report.errors.push(format!("could not read {file}: {e}")),
        }
    }
    if !wrong_size.is_empty() {
        report
            .errors
            .push(format!("wrong dimensions: {}", wrong_size.join("; ")));
    }

    let unexpected = unexpected_files(dir);
    if !unexpected.is_empty() {
        report
            .warnings
            .push(format!("unexpected files: {}", unexpected.join(", ")));
    }

    report
}

fn check_svg(path: &Path) -> Result<(), String> {
    let content = std::fs::read_to_string(path).map_err(|e| format!("could not read svg: {e}"))?;
    if !content.contains("<svg") {
        return Err("not a valid SVG file (missing <svg> tag)".to_owned());
    }
    let size = content.len() as u64;
    if size > MAX_SVG_BYTES {
        return Err(format!(
            "SVG too large: {:.1}KB > {}KB",
            size as f64 / 1024.0,
            MAX_SVG_BYTES / 1024
        ));
    }
    if !content.contains("viewBox") {
        return Err("SVG missing viewBox attribute (required for scaling)".to_owned());
    }
    Ok(())
}

fn unexpected_files(dir: &Path) -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut out = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().to_str().map(str::to_owned))
        .filter(|name| !name.starts_with('.'))
        .filter(|name| {
            let ext = Path::new(name).extension().and_then(|e| e.to_str());
            !ext.is_some_and(|ext| EXPECTED_EXTENSIONS.contains(&ext))
        })
        .collect::<Vec<_>>();
    out.sort();
    out
}

#[cfg(test)]
#[path = "../../tests/unit/style/validate.rs"]
mod tests;
