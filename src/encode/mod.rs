//! Output encodings for rendered frames.

pub mod gif;

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::GlintResult;

pub use gif::{encode_gif, encode_png, to_base64};

/// Create the parent directory of `path` if needed.
pub fn ensure_parent_dir(path: &Path) -> GlintResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
