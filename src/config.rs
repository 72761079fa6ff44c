//! User configuration from `~/.config/glint/config.json`.
//!
//! Values resolve in a fixed order: explicit flag, then config file, then environment, then a
//! built-in fallback.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Environment variable holding the display API token.
pub const ENV_TOKEN: &str = "TIDBYT_TOKEN";
/// Environment variable holding the target device id.
pub const ENV_DEVICE_ID: &str = "TIDBYT_DEVICE_ID";
/// Environment variable naming the default style.
pub const ENV_STYLE: &str = "GLINT_STYLE";

const CONFIG_DIR: [&str; 2] = [".config", "glint"];
const CONFIG_FILE: &str = "config.json";

/// Persisted defaults. Every field is optional and unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GlintConfig {
    /// Display API token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Target device id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Default style name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Installation slot on the device.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub installation_id: Option<String>,
    /// Root directory of style sub-directories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles_dir: Option<PathBuf>,
}

impl GlintConfig {
    /// Load from [`default_config_path`], or defaults when there is no home directory.
    pub fn load() -> Self {
        match default_config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`. A missing file yields defaults silently; an unreadable or malformed
    /// one yields defaults with a warning.
    pub fn load_from(path: &Path) -> Self {
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(error) => {
                if error.kind() != std::io::ErrorKind::NotFound {
                    warn!(?error, ?path, "could not read config, using defaults");
                }
                return Self::default();
            }
        };
        match serde_json::from_slice(&data) {
            Ok(cfg) => cfg,
            Err(error) => {
                warn!(?error, ?path, "could not parse config, using defaults");
                Self::default()
            }
        }
    }

    /// Styles root: the configured directory or `~/.config/glint/styles`.
    pub fn styles_dir(&self) -> Option<PathBuf> {
        self.styles_dir.clone().or_else(default_styles_dir)
    }
}

/// `~/.config/glint`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| CONFIG_DIR.iter().fold(home, |p, seg| p.join(seg)))
}

/// `~/.config/glint/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    default_config_dir().map(|d| d.join(CONFIG_FILE))
}

/// `~/.config/glint/styles`.
pub fn default_styles_dir() -> Option<PathBuf> {
    default_config_dir().map(|d| d.join("styles"))
}

/// First non-empty of `explicit`, `from_config`, the environment variable `env_var`, and
/// `fallback`.
pub fn resolve(
    explicit: Option<&str>,
    from_config: Option<&str>,
    env_var: Option<&str>,
    fallback: Option<&str>,
) -> Option<String> {
    let from_env = env_var.and_then(|name| std::env::var(name).ok());
    first_non_empty([explicit, from_config, from_env.as_deref(), fallback])
}

fn first_non_empty<const N: usize>(candidates: [Option<&str>; N]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|v| !v.is_empty())
        .map(str::to_owned)
}
