//! Client for the Tidbyt device push API.

use std::time::Duration;

use reqwest::{Url, blocking::Client};
use serde::Serialize;

use crate::foundation::error::{GlintError, GlintResult};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.tidbyt.com";
/// Installation id used when none is configured.
pub const DEFAULT_INSTALLATION_ID: &str = "glint";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct PushPayload<'a> {
    image: &'a str,
    #[serde(rename = "installationID")]
    installation_id: &'a str,
    background: bool,
}

/// Authenticated push client.
#[derive(Clone, Debug)]
pub struct TidbytClient {
    token: String,
    base_url: String,
}

impl TidbytClient {
    /// Client for the production API.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }

    /// Point the client at another API root (a local test server, for instance).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// `{base}/v0/devices/{device_id}/push`, with the device id encoded as one path segment.
    pub fn push_url(&self, device_id: &str) -> GlintResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| GlintError::push(format!("invalid base url '{}': {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| GlintError::push(format!("base url '{}' cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(["v0", "devices", device_id, "push"]);
        Ok(url)
    }

    /// Show a base64 GIF on `device_id` immediately.
    #[tracing::instrument(skip(self, image_b64), fields(bytes = image_b64.len()))]
    pub fn push(&self, device_id: &str, image_b64: &str, installation_id: &str) -> GlintResult<()> {
        let url = self.push_url(device_id)?;
        let body = push_body(image_b64, installation_id)?;

        let client = Client::builder()
            .user_agent(concat!("glint/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GlintError::push(format!("build http client: {e}")))?;
        let resp = client
            .post(url)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .map_err(|e| GlintError::push(format!("request failed: {e}")))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_default();
            return Err(GlintError::push(format!("device push failed: {status} {text}")));
        }
        tracing::debug!(%status, "pushed");
        Ok(())
    }
}

fn push_body(image_b64: &str, installation_id: &str) -> GlintResult<String> {
    serde_json::to_string(&PushPayload {
        image: image_b64,
        installation_id,
        background: false,
    })
    .map_err(|e| GlintError::serde(format!("push payload: {e}")))
}
