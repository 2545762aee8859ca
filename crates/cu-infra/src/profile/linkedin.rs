use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Url;
use tracing::debug;

use cu_core::ports::{ProfilePictureError, ProfilePicturePort};

/// Fetches a public profile page and reads its `og:image`.
///
/// Profile pages are not CORS-readable from a browser, so requests can be
/// routed through a proxy endpoint that takes the target as `?url=`.
pub struct HttpProfilePictureLookup {
    client: reqwest::Client,
    proxy_endpoint: Option<Url>,
}

impl HttpProfilePictureLookup {
    pub fn new(proxy_endpoint: Option<&str>, timeout: Duration) -> anyhow::Result<Self> {
        let proxy_endpoint = proxy_endpoint
            .map(|endpoint| {
                Url::parse(endpoint)
                    .with_context(|| format!("invalid profile picture proxy endpoint: {endpoint}"))
            })
            .transpose()?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build profile picture HTTP client")?;

        Ok(Self {
            client,
            proxy_endpoint,
        })
    }

    fn request_url(&self, profile_url: &str) -> Result<Url, ProfilePictureError> {
        let url = match &self.proxy_endpoint {
            Some(proxy) => Url::parse_with_params(proxy.as_str(), &[("url", profile_url)]),
            None => Url::parse(profile_url),
        };
        url.map_err(|err| ProfilePictureError::Http(format!("invalid request url: {err}")))
    }
}

#[async_trait]
impl ProfilePicturePort for HttpProfilePictureLookup {
    async fn lookup(&self, profile_url: &str) -> Result<Option<String>, ProfilePictureError> {
        let url = self.request_url(profile_url)?;
        debug!(host = url.host_str().unwrap_or_default(), "fetching profile page");

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProfilePictureError::Http(format!(
                "profile page returned {status}"
            )));
        }

        let body = response.text().await.map_err(map_reqwest_error)?;
        Ok(extract_og_image(&body))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> ProfilePictureError {
    if error.is_timeout() {
        ProfilePictureError::Timeout
    } else {
        ProfilePictureError::Http(error.to_string())
    }
}

static OG_IMAGE_RE: OnceLock<[Regex; 2]> = OnceLock::new();

fn og_image_patterns() -> &'static [Regex; 2] {
    OG_IMAGE_RE.get_or_init(|| {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .unwrap_or_else(|error| panic!("og:image regex failed to compile: {error}"))
        };
        [
            compile(
                r#"(?i)<meta[^>]*?property\s*=\s*["']og:image["'][^>]*?content\s*=\s*["']([^"']+)["']"#,
            ),
            compile(
                r#"(?i)<meta[^>]*?content\s*=\s*["']([^"']+)["'][^>]*?property\s*=\s*["']og:image["']"#,
            ),
        ]
    })
}

/// Pull the `og:image` URL out of an HTML document.
pub fn extract_og_image(html: &str) -> Option<String> {
    og_image_patterns()
        .iter()
        .find_map(|re| re.captures(html))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().replace("&amp;", "&"))
        .filter(|url| !url.is_empty())
}
