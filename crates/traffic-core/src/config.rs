use crate::args::LaunchParameters;
use url::Url;

/// URL loaded when no `url` flag (or an empty one) was supplied
pub const DEFAULT_URL: &str = "http://www.google.com";

/// Launch parameters after defaults have been applied
///
/// `url` is never empty. `title` has no fallback and stays absent when the
/// flag was not given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    url: String,
    title: Option<String>,
}

impl ResolvedConfig {
    /// Apply defaults to raw launch parameters
    pub fn resolve(params: LaunchParameters) -> Self {
        let url = match params.url {
            Some(url) if !url.is_empty() => url,
            _ => {
                tracing::debug!("No url given, falling back to {}", DEFAULT_URL);
                DEFAULT_URL.to_string()
            }
        };

        // Passed through untouched, the browser decides what a relative
        // or schemeless value means
        if Url::parse(&url).is_err() {
            tracing::warn!("Launch url is not an absolute URL: {}", url);
        }

        Self {
            url,
            title: params.title,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Title to write onto the host window; empty when none was given
    pub fn window_title(&self) -> &str {
        self.title().unwrap_or_default()
    }
}
