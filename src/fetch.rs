//! Fetching the ranking page over HTTP.
//!
//! A single blocking GET with a global timeout. There is no retry; callers that
//! want one wrap [`fetch_document`] themselves.

use std::time::Duration;

use url::Url;

use crate::error::{Result, ScrapeError};

/// Options for [`fetch_document`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOptions {
    /// Sent as the `User-Agent` header.
    ///
    /// Default: `"rankscrape/<version>"`
    pub user_agent: String,

    /// Upper bound for the whole request, connect to last body byte.
    ///
    /// Default: `30`
    pub timeout_secs: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            user_agent: concat!("rankscrape/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}

/// Downloads `url` and returns the response body as text.
///
/// # Errors
///
/// [`ScrapeError::InvalidUrl`] for URLs that don't parse or aren't http(s),
/// [`ScrapeError::HttpStatus`] for non-success responses and
/// [`ScrapeError::Fetch`] for transport or decoding failures.
pub fn fetch_document(url: &str, options: &FetchOptions) -> Result<String> {
    let parsed = validate_url(url)?;

    let agent = ureq::Agent::new_with_config(
        ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(options.timeout_secs)))
            .user_agent(options.user_agent.as_str())
            .http_status_as_error(false)
            .build(),
    );

    tracing::info!(url = parsed.as_str(), "fetching document");

    let response = agent
        .get(parsed.as_str())
        .call()
        .map_err(|e| ScrapeError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::HttpStatus {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| ScrapeError::Fetch {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    tracing::debug!(url = parsed.as_str(), bytes = body.len(), "fetched document");
    Ok(body)
}

fn validate_url(url: &str) -> Result<Url> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(parsed),
        _ => Err(ScrapeError::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https() {
        assert!(validate_url("http://www.imdb.com/chart/top").is_ok());
        assert!(validate_url("https://example.com/").is_ok());
    }

    #[test]
    fn rejects_other_schemes_and_garbage() {
        assert!(matches!(
            validate_url("ftp://example.com/top"),
            Err(ScrapeError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("not a url"),
            Err(ScrapeError::InvalidUrl(_))
        ));
    }

    #[test]
    fn invalid_url_fails_before_any_request() {
        let err = fetch_document("file:///etc/passwd", &FetchOptions::default()).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidUrl(_)));
    }

    #[test]
    fn default_user_agent_names_the_crate() {
        assert!(FetchOptions::default().user_agent.starts_with("rankscrape/"));
    }
}
