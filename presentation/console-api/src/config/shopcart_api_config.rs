use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use url::Url;

const DEFAULT_URL: &str = "http://localhost:8080";

/// Where the shopcart REST API lives.
#[derive(Debug, Clone)]
pub struct ShopcartApiConfig {
    pub base_url: Url,
    pub timeout: Option<Duration>,
}

impl ShopcartApiConfig {
    /// Environment variables:
    /// - SHOPCART_API_URL: base URL (default: "http://localhost:8080")
    /// - SHOPCART_API_TIMEOUT_SECS: request timeout in seconds (default: none)
    ///
    /// # Errors
    /// Returns error if either variable is set but cannot be parsed
    pub fn from_env() -> anyhow::Result<Self> {
        let url = env::var("SHOPCART_API_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let timeout = env::var("SHOPCART_API_TIMEOUT_SECS").ok();
        Self::parse(&url, timeout.as_deref())
    }

    fn parse(url: &str, timeout: Option<&str>) -> anyhow::Result<Self> {
        let base_url =
            Url::parse(url.trim()).with_context(|| format!("invalid SHOPCART_API_URL: {url}"))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            bail!("SHOPCART_API_URL must be an http(s) URL: {url}");
        }

        let timeout = match timeout.map(str::trim).filter(|t| !t.is_empty()) {
            Some(secs) => Some(Duration::from_secs(secs.parse::<u64>().with_context(
                || format!("invalid SHOPCART_API_TIMEOUT_SECS: {secs}"),
            )?)),
            None => None,
        };

        Ok(Self { base_url, timeout })
    }
}
