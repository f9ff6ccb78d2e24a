use std::time::Duration;

use reqwest::Client;
use url::Url;

/// Shared HTTP client configuration for the shopcart REST API.
pub struct ShopcartApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ShopcartApiClient {
    /// `timeout` of `None` leaves requests to the network stack's defaults.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built (TLS backend setup).
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    /// Returns the shopcart collection URL.
    pub fn shopcarts_url(&self) -> Url {
        self.url_with(&["shopcarts"])
    }

    pub fn shopcart_url(&self, shopcart_id: &str) -> Url {
        self.url_with(&["shopcarts", shopcart_id])
    }

    pub fn items_url(&self, shopcart_id: &str) -> Url {
        self.url_with(&["shopcarts", shopcart_id, "items"])
    }

    pub fn item_url(&self, shopcart_id: &str, item_id: &str) -> Url {
        self.url_with(&["shopcarts", shopcart_id, "items", item_id])
    }

    /// Appends percent-encoded segments to the base URL's path.
    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
