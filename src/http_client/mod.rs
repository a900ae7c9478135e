//! HTTP client used for the remote asset fallback.

mod response;

pub use response::HttpResponse;

use std::collections::HashMap;
use std::time::{Duration, Instant};

use reqwest::Client;

/// Default user agent for outbound requests.
pub const USER_AGENT: &str = "portfolio/0.1 (+https://github.com/Ahmer109/portfolio_web)";

/// Thin reqwest wrapper with a fixed timeout and request logging.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with a custom user agent (None uses the default).
    pub fn with_user_agent(
        timeout: Duration,
        user_agent: Option<&str>,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(user_agent.unwrap_or(USER_AGENT))
            .timeout(timeout)
            .connect_timeout(timeout)
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Make a GET request.
    pub async fn get(&self, url: &str) -> Result<HttpResponse, reqwest::Error> {
        let start = Instant::now();
        let response = self.client.get(url).send().await?;
        let duration = start.elapsed();

        tracing::debug!(
            "GET {} -> {} in {}ms",
            url,
            response.status().as_u16(),
            duration.as_millis()
        );

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                headers.insert(name.to_string(), v.to_string());
            }
        }

        Ok(HttpResponse {
            status: response.status(),
            headers,
            response,
        })
    }
}
