use crate::core::fetch::ByteSource;
use crate::error::NetError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("stdtour/", env!("CARGO_PKG_VERSION"));

/// Reads the leading bytes of HTTP(S) resources
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Option<Duration>,
}

impl HttpFetcher {
    // No timeout: the transport default applies
    pub fn new() -> Result<Self, NetError> {
        Self::build(None)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, NetError> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self, NetError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| NetError::Request {
            url: "client_init".to_string(),
            message: format!("Failed to create HTTP client: {}", e),
        })?;

        Ok(HttpFetcher { client, timeout })
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

#[async_trait]
impl ByteSource for HttpFetcher {
    async fn fetch_bytes(&self, url: &str, byte_count: usize) -> Result<Vec<u8>, NetError> {
        let mut response = crate::map_request_error!(self.client.get(url).send().await, url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        // Read chunk by chunk and stop as soon as the limit is reached
        let mut body = Vec::with_capacity(byte_count.min(64 * 1024));
        while body.len() < byte_count {
            match crate::map_request_error!(response.chunk().await, url)? {
                Some(chunk) => {
                    let take = (byte_count - body.len()).min(chunk.len());
                    body.extend_from_slice(&chunk[..take]);
                }
                None => break,
            }
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetcher_creation() {
        let fetcher = HttpFetcher::new();
        assert!(fetcher.is_ok());
        if let Ok(fetcher) = fetcher {
            assert!(fetcher.timeout().is_none());
        }
    }

    #[test]
    fn test_fetcher_with_timeout() {
        let fetcher =
            HttpFetcher::with_timeout(Duration::from_secs(5)).expect("client creation failed");
        assert_eq!(fetcher.timeout(), Some(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let fetcher = HttpFetcher::with_timeout(Duration::from_secs(2)).expect("client creation failed");
        // Port 9 (discard) on localhost is closed in test environments
        let result = fetcher.fetch_bytes("http://127.0.0.1:9/", 10).await;
        assert!(matches!(result, Err(NetError::Request { .. })));
    }
}
