//! Bounded byte fetch
//!
//! [`fetch_url_data`] validates the URL and delegates the transfer to a
//! [`ByteSource`]. Production code uses [`crate::api::client::HttpFetcher`].

use crate::error::NetError;
use crate::utils::validation::validate_url;
use async_trait::async_trait;

/// Something that can read the first bytes behind a URL
#[async_trait]
pub trait ByteSource: Send + Sync {
    /// Read at most `byte_count` bytes of the resource body
    async fn fetch_bytes(&self, url: &str, byte_count: usize) -> Result<Vec<u8>, NetError>;
}

/// Fetch at most `byte_count` bytes from `url`
///
/// Returns fewer bytes when the resource is shorter. No retries.
pub async fn fetch_url_data<S>(source: &S, url: &str, byte_count: usize) -> Result<Vec<u8>, NetError>
where
    S: ByteSource + ?Sized,
{
    validate_url(url)?;

    let mut data = source.fetch_bytes(url, byte_count).await?;
    data.truncate(byte_count);

    log::debug!("Fetched {} of {} requested bytes from {}", data.len(), byte_count, url);
    Ok(data)
}
