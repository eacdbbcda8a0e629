//! Input validation for URLs and configuration values

use crate::error::NetError;
use reqwest::Url;

/// Validate that a URL is well formed and uses http or https
pub fn validate_url(url: &str) -> Result<(), NetError> {
    let invalid = |reason: &str| NetError::InvalidUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    if url.is_empty() {
        return Err(invalid("URL cannot be empty"));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(invalid("URL must start with http:// or https://"));
    }

    let parsed = Url::parse(url).map_err(|e| invalid(&e.to_string()))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(invalid("URL has no host"));
    }

    Ok(())
}

/// Validate a file-name suffix such as `.py`
pub fn validate_suffix(suffix: &str) -> Result<(), String> {
    if suffix.is_empty() {
        return Err("suffix cannot be empty".to_string());
    }
    if suffix.contains('/') || suffix.contains('\\') {
        return Err(format!("suffix '{}' must not contain path separators", suffix));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("https://www.example.com").is_ok());
        assert!(validate_url("http://www.example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("localhost:3000").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("http://").is_err());
    }

    #[test]
    fn test_validate_suffix() {
        assert!(validate_suffix(".py").is_ok());
        assert!(validate_suffix("rs").is_ok());
        assert!(validate_suffix("").is_err());
        assert!(validate_suffix("a/b").is_err());
    }
}
