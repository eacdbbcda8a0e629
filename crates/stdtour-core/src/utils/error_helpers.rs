use crate::error::NetError;
use crate::utils::logging::log_error;
use std::fmt::Display;

/// Helper functions for standardizing error conversions and reporting.
/// Convert reqwest errors to NetError with URL context
pub fn convert_request_error(error: reqwest::Error, url: &str) -> NetError {
    if let Some(status) = error.status() {
        return NetError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        };
    }

    let message = if error.is_timeout() {
        format!("timed out: {}", error)
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    };

    NetError::Request {
        url: url.to_string(),
        message,
    }
}

/// Report a failure on stderr and substitute `fallback`
///
/// Keeps the "print and carry on" behaviour at the edge while library
/// functions return `Result`.
pub fn report_or<T, E: Display>(result: Result<T, E>, context: &str, fallback: T) -> T {
    match result {
        Ok(value) => value,
        Err(error) => {
            log_error(&format!("{}: {}", context, error));
            fallback
        }
    }
}

/// Like [`report_or`] with the type's default as the fallback
pub fn report_or_default<T: Default, E: Display>(result: Result<T, E>, context: &str) -> T {
    report_or(result, context, T::default())
}

/// Helper macro for mapping reqwest errors with URL context
#[macro_export]
macro_rules! map_request_error {
    ($result:expr, $url:expr) => {
        $result.map_err(|e| $crate::utils::error_helpers::convert_request_error(e, $url))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::{Statistics, calculate_statistics};
    use crate::error::StatsError;

    #[test]
    fn test_report_or_passes_success_through() {
        let value = report_or(Ok::<i32, StatsError>(7), "computing", 0);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_report_or_substitutes_sentinel() {
        let stats = report_or(
            calculate_statistics(&[]),
            "calculating statistics",
            Statistics::ZERO,
        );
        assert_eq!(stats, Statistics::ZERO);
    }

    #[test]
    fn test_report_or_default() {
        let bytes: Vec<u8> = report_or_default(Err::<Vec<u8>, _>("unreachable"), "fetching");
        assert!(bytes.is_empty());

        let name: String = report_or_default(Err::<String, _>("no cwd"), "getting directory");
        assert_eq!(name, "");
    }
}
