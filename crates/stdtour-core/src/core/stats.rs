//! Descriptive statistics: mean, median and sample variance

use crate::error::StatsError;
use serde::{Deserialize, Serialize};

/// Mean, median and sample variance of a data set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub mean: f64,
    pub median: f64,
    pub variance: f64,
}

impl Statistics {
    /// Value substituted when a calculation fails
    pub const ZERO: Statistics = Statistics {
        mean: 0.0,
        median: 0.0,
        variance: 0.0,
    };
}

impl Default for Statistics {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Magnitude above which values are rescaled by a power of two before summing
const RESCALE_ABOVE: f64 = 1e150;

/// Compute mean, median and sample variance (divisor n - 1)
///
/// Fails on empty input, on a single value (sample variance is undefined),
/// on NaN or infinite values, and when the variance of finite values does
/// not fit in an `f64`.
pub fn calculate_statistics(data: &[f64]) -> Result<Statistics, StatsError> {
    if data.is_empty() {
        return Err(StatsError::Empty);
    }
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(StatsError::NonFinite { index });
    }
    if data.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            actual: data.len(),
        });
    }

    // Power-of-two scaling is exact, so ordinary inputs keep their precision
    let scale = rescale_factor(data);
    let n = data.len() as f64;
    let scaled_mean = data
        .iter()
        .enumerate()
        .fold(0.0, |mean, (i, v)| mean + (v / scale - mean) / (i + 1) as f64);
    let scaled_variance = data
        .iter()
        .map(|v| (v / scale - scaled_mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);

    let mean = scaled_mean * scale;
    let variance = scaled_variance * scale * scale;
    if !variance.is_finite() {
        return Err(StatsError::Overflow);
    }

    Ok(Statistics {
        mean,
        median: median(data),
        variance,
    })
}

fn rescale_factor(data: &[f64]) -> f64 {
    let largest = data.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    if largest > RESCALE_ABOVE {
        let exponent = ((largest.to_bits() >> 52) & 0x7ff) as i32 - 1023;
        2.0_f64.powi(exponent)
    } else {
        1.0
    }
}

fn median(data: &[f64]) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
    } else {
        sorted[mid]
    }
}

/// Parse textual values into numbers, rejecting the first non-numeric one
pub fn parse_values<S: AsRef<str>>(values: &[S]) -> Result<Vec<f64>, StatsError> {
    values
        .iter()
        .map(|raw| {
            let raw = raw.as_ref().trim();
            raw.parse::<f64>().map_err(|_| StatsError::NotNumeric {
                value: raw.to_string(),
            })
        })
        .collect()
}
