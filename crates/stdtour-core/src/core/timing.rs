//! Repeated execution timing
//!
//! Work to be timed is supplied as a closure. The CLI picks closures by
//! name from the [`Snippet`] registry.

use crate::error::TimingError;
use std::convert::Infallible;
use std::fmt::Display;
use std::hint::black_box;
use std::time::Instant;

/// Run `snippet` `repetitions` times and return the total elapsed seconds
///
/// The first failing run stops the measurement.
pub fn measure_execution_time<F, E>(mut snippet: F, repetitions: u64) -> Result<f64, TimingError>
where
    F: FnMut() -> Result<(), E>,
    E: Display,
{
    let start = Instant::now();
    for iteration in 1..=repetitions {
        snippet().map_err(|e| TimingError::SnippetFailed {
            iteration,
            message: e.to_string(),
        })?;
    }
    let elapsed = start.elapsed().as_secs_f64();

    log::debug!("{} repetitions took {:.6}s", repetitions, elapsed);
    Ok(elapsed)
}

/// Built-in workloads for timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snippet {
    /// Squares of 0..1000 collected into a vector
    Squares,
    /// A single integer addition
    Add,
    /// Sum of 0..1000
    Sum,
    /// Sort 256 pseudo-random integers
    Sort,
}

impl Snippet {
    const ALL: [Snippet; 4] = [Snippet::Squares, Snippet::Add, Snippet::Sum, Snippet::Sort];

    pub fn from_name(name: &str) -> Result<Self, TimingError> {
        Self::ALL
            .into_iter()
            .find(|snippet| snippet.name() == name)
            .ok_or_else(|| TimingError::UnknownSnippet {
                name: name.to_string(),
            })
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Snippet::name).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Snippet::Squares => "squares",
            Snippet::Add => "add",
            Snippet::Sum => "sum",
            Snippet::Sort => "sort",
        }
    }

    /// Rust rendering of the workload, for display
    pub fn code(&self) -> &'static str {
        match self {
            Snippet::Squares => "(0..1000u64).map(|i| i * i).collect::<Vec<_>>()",
            Snippet::Add => "1 + 1",
            Snippet::Sum => "(0..1000u64).sum::<u64>()",
            Snippet::Sort => "lcg_values(256).sort_unstable()",
        }
    }

    pub fn run(&self) {
        match self {
            Snippet::Squares => {
                let squares: Vec<u64> = (0..black_box(1000u64)).map(|i| i * i).collect();
                black_box(squares);
            }
            Snippet::Add => {
                black_box(black_box(1u64) + black_box(1u64));
            }
            Snippet::Sum => {
                black_box((0..black_box(1000u64)).sum::<u64>());
            }
            Snippet::Sort => {
                let mut values = lcg_values(black_box(256));
                values.sort_unstable();
                black_box(values);
            }
        }
    }

    /// Time this snippet; built-in snippets cannot fail
    pub fn time(&self, repetitions: u64) -> Result<f64, TimingError> {
        measure_execution_time(
            || {
                self.run();
                Ok::<(), Infallible>(())
            },
            repetitions,
        )
    }
}

// Deterministic pseudo-random input for the sort workload
fn lcg_values(count: usize) -> Vec<u32> {
    let mut state: u32 = 0x2545_f491;
    (0..count)
        .map(|_| {
            state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            state
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_counts_every_repetition() {
        let mut runs = 0u64;
        let elapsed = measure_execution_time(
            || {
                runs += 1;
                Ok::<(), Infallible>(())
            },
            1000,
        )
        .expect("timing should succeed");
        assert_eq!(runs, 1000);
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_measure_zero_repetitions() {
        let elapsed = measure_execution_time(|| Err::<(), _>("never runs"), 0)
            .expect("nothing to run");
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_measure_stops_on_failure() {
        let mut runs = 0u64;
        let result = measure_execution_time(
            || {
                runs += 1;
                if runs == 3 { Err("boom") } else { Ok(()) }
            },
            10,
        );
        match result {
            Err(TimingError::SnippetFailed { iteration, message }) => {
                assert_eq!(iteration, 3);
                assert_eq!(message, "boom");
            }
            other => panic!("Expected SnippetFailed, got {:?}", other),
        }
        assert_eq!(runs, 3);
    }

    #[test]
    fn test_snippet_lookup() {
        assert_eq!(Snippet::from_name("squares").ok(), Some(Snippet::Squares));
        assert!(matches!(
            Snippet::from_name("x = 2 +"),
            Err(TimingError::UnknownSnippet { .. })
        ));
        assert_eq!(Snippet::names(), vec!["squares", "add", "sum", "sort"]);
    }

    #[test]
    fn test_every_snippet_times() {
        for name in Snippet::names() {
            let snippet = Snippet::from_name(name).expect("registered snippet");
            let elapsed = snippet.time(10).expect("built-in snippets cannot fail");
            assert!(elapsed >= 0.0);
        }
    }

    #[test]
    fn test_lcg_values_deterministic() {
        assert_eq!(lcg_values(8), lcg_values(8));
        assert_eq!(lcg_values(8).len(), 8);
    }
}
