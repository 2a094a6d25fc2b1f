//! Harness error kinds. Every one of them is fatal to the test process.

use std::collections::TryReserveError;

pub type HarnessResult<T> = Result<T, HarnessError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
    #[error("Unable to allocate memory!")]
    AllocationFailed,
    #[error("Unable to query the size of the {direction} conversion!")]
    ConversionSizeQuery { direction: Direction },
    #[error("{direction} conversion wrote {written} units, expected {expected}!")]
    ConversionFill {
        direction: Direction,
        expected: usize,
        written: usize,
    },
    #[error("Unable to query performance counter!")]
    CounterUnavailable,
    #[error("Unable to query performance frequency!")]
    FrequencyUnavailable,
    #[error("Calibration frequency {frequency} is below one tick per millisecond!")]
    FrequencyTooLow { frequency: u64 },
}

impl From<TryReserveError> for HarnessError {
    fn from(_: TryReserveError) -> Self {
        Self::AllocationFailed
    }
}

/// Which way a conversion was going when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NarrowToWide,
    WideToNarrow,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::NarrowToWide => "narrow-to-wide",
            Direction::WideToNarrow => "wide-to-narrow",
        })
    }
}
