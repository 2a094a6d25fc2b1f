//! High-precision timestamps from the runtime's performance counter.

use paltest_abi::PalRuntime;

use crate::error::{HarnessError, HarnessResult};

/// Convert raw counter ticks to milliseconds.
///
/// The frequency is reduced to ticks-per-millisecond first and the ticks are
/// divided by that, both with truncating integer division. This is not the
/// same as `ticks * 1000 / frequency` when `frequency` is not a multiple of
/// 1000, and callers compare against timings taken this way.
pub fn ticks_to_millis(ticks: u64, frequency: u64) -> HarnessResult<u64> {
    let ticks_per_ms = frequency / 1000;
    if ticks_per_ms == 0 {
        return Err(HarnessError::FrequencyTooLow { frequency });
    }
    Ok(ticks / ticks_per_ms)
}

/// Current counter value in milliseconds at the given calibration frequency.
pub fn elapsed_millis(runtime: &dyn PalRuntime, frequency: u64) -> HarnessResult<u64> {
    let ticks = runtime
        .query_performance_counter()
        .ok_or(HarnessError::CounterUnavailable)?;
    ticks_to_millis(ticks, frequency)
}

pub fn calibration_frequency(runtime: &dyn PalRuntime) -> HarnessResult<u64> {
    runtime
        .query_performance_frequency()
        .ok_or(HarnessError::FrequencyUnavailable)
}

/// Milliseconds between two raw counter readings.
#[inline]
pub fn measure_elapsed_ms(start: u64, end: u64, frequency: u64) -> HarnessResult<u64> {
    ticks_to_millis(end.wrapping_sub(start), frequency)
}
