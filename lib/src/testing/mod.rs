pub mod config;
pub mod entry;
pub mod harness;
pub mod lifecycle;
pub mod perf;
pub mod reporter;

pub use config::{loop_count_from_string, EnvSource, LoopConfig, ProcessEnv, LOOP_COUNT_DEFAULT};
pub use entry::{run, run_direct, run_perf, PERF_MODE};
pub use harness::Harness;
pub use lifecycle::{LoopLifecycle, RealLifecycle};
pub use perf::{CompletedLoop, InitializedLoop, LoopState, PerfLoop};
pub use reporter::Reporter;

/// Return a passing outcome.
///
/// # Example
/// ```ignore
/// if condition_met {
///     return pass!();
/// }
/// ```
#[macro_export]
macro_rules! pass {
    () => {
        $crate::Outcome::Pass
    };
}

/// Write a diagnostic through the harness, without a trailing newline.
#[macro_export]
macro_rules! report {
    ($harness:expr, $($arg:tt)*) => {
        $harness.report(::core::format_args!($($arg)*))
    };
}

/// Write a diagnostic and a newline, then terminate the runtime with `FAIL`.
/// Never returns.
///
/// # Example
/// ```ignore
/// if wide.len() != 4 {
///     fail!(harness, "ERROR: expected 4 units, got {}", wide.len());
/// }
/// ```
#[macro_export]
macro_rules! fail {
    ($harness:expr, $($arg:tt)*) => {
        $harness.fail(::core::format_args!($($arg)*))
    };
}
