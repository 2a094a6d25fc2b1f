//! palsuite harness contract types
//!
//! This crate holds the definitions shared between the harness library, the
//! host runtime and the test programs:
//! - `Outcome` and the `PASS`/`FAIL` exit codes
//! - `PalRuntime` / `CodePage`, the runtime collaborator contract
//! - `Lifecycle`, the initialize/terminate interface test logic calls
//! - the environment variable names the harness reads

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod outcome;
pub mod runtime_traits;

pub use outcome::*;
pub use runtime_traits::*;

/// Environment variable holding the perf-mode loop count.
pub const LOOP_COUNT_ENV: &str = "PALTEST_LOOP_COUNT";

/// Environment variable holding the harness log level.
pub const LOG_LEVEL_ENV: &str = "PALTEST_LOG_LEVEL";
