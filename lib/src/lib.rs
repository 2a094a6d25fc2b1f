//! Shared scaffolding for palsuite test programs.
//!
//! Each test program is a body of the form
//! `fn(&Harness<'_>, &[String]) -> Outcome`. The harness supplies:
//! - `report!` / `fail!` diagnostics and the fail path
//! - narrow/wide conversion through the runtime's code page ([`encoding`])
//! - byte-order helpers ([`endian`])
//! - millisecond timestamps from the runtime's counter ([`clock`])
//! - the perf loop, which runs the body repeatedly between one real
//!   initialize and one real terminate ([`testing::perf`])

pub mod clock;
pub mod encoding;
pub mod endian;
pub mod error;
pub mod init_flag;
pub mod klog;
pub mod string;
pub mod testing;

#[cfg(test)]
mod mock;

pub use endian::{host_to_wire16, swap16_for_wire, swap_if_big_endian_32, BIG_ENDIAN_TARGET};
pub use error::{Direction, HarnessError, HarnessResult};
pub use init_flag::{InitFlag, StateFlag};
pub use klog::{klog_init, klog_init_from_env, klog_is_enabled, klog_set_level, KlogLevel};
pub use paltest_abi::{CodePage, Lifecycle, Outcome, PalRuntime, FAIL, LOOP_COUNT_ENV, PASS};
pub use string::{atoi, wide_len};
pub use testing::{Harness, LoopConfig, Reporter};
