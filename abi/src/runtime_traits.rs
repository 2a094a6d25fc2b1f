//! Runtime collaborator interfaces consumed by the harness.
//!
//! These traits live in `abi` (no dependencies) so that:
//! - `paltest-lib` can drive any runtime through trait objects
//! - `paltest-host` can implement them on top of std
//! - unit tests can substitute a recording runtime

extern crate alloc;

use alloc::string::String;
use core::ffi::c_int;

/// Host narrow/wide conversion facility.
///
/// Both directions follow a two-call protocol. Called with `dst = None`, the
/// facility returns the number of units the converted text needs. Called with
/// a destination of at least that size, it fills it and returns the number of
/// units written. `None` reports failure (invalid input, destination too small).
///
/// The source is read up to its first NUL or its end, whichever comes first.
/// The output always carries exactly one terminating NUL, and the returned
/// counts include it.
pub trait CodePage {
    fn multi_byte_to_wide(&self, src: &[u8], dst: Option<&mut [u16]>) -> Option<usize>;

    fn wide_to_multi_byte(&self, src: &[u16], dst: Option<&mut [u8]>) -> Option<usize>;
}

/// Platform-abstraction runtime under test.
pub trait PalRuntime: CodePage {
    /// Bring the runtime up. Returns `0` on success, a runtime error code otherwise.
    fn initialize(&self, args: &[String]) -> c_int;

    /// Release runtime resources and exit the process with `exit_code`.
    fn terminate(&self, exit_code: c_int) -> !;

    /// Raw monotonic high-resolution counter, `None` if the query failed.
    fn query_performance_counter(&self) -> Option<u64>;

    /// Counter ticks per second, `None` if the query failed.
    fn query_performance_frequency(&self) -> Option<u64>;
}

/// Lifecycle calls as seen by test logic.
///
/// A test body only ever talks to this trait. The harness binds either the
/// real runtime or a loop-aware stub behind it, once per process.
pub trait Lifecycle {
    fn initialize(&self, args: &[String]) -> c_int;

    fn terminate(&self);
}
