//! Per-process context handed to every test body.
//!
//! A test body never talks to the runtime's lifecycle directly. It calls
//! [`Harness::initialize`] and [`Harness::terminate`], and the entry point
//! decides, once per process, whether those reach the runtime or the perf
//! loop's stub.

use core::ffi::c_int;
use std::ffi::CStr;
use std::fmt;

use paltest_abi::{Lifecycle, PalRuntime};

use crate::error::{HarnessError, HarnessResult};
use crate::testing::Reporter;
use crate::{clock, encoding, klog_error};

pub struct Harness<'a> {
    runtime: &'a dyn PalRuntime,
    lifecycle: &'a dyn Lifecycle,
    reporter: Reporter,
}

impl<'a> Harness<'a> {
    pub fn new(
        runtime: &'a dyn PalRuntime,
        lifecycle: &'a dyn Lifecycle,
        reporter: Reporter,
    ) -> Self {
        Self {
            runtime,
            lifecycle,
            reporter,
        }
    }

    pub fn initialize(&self, args: &[String]) -> c_int {
        self.lifecycle.initialize(args)
    }

    pub fn terminate(&self) {
        self.lifecycle.terminate();
    }

    pub fn report(&self, args: fmt::Arguments<'_>) {
        self.reporter.report(args);
    }

    /// Print the diagnostic and terminate the runtime with `FAIL`.
    ///
    /// This always reaches the real runtime, also from inside the perf loop.
    pub fn fail(&self, args: fmt::Arguments<'_>) -> ! {
        self.reporter.fail(self.runtime, args)
    }

    pub fn fatal(&self, err: HarnessError) -> ! {
        klog_error!("fatal harness error: {}", err);
        self.fail(format_args!("ERROR: {err}\n"))
    }

    /// Unwrap a harness result, taking the fail path on error.
    pub fn or_fatal<T>(&self, result: HarnessResult<T>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => self.fatal(err),
        }
    }

    pub fn to_wide(&self, narrow: &CStr) -> Vec<u16> {
        self.or_fatal(encoding::to_wide(self.runtime, narrow))
    }

    pub fn to_narrow(&self, wide: &[u16]) -> Vec<u8> {
        self.or_fatal(encoding::to_narrow(self.runtime, wide))
    }

    pub fn elapsed_millis(&self, frequency: u64) -> u64 {
        self.or_fatal(clock::elapsed_millis(self.runtime, frequency))
    }

    pub fn calibration_frequency(&self) -> u64 {
        self.or_fatal(clock::calibration_frequency(self.runtime))
    }

    pub fn flush(&self) {
        self.reporter.flush();
    }
}
