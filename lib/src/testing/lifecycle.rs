//! The two implementations test logic can see behind [`Lifecycle`].

use core::ffi::c_int;

use paltest_abi::{Lifecycle, PalRuntime, PASS};

use crate::klog_trace;

/// Forwards straight to the runtime. Used when a test program runs once.
pub struct RealLifecycle<'r> {
    runtime: &'r dyn PalRuntime,
}

impl<'r> RealLifecycle<'r> {
    pub fn new(runtime: &'r dyn PalRuntime) -> Self {
        Self { runtime }
    }
}

impl Lifecycle for RealLifecycle<'_> {
    fn initialize(&self, args: &[String]) -> c_int {
        self.runtime.initialize(args)
    }

    /// Tears the runtime down and exits with `PASS`.
    fn terminate(&self) {
        self.runtime.terminate(PASS)
    }
}

/// Loop-aware stub used while the perf loop owns the runtime.
///
/// `initialize` hands back the result the perf loop captured from its one
/// real call; `terminate` does nothing, the perf loop terminates after the
/// last iteration.
#[derive(Clone, Copy, Debug)]
pub struct LoopLifecycle {
    init_result: c_int,
}

impl LoopLifecycle {
    pub const fn new(init_result: c_int) -> Self {
        Self { init_result }
    }

    pub const fn init_result(&self) -> c_int {
        self.init_result
    }
}

impl Lifecycle for LoopLifecycle {
    fn initialize(&self, _args: &[String]) -> c_int {
        klog_trace!("perf loop: initialize redirected, returning {}", self.init_result);
        self.init_result
    }

    fn terminate(&self) {
        klog_trace!("perf loop: terminate redirected");
    }
}
