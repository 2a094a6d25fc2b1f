//! Perf-mode driver: one real initialize, N test-body runs, one real terminate.
//!
//! The stages are separate types so the order cannot be broken:
//!
//! ```text
//! PerfLoop (Idle) --initialize--> InitializedLoop --run--> CompletedLoop --terminate--> exit
//! ```
//!
//! While the body runs it only sees a [`LoopLifecycle`], so its own
//! initialize/terminate calls never reach the runtime.

use core::ffi::c_int;

use paltest_abi::{Outcome, PalRuntime};

use crate::clock;
use crate::klog::{klog_is_enabled, KlogLevel};
use crate::testing::{Harness, LoopConfig, LoopLifecycle, Reporter};
use crate::{klog_debug, klog_trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Initialized,
    Looping,
    Terminated,
}

pub struct PerfLoop<'r> {
    runtime: &'r dyn PalRuntime,
}

impl<'r> PerfLoop<'r> {
    pub fn new(runtime: &'r dyn PalRuntime) -> Self {
        Self { runtime }
    }

    pub const fn state(&self) -> LoopState {
        LoopState::Idle
    }

    /// Call the runtime's real initialize and capture its result for the stub.
    ///
    /// A failing result is not acted on here; the test body sees it from its
    /// own (redirected) initialize call and decides.
    pub fn initialize(self, args: &[String]) -> InitializedLoop<'r> {
        let init_result = self.runtime.initialize(args);
        klog_debug!("perf loop: runtime initialized with result {}", init_result);
        InitializedLoop {
            runtime: self.runtime,
            stub: LoopLifecycle::new(init_result),
        }
    }
}

pub struct InitializedLoop<'r> {
    runtime: &'r dyn PalRuntime,
    stub: LoopLifecycle,
}

impl<'r> InitializedLoop<'r> {
    pub const fn state(&self) -> LoopState {
        LoopState::Initialized
    }

    pub const fn init_result(&self) -> c_int {
        self.stub.init_result()
    }

    /// Run `body` `config.count()` times in sequence. Only the last outcome is kept.
    pub fn run<F>(
        self,
        config: LoopConfig,
        args: &[String],
        reporter: Reporter,
        mut body: F,
    ) -> CompletedLoop<'r>
    where
        F: FnMut(&Harness<'_>, &[String]) -> Outcome,
    {
        let InitializedLoop { runtime, stub } = self;
        let harness = Harness::new(runtime, &stub, reporter);
        let iterations = config.count();
        klog_debug!("perf loop: running test body {} time(s)", iterations);

        let timed = klog_is_enabled(KlogLevel::Debug);
        let start = if timed {
            runtime.query_performance_counter()
        } else {
            None
        };

        let mut last = Outcome::Pass;
        for index in 0..iterations {
            last = body(&harness, args);
            klog_trace!("perf loop: iteration {} returned {:?}", index + 1, last);
        }
        harness.flush();

        if let Some(start) = start {
            log_loop_time(runtime, start, iterations);
        }

        CompletedLoop {
            runtime,
            last,
            iterations,
        }
    }
}

fn log_loop_time(runtime: &dyn PalRuntime, start: u64, iterations: u32) {
    let (Some(end), Some(frequency)) = (
        runtime.query_performance_counter(),
        runtime.query_performance_frequency(),
    ) else {
        return;
    };
    if let Ok(ms) = clock::measure_elapsed_ms(start, end, frequency) {
        klog_debug!("perf loop: {} iteration(s) took {} ms", iterations, ms);
    }
}

pub struct CompletedLoop<'r> {
    runtime: &'r dyn PalRuntime,
    last: Outcome,
    iterations: u32,
}

impl CompletedLoop<'_> {
    /// Every iteration has run; the real terminate is still pending.
    pub const fn state(&self) -> LoopState {
        LoopState::Looping
    }

    pub const fn last(&self) -> Outcome {
        self.last
    }

    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Call the runtime's real terminate with the last iteration's exit code.
    pub fn terminate(self) -> ! {
        klog_debug!(
            "perf loop: {:?} -> {:?}, exit code {}",
            self.state(),
            LoopState::Terminated,
            self.last.exit_code()
        );
        self.runtime.terminate(self.last.exit_code())
    }
}
