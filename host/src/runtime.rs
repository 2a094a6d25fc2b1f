use std::io::{self, Write};
use std::process;
use std::time::Instant;

use paltest_abi::{CodePage, PalRuntime};
use paltest_lib::{klog_debug, klog_warn, InitFlag, StateFlag};

use crate::code_page::Utf8CodePage;

/// Counter ticks per second: the counter reads in nanoseconds.
pub const COUNTER_FREQUENCY: u64 = 1_000_000_000;

static RUNTIME_UP: InitFlag = InitFlag::new();
static TEARDOWN_IN_PROGRESS: StateFlag = StateFlag::new();
static COUNTER_EPOCH: spin::Once<Instant> = spin::Once::new();

/// Runtime backed by the std library of the hosting process.
///
/// Process-wide: every instance shares the same lifecycle and counter epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostRuntime {
    code_page: Utf8CodePage,
}

impl HostRuntime {
    pub const fn new() -> Self {
        Self {
            code_page: Utf8CodePage,
        }
    }

    pub fn is_initialized(&self) -> bool {
        RUNTIME_UP.is_set()
    }
}

fn counter_epoch() -> &'static Instant {
    COUNTER_EPOCH.call_once(Instant::now)
}

impl CodePage for HostRuntime {
    fn multi_byte_to_wide(&self, src: &[u8], dst: Option<&mut [u16]>) -> Option<usize> {
        self.code_page.multi_byte_to_wide(src, dst)
    }

    fn wide_to_multi_byte(&self, src: &[u16], dst: Option<&mut [u8]>) -> Option<usize> {
        self.code_page.wide_to_multi_byte(src, dst)
    }
}

impl PalRuntime for HostRuntime {
    fn initialize(&self, args: &[String]) -> i32 {
        if RUNTIME_UP.init_once() {
            counter_epoch();
            klog_debug!("host runtime: initialized ({} argument(s))", args.len());
        } else {
            klog_debug!("host runtime: initialize called again, already up");
        }
        0
    }

    fn terminate(&self, exit_code: i32) -> ! {
        if !TEARDOWN_IN_PROGRESS.enter() {
            klog_warn!("host runtime: terminate re-entered, exiting with {}", exit_code);
            process::exit(exit_code);
        }
        if !self.is_initialized() {
            klog_debug!("host runtime: terminate without initialize");
        }
        let _ = io::stdout().flush();
        klog_debug!("host runtime: terminated, exit code {}", exit_code);
        process::exit(exit_code)
    }

    fn query_performance_counter(&self) -> Option<u64> {
        u64::try_from(counter_epoch().elapsed().as_nanos()).ok()
    }

    fn query_performance_frequency(&self) -> Option<u64> {
        Some(COUNTER_FREQUENCY)
    }
}
