//! Recording runtime for unit tests.

use std::cell::{Cell, RefCell};
use std::panic::{self, AssertUnwindSafe};

use paltest_abi::{CodePage, PalRuntime};

/// Unwind payload standing in for process exit.
#[derive(Debug)]
pub(crate) struct Terminated(pub i32);

/// One byte per unit; wide units above 0xFF narrow to `?`.
pub(crate) struct Latin1;

impl CodePage for Latin1 {
    fn multi_byte_to_wide(&self, src: &[u8], dst: Option<&mut [u16]>) -> Option<usize> {
        let text = src.split(|&b| b == 0).next().unwrap_or(&[]);
        let units = text.len() + 1;
        let Some(dst) = dst else {
            return Some(units);
        };
        if dst.len() < units {
            return None;
        }
        for (out, &byte) in dst.iter_mut().zip(text) {
            *out = byte as u16;
        }
        dst[units - 1] = 0;
        Some(units)
    }

    fn wide_to_multi_byte(&self, src: &[u16], dst: Option<&mut [u8]>) -> Option<usize> {
        let text = src.split(|&u| u == 0).next().unwrap_or(&[]);
        let units = text.len() + 1;
        let Some(dst) = dst else {
            return Some(units);
        };
        if dst.len() < units {
            return None;
        }
        for (out, &unit) in dst.iter_mut().zip(text) {
            *out = u8::try_from(unit).unwrap_or(b'?');
        }
        dst[units - 1] = 0;
        Some(units)
    }
}

pub(crate) struct MockRuntime {
    init_result: i32,
    counter: Option<u64>,
    frequency: Option<u64>,
    conversion_size: Option<usize>,
    init_calls: Cell<u32>,
    terminate_calls: Cell<u32>,
    counter_queries: Cell<u32>,
    init_args: RefCell<Vec<String>>,
}

impl MockRuntime {
    pub(crate) fn new() -> Self {
        Self {
            init_result: 0,
            counter: Some(0),
            frequency: Some(1_000_000),
            conversion_size: None,
            init_calls: Cell::new(0),
            terminate_calls: Cell::new(0),
            counter_queries: Cell::new(0),
            init_args: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn with_init_result(mut self, result: i32) -> Self {
        self.init_result = result;
        self
    }

    pub(crate) fn with_counter(mut self, counter: Option<u64>) -> Self {
        self.counter = counter;
        self
    }

    pub(crate) fn with_frequency(mut self, frequency: Option<u64>) -> Self {
        self.frequency = frequency;
        self
    }

    /// Make every size query report `size` units instead of the real count.
    pub(crate) fn with_conversion_size(mut self, size: usize) -> Self {
        self.conversion_size = Some(size);
        self
    }

    pub(crate) fn init_calls(&self) -> u32 {
        self.init_calls.get()
    }

    pub(crate) fn terminate_calls(&self) -> u32 {
        self.terminate_calls.get()
    }

    pub(crate) fn counter_queries(&self) -> u32 {
        self.counter_queries.get()
    }

    pub(crate) fn init_args(&self) -> Vec<String> {
        self.init_args.borrow().clone()
    }
}

impl CodePage for MockRuntime {
    fn multi_byte_to_wide(&self, src: &[u8], dst: Option<&mut [u16]>) -> Option<usize> {
        match (self.conversion_size, dst) {
            (Some(size), None) => Some(size),
            (_, dst) => Latin1.multi_byte_to_wide(src, dst),
        }
    }

    fn wide_to_multi_byte(&self, src: &[u16], dst: Option<&mut [u8]>) -> Option<usize> {
        match (self.conversion_size, dst) {
            (Some(size), None) => Some(size),
            (_, dst) => Latin1.wide_to_multi_byte(src, dst),
        }
    }
}

impl PalRuntime for MockRuntime {
    fn initialize(&self, args: &[String]) -> i32 {
        self.init_calls.set(self.init_calls.get() + 1);
        *self.init_args.borrow_mut() = args.to_vec();
        self.init_result
    }

    fn terminate(&self, exit_code: i32) -> ! {
        self.terminate_calls.set(self.terminate_calls.get() + 1);
        panic::panic_any(Terminated(exit_code))
    }

    fn query_performance_counter(&self) -> Option<u64> {
        self.counter_queries.set(self.counter_queries.get() + 1);
        self.counter
    }

    fn query_performance_frequency(&self) -> Option<u64> {
        self.frequency
    }
}

/// Run `f`, which must end in `PalRuntime::terminate`, and return the exit code
/// it terminated with.
pub(crate) fn expect_terminate<F: FnOnce()>(f: F) -> i32 {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(()) => panic!("returned without terminating the runtime"),
        Err(payload) => match payload.downcast::<Terminated>() {
            Ok(terminated) => terminated.0,
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// `Write` sink whose contents outlive the harness that owns it.
#[derive(Clone, Default)]
pub(crate) struct Captured(std::sync::Arc<spin::Mutex<Vec<u8>>>);

impl Captured {
    pub(crate) fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl std::io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
