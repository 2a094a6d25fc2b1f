//! Diagnostic output and the fail path.

use std::fmt;
use std::io::{self, Write};

use paltest_abi::{PalRuntime, FAIL};
use spin::Mutex;

use crate::klog_debug;

/// Writes a test program's diagnostics, by default to stdout.
pub struct Reporter {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Reporter {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }

    /// Write formatted text as-is. Output errors are dropped.
    pub fn report(&self, args: fmt::Arguments<'_>) {
        let mut out = self.out.lock();
        let _ = out.write_fmt(args);
    }

    /// Write formatted text and a newline, then tear the runtime down with
    /// the failing exit code.
    pub fn fail(&self, runtime: &dyn PalRuntime, args: fmt::Arguments<'_>) -> ! {
        {
            let mut out = self.out.lock();
            let _ = out.write_fmt(args);
            let _ = out.write_all(b"\n");
            let _ = out.flush();
        }
        klog_debug!("fail path: terminating runtime with exit code {}", FAIL);
        runtime.terminate(FAIL)
    }

    pub fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::stdout()
    }
}
