//! Host side of the palsuite harness: a std-backed [`HostRuntime`] and the
//! `paltest_main!` macro that turns a test body into a program.
//!
//! ```ignore
//! use paltest_host::paltest_main;
//! use paltest_lib::{pass, Harness, Outcome};
//!
//! fn test_main(harness: &Harness<'_>, args: &[String]) -> Outcome {
//!     if harness.initialize(args) != 0 {
//!         return Outcome::Fail;
//!     }
//!     // ... checks ...
//!     harness.terminate();
//!     pass!()
//! }
//!
//! paltest_main!(my_test, test_main);
//! ```

pub mod code_page;
pub mod runtime;

pub use code_page::Utf8CodePage;
pub use runtime::{HostRuntime, COUNTER_FREQUENCY};

#[doc(hidden)]
pub use paste;

use paltest_lib::testing::{self, PERF_MODE};
use paltest_lib::{klog_debug, klog_init_from_env, Harness, Outcome};

/// Run a test program against the host runtime. Never returns.
pub fn run_test_program<F>(name: &str, body: F) -> !
where
    F: FnMut(&Harness<'_>, &[String]) -> Outcome,
{
    klog_init_from_env();
    let args: Vec<String> = std::env::args().collect();
    klog_debug!(
        "{}: starting ({} mode)",
        name,
        if PERF_MODE { "perf" } else { "direct" }
    );
    testing::run(&HostRuntime::new(), &args, body)
}

/// Declare a test program: `fn main` runs `$body` through the harness, in the
/// perf loop when built with the `perf` feature.
#[macro_export]
macro_rules! paltest_main {
    ($name:ident, $body:path) => {
        $crate::paste::paste! {
            pub const [<$name:upper _TEST_NAME>]: &str = stringify!($name);

            fn main() {
                $crate::run_test_program([<$name:upper _TEST_NAME>], $body)
            }
        }
    };
}
