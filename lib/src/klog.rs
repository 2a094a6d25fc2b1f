//! Leveled harness log.
//!
//! Harness-internal diagnostics go to stderr so that stdout stays the test
//! program's own diagnostic channel.

use std::fmt;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU8, Ordering};

use paltest_abi::LOG_LEVEL_ENV;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum KlogLevel {
    Error = 0,
    Warn = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

impl KlogLevel {
    fn tag(self) -> &'static str {
        match self {
            KlogLevel::Error => "error",
            KlogLevel::Warn => "warn",
            KlogLevel::Info => "info",
            KlogLevel::Debug => "debug",
            KlogLevel::Trace => "trace",
        }
    }
}

pub const KLOG_DEFAULT_LEVEL: KlogLevel = KlogLevel::Info;

static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(KLOG_DEFAULT_LEVEL as u8);

#[inline(always)]
fn is_enabled(level: KlogLevel) -> bool {
    level as u8 <= CURRENT_LEVEL.load(Ordering::Relaxed)
}

/// Parse a level name, case-insensitively. Unknown names yield `None`.
pub fn level_from_string(value: &str) -> Option<KlogLevel> {
    let value = value.trim();
    [
        KlogLevel::Error,
        KlogLevel::Warn,
        KlogLevel::Info,
        KlogLevel::Debug,
        KlogLevel::Trace,
    ]
    .into_iter()
    .find(|level| value.eq_ignore_ascii_case(level.tag()))
}

pub fn log_args(level: KlogLevel, args: fmt::Arguments<'_>) {
    if !is_enabled(level) {
        return;
    }
    let mut err = io::stderr().lock();
    let _ = write!(err, "[paltest {}] ", level.tag());
    let _ = err.write_fmt(args);
    let _ = err.write_all(b"\n");
}

pub fn klog_init() {
    CURRENT_LEVEL.store(KLOG_DEFAULT_LEVEL as u8, Ordering::Relaxed);
}

/// Reset the level, then apply `PALTEST_LOG_LEVEL` if it names a level.
pub fn klog_init_from_env() {
    klog_init();
    let Ok(value) = std::env::var(LOG_LEVEL_ENV) else {
        return;
    };
    match level_from_string(&value) {
        Some(level) => klog_set_level(level),
        None => log_args(
            KlogLevel::Warn,
            format_args!("ignoring unknown {LOG_LEVEL_ENV} value {value:?}"),
        ),
    }
}

pub fn klog_set_level(level: KlogLevel) {
    CURRENT_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn klog_is_enabled(level: KlogLevel) -> bool {
    is_enabled(level)
}

#[macro_export]
macro_rules! klog_error {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Error, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_warn {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Warn, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_debug {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Debug, ::core::format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! klog_trace {
    ($($arg:tt)*) => {
        $crate::klog::log_args($crate::klog::KlogLevel::Trace, ::core::format_args!($($arg)*))
    };
}
