use core::num::NonZeroU32;

use paltest_abi::LOOP_COUNT_ENV;

use crate::string;

/// Loop count used when the environment does not name a positive one.
pub const LOOP_COUNT_DEFAULT: NonZeroU32 = NonZeroU32::MIN;

/// Source of environment variables.
pub trait EnvSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment. Values that are not valid UTF-8 read as unset.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name)?.into_string().ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String>,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Number of times the perf loop runs a test body. Never below one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoopConfig {
    count: NonZeroU32,
}

impl LoopConfig {
    /// Zero clamps to one.
    pub const fn new(count: u32) -> Self {
        match NonZeroU32::new(count) {
            Some(count) => Self { count },
            None => Self {
                count: LOOP_COUNT_DEFAULT,
            },
        }
    }

    pub const fn count(self) -> u32 {
        self.count.get()
    }

    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(env: &dyn EnvSource) -> Self {
        match env.var(LOOP_COUNT_ENV) {
            Some(value) => Self::new(loop_count_from_string(&value)),
            None => Self::default(),
        }
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            count: LOOP_COUNT_DEFAULT,
        }
    }
}

/// Parse a loop count the way `atoi` would, clamping anything that is not a
/// positive `i32` to the default.
pub fn loop_count_from_string(value: &str) -> u32 {
    match string::atoi(value.as_bytes()) {
        Some(count) if count > 0 => count as u32,
        _ => LOOP_COUNT_DEFAULT.get(),
    }
}
