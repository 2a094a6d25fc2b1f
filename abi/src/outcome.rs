//! Pass/fail outcome of a test program and its exit-code encoding.

use core::ffi::c_int;

/// Exit code of a passing test program.
pub const PASS: c_int = 0;

/// Exit code of a failing test program.
pub const FAIL: c_int = 1;

/// Generates `exit_code()`, `from_exit_code()`, `is_pass()` and `is_fail()` for
/// `#[repr(i32)]` outcome enums that follow the palsuite exit convention.
macro_rules! impl_exit_code {
    ($ty:ty, fallback: $fallback:ident, variants: { $($val:path => $variant:ident),* $(,)? }) => {
        impl $ty {
            /// Process exit code for this outcome.
            #[inline]
            pub const fn exit_code(self) -> c_int {
                self as c_int
            }

            /// Decode a process exit code. Anything unknown is a failure.
            #[inline]
            pub const fn from_exit_code(val: c_int) -> Self {
                match val {
                    $($val => Self::$variant,)*
                    _ => Self::$fallback,
                }
            }

            #[inline]
            pub const fn is_pass(self) -> bool {
                matches!(self, Self::Pass)
            }

            #[inline]
            pub const fn is_fail(self) -> bool {
                !self.is_pass()
            }
        }
    };
}

/// Result of one invocation of a test body.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Outcome {
    #[default]
    Pass = PASS,
    Fail = FAIL,
}

impl_exit_code!(Outcome, fallback: Fail, variants: {
    PASS => Pass,
    FAIL => Fail,
});

impl From<bool> for Outcome {
    /// `true` means the checked condition held.
    fn from(passed: bool) -> Self {
        if passed { Self::Pass } else { Self::Fail }
    }
}

impl From<c_int> for Outcome {
    fn from(val: c_int) -> Self {
        Self::from_exit_code(val)
    }
}

impl From<Outcome> for c_int {
    fn from(val: Outcome) -> Self {
        val.exit_code()
    }
}
