//! Atomic one-shot flags for runtime lifecycle bookkeeping.
//!
//! ```ignore
//! static RUNTIME_UP: InitFlag = InitFlag::new();
//!
//! fn initialize() -> i32 {
//!     if !RUNTIME_UP.init_once() {
//!         return 0; // already up
//!     }
//!     // ... bring the runtime up ...
//! }
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

/// "Has X been done?" Monotonic: once set, stays set.
#[repr(transparent)]
pub struct InitFlag {
    flag: AtomicBool,
}

impl InitFlag {
    #[inline]
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Returns `true` for the one call that flipped the flag.
    #[inline]
    pub fn init_once(&self) -> bool {
        !self.flag.swap(true, Ordering::SeqCst)
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}

impl Default for InitFlag {
    fn default() -> Self {
        Self::new()
    }
}

/// "Is X happening right now?" Used to catch re-entry into teardown.
#[repr(transparent)]
pub struct StateFlag {
    flag: AtomicBool,
}

impl StateFlag {
    #[inline]
    pub const fn new() -> Self {
        Self {
            flag: AtomicBool::new(false),
        }
    }

    /// Returns `true` if this call entered the state (it was inactive).
    #[inline]
    pub fn enter(&self) -> bool {
        !self.flag.swap(true, Ordering::SeqCst)
    }
}

impl Default for StateFlag {
    fn default() -> Self {
        Self::new()
    }
}
