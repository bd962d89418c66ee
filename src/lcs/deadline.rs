use alloc::sync::Arc;
use core::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
};
#[cfg(feature = "std")]
use std::time::{Duration, Instant};

/// An error returned when a computation was stopped by its [`Deadline`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("longest common subsequence computation cancelled")
    }
}

impl core::error::Error for Cancelled {}

/// A cooperative cancellation signal handed to the engine by its caller.
///
/// A deadline expires once its instant has passed or once its cancel flag has been raised,
/// whichever happens first. The engine only looks at it between rows of work, so a computation
/// notices cancellation shortly after, not immediately.
///
/// ```
/// use std::sync::{Arc, atomic::{AtomicBool, Ordering}};
/// use subseq::Deadline;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let deadline = Deadline::never().with_cancel_flag(flag.clone());
/// assert!(!deadline.is_expired());
///
/// flag.store(true, Ordering::Relaxed);
/// assert!(deadline.is_expired());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deadline {
    #[cfg(feature = "std")]
    at: Option<Instant>,
    flag: Option<Arc<AtomicBool>>,
}

impl Deadline {
    /// A deadline which never expires on its own
    pub fn never() -> Self {
        Self::default()
    }

    /// Expire at `instant`
    #[cfg(feature = "std")]
    pub fn at(instant: Instant) -> Self {
        Self {
            at: Some(instant),
            flag: None,
        }
    }

    /// Expire once `timeout` has elapsed from now
    ///
    /// A timeout too large to be represented never expires.
    #[cfg(feature = "std")]
    pub fn after(timeout: Duration) -> Self {
        Self {
            at: Instant::now().checked_add(timeout),
            flag: None,
        }
    }

    /// Also expire once `flag` is set to `true`
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn is_expired(&self) -> bool {
        if let Some(flag) = &self.flag {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }

        #[cfg(feature = "std")]
        if let Some(at) = self.at {
            return Instant::now() >= at;
        }

        false
    }

    pub(crate) fn check(&self) -> Result<(), Cancelled> {
        if self.is_expired() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
