//! Recompute scheduling: typed triggers and debounce coalescing.
//!
//! Layout passes are cheap but trigger storms are not — dozens of images
//! finishing their decode within the same frame must collapse into one
//! pass, not one pass each. [`Debounce`] holds at most one pending
//! deadline: coalescing triggers re-arm it, and [`Debounce::take_due`]
//! fires at most once per armed window.
//!
//! The machine is driven entirely by caller-supplied [`Instant`]s, so
//! hosts wire it to whatever timer facility they have and tests drive it
//! with synthetic clocks.
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use rowfill::{Debounce, Trigger};
//!
//! let mut debounce = Debounce::default();
//! let start = Instant::now();
//!
//! // A burst of decode completions arms the window once.
//! for _ in 0..50 {
//!     debounce.note(Trigger::ImageLoaded, start);
//! }
//! assert!(!debounce.take_due(start));
//! assert!(debounce.take_due(start + Duration::from_millis(100)));
//! // Fired — nothing left pending.
//! assert!(!debounce.take_due(start + Duration::from_secs(1)));
//! ```

use std::time::{Duration, Instant};

/// An event that asks for a layout recompute.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// The page finished its initial load.
    WindowLoad,
    /// The viewport was resized.
    Resize,
    /// The page was restored from the navigation cache.
    PageShow,
    /// One image finished decoding and its real dimensions are known.
    ImageLoaded,
    /// One image failed to load (stays on the square fallback).
    ImageFailed,
}

impl Trigger {
    /// Whether this trigger is absorbed by the debounce window.
    ///
    /// Per-image events and resizes arrive in bursts and coalesce;
    /// `WindowLoad` and `PageShow` are one-shot and run at the next poll.
    pub const fn coalesces(self) -> bool {
        matches!(self, Self::Resize | Self::ImageLoaded | Self::ImageFailed)
    }
}

/// Single-slot debounce for layout recomputes.
///
/// At most one recompute is ever pending. Each coalescing trigger re-arms
/// the deadline to `now + interval`, so a burst settles into one firing
/// after the burst ends; immediate triggers pull the deadline to `now`.
/// A deadline that has already come due is never postponed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Debounce {
    interval: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    /// Default coalescing window.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

    /// Create a debounce with the given coalescing window.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Record a trigger observed at `now`, arming or re-arming the deadline.
    pub fn note(&mut self, trigger: Trigger, now: Instant) {
        let due = if trigger.coalesces() {
            now + self.interval
        } else {
            now
        };
        self.deadline = Some(match self.deadline {
            // Already due: the pending recompute covers this trigger.
            Some(deadline) if deadline <= now => deadline,
            _ => due,
        });
    }

    /// Whether a recompute is armed.
    pub const fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// When the pending recompute should run, if armed.
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has come due.
    ///
    /// Returns `true` exactly once per armed window; the caller runs its
    /// (synchronous, non-reentrant) layout pass on `true`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

impl Default for Debounce {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}
