//! Timer rollover bookkeeping shared between the overflow and capture interrupts.
//!
//! [`OverflowCounter`] is meant to live in a `static` and be handed by reference to both
//! interrupt handlers:
//!
//! ```rust
//! use capture_freq::{CaptureSample, OverflowCounter};
//!
//! static OVERFLOWS: OverflowCounter = OverflowCounter::new();
//!
//! // timer overflow interrupt
//! fn on_timer_overflow() {
//!     OVERFLOWS.on_overflow();
//! }
//!
//! // capture interrupt
//! fn on_capture(raw_count: u16) -> u32 {
//!     CaptureSample::new(raw_count).elapsed_ticks(OVERFLOWS.take())
//! }
//!
//! on_timer_overflow();
//! assert_eq!(on_capture(500), 66036);
//! assert_eq!(OVERFLOWS.count(), 0);
//! ```
//!
//! The count is kept in a [`critical_section::Mutex`], so every access runs with interrupts
//! masked. The critical section implementation comes from the application: its HAL or RTOS, or
//! this crate's `critical-section-single-core` feature on single core Cortex-M parts.

use core::cell::Cell;

use critical_section::{CriticalSection, Mutex};

/// Run `f` with interrupts masked.
///
/// An overflow interrupt raised while `f` runs is held pending and serviced afterwards, so it is
/// neither lost nor observed twice. The token handed to `f` borrows any
/// [`critical_section::Mutex`], so several pieces of interrupt-shared state can be updated
/// together.
#[inline]
pub fn with_critical_section<R>(f: impl FnOnce(CriticalSection<'_>) -> R) -> R {
    critical_section::with(f)
}

/// Number of 16-bit timer rollovers since the last reset
pub struct OverflowCounter {
    count: Mutex<Cell<u16>>,
}

impl OverflowCounter {
    pub const fn new() -> Self {
        Self {
            count: Mutex::new(Cell::new(0)),
        }
    }

    /// Record one timer rollover. Call from the timer overflow interrupt.
    ///
    /// The count wraps from 65535 back to 0 without notice: a capture interval longer than
    /// 65536 rollovers is reported as a much shorter one.
    #[inline]
    pub fn on_overflow(&self) {
        with_critical_section(|cs| {
            let count = self.count.borrow(cs);
            count.set(count.get().wrapping_add(1));
        });
    }

    /// Current count, without clearing it
    #[inline]
    pub fn count(&self) -> u16 {
        with_critical_section(|cs| self.count.borrow(cs).get())
    }

    /// Clear the count.
    ///
    /// Must follow every [`count`](Self::count) that feeds a measurement, otherwise the next
    /// measurement includes the rollovers of this one. An overflow landing between the two
    /// calls is discarded; use [`take`](Self::take) to avoid that window.
    #[inline]
    pub fn reset(&self) {
        with_critical_section(|cs| self.count.borrow(cs).set(0));
    }

    /// Read and clear the count in one critical section.
    #[inline]
    pub fn take(&self) -> u16 {
        with_critical_section(|cs| self.count.borrow(cs).replace(0))
    }
}

impl Default for OverflowCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for OverflowCounter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("OverflowCounter")
            .field("count", &self.count())
            .finish()
    }
}
