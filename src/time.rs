//! Time units
//!
//! Rates and durations come from [`fugit`]. [`Hertz`] is used for the timer clock and
//! [`RateExtU32`] adds `.Hz()`, `.kHz()` and `.MHz()` to the `u32` primitive type.
//!
//! # Examples
//!
//! ## Create a 16 MHz timer clock
//!
//! ```rust
//! use capture_freq::{prelude::*, time::Hertz};
//!
//! let freq_hz: Hertz = 16_000_000.Hz();
//! let freq_khz: Hertz = 16_000.kHz();
//! let freq_mhz: Hertz = 16.MHz();
//!
//! assert_eq!(freq_hz, freq_khz);
//! assert_eq!(freq_khz, freq_mhz);
//! ```

pub use fugit::{
    HertzU32 as Hertz, KilohertzU32 as KiloHertz, MegahertzU32 as MegaHertz, RateExtU32,
};

/// Signal period with nanosecond resolution
pub type Period = fugit::NanosDurationU64;

/// Clock driving the free-running capture timer (the instruction clock, before prescaling)
pub const DEFAULT_TIMER_CLOCK: Hertz = Hertz::from_raw(16_000_000);

/// Number of timer ticks in one full 16-bit rollover
pub const TICKS_PER_OVERFLOW: u32 = u16::MAX as u32 + 1;
