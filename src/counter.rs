//! Interrupt driven frequency counter
//!
//! [`FrequencyCounter`] bundles the overflow bookkeeping with the band configuration so the
//! firmware only has to forward its two timer interrupts:
//!
//! ```rust
//! use capture_freq::{time::Hertz, CaptureBand, Config, FrequencyCounter};
//!
//! static COUNTER: FrequencyCounter = FrequencyCounter::new(
//!     Config::new()
//!         .timer_clock(Hertz::from_raw(16_000_000))
//!         .band(CaptureBand::Vlfo),
//! );
//!
//! // timer overflow interrupt
//! COUNTER.on_overflow();
//!
//! // capture interrupt, timer latched at 500
//! let khz = COUNTER.on_capture(500u16).unwrap();
//! assert!((khz - 0.03028).abs() < 1e-5);
//! ```
//!
//! The peripheral itself (edge selection, prescaler, timer clear on capture) is programmed by the
//! application from [`FrequencyCounter::settings`].

use crate::band::CaptureBand;
use crate::capture::{CaptureMode, CaptureSample, PrescaleRatio};
use crate::frequency::{Error, FrequencyConverter};
use crate::overflow::OverflowCounter;
use crate::time::{Hertz, DEFAULT_TIMER_CLOCK};

/// Frequency counter configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub timer_clock: Hertz,
    pub band: CaptureBand,
}

impl Config {
    /// 16 MHz timer clock, HVCO band
    pub const fn new() -> Self {
        Self {
            timer_clock: DEFAULT_TIMER_CLOCK,
            band: CaptureBand::Hvco,
        }
    }

    /// Sets the frequency of the clock driving the capture timer, before prescaling
    #[inline(always)]
    pub const fn timer_clock(self, timer_clock: Hertz) -> Self {
        Self {
            timer_clock,
            ..self
        }
    }

    /// Selects the capture preset
    #[inline(always)]
    pub const fn band(self, band: CaptureBand) -> Self {
        Self { band, ..self }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency counter driven by the capture and overflow interrupts
#[derive(Debug)]
pub struct FrequencyCounter {
    overflows: OverflowCounter,
    converter: FrequencyConverter,
    mode: CaptureMode,
    prescale: PrescaleRatio,
}

impl FrequencyCounter {
    pub const fn new(config: Config) -> Self {
        let (mode, prescale) = config.band.settings();
        Self {
            overflows: OverflowCounter::new(),
            converter: FrequencyConverter::new(config.timer_clock),
            mode,
            prescale,
        }
    }

    /// Capture mode and prescale the peripheral has to be configured with
    pub const fn settings(&self) -> (CaptureMode, PrescaleRatio) {
        (self.mode, self.prescale)
    }

    pub fn overflows(&self) -> &OverflowCounter {
        &self.overflows
    }

    /// Call from the timer overflow interrupt
    #[inline]
    pub fn on_overflow(&self) {
        self.overflows.on_overflow();
    }

    /// Call from the capture interrupt with the latched timer value.
    ///
    /// Consumes the overflow count of the interval that just ended and returns the signal
    /// frequency in kHz. A zero interval is reported as [`Error::ZeroInterval`] and a 0 Hz timer
    /// clock as [`Error::NoTimerClock`]; the reading should then be skipped.
    pub fn on_capture(&self, sample: impl Into<CaptureSample>) -> Result<f64, Error> {
        let ticks = sample.into().elapsed_ticks(self.overflows.take());
        match self.converter.frequency_khz(ticks, self.mode, self.prescale) {
            Ok(khz) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("capture: {=u32} ticks, {=f64} kHz", ticks, khz);
                Ok(khz)
            }
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("capture: frequency withheld: {}", e);
                Err(e)
            }
        }
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
