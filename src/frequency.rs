//! Conversion of capture intervals into signal frequency.
//!
//! Formulas :
//!
//! ```text
//! F_tick   = F_timer / P
//! T_signal = ElapsedTicks / D          (in ticks)
//! F_signal = F_tick / T_signal
//! ```
//!
//! Where :
//! * `F_timer` is the clock driving the capture timer (the instruction clock)
//! * `P` is the timer prescale ratio ([`PrescaleRatio::divisor`])
//! * `D` is the number of signal periods between two captures ([`CaptureMode::edge_divisor`])

use crate::capture::{elapsed_ticks, CaptureMode, ElapsedTicks, PrescaleRatio};
use crate::time::{Hertz, Period, DEFAULT_TIMER_CLOCK};

/// The error returned when converting a capture interval into a frequency
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// No timer tick elapsed between the two captures: either no signal is present or the
    /// capture fired before the timer advanced.
    #[error("no signal: capture interval is zero ticks")]
    ZeroInterval,
    /// The converter was configured with a 0 Hz timer clock
    #[error("timer clock is 0 Hz")]
    NoTimerClock,
}

/// Capture interval to frequency converter for a fixed timer clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrequencyConverter {
    timer_clock: Hertz,
}

impl FrequencyConverter {
    pub const fn new(timer_clock: Hertz) -> Self {
        Self { timer_clock }
    }

    pub const fn timer_clock(&self) -> Hertz {
        self.timer_clock
    }

    fn check(&self, ticks: ElapsedTicks) -> Result<(), Error> {
        if self.timer_clock.raw() == 0 {
            Err(Error::NoTimerClock)
        } else if ticks == 0 {
            Err(Error::ZeroInterval)
        } else {
            Ok(())
        }
    }

    /// Signal frequency in kHz
    pub fn frequency_khz(
        &self,
        ticks: ElapsedTicks,
        mode: CaptureMode,
        prescale: PrescaleRatio,
    ) -> Result<f64, Error> {
        self.check(ticks)?;
        let tick_rate = self.timer_clock.raw() as f64 / prescale.divisor() as f64;
        let period_in_ticks = ticks as f64 / mode.edge_divisor() as f64;
        Ok(tick_rate / period_in_ticks / 1000.)
    }

    /// Signal period, rounded down to the nanosecond
    pub fn period(
        &self,
        ticks: ElapsedTicks,
        mode: CaptureMode,
        prescale: PrescaleRatio,
    ) -> Result<Period, Error> {
        self.check(ticks)?;
        // 2^32 ticks * 8 * 10^9 does not fit in u64
        let num = ticks as u128 * prescale.divisor() as u128 * 1_000_000_000;
        let den = mode.edge_divisor() as u128 * self.timer_clock.raw() as u128;
        let nanos = u64::try_from(num / den).unwrap_or(u64::MAX);
        Ok(Period::from_ticks(nanos))
    }
}

impl Default for FrequencyConverter {
    fn default() -> Self {
        Self::new(DEFAULT_TIMER_CLOCK)
    }
}

/// Frequency in kHz of the signal captured after `overflow_count` timer rollovers at timer value
/// `raw_count`, for a timer clocked at [`DEFAULT_TIMER_CLOCK`].
///
/// The caller must clear its overflow count once this returns (see
/// [`OverflowCounter::take`](crate::overflow::OverflowCounter::take)).
///
/// ```rust
/// use capture_freq::{measure_frequency, CaptureMode, FrequencyError, PrescaleRatio};
///
/// let khz = measure_frequency(0, 1000, CaptureMode::Every16thRisingEdge, PrescaleRatio::Div1);
/// assert_eq!(khz, Ok(256.0));
///
/// let none = measure_frequency(0, 0, CaptureMode::EveryRisingEdge, PrescaleRatio::Div8);
/// assert_eq!(none, Err(FrequencyError::ZeroInterval));
/// ```
pub fn measure_frequency(
    overflow_count: u16,
    raw_count: u16,
    mode: CaptureMode,
    prescale: PrescaleRatio,
) -> Result<f64, Error> {
    FrequencyConverter::default().frequency_khz(
        elapsed_ticks(overflow_count, raw_count),
        mode,
        prescale,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::RateExtU32;

    fn all_settings() -> impl Iterator<Item = (CaptureMode, PrescaleRatio)> {
        CaptureMode::ALL
            .into_iter()
            .flat_map(|mode| PrescaleRatio::ALL.into_iter().map(move |psc| (mode, psc)))
    }

    fn assert_close(actual: f64, expected: f64) {
        let error = ((actual - expected) / expected).abs();
        assert!(error < 1e-4, "{actual} is not within 0.01% of {expected}");
    }

    #[test]
    fn hvco_scenario() {
        let khz = measure_frequency(
            0,
            1000,
            CaptureMode::Every16thRisingEdge,
            PrescaleRatio::Div1,
        );
        assert_eq!(khz, Ok(256.0));
    }

    #[test]
    fn vlfo_scenario() {
        let khz =
            measure_frequency(1, 500, CaptureMode::EveryRisingEdge, PrescaleRatio::Div8).unwrap();
        assert_close(khz, 2_000_000. / 66036. / 1000.);
        assert!((khz - 0.03028).abs() < 1e-5);
    }

    #[test]
    fn zero_interval_for_every_setting() {
        for (mode, psc) in all_settings() {
            assert_eq!(measure_frequency(0, 0, mode, psc), Err(Error::ZeroInterval));
            assert_eq!(
                FrequencyConverter::default().period(0, mode, psc),
                Err(Error::ZeroInterval)
            );
        }
    }

    #[test]
    fn longer_interval_is_lower_frequency() {
        let converter = FrequencyConverter::default();
        let ticks = [
            1,
            2,
            3,
            15,
            16,
            17,
            1000,
            65535,
            65536,
            66036,
            1 << 24,
            u32::MAX - 1,
            u32::MAX,
        ];
        for (mode, psc) in all_settings() {
            for pair in ticks.windows(2) {
                let shorter = converter.frequency_khz(pair[0], mode, psc).unwrap();
                let longer = converter.frequency_khz(pair[1], mode, psc).unwrap();
                assert!(longer < shorter, "{mode:?} {psc:?} {pair:?}");
            }
        }
    }

    #[test]
    fn recovers_synthesized_frequency() {
        let clock = 16_000_000u64;
        let targets = [
            (CaptureMode::Every16thRisingEdge, PrescaleRatio::Div1, 50.0),
            (CaptureMode::Every4thRisingEdge, PrescaleRatio::Div1, 10.0),
            (CaptureMode::EveryRisingEdge, PrescaleRatio::Div4, 0.1),
            (CaptureMode::EveryRisingEdge, PrescaleRatio::Div8, 0.01),
            (CaptureMode::EveryFallingEdge, PrescaleRatio::Div8, 0.0333),
            (CaptureMode::Every4thRisingEdge, PrescaleRatio::Div2, 1.234),
        ];
        for (mode, psc, target_khz) in targets {
            let ticks_per_period = (clock / psc.divisor() as u64) as f64 / (target_khz * 1000.);
            let ticks = (ticks_per_period * mode.edge_divisor() as f64 + 0.5) as u32;
            let (overflows, raw) = ((ticks >> 16) as u16, ticks as u16);
            let khz = measure_frequency(overflows, raw, mode, psc).unwrap();
            assert_close(khz, target_khz);
        }
    }

    #[test]
    fn custom_timer_clock() {
        let converter = FrequencyConverter::new(8.MHz());
        assert_eq!(converter.timer_clock(), Hertz::from_raw(8_000_000));
        let khz = converter
            .frequency_khz(1000, CaptureMode::Every16thRisingEdge, PrescaleRatio::Div1)
            .unwrap();
        assert_eq!(khz, 128.0);
    }

    #[test]
    fn stopped_timer_clock_is_an_error() {
        let converter = FrequencyConverter::new(Hertz::from_raw(0));
        for (mode, psc) in all_settings() {
            assert_eq!(
                converter.frequency_khz(1000, mode, psc),
                Err(Error::NoTimerClock)
            );
            assert_eq!(converter.period(1000, mode, psc), Err(Error::NoTimerClock));
            assert_eq!(converter.period(0, mode, psc), Err(Error::NoTimerClock));
        }
    }

    #[test]
    fn period_matches_frequency() {
        let converter = FrequencyConverter::default();
        let period = converter
            .period(1000, CaptureMode::Every16thRisingEdge, PrescaleRatio::Div1)
            .unwrap();
        // 256 kHz
        assert_eq!(period.ticks(), 3906);

        let period = converter
            .period(u32::MAX, CaptureMode::EveryRisingEdge, PrescaleRatio::Div8)
            .unwrap();
        assert_eq!(period.to_secs(), 2147);
    }
}
