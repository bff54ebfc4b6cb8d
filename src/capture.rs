//! Input capture samples and the overflow-aware tick accumulator.
//!
//! The capture timer is a 16-bit free-running counter. Whenever the configured edge pattern
//! occurs, the counter value is latched into the capture register and delivered as a
//! [`CaptureSample`]. Every time the counter rolls over from `0xFFFF` to `0`, the overflow
//! interrupt bumps an [`OverflowCounter`](crate::overflow::OverflowCounter).
//!
//! Both are combined into a 32-bit [`ElapsedTicks`] value:
//!
//! ```text
//! ElapsedTicks = overflow_count * 65536 + raw_count
//! ```
//!
//! # Precondition
//!
//! The result only describes the interval since the previous capture if the overflow count was
//! cleared right after that capture. The accumulator cannot check this: a missed reset silently
//! adds the stale overflows to the next measurement.

use crate::time::TICKS_PER_OVERFLOW;

/// Timer ticks between two captures
pub type ElapsedTicks = u32;

/// Capture mode
///
/// Selects which signal edges latch the timer into the capture register. The discriminant is the
/// value of the capture/compare mode select field (`CCPxM<3:0>`) for that mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum CaptureMode {
    /// Capture on every falling edge
    EveryFallingEdge = 0b0100,
    /// Capture on every rising edge
    EveryRisingEdge = 0b0101,
    /// Capture on every 4th rising edge
    Every4thRisingEdge = 0b0110,
    /// Capture on every 16th rising edge
    Every16thRisingEdge = 0b0111,
}

impl CaptureMode {
    pub const ALL: [Self; 4] = [
        Self::EveryFallingEdge,
        Self::EveryRisingEdge,
        Self::Every4thRisingEdge,
        Self::Every16thRisingEdge,
    ];

    /// Number of signal periods spanned by one capture interval
    #[inline]
    pub const fn edge_divisor(self) -> u32 {
        match self {
            Self::EveryFallingEdge | Self::EveryRisingEdge => 1,
            Self::Every4thRisingEdge => 4,
            Self::Every16thRisingEdge => 16,
        }
    }

    /// Mode select bits for the capture control register
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Enum for configuring the capture timer prescaler.
/// Determines how many instruction cycles make up one timer tick.
///
/// The discriminant is the value of the 2-bit prescale select field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PrescaleRatio {
    /// 1:1, one tick per instruction cycle
    Div1 = 0,
    /// 1:2
    Div2 = 1,
    /// 1:4
    Div4 = 2,
    /// 1:8
    Div8 = 3,
}

impl PrescaleRatio {
    pub const ALL: [Self; 4] = [Self::Div1, Self::Div2, Self::Div4, Self::Div8];

    /// Instruction cycles per timer tick
    #[inline]
    pub const fn divisor(self) -> u32 {
        1 << (self as u8)
    }

    /// Prescale select bits for the timer control register
    #[inline]
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Timer value latched at the capture edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CaptureSample {
    pub raw_count: u16,
}

impl CaptureSample {
    #[inline]
    pub const fn new(raw_count: u16) -> Self {
        Self { raw_count }
    }

    /// Reconstruct the full tick count of this capture interval from the number of timer
    /// rollovers seen since the previous capture.
    #[inline]
    pub const fn elapsed_ticks(self, overflow_count: u16) -> ElapsedTicks {
        elapsed_ticks(overflow_count, self.raw_count)
    }
}

impl From<u16> for CaptureSample {
    fn from(raw_count: u16) -> Self {
        Self::new(raw_count)
    }
}

/// `overflow_count * 65536 + raw_count`
///
/// Exact for every input: the largest result is `u32::MAX`.
#[inline]
pub const fn elapsed_ticks(overflow_count: u16, raw_count: u16) -> ElapsedTicks {
    overflow_count as u32 * TICKS_PER_OVERFLOW + raw_count as u32
}
