//! # Frequency measurement with a 16-bit input capture timer
//!
//! This crate measures the frequency of an external oscillator with nothing more than a
//! free-running 16-bit timer and its capture register: the capture unit latches the timer on a
//! configured edge pattern, the timer overflow interrupt counts rollovers, and the two are
//! combined into an elapsed tick count that is turned into a frequency in kHz.
//!
//! Programming the peripheral (edge selection, prescaler, interrupt vectors, pins and clocks) is
//! left to the application. The crate only provides the arithmetic and the bookkeeping shared
//! between the interrupts, and tells the application which capture mode and prescaler to use.
//!
//! # Usage
//!
//! ## Stateless conversion
//!
//! ```rust
//! use capture_freq::{band, measure_frequency};
//!
//! let (mode, prescale) = band::hvco();
//! // no rollover, timer latched at 1000 after 16 rising edges
//! let khz = measure_frequency(0, 1000, mode, prescale).unwrap();
//! assert_eq!(khz, 256.0);
//! ```
//!
//! ## Interrupt handlers
//!
//! ```rust
//! use capture_freq::{CaptureBand, Config, FrequencyCounter};
//!
//! static COUNTER: FrequencyCounter = FrequencyCounter::new(Config::new().band(CaptureBand::Lfo));
//!
//! // at init: program the capture unit with `COUNTER.settings()`
//! let (mode, prescale) = COUNTER.settings();
//! assert_eq!((mode.bits(), prescale.bits()), (0b0101, 0b10));
//!
//! // TIMER_OVERFLOW interrupt
//! COUNTER.on_overflow();
//!
//! // CAPTURE interrupt
//! let khz = COUNTER.on_capture(0u16).unwrap();
//! assert_eq!(khz, 4_000_000. / 65536. / 1000.);
//!
//! // a capture with no elapsed tick is withheld, skip this reading
//! assert!(COUNTER.on_capture(0u16).is_err());
//! ```
//!
//! # Features
//!
//! - `defmt`: implement `defmt::Format` for the public enums and log measurements
//! - `critical-section-single-core`: use `cortex-m`'s critical section implementation. Only
//!   enable it in the final application, and only if nothing else provides one.

#![no_std]

pub mod band;
pub mod capture;
pub mod counter;
pub mod frequency;
pub mod overflow;
pub mod prelude;
pub mod time;

pub use crate::band::CaptureBand;
pub use crate::capture::{elapsed_ticks, CaptureMode, CaptureSample, ElapsedTicks, PrescaleRatio};
pub use crate::counter::{Config, FrequencyCounter};
pub use crate::frequency::{measure_frequency, Error as FrequencyError, FrequencyConverter};
pub use crate::overflow::{with_critical_section, OverflowCounter};
