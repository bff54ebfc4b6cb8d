//! Capture presets for the supported oscillator bands.
//!
//! Faster signals are sampled over several periods (a larger edge-count divisor) with an
//! unprescaled timer, so the capture interrupt rate stays low and resolution stays high. Slower
//! signals capture every edge and prescale the timer, so the interval between two edges spans
//! fewer rollovers.
//!
//! | band | capture mode        | prescale |
//! |------|---------------------|----------|
//! | HVCO | every 16th rising   | 1:1      |
//! | VCO  | every 4th rising    | 1:1      |
//! | LFO  | every rising        | 1:4      |
//! | VLFO | every rising        | 1:8      |

use crate::capture::{CaptureMode, PrescaleRatio};

/// Frequency band of the measured oscillator
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureBand {
    /// High frequency voltage controlled oscillator
    #[default]
    Hvco,
    /// Voltage controlled oscillator
    Vco,
    /// Low frequency oscillator
    Lfo,
    /// Very low frequency oscillator
    Vlfo,
}

impl CaptureBand {
    pub const ALL: [Self; 4] = [Self::Hvco, Self::Vco, Self::Lfo, Self::Vlfo];

    /// Capture mode and timer prescale to program for this band
    pub const fn settings(self) -> (CaptureMode, PrescaleRatio) {
        match self {
            Self::Hvco => (CaptureMode::Every16thRisingEdge, PrescaleRatio::Div1),
            Self::Vco => (CaptureMode::Every4thRisingEdge, PrescaleRatio::Div1),
            Self::Lfo => (CaptureMode::EveryRisingEdge, PrescaleRatio::Div4),
            Self::Vlfo => (CaptureMode::EveryRisingEdge, PrescaleRatio::Div8),
        }
    }

    pub const fn mode(self) -> CaptureMode {
        self.settings().0
    }

    pub const fn prescale(self) -> PrescaleRatio {
        self.settings().1
    }
}

/// Every 16th rising edge, 1:1 prescale
pub const fn hvco() -> (CaptureMode, PrescaleRatio) {
    CaptureBand::Hvco.settings()
}

/// Every 4th rising edge, 1:1 prescale
pub const fn vco() -> (CaptureMode, PrescaleRatio) {
    CaptureBand::Vco.settings()
}

/// Every rising edge, 1:4 prescale
pub const fn lfo() -> (CaptureMode, PrescaleRatio) {
    CaptureBand::Lfo.settings()
}

/// Every rising edge, 1:8 prescale
pub const fn vlfo() -> (CaptureMode, PrescaleRatio) {
    CaptureBand::Vlfo.settings()
}

#[test]
fn band_presets() {
    assert_eq!(
        hvco(),
        (CaptureMode::Every16thRisingEdge, PrescaleRatio::Div1)
    );
    assert_eq!(vco(), (CaptureMode::Every4thRisingEdge, PrescaleRatio::Div1));
    assert_eq!(lfo(), (CaptureMode::EveryRisingEdge, PrescaleRatio::Div4));
    assert_eq!(vlfo(), (CaptureMode::EveryRisingEdge, PrescaleRatio::Div8));
}

#[test]
fn lower_bands_never_sample_coarser() {
    for pair in CaptureBand::ALL.windows(2) {
        let (higher, lower) = (pair[0], pair[1]);
        assert!(lower.mode().edge_divisor() <= higher.mode().edge_divisor());
        assert!(lower.prescale().divisor() >= higher.prescale().divisor());
    }
}
