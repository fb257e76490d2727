//! Calibration constants for the captures in `output/`.
//!
//! The numbers below are tied to one particular simulation run (symbol
//! length of the emitter, start of the first received symbol, ...). They are
//! kept as named values so the viewers and the tests agree on them.

use std::path::PathBuf;

/// Samples per OFDM symbol, also the FFT size of an analysis window.
pub const SYMBOL_LEN: usize = 2048;

/// First sample of the first full symbol in `ofdm_rec.bin`.
/// Found by inspection of that capture, not derived from the signal.
pub const RECEIVED_OFFSET: usize = 1903;

/// Traces show `len / DISPLAY_DIVISOR` samples.
pub const DISPLAY_DIVISOR: usize = 12;

/// Divisor used with the older, shorter captures.
pub const LEGACY_DISPLAY_DIVISOR: usize = 16;

/// Carriers per symbol: bins `1..=HARMONIC_COUNT` hold one bit each.
pub const HARMONIC_COUNT: usize = 8;

/// Bars lower than this (in absolute value) get black text.
pub const LABEL_CONTRAST_THRESHOLD: f64 = 0.5;

pub const EMITTED_PATH: &str = "output/ofdm_emit.bin";
pub const RECEIVED_PATH: &str = "output/ofdm_rec.bin";

pub const RESULT_PATH: &str = "output/first.bin";
pub const SECOND_SOURCE_PATH: &str = "output/second.bin";
pub const THIRD_SOURCE_PATH: &str = "output/third.bin";

/// `(len - 1) / COMPARISON_DIVISOR` samples are compared.
pub const COMPARISON_DIVISOR: usize = 8 * 32;

/// Scale applied to the summed sources so they overlay the received result.
pub const COMPARISON_GAIN: f32 = 0.0013;

pub const SINE_LENGTH: usize = 10;
pub const SINE_PRECISION: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotConfig {
    pub emitted_path: PathBuf,
    pub received_path: PathBuf,
    pub symbol_len: usize,
    pub received_offset: usize,
    pub display_divisor: usize,
    pub harmonics: usize,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            emitted_path: EMITTED_PATH.into(),
            received_path: RECEIVED_PATH.into(),
            symbol_len: SYMBOL_LEN,
            received_offset: RECEIVED_OFFSET,
            display_divisor: DISPLAY_DIVISOR,
            harmonics: HARMONIC_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonConfig {
    pub result_path: PathBuf,
    /// Summed with `second_source_path`; this one is `third.bin`.
    pub first_source_path: PathBuf,
    pub second_source_path: PathBuf,
    pub divisor: usize,
    pub gain: f32,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            result_path: RESULT_PATH.into(),
            first_source_path: THIRD_SOURCE_PATH.into(),
            second_source_path: SECOND_SOURCE_PATH.into(),
            divisor: COMPARISON_DIVISOR,
            gain: COMPARISON_GAIN,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SineConfig {
    /// Periods are `length` time units long.
    pub length: usize,
    /// Samples per time unit.
    pub precision: usize,
}

impl Default for SineConfig {
    fn default() -> Self {
        Self {
            length: SINE_LENGTH,
            precision: SINE_PRECISION,
        }
    }
}
