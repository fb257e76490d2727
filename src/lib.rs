//! Viewers for the raw `f32` captures written by the OFDM propagation
//! simulation: time-domain traces and the per-carrier bit decisions of one
//! symbol.
//!
//! Loading and the spectral work are plain functions returning plot-ready
//! data; [`plot`] owns the windows.

pub mod comparison;
pub mod config;
pub mod labels;
pub mod plot;
pub mod samples;
pub mod sine;
pub mod snapshot;
pub mod spectrum;

pub use comparison::{compute_comparison, load_comparison, Comparison};
pub use config::{ComparisonConfig, SineConfig, SnapshotConfig};
pub use labels::{label_bars, BarLabel, LabelColor};
pub use samples::{read_samples, write_samples};
pub use sine::{sine_pair, SinePair};
pub use snapshot::{compute_snapshot, decode_bytes, load_snapshot, Snapshot};
pub use spectrum::{forward_fft, imaginary_harmonics};
