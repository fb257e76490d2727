//! Spectral snapshot of the first OFDM symbol, emitted and received.

use smallvec::SmallVec;

use crate::config::{SnapshotConfig, HARMONIC_COUNT};
use crate::labels::label_bars;
use crate::samples::{read_samples, window};
use crate::spectrum::imaginary_harmonics;

/// Bit decisions of one symbol, first carrier first.
pub type SymbolBits = SmallVec<[bool; HARMONIC_COUNT]>;

/// Everything the snapshot window draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub display_len: usize,
    pub emitted_trace: Vec<f32>,
    pub received_trace: Vec<f32>,
    pub emitted_harmonics: Vec<f32>,
    pub received_harmonics: Vec<f32>,
}

/// Number of samples shown in the time-domain traces.
pub fn display_len(emitted_len: usize, received_len: usize, divisor: usize) -> usize {
    emitted_len.min(received_len) / divisor
}

pub fn compute_snapshot(
    emitted: &[f32],
    received: &[f32],
    config: &SnapshotConfig,
) -> anyhow::Result<Snapshot> {
    anyhow::ensure!(config.display_divisor > 0, "display divisor must be non-zero");
    let display_len = display_len(emitted.len(), received.len(), config.display_divisor);
    log::debug!(
        "emitted {} samples, received {} samples, showing {}",
        emitted.len(),
        received.len(),
        display_len
    );

    let emitted_trace = window(emitted, "emitted trace", 0, display_len)?;
    let received_trace = window(received, "received trace", config.received_offset, display_len)?;

    let emitted_symbol = window(emitted, "emitted symbol", 0, config.symbol_len)?;
    let received_symbol = window(
        received,
        "received symbol",
        config.received_offset,
        config.symbol_len,
    )?;

    let emitted_harmonics = imaginary_harmonics(emitted_symbol, config.harmonics);
    let received_harmonics = imaginary_harmonics(received_symbol, config.harmonics);
    log::debug!("emitted harmonics: {:?}", emitted_harmonics);
    log::debug!("received harmonics: {:?}", received_harmonics);

    Ok(Snapshot {
        display_len,
        emitted_trace: emitted_trace.to_vec(),
        received_trace: received_trace.to_vec(),
        emitted_harmonics,
        received_harmonics,
    })
}

pub fn load_snapshot(config: &SnapshotConfig) -> anyhow::Result<Snapshot> {
    let emitted = read_samples(&config.emitted_path)?;
    let received = read_samples(&config.received_path)?;
    compute_snapshot(&emitted, &received, config)
}

/// Bit decisions for every full symbol starting at `offset`.
pub fn decode_symbols(samples: &[f32], offset: usize, config: &SnapshotConfig) -> Vec<SymbolBits> {
    if config.symbol_len == 0 || offset >= samples.len() {
        return Vec::new();
    }
    samples[offset..]
        .chunks_exact(config.symbol_len)
        .map(|symbol| {
            label_bars(&imaginary_harmonics(symbol, config.harmonics))
                .iter()
                .map(|label| label.bit)
                .collect()
        })
        .collect()
}

/// Packs each symbol MSB first, first carrier being the top bit.
pub fn pack_bytes(symbols: &[SymbolBits]) -> Vec<u8> {
    symbols
        .iter()
        .map(|bits| {
            bits.iter()
                .take(8)
                .fold(0u8, |byte, &bit| (byte << 1) | bit as u8)
        })
        .collect()
}

pub fn decode_bytes(samples: &[f32], offset: usize, config: &SnapshotConfig) -> Vec<u8> {
    pack_bytes(&decode_symbols(samples, offset, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SYMBOL_LEN;
    use std::f32::consts::PI;

    /// Same layout as the simulation's emitter: carrier `k` sits in bin
    /// `k + 1` and is inverted when its bit is clear.
    fn emit(bytes: &[u8]) -> Vec<f32> {
        let mut out = Vec::with_capacity(bytes.len() * SYMBOL_LEN);
        for &byte in bytes {
            for i in 0..SYMBOL_LEN {
                let mut x = 0.0;
                for k in 0..8 {
                    let bit = byte & (0x80 >> k) != 0;
                    let s = (2.0 * PI * (k + 1) as f32 * i as f32 / SYMBOL_LEN as f32).sin();
                    x += if bit { s } else { -s };
                }
                out.push(x);
            }
        }
        out
    }

    #[test]
    fn test_display_len_floors() {
        assert_eq!(display_len(4096, 24000, 12), 341);
        assert_eq!(display_len(24000, 4096, 12), 341);
        assert_eq!(display_len(4096, 24000, 16), 256);
        assert_eq!(display_len(24000, 24000, 12), 2000);
        assert_eq!(display_len(11, 24000, 12), 0);
    }

    #[test]
    fn test_snapshot_windows() {
        let emitted: Vec<f32> = (0..4096).map(|i| i as f32).collect();
        let received: Vec<f32> = (0..24000).map(|i| -(i as f32)).collect();
        let snapshot = compute_snapshot(&emitted, &received, &SnapshotConfig::default()).unwrap();

        assert_eq!(snapshot.display_len, 341);
        assert_eq!(snapshot.emitted_trace, emitted[..341].to_vec());
        assert_eq!(snapshot.received_trace, received[1903..1903 + 341].to_vec());
        assert_eq!(snapshot.emitted_harmonics.len(), 8);
        assert_eq!(snapshot.received_harmonics.len(), 8);
    }

    #[test]
    fn test_snapshot_reads_the_symbol_bits() {
        let emitted = emit(&[0xBE, 0xEF]);
        let mut received = vec![0.0; 1903];
        received.extend(emit(&[0xBE]));

        let snapshot = compute_snapshot(&emitted, &received, &SnapshotConfig::default()).unwrap();
        let bits = |h: &[f32]| -> String {
            label_bars(h).iter().map(|l| l.text()).collect()
        };
        assert_eq!(bits(&snapshot.emitted_harmonics), "10111110");
        assert_eq!(bits(&snapshot.received_harmonics), "10111110");
    }

    #[test]
    fn test_received_symbol_out_of_range() {
        let emitted = vec![0.0; 4096];
        let received = vec![0.0; 3000];
        let err = compute_snapshot(&emitted, &received, &SnapshotConfig::default()).unwrap_err();
        assert!(err.to_string().contains("received symbol"));
    }

    #[test]
    fn test_emitted_shorter_than_a_symbol() {
        let err = compute_snapshot(&vec![0.0; 2047], &vec![0.0; 24000], &SnapshotConfig::default())
            .unwrap_err();
        assert!(err.to_string().contains("emitted symbol"));
    }

    #[test]
    fn test_decode_bytes() {
        let config = SnapshotConfig::default();
        let mut samples = vec![0.0; 100];
        samples.extend(emit(&[0xBE, 0xEF, 0xCA, 0xFE]));
        // partial trailing symbol
        samples.extend(vec![1.0; 500]);

        assert_eq!(decode_bytes(&samples, 100, &config), vec![0xBE, 0xEF, 0xCA, 0xFE]);
        assert!(decode_bytes(&samples, samples.len(), &config).is_empty());
    }

    #[test]
    fn test_pack_bytes_msb_first() {
        let symbols: Vec<SymbolBits> = vec![
            [true, false, false, false, false, false, false, true].into_iter().collect(),
            [false; 8].into_iter().collect(),
        ];
        assert_eq!(pack_bytes(&symbols), vec![0x81, 0x00]);
    }
}
