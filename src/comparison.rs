//! Simulated result against the scaled sum of the two sources that produced it.

use crate::config::ComparisonConfig;
use crate::samples::{read_samples, window};

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub result: Vec<f32>,
    pub original: Vec<f32>,
}

/// `(len - 1) / divisor`, zero for an empty capture.
pub fn comparison_len(len: usize, divisor: usize) -> usize {
    len.saturating_sub(1) / divisor
}

pub fn compute_comparison(
    result: &[f32],
    first_source: &[f32],
    second_source: &[f32],
    config: &ComparisonConfig,
) -> anyhow::Result<Comparison> {
    anyhow::ensure!(config.divisor > 0, "comparison divisor must be non-zero");
    let len = comparison_len(result.len(), config.divisor);
    log::debug!("comparing {} of {} samples", len, result.len());

    let result = window(result, "result", 0, len)?;
    let first = window(first_source, "first source", 0, len)?;
    let second = window(second_source, "second source", 0, len)?;

    let original = first
        .iter()
        .zip(second)
        .map(|(a, b)| config.gain * (a + b))
        .collect();

    Ok(Comparison {
        result: result.to_vec(),
        original,
    })
}

pub fn load_comparison(config: &ComparisonConfig) -> anyhow::Result<Comparison> {
    let result = read_samples(&config.result_path)?;
    let first = read_samples(&config.first_source_path)?;
    let second = read_samples(&config.second_source_path)?;
    compute_comparison(&result, &first, &second, config)
}
