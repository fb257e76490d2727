//! Two orthogonal carriers, each drawn over two periods.

use std::f64::consts::PI;

use crate::config::SineConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct SinePair {
    pub time: Vec<f64>,
    pub fundamental: Vec<f64>,
    pub second: Vec<f64>,
}

/// One period of `sin(2π k i / n)` repeated twice.
fn doubled_period(harmonic: usize, n: usize) -> Vec<f64> {
    let period: Vec<f64> = (0..n)
        .map(|i| (2.0 * PI * harmonic as f64 * i as f64 / n as f64).sin())
        .collect();
    period.repeat(2)
}

pub fn sine_pair(config: &SineConfig) -> SinePair {
    let n = config.length * config.precision;
    let time = (0..2 * n)
        .map(|i| i as f64 / config.precision as f64)
        .collect();
    SinePair {
        time,
        fundamental: doubled_period(1, n),
        second: doubled_period(2, n),
    }
}
