//! Bit labels drawn on top of the harmonic bars.
//!
//! A bar at or above zero reads as `0`, a bar below zero as `1`. Text sits
//! halfway up the bar but never closer than half a unit to the baseline.

use crate::config::LABEL_CONTRAST_THRESHOLD;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    White,
    Black,
}

impl LabelColor {
    pub fn name(self) -> &'static str {
        match self {
            LabelColor::White => "white",
            LabelColor::Black => "black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarLabel {
    pub bit: bool,
    pub color: LabelColor,
    /// Centre of the bar.
    pub x: f64,
    pub y: f64,
}

impl BarLabel {
    pub fn new(x: f64, height: f64) -> Self {
        let bit = height < 0.0;
        // short bars leave the text on the light background
        let color = if height.abs() < LABEL_CONTRAST_THRESHOLD {
            LabelColor::Black
        } else {
            LabelColor::White
        };
        let y = if bit {
            (height / 2.0).min(-LABEL_CONTRAST_THRESHOLD)
        } else {
            (height / 2.0).max(LABEL_CONTRAST_THRESHOLD)
        };
        Self { bit, color, x, y }
    }

    pub fn text(&self) -> &'static str {
        if self.bit {
            "1"
        } else {
            "0"
        }
    }
}

/// One label per harmonic, bars placed at `x = 1, 2, ...`.
pub fn label_bars(heights: &[f32]) -> Vec<BarLabel> {
    heights
        .iter()
        .enumerate()
        .map(|(i, &h)| BarLabel::new((i + 1) as f64, h as f64))
        .collect()
}
