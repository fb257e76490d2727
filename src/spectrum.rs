use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Unnormalized forward DFT of a real window.
pub fn forward_fft(window: &[f32]) -> Vec<Complex<f32>> {
    let mut buffer: Vec<Complex<f32>> = window.iter().map(|&x| Complex::new(x, 0.0)).collect();
    if buffer.is_empty() {
        return buffer;
    }
    let fft = FftPlanner::<f32>::new().plan_fft_forward(buffer.len());
    fft.process(&mut buffer);
    buffer
}

/// Imaginary part of bins `1..=count`, DC left out.
///
/// A carrier sent as `+sin` shows up negative here and as `-sin` positive.
pub fn imaginary_harmonics(window: &[f32], count: usize) -> Vec<f32> {
    forward_fft(window)
        .iter()
        .skip(1)
        .take(count)
        .map(|c| c.im)
        .collect()
}
