use anyhow::{bail, Context};
use byteorder::{ByteOrder, LittleEndian};
use std::fs;
use std::path::Path;

const SAMPLE_SIZE: usize = std::mem::size_of::<f32>();

/// Reads a headerless capture of little-endian `f32` samples.
pub fn read_samples<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<f32>> {
    let path = path.as_ref();
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if bytes.len() % SAMPLE_SIZE != 0 {
        bail!(
            "{} is truncated: {} bytes is not a whole number of f32 samples",
            path.display(),
            bytes.len()
        );
    }

    let mut samples = vec![0.0f32; bytes.len() / SAMPLE_SIZE];
    LittleEndian::read_f32_into(&bytes, &mut samples);
    log::debug!("{}: {} samples", path.display(), samples.len());
    Ok(samples)
}

/// Writes `samples` in the same layout `read_samples` expects.
pub fn write_samples<P: AsRef<Path>>(path: P, samples: &[f32]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let mut bytes = vec![0u8; samples.len() * SAMPLE_SIZE];
    LittleEndian::write_f32_into(samples, &mut bytes);
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

/// `buffer[start..start + len]`, or an error naming the capture when the
/// window runs past its end.
pub fn window<'a>(buffer: &'a [f32], name: &str, start: usize, len: usize) -> anyhow::Result<&'a [f32]> {
    start
        .checked_add(len)
        .and_then(|end| buffer.get(start..end))
        .with_context(|| {
            format!(
                "{} window {}..{} is out of range for {} samples",
                name,
                start,
                start.saturating_add(len),
                buffer.len()
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds() {
        let buffer = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(window(&buffer, "test", 1, 3).unwrap(), &[1.0, 2.0, 3.0]);
        assert!(window(&buffer, "test", 4, 0).unwrap().is_empty());

        let err = window(&buffer, "received", 2, 3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "received window 2..5 is out of range for 4 samples"
        );
        assert!(window(&buffer, "test", usize::MAX, 2).is_err());
    }

    #[test]
    fn test_round_trip_is_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("capture.bin");
        let samples: Vec<f32> = (0..1000)
            .map(|i| (i as f32 * 0.37).sin() * 1e3 - 0.5)
            .chain([0.0, -0.0, f32::MIN_POSITIVE, f32::MAX, f32::MIN])
            .collect();

        write_samples(&path, &samples).unwrap();
        let back = read_samples(&path).unwrap();

        assert_eq!(back.len(), samples.len());
        for (a, b) in samples.iter().zip(back.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_layout_is_little_endian() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("one.bin");
        fs::write(&path, 1.0f32.to_le_bytes()).unwrap();

        assert_eq!(read_samples(&path).unwrap(), vec![1.0]);
    }

    #[test]
    fn test_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.bin");
        fs::write(&path, b"").unwrap();

        assert!(read_samples(&path).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("short.bin");
        fs::write(&path, [0u8; 6]).unwrap();

        let err = read_samples(&path).unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.bin");

        let err = read_samples(&path).unwrap_err();
        assert!(err.to_string().contains("nope.bin"));
    }
}
