//! Byte-level statistics over a sample window.

/// Sample window taken from the start of the payload.
pub const SAMPLE_WINDOW: usize = 5000;

/// Byte statistics computed from the sample window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ByteSignals {
    /// Distinct byte values divided by the sample length, in [0, 1].
    /// A uniqueness proxy, not true Shannon entropy; 0 for an empty sample.
    pub file_entropy: f64,
    /// Longest run of consecutive identical bytes divided by the sample
    /// length; 0 for an empty sample.
    pub run_fraction: f64,
}

/// Compute byte statistics from the first [`SAMPLE_WINDOW`] bytes.
pub fn extract(payload: &[u8]) -> ByteSignals {
    let sample = &payload[..payload.len().min(SAMPLE_WINDOW)];
    if sample.is_empty() {
        return ByteSignals::default();
    }

    let mut seen = [false; 256];
    let mut distinct = 0usize;
    let mut max_run = 1usize;
    let mut run = 1usize;

    for (i, &b) in sample.iter().enumerate() {
        if !seen[b as usize] {
            seen[b as usize] = true;
            distinct += 1;
        }
        if i > 0 {
            if b == sample[i - 1] {
                run += 1;
                if run > max_run {
                    max_run = run;
                }
            } else {
                run = 1;
            }
        }
    }

    let len = sample.len() as f64;
    ByteSignals {
        file_entropy: distinct as f64 / len,
        run_fraction: max_run as f64 / len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_defaults_to_zero() {
        let signals = extract(&[]);
        assert_eq!(signals.file_entropy, 0.0);
        assert_eq!(signals.run_fraction, 0.0);
    }

    #[test]
    fn test_all_identical_bytes() {
        let signals = extract(&[7u8; 100]);
        assert!((signals.file_entropy - 0.01).abs() < 1e-9);
        assert_eq!(signals.run_fraction, 1.0);
    }

    #[test]
    fn test_all_distinct_bytes() {
        let payload: Vec<u8> = (0..=255).collect();
        let signals = extract(&payload);
        assert_eq!(signals.file_entropy, 1.0);
        assert!((signals.run_fraction - 1.0 / 256.0).abs() < 1e-9);
    }

    #[test]
    fn test_run_anywhere_in_sample() {
        let mut payload: Vec<u8> = (0..100).map(|i| (i % 7) as u8 + 1).collect();
        payload.extend_from_slice(&[0u8; 40]);
        payload.extend((0..100).map(|i| (i % 7) as u8 + 1));
        let signals = extract(&payload);
        assert!((signals.run_fraction - 40.0 / 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_only_sample_window_is_scanned() {
        // Long run past the window must not count
        let mut payload = vec![0u8; SAMPLE_WINDOW];
        for (i, b) in payload.iter_mut().enumerate() {
            *b = (i % 256) as u8;
        }
        payload.extend_from_slice(&[9u8; 10_000]);
        let signals = extract(&payload);
        assert!(signals.run_fraction < 0.01);
    }
}
