// Signal classification boundary. Level computation (RMS, peak, FFT
// bin power) belongs to the sampler; the decoder only needs the
// boolean comparison against the configured cutoff.

/// Classify a raw signal level against the threshold. Strictly above
/// counts as tone; a level exactly at the threshold is silence.
pub fn is_signal_present(level: f32, threshold: f32) -> bool {
    level > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_above_threshold_is_tone() {
        assert!(is_signal_present(0.2, 0.1));
    }

    #[test]
    fn test_at_or_below_threshold_is_silence() {
        assert!(!is_signal_present(0.1, 0.1));
        assert!(!is_signal_present(0.05, 0.1));
    }
}
