// Timing-based Morse signal decoding library
// Turns a stream of (timestamp, signal-present) samples into dot/dash
// symbols with character and word delimiters

pub mod decoder;
pub mod error;
pub mod events;
pub mod level;
pub mod sentence;
pub mod types;

// Re-export main public API
pub use decoder::Decoder;
pub use error::{DecodeError, Result};
pub use events::EventNotifier;
pub use level::is_signal_present;
pub use sentence::{SentenceBuilder, DASH, DOT};
pub use types::*;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

/// Run a fresh decoder over a pre-recorded sample sequence and return
/// the decoded sentence text.
pub fn decode_samples(samples: &[Sample], config: &DecoderConfig) -> Result<String> {
    let mut decoder = Decoder::new(config.clone());
    for sample in samples {
        decoder.on_sample(sample.timestamp, sample.on)?;
    }
    Ok(decoder.text().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_config() -> DecoderConfig {
        DecoderConfig {
            dot_time: 0.5,
            dash_time: 1.5,
            character_gap_time: 2.0,
            word_gap_time: 3.0,
            debounce_time: 0.25,
            ..Default::default()
        }
    }

    fn samples(ranges: &[(f32, f32, bool)]) -> Vec<Sample> {
        let mut out = Vec::new();
        for &(from, to, on) in ranges {
            let mut i = 0;
            loop {
                let timestamp = from + i as f32 * 0.1;
                if timestamp >= to {
                    break;
                }
                out.push(Sample { timestamp, on });
                i += 1;
            }
        }
        out
    }

    #[test]
    fn test_decode_dot_and_character_delimiter() {
        let text = decode_samples(
            &samples(&[(0.0, 0.6, true), (0.6, 2.9, false)]),
            &spec_config(),
        )
        .unwrap();
        assert_eq!(text, ". ");
    }

    #[test]
    fn test_decode_dash_and_word_delimiter() {
        let text = decode_samples(
            &samples(&[(0.0, 2.0, true), (2.0, 5.6, false)]),
            &spec_config(),
        )
        .unwrap();
        assert_eq!(text, "-/");
    }

    #[test]
    fn test_decode_two_characters() {
        // dot, character gap, dash
        let text = decode_samples(
            &samples(&[(0.0, 0.6, true), (0.6, 3.0, false), (3.0, 5.0, true), (5.0, 5.1, false)]),
            &spec_config(),
        )
        .unwrap();
        assert_eq!(text, ". -");
    }

    #[test]
    fn test_decode_rejects_out_of_order_samples() {
        let result = decode_samples(
            &[
                Sample { timestamp: 1.0, on: false },
                Sample { timestamp: 0.5, on: false },
            ],
            &spec_config(),
        );
        assert!(matches!(result, Err(DecodeError::OutOfOrder { .. })));
    }

    #[test]
    fn test_decode_empty_input_is_empty_sentence() {
        let text = decode_samples(&[], &spec_config()).unwrap();
        assert_eq!(text, "");
    }
}
