use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::error::{DecodeError, Result};

/// Timing and threshold parameters for a decoding session.
///
/// All durations are in seconds. Construction never validates so that
/// callers can exercise degenerate configurations; use [`validate`]
/// when sane decoding matters.
///
/// [`validate`]: DecoderConfig::validate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DecoderConfig {
    /// Signal level above which a sample counts as tone. The unit is
    /// whatever the external level computation produces.
    pub threshold: f32,
    /// Expected period between samples. Informational only; the decoder
    /// never enforces the cadence.
    pub sample_interval: f32,
    /// Tones longer than this (and at most `dash_time`) decode as a dot.
    pub dot_time: f32,
    /// Tones longer than this decode as a dash.
    pub dash_time: f32,
    /// Silence longer than this inserts a character delimiter.
    pub character_gap_time: f32,
    /// Silence longer than this inserts a word delimiter.
    pub word_gap_time: f32,
    /// Transitions within this window of the previous opposite edge are
    /// ignored as jitter.
    pub debounce_time: f32,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            sample_interval: 0.05,
            dot_time: 0.15,
            dash_time: 0.45,
            character_gap_time: 0.6,
            word_gap_time: 1.4,
            debounce_time: 0.05,
        }
    }
}

impl DecoderConfig {
    /// Check the ordering the timing thresholds need for unambiguous
    /// classification: `dash_time > dot_time`, `character_gap_time >
    /// dot_time`, `word_gap_time > character_gap_time`.
    pub fn validate(&self) -> Result<()> {
        if self.dash_time <= self.dot_time {
            return Err(DecodeError::InvalidConfig(format!(
                "dashTime ({}) must exceed dotTime ({})",
                self.dash_time, self.dot_time
            )));
        }
        if self.character_gap_time <= self.dot_time {
            return Err(DecodeError::InvalidConfig(format!(
                "characterGapTime ({}) must exceed dotTime ({})",
                self.character_gap_time, self.dot_time
            )));
        }
        if self.word_gap_time <= self.character_gap_time {
            return Err(DecodeError::InvalidConfig(format!(
                "wordGapTime ({}) must exceed characterGapTime ({})",
                self.word_gap_time, self.character_gap_time
            )));
        }
        Ok(())
    }
}

/// Internal tone belief. Drives every decoding decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListeningState {
    NoSound,
    Sound,
}

/// Externally observable decoder status. Feedback only — decoding
/// decisions never read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum AudioState {
    NotListening = 0,
    ListeningNoSound = 1,
    ListeningSound = 2,
    DotLength = 3,
    DashLength = 4,
    CharacterDelimiterLength = 5,
    WordDelimiterLength = 6,
}

/// One classified input sample: was the signal above threshold at
/// `timestamp` (seconds)?
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sample {
    pub timestamp: f32,
    pub on: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(DecoderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_dash_not_above_dot() {
        let config = DecoderConfig {
            dot_time: 0.5,
            dash_time: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_word_gap_not_above_character_gap() {
        let config = DecoderConfig {
            character_gap_time: 2.0,
            word_gap_time: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_json_partial_merge() {
        // Empty JSON keeps defaults
        let config: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.dot_time, 0.15);
        assert_eq!(config.word_gap_time, 1.4);

        // Partial JSON merges over defaults, camelCase keys
        let json = r#"{"dotTime": 0.5, "dashTime": 1.5, "debounceTime": 0.25}"#;
        let config: DecoderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.dot_time, 0.5);
        assert_eq!(config.dash_time, 1.5);
        assert_eq!(config.debounce_time, 0.25);
        assert_eq!(config.threshold, 0.1); // default
    }

    #[test]
    fn test_audio_state_serializes_as_number() {
        let json = serde_json::to_string(&AudioState::DashLength).unwrap();
        assert_eq!(json, "4");
        let state: AudioState = serde_json::from_str("6").unwrap();
        assert_eq!(state, AudioState::WordDelimiterLength);
    }
}
