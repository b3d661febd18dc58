use tracing::trace;

use crate::error::{DecodeError, Result};
use crate::events::EventNotifier;
use crate::level::is_signal_present;
use crate::sentence::{SentenceBuilder, DASH, DOT};
use crate::types::{AudioState, DecoderConfig, ListeningState};

/// Streaming timing-based decoder.
///
/// Feed one classified sample per call via [`on_sample`] (or a raw
/// level via [`on_level`]) with non-decreasing timestamps. Tones are
/// classified into dots and dashes by duration when they end; silence
/// gaps insert character and word delimiters. All work is synchronous;
/// callers driving samples and edits from different threads must
/// serialize access (a `Mutex<Decoder>` is enough — the decoder is
/// `Send`).
///
/// Silence before the first tone of a session (or after [`reset`])
/// has no preceding tone edge to measure from, so the reported status
/// jumps straight to `WordDelimiterLength`; the empty-sentence guard
/// keeps the sentence itself untouched.
///
/// [`reset`]: Decoder::reset
/// [`on_sample`]: Decoder::on_sample
/// [`on_level`]: Decoder::on_level
pub struct Decoder {
    config: DecoderConfig,
    listening: ListeningState,
    audio_state: AudioState,
    /// When the current/most recent tone began.
    sound_start_time: f32,
    /// When the most recent tone ended. Starts at -inf so the first
    /// tone of a session is never debounced away.
    sound_stop_time: f32,
    last_timestamp: Option<f32>,
    sentence: SentenceBuilder,
    notifier: EventNotifier,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_delimiters(config, ' ', '/')
    }

    /// Build a decoder with custom character/word delimiter symbols.
    pub fn with_delimiters(
        config: DecoderConfig,
        character_delimiter: char,
        word_delimiter: char,
    ) -> Self {
        Self {
            config,
            listening: ListeningState::NoSound,
            audio_state: AudioState::NotListening,
            sound_start_time: 0.0,
            sound_stop_time: f32::NEG_INFINITY,
            last_timestamp: None,
            sentence: SentenceBuilder::new(character_delimiter, word_delimiter),
            notifier: EventNotifier::new(),
        }
    }

    /// Process one presence sample. `timestamp` is in seconds and must
    /// not decrease between calls.
    pub fn on_sample(&mut self, timestamp: f32, signal_present: bool) -> Result<()> {
        if let Some(last) = self.last_timestamp {
            if timestamp < last {
                return Err(DecodeError::OutOfOrder { timestamp, last });
            }
        }
        self.last_timestamp = Some(timestamp);

        if signal_present {
            self.handle_presence(timestamp);
        } else {
            self.handle_silence(timestamp);
        }
        Ok(())
    }

    /// Classify a raw signal level against the configured threshold and
    /// process it as a sample.
    pub fn on_level(&mut self, timestamp: f32, level: f32) -> Result<()> {
        self.on_sample(timestamp, is_signal_present(level, self.config.threshold))
    }

    fn handle_presence(&mut self, timestamp: f32) {
        // Tone edge arriving right after a silence edge is jitter
        if timestamp - self.sound_stop_time < self.config.debounce_time {
            return;
        }

        if self.listening == ListeningState::Sound {
            // Tone still in progress: update observable status only
            let on_duration = timestamp - self.sound_start_time;
            if on_duration > self.config.dash_time {
                self.set_audio_state(AudioState::DashLength);
            } else if on_duration > self.config.dot_time {
                self.set_audio_state(AudioState::DotLength);
            }
        } else {
            trace!(timestamp, "tone started");
            self.set_audio_state(AudioState::ListeningSound);
            self.listening = ListeningState::Sound;
            self.sound_start_time = timestamp;
        }
    }

    fn handle_silence(&mut self, timestamp: f32) {
        // Silence edge arriving right after a tone began is jitter
        if timestamp - self.sound_start_time < self.config.debounce_time {
            return;
        }

        let off_duration = timestamp - self.sound_stop_time;
        let last_symbol = self.sentence.last_symbol();

        if self.listening == ListeningState::NoSound {
            if off_duration > self.config.word_gap_time {
                self.set_audio_state(AudioState::WordDelimiterLength);
                if self.sentence.is_empty() || last_symbol == Some(self.sentence.word_delimiter()) {
                    return;
                }
                if last_symbol == Some(self.sentence.character_delimiter()) {
                    // A word boundary supersedes the character boundary
                    // already on the sentence
                    self.sentence.remove_last_symbol();
                }
                let delimiter = self.sentence.word_delimiter();
                self.sentence.append(delimiter, &mut self.notifier);
            } else if off_duration > self.config.character_gap_time {
                self.set_audio_state(AudioState::CharacterDelimiterLength);
                if self.sentence.is_empty()
                    || last_symbol == Some(self.sentence.character_delimiter())
                    || last_symbol == Some(self.sentence.word_delimiter())
                {
                    return;
                }
                let delimiter = self.sentence.character_delimiter();
                self.sentence.append(delimiter, &mut self.notifier);
            } else {
                self.set_audio_state(AudioState::ListeningNoSound);
            }
        } else {
            // Tone just ended: classify it by duration. Status is left
            // for the next silence sample to report.
            self.sound_stop_time = timestamp;
            self.listening = ListeningState::NoSound;
            let on_duration = timestamp - self.sound_start_time;
            trace!(timestamp, on_duration, "tone ended");
            if on_duration > self.config.dash_time {
                self.sentence.append(DASH, &mut self.notifier);
            } else if on_duration > self.config.dot_time {
                self.sentence.append(DOT, &mut self.notifier);
            }
            // Shorter tones are noise and append nothing
        }
    }

    fn set_audio_state(&mut self, state: AudioState) {
        if state == self.audio_state {
            return;
        }
        let previous = self.audio_state;
        self.audio_state = state;
        trace!(?previous, current = ?state, "audio state changed");
        self.notifier.notify_audio_state_changed(state, previous);
    }

    /// Return to the idle state, as when sampling stops. The sentence
    /// is kept; timestamps and tone belief are cleared.
    pub fn reset(&mut self) {
        self.listening = ListeningState::NoSound;
        self.sound_start_time = 0.0;
        self.sound_stop_time = f32::NEG_INFINITY;
        self.last_timestamp = None;
        self.set_audio_state(AudioState::NotListening);
    }

    pub fn audio_state(&self) -> AudioState {
        self.audio_state
    }

    /// Whether a tone is currently believed to be sounding.
    pub fn is_sound(&self) -> bool {
        self.listening == ListeningState::Sound
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    // Configuration setters. Each takes effect on the next sample;
    // symbols already on the sentence are never reclassified.

    pub fn set_threshold(&mut self, threshold: f32) {
        self.config.threshold = threshold;
    }

    pub fn set_sample_interval(&mut self, sample_interval: f32) {
        self.config.sample_interval = sample_interval;
    }

    pub fn set_dot_time(&mut self, dot_time: f32) {
        self.config.dot_time = dot_time;
    }

    pub fn set_dash_time(&mut self, dash_time: f32) {
        self.config.dash_time = dash_time;
    }

    pub fn set_character_gap_time(&mut self, character_gap_time: f32) {
        self.config.character_gap_time = character_gap_time;
    }

    pub fn set_word_gap_time(&mut self, word_gap_time: f32) {
        self.config.word_gap_time = word_gap_time;
    }

    pub fn set_debounce_time(&mut self, debounce_time: f32) {
        self.config.debounce_time = debounce_time;
    }

    // Sentence facade

    /// The decoded sentence so far.
    pub fn text(&self) -> &str {
        self.sentence.text()
    }

    /// The decoded sentence split into words.
    pub fn words(&self) -> Vec<&str> {
        self.sentence.words()
    }

    pub fn character_delimiter(&self) -> char {
        self.sentence.character_delimiter()
    }

    pub fn word_delimiter(&self) -> char {
        self.sentence.word_delimiter()
    }

    pub fn clear_sentence(&mut self) {
        self.sentence.clear(&mut self.notifier);
    }

    pub fn delete_last_character(&mut self) {
        self.sentence.delete_last_character(&mut self.notifier);
    }

    pub fn delete_last_word(&mut self) {
        self.sentence.delete_last_word(&mut self.notifier);
    }

    // Event registration, one handler per kind (last wins)

    pub fn on_audio_state_changed(
        &mut self,
        handler: impl FnMut(AudioState, AudioState) + Send + 'static,
    ) {
        self.notifier.on_audio_state_changed(handler);
    }

    pub fn on_sentence_changed(&mut self, handler: impl FnMut(&str, &str) + Send + 'static) {
        self.notifier.on_sentence_changed(handler);
    }

    pub fn on_character_end(&mut self, handler: impl FnMut(&str) + Send + 'static) {
        self.notifier.on_character_end(handler);
    }

    pub fn on_word_end(&mut self, handler: impl FnMut(&str) + Send + 'static) {
        self.notifier.on_word_end(handler);
    }
}
