// Observer registry for decoder and sentence notifications. One
// handler slot per event kind; registering again replaces the previous
// handler. Dispatch is synchronous on the caller's thread.

use crate::types::AudioState;

pub type AudioStateHandler = Box<dyn FnMut(AudioState, AudioState) + Send>;
pub type SentenceHandler = Box<dyn FnMut(&str, &str) + Send>;
pub type SegmentHandler = Box<dyn FnMut(&str) + Send>;

#[derive(Default)]
pub struct EventNotifier {
    audio_state_changed: Option<AudioStateHandler>,
    sentence_changed: Option<SentenceHandler>,
    character_end: Option<SegmentHandler>,
    word_end: Option<SegmentHandler>,
}

impl EventNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the audio-state-changed handler, called as
    /// `(current, previous)`.
    pub fn on_audio_state_changed(&mut self, handler: impl FnMut(AudioState, AudioState) + Send + 'static) {
        self.audio_state_changed = Some(Box::new(handler));
    }

    /// Register the sentence-changed handler, called as
    /// `(current, previous)`.
    pub fn on_sentence_changed(&mut self, handler: impl FnMut(&str, &str) + Send + 'static) {
        self.sentence_changed = Some(Box::new(handler));
    }

    /// Register the character-end handler, called with the symbols of
    /// the character just closed.
    pub fn on_character_end(&mut self, handler: impl FnMut(&str) + Send + 'static) {
        self.character_end = Some(Box::new(handler));
    }

    /// Register the word-end handler, called with the symbols of the
    /// word just closed.
    pub fn on_word_end(&mut self, handler: impl FnMut(&str) + Send + 'static) {
        self.word_end = Some(Box::new(handler));
    }

    pub(crate) fn notify_audio_state_changed(&mut self, current: AudioState, previous: AudioState) {
        if let Some(handler) = self.audio_state_changed.as_mut() {
            handler(current, previous);
        }
    }

    pub(crate) fn notify_sentence_changed(&mut self, current: &str, previous: &str) {
        if let Some(handler) = self.sentence_changed.as_mut() {
            handler(current, previous);
        }
    }

    pub(crate) fn notify_character_end(&mut self, character: &str) {
        if let Some(handler) = self.character_end.as_mut() {
            handler(character);
        }
    }

    pub(crate) fn notify_word_end(&mut self, word: &str) {
        if let Some(handler) = self.word_end.as_mut() {
            handler(word);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    #[test]
    fn test_unregistered_kinds_are_silent() {
        let mut notifier = EventNotifier::new();
        // No handlers registered; nothing to panic or block on
        notifier.notify_audio_state_changed(AudioState::ListeningSound, AudioState::NotListening);
        notifier.notify_sentence_changed(".", "");
        notifier.notify_character_end(".");
        notifier.notify_word_end(".-");
    }

    #[test]
    fn test_last_registration_wins() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let mut notifier = EventNotifier::new();
        let counter = first.clone();
        notifier.on_word_end(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = second.clone();
        notifier.on_word_end(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        notifier.notify_word_end("...");
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_sentence_changed_receives_current_then_previous() {
        let mut notifier = EventNotifier::new();
        let seen = Arc::new(std::sync::Mutex::new((String::new(), String::new())));
        let store = seen.clone();
        notifier.on_sentence_changed(move |current, previous| {
            *store.lock().unwrap() = (current.to_string(), previous.to_string());
        });

        notifier.notify_sentence_changed(".-", ".");
        let (current, previous) = seen.lock().unwrap().clone();
        assert_eq!(current, ".-");
        assert_eq!(previous, ".");
    }
}
