use tracing::debug;

use crate::events::EventNotifier;

/// Symbol appended for a dot-length tone.
pub const DOT: char = '.';
/// Symbol appended for a dash-length tone.
pub const DASH: char = '-';

/// Owns the accumulated symbol string and the delimiter rules.
///
/// The sentence is a flat sequence of `.`/`-` symbols, character
/// delimiters, and word delimiters. Mutation happens here only; the
/// decoder and external edit calls both go through these methods, so a
/// caller mixing the two must serialize them.
pub struct SentenceBuilder {
    text: String,
    character_delimiter: char,
    word_delimiter: char,
}

impl Default for SentenceBuilder {
    fn default() -> Self {
        Self::new(' ', '/')
    }
}

impl SentenceBuilder {
    pub fn new(character_delimiter: char, word_delimiter: char) -> Self {
        Self {
            text: String::new(),
            character_delimiter,
            word_delimiter,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn last_symbol(&self) -> Option<char> {
        self.text.chars().last()
    }

    pub fn character_delimiter(&self) -> char {
        self.character_delimiter
    }

    pub fn word_delimiter(&self) -> char {
        self.word_delimiter
    }

    /// The word segments of the sentence, in order. Empty segments
    /// (leading/trailing delimiters) are skipped.
    pub fn words(&self) -> Vec<&str> {
        self.text
            .split(self.word_delimiter)
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// Append one symbol and fire the matching notifications.
    ///
    /// A word delimiter fires word-end with the word being closed, a
    /// character delimiter fires character-end with the character being
    /// closed; both segments are taken from the text as it was before
    /// the delimiter landed. Every append fires sentence-changed.
    pub fn append(&mut self, symbol: char, notifier: &mut EventNotifier) {
        let previous = self.text.clone();
        self.text.push(symbol);
        debug!(symbol = %symbol, sentence = %self.text, "symbol appended");

        if symbol == self.word_delimiter {
            notifier.notify_word_end(last_segment(&previous, self.word_delimiter));
        } else if symbol == self.character_delimiter {
            notifier.notify_character_end(last_segment(&previous, self.character_delimiter));
        }
        notifier.notify_sentence_changed(&self.text, &previous);
    }

    /// Reset to the empty sentence. Always fires one sentence-changed.
    pub fn clear(&mut self, notifier: &mut EventNotifier) {
        let previous = std::mem::take(&mut self.text);
        debug!("sentence cleared");
        notifier.notify_sentence_changed("", &previous);
    }

    /// Remove the trailing character-delimited segment and its
    /// delimiter. No-op (and no event) on an empty sentence.
    pub fn delete_last_character(&mut self, notifier: &mut EventNotifier) {
        self.delete_last_segment(self.character_delimiter, notifier);
    }

    /// Remove the trailing word-delimited segment and its delimiter.
    /// No-op (and no event) on an empty sentence.
    pub fn delete_last_word(&mut self, notifier: &mut EventNotifier) {
        self.delete_last_segment(self.word_delimiter, notifier);
    }

    // Split-on-delimiter, drop the last element, re-join — expressed as
    // a truncate at the final delimiter. No delimiter means the whole
    // sentence is one trailing segment.
    fn delete_last_segment(&mut self, delimiter: char, notifier: &mut EventNotifier) {
        if self.text.is_empty() {
            return;
        }
        let previous = self.text.clone();
        match self.text.rfind(delimiter) {
            Some(index) => self.text.truncate(index),
            None => self.text.clear(),
        }
        debug!(sentence = %self.text, "trailing segment deleted");
        notifier.notify_sentence_changed(&self.text, &previous);
    }

    /// Drop the single trailing symbol without notifying. Used by the
    /// decoder when a word boundary supersedes the character delimiter
    /// that was already appended.
    pub(crate) fn remove_last_symbol(&mut self) {
        self.text.pop();
    }
}

/// The last element of `text` split on `delimiter`, found by scanning
/// from the end. An empty text or a trailing delimiter yields `""`,
/// matching split semantics.
fn last_segment(text: &str, delimiter: char) -> &str {
    let start = text
        .rfind(delimiter)
        .map(|index| index + delimiter.len_utf8())
        .unwrap_or(0);
    &text[start..]
}
