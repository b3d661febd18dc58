// WebAssembly bindings to maintain JavaScript API compatibility
use crate::decoder::Decoder;
use crate::types::{DecoderConfig, Sample};
use js_sys::Array;
use wasm_bindgen::prelude::*;

// Console logging for debugging
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[allow(unused_macros)]
macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

fn parse_config(config_json: &str) -> DecoderConfig {
    // Start with defaults, then overlay any provided config
    if config_json.trim().is_empty() || config_json == "{}" {
        DecoderConfig::default()
    } else {
        serde_json::from_str::<DecoderConfig>(config_json)
            .unwrap_or_else(|_| DecoderConfig::default())
    }
}

/// Stateful decoder for JavaScript callers. Push samples as they
/// arrive and poll `text`/`audio_state`; event handlers are a
/// native-only feature.
#[wasm_bindgen]
pub struct SignalDecoder {
    inner: Decoder,
}

#[wasm_bindgen]
impl SignalDecoder {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> SignalDecoder {
        SignalDecoder {
            inner: Decoder::new(parse_config(config_json)),
        }
    }

    pub fn push_sample(&mut self, timestamp: f32, signal_present: bool) -> Result<(), JsValue> {
        self.inner
            .on_sample(timestamp, signal_present)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn push_level(&mut self, timestamp: f32, level: f32) -> Result<(), JsValue> {
        self.inner
            .on_level(timestamp, level)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.inner.text().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn audio_state(&self) -> u8 {
        self.inner.audio_state() as u8
    }

    #[wasm_bindgen(getter)]
    pub fn is_sound(&self) -> bool {
        self.inner.is_sound()
    }

    /// The decoded sentence split into words, as a JS array of strings.
    #[wasm_bindgen(getter)]
    pub fn words(&self) -> Array {
        let array = Array::new();
        for word in self.inner.words() {
            array.push(&JsValue::from_str(word));
        }
        array
    }

    pub fn clear(&mut self) {
        self.inner.clear_sentence();
    }

    pub fn delete_last_character(&mut self) {
        self.inner.delete_last_character();
    }

    pub fn delete_last_word(&mut self) {
        self.inner.delete_last_word();
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn set_threshold(&mut self, threshold: f32) {
        self.inner.set_threshold(threshold);
    }

    pub fn set_sample_interval(&mut self, sample_interval: f32) {
        self.inner.set_sample_interval(sample_interval);
    }

    pub fn set_dot_time(&mut self, dot_time: f32) {
        self.inner.set_dot_time(dot_time);
    }

    pub fn set_dash_time(&mut self, dash_time: f32) {
        self.inner.set_dash_time(dash_time);
    }

    pub fn set_character_gap_time(&mut self, character_gap_time: f32) {
        self.inner.set_character_gap_time(character_gap_time);
    }

    pub fn set_word_gap_time(&mut self, word_gap_time: f32) {
        self.inner.set_word_gap_time(word_gap_time);
    }

    pub fn set_debounce_time(&mut self, debounce_time: f32) {
        self.inner.set_debounce_time(debounce_time);
    }
}

/// Decode a pre-recorded sample sequence in one call.
#[wasm_bindgen]
pub fn decode_signal_samples(samples_json: &str, config_json: &str) -> Result<String, JsValue> {
    let samples: Vec<Sample> = serde_json::from_str(samples_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid samples JSON: {}", e)))?;

    let config = parse_config(config_json);

    crate::decode_samples(&samples, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // JS values cannot be constructed off-wasm, so these tests stick
    // to the plain-Rust paths of the surface.

    #[test]
    fn test_parse_config_merges_over_defaults() {
        let config = parse_config("{}");
        assert_eq!(config.dot_time, 0.15);

        let config = parse_config(r#"{"dotTime": 0.5, "sampleInterval": 0.2}"#);
        assert_eq!(config.dot_time, 0.5);
        assert_eq!(config.sample_interval, 0.2);
        assert_eq!(config.word_gap_time, 1.4); // default
    }

    #[test]
    fn test_signal_decoder_surface() {
        let mut decoder = SignalDecoder::new(
            r#"{"dotTime": 0.5, "dashTime": 1.5, "characterGapTime": 2.0,
                "wordGapTime": 3.0, "debounceTime": 0.25}"#,
        );
        decoder.set_sample_interval(0.1);

        let mut i = 0;
        while (i as f32) * 0.1 < 0.6 {
            decoder.push_sample(i as f32 * 0.1, true).unwrap();
            i += 1;
        }
        while (i as f32) * 0.1 < 2.9 {
            decoder.push_sample(i as f32 * 0.1, false).unwrap();
            i += 1;
        }
        assert_eq!(decoder.text(), ". ");

        decoder.delete_last_character();
        assert_eq!(decoder.text(), ".");
        decoder.clear();
        assert_eq!(decoder.text(), "");
    }
}
