// WebAssembly bindings to maintain JavaScript API compatibility
use js_sys::Array;
use morse_rx_core::types::{DecoderConfig, Sample};
use morse_rx_core::Decoder;
use wasm_bindgen::prelude::*;

mod support;

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

// Macro to generate wasm_bindgen wrapper enums that mirror core enums
macro_rules! wasm_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident = $value:expr),* $(,)?
        }
        from $core_type:ty
    ) => {
        #[wasm_bindgen]
        $(#[$meta])*
        $vis enum $name {
            $($variant = $value),*
        }

        impl From<$core_type> for $name {
            fn from(value: $core_type) -> Self {
                match value {
                    $(<$core_type>::$variant => $name::$variant),*
                }
            }
        }

        impl From<$name> for $core_type {
            fn from(value: $name) -> Self {
                match value {
                    $($name::$variant => <$core_type>::$variant),*
                }
            }
        }
    };
}

// Re-export the status enum with wasm_bindgen for JavaScript compatibility
wasm_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AudioState {
        NotListening = 0,
        ListeningNoSound = 1,
        ListeningSound = 2,
        DotLength = 3,
        DashLength = 4,
        CharacterDelimiterLength = 5,
        WordDelimiterLength = 6,
    }
    from morse_rx_core::types::AudioState
}

/// Stateful streaming decoder for JavaScript callers.
///
/// Push one sample per capture tick and poll `text`/`audio_state` for
/// UI feedback; native event handlers are not exposed over WASM.
#[wasm_bindgen]
pub struct SignalDecoder {
    inner: Decoder,
}

#[wasm_bindgen]
impl SignalDecoder {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> SignalDecoder {
        let config = support::parse_with_defaults::<DecoderConfig>(config_json);
        SignalDecoder {
            inner: Decoder::new(config),
        }
    }

    /// Process one already-classified presence sample.
    pub fn push_sample(&mut self, timestamp: f32, signal_present: bool) -> Result<(), JsValue> {
        self.inner
            .on_sample(timestamp, signal_present)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Classify a raw level against the configured threshold, then
    /// process it as a sample.
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
    pub fn audio_state(&self) -> AudioState {
        self.inner.audio_state().into()
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

    /// Back to idle, as when capture stops. Keeps the sentence.
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
///
/// `samples_json` is an array of `{ "timestamp": seconds, "on": bool }`
/// objects; `config_json` merges over the default configuration.
#[wasm_bindgen]
pub fn decode_signal_samples(samples_json: &str, config_json: &str) -> Result<String, JsValue> {
    let samples: Vec<Sample> = serde_json::from_str(samples_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid samples JSON: {}", e)))?;

    let config = support::parse_with_defaults::<DecoderConfig>(config_json);

    morse_rx_core::decode_samples(&samples, &config).map_err(|e| JsValue::from_str(&e.to_string()))
}
