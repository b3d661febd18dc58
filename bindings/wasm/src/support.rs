// Support utilities for WASM bindings
use serde::de::DeserializeOwned;

/// Parse JSON config with defaults
/// Returns the deserialized config or the default value if parsing fails or config is empty
pub fn parse_with_defaults<T: DeserializeOwned + Default>(config_json: &str) -> T {
    if config_json.trim().is_empty() || config_json == "{}" {
        T::default()
    } else {
        serde_json::from_str::<T>(config_json).unwrap_or_else(|_| T::default())
    }
}
