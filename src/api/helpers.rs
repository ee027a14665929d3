//! Shared helpers for WASM API operations
//!
//! Serialization and validation glue shared by the API functions:
//! serde-wasm-bindgen conversions with logged error context and a
//! uniform error-to-JsValue path.

use serde::Serialize;
use wasm_bindgen::JsValue;

/// Serialize a value to JavaScript with logged error context
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Convert a validation/state error into a logged JsValue
pub fn api_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// Validate that an index is within bounds
pub fn validate_index(index: usize, max_length: usize, context: &str) -> Result<(), String> {
    if index >= max_length {
        return Err(format!(
            "{} index {} out of bounds (max: {})",
            context,
            index,
            max_length.saturating_sub(1)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index() {
        assert!(validate_index(0, 5, "slot").is_ok());
        assert!(validate_index(4, 5, "slot").is_ok());
        assert!(validate_index(5, 5, "slot").is_err());
    }
}
