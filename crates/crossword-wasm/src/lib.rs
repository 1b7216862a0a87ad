//! WebAssembly bindings for the crossword layout engine
//!
//! Exposes layout generation and verification to JavaScript, either as
//! plain JS objects (via `serde-wasm-bindgen`) or as JSON strings.

use crossword_core::{is_connected, Layout, LayoutConfig, LayoutEngine, LayoutViolation, NumberingMode, WordRecord};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

mod console;

// Initialize panic hook and logging for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    console::init();
}

/// Lay out `words` (an array of `{id, answer, clue, ...}` objects).
///
/// Returns the layout as a JS object; bad input or an invalid grid size
/// rejects with a message string.
#[wasm_bindgen(js_name = generateLayout)]
pub fn generate_layout(words: JsValue, grid_size: Option<usize>, reading_order: bool) -> Result<JsValue, JsValue> {
    let words: Vec<WordRecord> =
        serde_wasm_bindgen::from_value(words).map_err(|e| JsValue::from_str(&format!("invalid words: {}", e)))?;

    let mut config = LayoutConfig::default();
    if let Some(size) = grid_size {
        config = config.with_grid_size(size);
    }
    if reading_order {
        config = config.with_numbering(NumberingMode::ReadingOrder);
    }

    let layout = run(config, &words).map_err(|e| JsValue::from_str(&e))?;
    serde_wasm_bindgen::to_value(&layout).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// JSON request accepted by [`generate_layout_json`]
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    words: Vec<WordRecord>,
    #[serde(default)]
    config: LayoutConfig,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response<T> {
    Ok(T),
    Err { error: String },
}

fn to_json<T: Serialize>(response: Response<T>) -> String {
    serde_json::to_string(&response).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
}

fn run(config: LayoutConfig, words: &[WordRecord]) -> Result<Layout, String> {
    let engine = LayoutEngine::new(config).map_err(|e| e.to_string())?;
    Ok(engine.place_all(words))
}

/// Lay out words from a JSON request `{"words": [...], "config": {...}}`.
///
/// Always returns JSON: the layout, or `{"error": "..."}`.
#[wasm_bindgen(js_name = generateLayoutJson)]
pub fn generate_layout_json(request: &str) -> String {
    let response = match serde_json::from_str::<GenerateRequest>(request) {
        Ok(req) => match run(req.config, &req.words) {
            Ok(layout) => Response::Ok(layout),
            Err(error) => Response::Err { error },
        },
        Err(e) => Response::Err {
            error: format!("invalid request: {}", e),
        },
    };
    to_json(response)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VerifyReport {
    valid: bool,
    connected: bool,
    violations: Vec<LayoutViolation>,
}

/// Re-check a layout JSON string; returns a JSON report
#[wasm_bindgen(js_name = verifyLayoutJson)]
pub fn verify_layout_json(layout: &str) -> String {
    let response = match serde_json::from_str::<Layout>(layout) {
        Ok(layout) => {
            let violations = layout.verify();
            let connected = violations.is_empty() && is_connected(&layout.words());
            Response::Ok(VerifyReport {
                valid: connected,
                connected,
                violations,
            })
        }
        Err(e) => Response::Err {
            error: format!("invalid layout: {}", e),
        },
    };
    to_json(response)
}

#[cfg(test)]
mod tests;
