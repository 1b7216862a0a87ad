//! Tests for the JSON bindings

use super::*;
use serde_json::Value;

const WORDS: &str = r#"{"words": [
    {"id": "1", "answer": "Tierra", "clue": "Planeta"},
    {"id": "2", "answer": "Luna", "clue": "Satélite"},
    {"id": "3", "answer": "Sol", "clue": "Estrella"}
]}"#;

#[test]
fn test_generate_layout_json() {
    let value: Value = serde_json::from_str(&generate_layout_json(WORDS)).unwrap();

    assert_eq!(value["gridSize"], 15);
    assert_eq!(value["connected"], true);
    assert_eq!(value["complete"], true);
    let clues = value["clues"].as_array().unwrap();
    assert_eq!(clues.len(), 3);
    assert_eq!(clues[0]["word"], "TIERRA");
    assert_eq!(clues[0]["number"], 1);
}

#[test]
fn test_generate_layout_json_with_config() {
    let request = r#"{"words": [{"id": "1", "answer": "Sol", "clue": "Estrella"}],
                      "config": {"gridSize": 5, "numbering": "readingOrder"}}"#;
    let value: Value = serde_json::from_str(&generate_layout_json(request)).unwrap();

    assert_eq!(value["gridSize"], 5);
    assert_eq!(value["numbering"], "readingOrder");
    assert_eq!(value["clues"][0]["position"]["row"], 2);
    assert_eq!(value["clues"][0]["position"]["col"], 1);
}

#[test]
fn test_generate_layout_json_errors() {
    let value: Value = serde_json::from_str(&generate_layout_json("not json")).unwrap();
    assert!(value["error"].as_str().unwrap().starts_with("invalid request"));

    let request = r#"{"words": [], "config": {"gridSize": 0}}"#;
    let value: Value = serde_json::from_str(&generate_layout_json(request)).unwrap();
    assert!(value["error"].is_string());
}

#[test]
fn test_verify_round_trip() {
    let layout = generate_layout_json(WORDS);
    let report: Value = serde_json::from_str(&verify_layout_json(&layout)).unwrap();

    assert_eq!(report["valid"], true);
    assert_eq!(report["connected"], true);
    assert!(report["violations"].as_array().unwrap().is_empty());
}

#[test]
fn test_verify_reports_conflict() {
    let mut layout: Layout = serde_json::from_str(&generate_layout_json(WORDS)).unwrap();
    // Slide the second word onto a cell of the first with a different letter
    let anchor = layout.clues[0].position;
    layout.clues[1].position = anchor;
    layout.clues[1].position.direction = anchor.direction.perpendicular();

    let json = serde_json::to_string(&layout).unwrap();
    let report: Value = serde_json::from_str(&verify_layout_json(&json)).unwrap();
    assert_eq!(report["valid"], false);
    assert!(!report["violations"].as_array().unwrap().is_empty());
}

#[test]
fn test_verify_reports_bad_grid_size() {
    let mut layout: Layout = serde_json::from_str(&generate_layout_json(WORDS)).unwrap();
    layout.grid_size = 1_000_000;
    layout.clues[0].position.row = usize::MAX;

    let json = serde_json::to_string(&layout).unwrap();
    let report: Value = serde_json::from_str(&verify_layout_json(&json)).unwrap();
    assert_eq!(report["valid"], false);
    assert_eq!(report["connected"], false);
    assert_eq!(report["violations"][0]["kind"], "invalidGridSize");
}

#[test]
fn test_verify_rejects_garbage() {
    let value: Value = serde_json::from_str(&verify_layout_json("{}")).unwrap();
    assert!(value["error"].as_str().unwrap().starts_with("invalid layout"));
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_generate_layout_js() {
        let words = vec![WordRecord::new("1", "Sol", "Estrella"), WordRecord::new("2", "Luna", "Satélite")];
        let value = serde_wasm_bindgen::to_value(&words).unwrap();
        let layout: Layout = serde_wasm_bindgen::from_value(generate_layout(value, Some(9), true).unwrap()).unwrap();
        assert_eq!(layout.grid_size, 9);
        assert!(layout.is_fully_connected());
    }
}
