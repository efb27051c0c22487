//! Tests for POST /api/grid and POST /api/grid/edit.

mod common;

use axum::http::StatusCode;
use bead_quant::{load_palette, FilterStyle, Vendor, VendorCodes};
use beadgrid::models::AppConfig;
use beadgrid::services::PaletteStore;
use common::fixtures::{self, RED, TRANSPARENT};
use common::{assert_api_error, assert_ok, assert_square_grid, cell_hexes, TestApp};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

/// App with a two-color palette so expected matches are obvious
fn red_green_app() -> TestApp {
    let codes = |mard: &str, coco: &str| {
        VendorCodes::new()
            .with(Vendor::Mard, mard)
            .with(Vendor::Coco, coco)
            .with(Vendor::Manman, mard)
            .with(Vendor::Panpan, "65")
            .with(Vendor::Mixiaowo, "65")
    };
    let palette = load_palette(vec![("#FF0000", codes("F5", "G05")), ("#00FF00", codes("B3", "B03"))]);
    TestApp::with(AppConfig::default(), PaletteStore::new(palette))
}

#[tokio::test]
async fn test_generate_uses_configured_defaults() {
    let app = TestApp::new();
    let json = app.generate("", fixtures::solid_png(20, 20, RED)).await;

    assert_square_grid(&json, 50);
    assert_eq!(json["style"], "none");
    assert_eq!(json["scale"], "contain");
    assert!(json["legend"].is_array());
}

#[tokio::test]
async fn test_generate_solid_red() {
    let app = red_green_app();
    let json = app.generate("?size=10", fixtures::solid_png(16, 16, RED)).await;

    assert_square_grid(&json, 10);
    assert!(cell_hexes(&json).iter().all(|h| h == "#FF0000"));

    let cell = &json["rows"][3][7];
    assert_eq!(cell["codes"]["MARD"], "F5");
    assert_eq!(cell["codes"]["COCO"], "G05");
    assert_eq!(cell["codes"]["咪小窝"], "65");

    assert_eq!(
        json["legend"],
        json!([{
            "hex": "#FF0000",
            "codes": {"MARD": "F5", "COCO": "G05", "漫漫": "F5", "盼盼": "65", "咪小窝": "65"},
            "count": 100
        }])
    );
}

#[tokio::test]
async fn test_generate_contain_margins_are_transparent() {
    let app = red_green_app();
    let json = app.generate("?size=10&scale=contain", fixtures::solid_png(10, 20, RED)).await;

    for row in json["rows"].as_array().unwrap() {
        for (x, cell) in row.as_array().unwrap().iter().enumerate() {
            if (2..7).contains(&x) {
                assert_eq!(cell["hex"], "#FF0000", "column {x}");
            } else {
                assert_eq!(cell["hex"], "transparent", "column {x}");
                assert_eq!(cell["codes"]["MARD"], "");
            }
        }
    }
    assert_eq!(json["legend"][0]["count"], 50);
}

#[tokio::test]
async fn test_generate_transparent_image_is_empty() {
    let app = TestApp::new();
    let json = app.generate("?size=8", fixtures::solid_png(8, 8, TRANSPARENT)).await;

    assert!(cell_hexes(&json).iter().all(|h| h == "transparent"));
    assert_eq!(json["legend"], json!([]));
}

#[tokio::test]
async fn test_generate_stretch_translucent_is_white() {
    let app = TestApp::new();
    let json = app
        .generate("?size=6&scale=stretch", fixtures::solid_png(3, 9, [40, 40, 40, 120]))
        .await;

    assert_eq!(json["scale"], "stretch");
    assert!(cell_hexes(&json).iter().all(|h| h == "#FFFFFF"));
}

#[tokio::test]
async fn test_generate_candy_only_uses_candy_colors() {
    let app = TestApp::new();
    let image = fixtures::split_png(30, 30, [150, 140, 90, 255], [90, 160, 200, 255]);
    let json = app.generate("?size=12&style=candy", image).await;
    assert_eq!(json["style"], "candy");

    let allowed: Vec<String> = app
        .state
        .palette
        .filtered(FilterStyle::Candy)
        .iter()
        .map(|e| e.hex.clone())
        .collect();
    for hex in cell_hexes(&json) {
        assert!(allowed.contains(&hex), "{hex} is not a candy color");
    }
}

#[tokio::test]
async fn test_generate_rejects_size_out_of_range() {
    let app = TestApp::new();

    let response = app.post_bytes("/api/grid?size=4", fixtures::solid_png(4, 4, RED)).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);

    let response = app.post_bytes("/api/grid?size=65", fixtures::solid_png(4, 4, RED)).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);

    let response = app.post_bytes("/api/grid?size=64", fixtures::solid_png(4, 4, RED)).await;
    assert_ok(&response);
}

#[tokio::test]
async fn test_generate_rejects_unknown_style_and_scale() {
    let app = TestApp::new();

    let response = app.post_bytes("/api/grid?style=neon", fixtures::solid_png(4, 4, RED)).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("neon"));

    let response = app.post_bytes("/api/grid?scale=cover", fixtures::solid_png(4, 4, RED)).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_undecodable_body() {
    let app = TestApp::new();
    let response = app.post_bytes("/api/grid?size=10", b"GIF89a but not really".to_vec()).await;
    assert_api_error(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_generate_empty_body() {
    let app = TestApp::new();
    let response = app.post_bytes("/api/grid", Vec::new()).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_body_limit() {
    let config = AppConfig {
        max_upload_bytes: 64,
        ..AppConfig::default()
    };
    let app = TestApp::with(config, PaletteStore::new(Vec::new()));

    let response = app.post_bytes("/api/grid", vec![0u8; 1024]).await;
    assert_api_error(&response, StatusCode::PAYLOAD_TOO_LARGE);
    let json: Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("64 byte"));

    let body = json!({"grid": {"rows": [[]]}, "edit": {"op": "erase", "row": 0, "col": 0}, "pad": "x".repeat(128)});
    let response = app.post_json("/api/grid/edit", &body.to_string()).await;
    assert_api_error(&response, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_generate_malformed_query_is_json_error() {
    let app = TestApp::new();

    let response = app.post_bytes("/api/grid?size=abc", fixtures::solid_png(4, 4, RED)).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("query"), "{json}");

    let response = app.post_bytes("/api/grid?size=-3", fixtures::solid_png(4, 4, RED)).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_generate_empty_palette_uses_fallback_cells() {
    let app = TestApp::with(AppConfig::default(), PaletteStore::new(Vec::new()));
    let json = app
        .generate("?size=5&scale=stretch", fixtures::solid_png(5, 5, [10, 120, 240, 255]))
        .await;

    let cell = &json["rows"][0][0];
    assert_eq!(cell["hex"], "#FFFFFF");
    for vendor in ["MARD", "COCO", "漫漫", "盼盼", "咪小窝"] {
        assert_eq!(cell["codes"][vendor], "-");
    }
}

// ============================================================================
// Editing
// ============================================================================

async fn red_grid(app: &TestApp) -> Value {
    let json = app.generate("?size=5", fixtures::solid_png(5, 5, RED)).await;
    json!({"rows": json["rows"]})
}

#[tokio::test]
async fn test_edit_paint() {
    let app = red_green_app();
    let grid = red_grid(&app).await;

    let body = json!({
        "grid": grid,
        "edit": {"op": "paint", "row": 0, "col": 4, "hex": "00ff00"}
    });
    let response = app.post_json("/api/grid/edit", &body.to_string()).await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_square_grid(&json, 5);
    assert_eq!(json["rows"][0][4]["hex"], "#00FF00");
    assert_eq!(json["rows"][0][4]["codes"]["MARD"], "B3");
    assert_eq!(json["rows"][0][3]["hex"], "#FF0000");
    assert_eq!(json["legend"][0]["count"], 24);
    assert_eq!(json["legend"][1]["hex"], "#00FF00");
}

#[tokio::test]
async fn test_edit_erase() {
    let app = red_green_app();
    let grid = red_grid(&app).await;

    let body = json!({"grid": grid, "edit": {"op": "erase", "row": 2, "col": 2}});
    let response = app.post_json("/api/grid/edit", &body.to_string()).await;
    assert_ok(&response);

    let json: Value = response.json();
    assert_eq!(json["rows"][2][2]["hex"], "transparent");
    assert_eq!(json["legend"][0]["count"], 24);
}

#[tokio::test]
async fn test_edit_unknown_color() {
    let app = red_green_app();
    let grid = red_grid(&app).await;

    let body = json!({"grid": grid, "edit": {"op": "paint", "row": 0, "col": 0, "hex": "#0000FF"}});
    let response = app.post_json("/api/grid/edit", &body.to_string()).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_out_of_bounds() {
    let app = red_green_app();
    let grid = red_grid(&app).await;

    let body = json!({"grid": grid, "edit": {"op": "erase", "row": 5, "col": 0}});
    let response = app.post_json("/api/grid/edit", &body.to_string()).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_malformed_grid() {
    let app = red_green_app();

    let ragged = json!({
        "grid": {"rows": [[{"hex": "#FF0000", "codes": {}}], []]},
        "edit": {"op": "erase", "row": 0, "col": 0}
    });
    let response = app.post_json("/api/grid/edit", &ragged.to_string()).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);

    let response = app.post_json("/api/grid/edit", "{not json").await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_rejects_cells_outside_palette() {
    let app = red_green_app();

    let body = json!({
        "grid": {"rows": [[{"hex": "#123456", "codes": {"MARD": "X1"}}]]},
        "edit": {"op": "erase", "row": 0, "col": 0}
    });
    let response = app.post_json("/api/grid/edit", &body.to_string()).await;
    assert_api_error(&response, StatusCode::BAD_REQUEST);
    let json: Value = response.json();
    assert!(json["error"].as_str().unwrap().contains("#123456"));
}
