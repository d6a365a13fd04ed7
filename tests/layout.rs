//! Validates layout parsing, panel-relative positioning, and screen rendering

use pixelsmith::color::hex_to_rgb;
use pixelsmith::layout::engine::LayoutEngine;
use pixelsmith::layout::schema::Layout;
use pixelsmith::layout::text::{BitmapTextPainter, TextPainter};
use tempfile::TempDir;

fn parse_layout(json: &str) -> Layout {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_background_and_rect_render() {
    let layout = parse_layout(
        r##"{
            "width": 40,
            "height": 30,
            "background": "#12121A",
            "elements": [
                {"type": "rect", "x": 5, "y": 5, "width": 10, "height": 10, "color": "#CC2222"}
            ]
        }"##,
    );

    let screen = LayoutEngine::new().render(&layout).unwrap();
    assert_eq!(screen.extent(), (40, 30));

    let bg = hex_to_rgb("#12121A").unwrap();
    let rect = hex_to_rgb("#CC2222").unwrap();
    assert_eq!(screen.pixel(0, 0), Some([bg[0], bg[1], bg[2], 255]));
    assert_eq!(screen.pixel(7, 7), Some([rect[0], rect[1], rect[2], 255]));
    assert_eq!(screen.pixel(20, 20), Some([bg[0], bg[1], bg[2], 255]));
}

#[test]
fn test_panel_children_positioned_relative_to_panel() {
    let layout = parse_layout(
        r##"{
            "width": 80,
            "height": 80,
            "elements": [
                {
                    "type": "panel", "x": 10, "y": 10, "width": 60, "height": 60,
                    "elements": [
                        {"type": "rect", "x": 20, "y": 20, "width": 4, "height": 4, "color": "#FF0000"}
                    ]
                }
            ]
        }"##,
    );

    let screen = LayoutEngine::new().render(&layout).unwrap();
    let red = hex_to_rgb("#FF0000").unwrap();
    // Child rect lands at panel origin + child offset
    assert_eq!(screen.pixel(30, 30), Some([red[0], red[1], red[2], 255]));
    assert_eq!(screen.pixel(20, 20), Some(hex_to_rgb("#1A1A1F").map(|c| [c[0], c[1], c[2], 255]).unwrap()));
}

#[test]
fn test_separator_draws_single_row() {
    let layout = parse_layout(
        r##"{
            "width": 30,
            "height": 10,
            "elements": [
                {"type": "separator", "x": 2, "y": 5, "width": 20}
            ]
        }"##,
    );

    let screen = LayoutEngine::new().render(&layout).unwrap();
    let rule = hex_to_rgb("#3D3529").unwrap();
    assert_eq!(screen.pixel(2, 5), Some([rule[0], rule[1], rule[2], 255]));
    assert_eq!(screen.pixel(21, 5), Some([rule[0], rule[1], rule[2], 255]));
    assert_eq!(screen.pixel(2, 6), Some([0, 0, 0, 0]));
}

#[test]
fn test_text_and_progress_bar_elements() {
    let layout = parse_layout(
        r##"{
            "width": 120,
            "height": 60,
            "elements": [
                {"type": "text", "x": 4, "y": 4, "text": "HP", "size": 8, "color": "#FFFFFF"},
                {"type": "progress_bar", "x": 4, "y": 20, "width": 100, "height": 12, "progress": 0.5, "bar_type": "health"}
            ]
        }"##,
    );

    let screen = LayoutEngine::new().render(&layout).unwrap();
    assert!(screen.opaque_count() > 0);

    // Half-full health bar: fill on the left, background on the right
    let fill = hex_to_rgb("#CC2222").unwrap();
    let bg = hex_to_rgb("#3A0A0A").unwrap();
    assert_eq!(screen.pixel(10, 26), Some([fill[0], fill[1], fill[2], 255]));
    assert_eq!(screen.pixel(100, 26), Some([bg[0], bg[1], bg[2], 255]));
}

#[test]
fn test_missing_image_is_skipped() {
    let layout = parse_layout(
        r##"{
            "width": 20,
            "height": 20,
            "elements": [
                {"type": "image", "x": 0, "y": 0, "path": "does/not/exist.png"}
            ]
        }"##,
    );

    let screen = LayoutEngine::new().render(&layout).unwrap();
    assert_eq!(screen.opaque_count(), 0);
}

#[test]
fn test_render_from_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("screen.json");
    std::fs::write(
        &path,
        r##"{"width": 32, "height": 16, "background": "#1A1A1F", "elements": []}"##,
    )
    .unwrap();

    let engine = LayoutEngine::new();
    let a = engine.render_from_file(&path).unwrap();
    let b = engine.render_from_file(&path).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.extent(), (32, 16));

    assert!(engine.render_from_file(&dir.path().join("absent.json")).is_err());
}

#[test]
fn test_bitmap_painter_measures_and_scales() {
    let painter = BitmapTextPainter;

    assert_eq!(painter.measure("abc", "body", 8), (24, 8));
    // Size 16 doubles the glyph scale
    assert_eq!(painter.measure("abc", "body", 16), (48, 16));
    // Sub-glyph sizes clamp to scale 1
    assert_eq!(painter.measure("a", "body", 5), (8, 8));

    let rendered = painter.render("A", "body", 8, "#FFFFFF").unwrap();
    assert_eq!(rendered.extent(), (8, 8));
    assert!(rendered.opaque_count() > 0);

    let a = painter.render("Hello", "heading", 12, "#E8D5B0").unwrap();
    let b = painter.render("Hello", "heading", 12, "#E8D5B0").unwrap();
    assert_eq!(a, b);

    assert!(painter.render("x", "body", 8, "not-a-color").is_err());
}
