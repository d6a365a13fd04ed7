//! End-to-end pipeline scenarios: ingest, icon batches, backgrounds, sprites

use std::collections::HashMap;

use pixelsmith::generators::backgrounds::generate_background;
use pixelsmith::generators::chrome::{render_button, render_progress_bar};
use pixelsmith::generators::icons::{generate_icon, generate_icon_batch};
use pixelsmith::generators::sprites::{SpriteOptions, compose_sprite};
use pixelsmith::generators::tooltips::render_tooltip;
use pixelsmith::ingest::template::{IngestOptions, process_template};
use pixelsmith::io::image::{load_rgba, save_rgba};
use pixelsmith::layout::schema::ItemData;
use pixelsmith::layout::text::BitmapTextPainter;
use pixelsmith::color::hex_to_rgb;
use pixelsmith::raster::PixelBuffer;
use tempfile::TempDir;

/// Draft with the standard panel background and a 32x32 iron-gray square
fn iron_draft() -> PixelBuffer {
    let mut draft = PixelBuffer::filled(48, 48, [0x1A, 0x1A, 0x1F, 255]).unwrap();
    for y in 8..40 {
        for x in 8..40 {
            draft.set_pixel(x, y, [140, 140, 150, 255]);
        }
    }
    draft
}

fn ingest_iron_template(dir: &TempDir) -> std::path::PathBuf {
    let draft_path = dir.path().join("draft.png");
    save_rgba(&iron_draft(), &draft_path).unwrap();

    let template_dir = dir.path().join("templates");
    process_template(
        &draft_path,
        &template_dir,
        "sword",
        "item",
        IngestOptions::default(),
    )
    .unwrap();
    template_dir
}

#[test]
fn test_ingest_produces_template_and_metadata() {
    let dir = TempDir::new().unwrap();
    let draft_path = dir.path().join("draft.png");
    save_rgba(&iron_draft(), &draft_path).unwrap();

    let template_dir = dir.path().join("templates");
    let metadata = process_template(
        &draft_path,
        &template_dir,
        "sword",
        "item",
        IngestOptions::default(),
    )
    .unwrap();

    assert_eq!(metadata.name, "sword");
    assert_eq!(metadata.asset_type, "item");
    assert_eq!(metadata.width, 48);
    assert_eq!(metadata.height, 48);
    assert_eq!(metadata.regions.len(), 1);
    // Background removed: only the square survives
    assert_eq!(metadata.regions[0].pixels.len(), 32 * 32);
    assert!(template_dir.join("sword.png").exists());
    assert!(template_dir.join("sword.json").exists());
}

#[test]
fn test_ingest_reproduces_byte_identical_outputs() {
    let dir = TempDir::new().unwrap();
    let draft_path = dir.path().join("draft.png");
    save_rgba(&iron_draft(), &draft_path).unwrap();

    let out_a = dir.path().join("a");
    let out_b = dir.path().join("b");
    let options = IngestOptions::default();
    process_template(&draft_path, &out_a, "sword", "item", options).unwrap();
    process_template(&draft_path, &out_b, "sword", "item", options).unwrap();

    assert_eq!(
        std::fs::read(out_a.join("sword.png")).unwrap(),
        std::fs::read(out_b.join("sword.png")).unwrap()
    );
    assert_eq!(
        std::fs::read(out_a.join("sword.json")).unwrap(),
        std::fs::read(out_b.join("sword.json")).unwrap()
    );
}

#[test]
fn test_icon_generation_reproducible_per_seed() {
    let dir = TempDir::new().unwrap();
    let template_dir = ingest_iron_template(&dir);

    let out_a = dir.path().join("icons_a");
    let out_b = dir.path().join("icons_b");
    let path_a = generate_icon(&template_dir, "sword", "gold", "rare", 7, &out_a).unwrap();
    let path_b = generate_icon(&template_dir, "sword", "gold", "rare", 7, &out_b).unwrap();

    assert_eq!(
        path_a.file_name().unwrap().to_string_lossy(),
        "item-sword-gold-rare-007.png"
    );
    assert_eq!(
        std::fs::read(&path_a).unwrap(),
        std::fs::read(&path_b).unwrap()
    );
}

#[test]
fn test_quality_glow_expands_silhouette() {
    let dir = TempDir::new().unwrap();
    let template_dir = ingest_iron_template(&dir);
    let output = dir.path().join("icons");

    let common =
        generate_icon(&template_dir, "sword", "iron", "common", 42, &output).unwrap();
    let legendary =
        generate_icon(&template_dir, "sword", "iron", "legendary", 42, &output).unwrap();

    let common_opaque = load_rgba(&common).unwrap().opaque_count();
    let legendary_opaque = load_rgba(&legendary).unwrap().opaque_count();
    assert!(
        legendary_opaque > common_opaque,
        "glow must grow the silhouette: {legendary_opaque} vs {common_opaque}"
    );
}

#[test]
fn test_icon_batch_reports_failures_without_aborting() {
    let dir = TempDir::new().unwrap();
    let template_dir = ingest_iron_template(&dir);
    let output = dir.path().join("icons");

    let materials = vec!["iron".to_string(), "gold".to_string()];
    let qualities = vec!["common".to_string()];
    let seeds = vec![1, 2];

    let outcome = generate_icon_batch(
        &template_dir,
        "sword",
        &materials,
        &qualities,
        &seeds,
        &output,
        None,
    );
    assert_eq!(outcome.generated.len(), 4);
    assert!(outcome.failures.is_empty());

    // A missing template fails every tuple but still reports each one
    let outcome = generate_icon_batch(
        &template_dir,
        "missing",
        &materials,
        &qualities,
        &seeds,
        &output,
        None,
    );
    assert!(outcome.generated.is_empty());
    assert_eq!(outcome.failures.len(), 4);
    assert_eq!(outcome.failures[0].material, "iron");
    assert_eq!(outcome.failures[0].seed, 1);
}

#[test]
fn test_background_deterministic_and_sized() {
    let a = generate_background("wildwood", 64, 48, 42, false).unwrap();
    let b = generate_background("wildwood", 64, 48, 42, false).unwrap();
    let c = generate_background("wildwood", 64, 48, 43, false).unwrap();

    assert_eq!(a.extent(), (64, 48));
    assert_eq!(a, b);
    assert_ne!(a, c);

    // Every pixel is fully opaque
    assert_eq!(a.opaque_count(), 64 * 48);
}

#[test]
fn test_background_tileable_mode() {
    let tiled = generate_background("mistmoors", 64, 64, 7, true).unwrap();
    assert_eq!(tiled.extent(), (64, 64));
    assert_eq!(tiled.opaque_count(), 64 * 64);
}

#[test]
fn test_sprite_composition_skips_missing_layers() {
    let dir = TempDir::new().unwrap();

    let mut body = PixelBuffer::new(256, 512).unwrap();
    for y in 100..400 {
        for x in 100..156 {
            body.set_pixel(x, y, [180, 140, 120, 255]);
        }
    }
    save_rgba(&body, &dir.path().join("body.png")).unwrap();

    let mut layers = HashMap::new();
    layers.insert("body".to_string(), "body.png".to_string());
    layers.insert("chest".to_string(), "missing_chest.png".to_string());

    let sprite = compose_sprite(dir.path(), &layers, SpriteOptions::default()).unwrap();
    assert_eq!(sprite.extent(), (256, 512));
    // Body pixels survive; the missing chest layer is skipped silently
    assert!(sprite.alpha(128, 200) > 0);
    // Floor shadow appears beneath the body
    assert!(sprite.alpha(128, 492) > 0);
}

#[test]
fn test_sprite_resizes_mismatched_layers() {
    let dir = TempDir::new().unwrap();
    let small = PixelBuffer::filled(64, 128, [50, 60, 70, 255]).unwrap();
    save_rgba(&small, &dir.path().join("body.png")).unwrap();

    let mut layers = HashMap::new();
    layers.insert("body".to_string(), "body.png".to_string());

    let sprite = compose_sprite(
        dir.path(),
        &layers,
        SpriteOptions {
            max_colors: 0,
            add_shadow: false,
        },
    )
    .unwrap();
    assert_eq!(sprite.extent(), (256, 512));
    assert_eq!(sprite.opaque_count(), 256 * 512);
}

#[test]
fn test_progress_bar_colors_and_fill() {
    let bar = render_progress_bar(50, 8, 1.0, "mana").unwrap();
    assert_eq!(bar.extent(), (50, 8));

    let fill = hex_to_rgb("#2255CC").unwrap();
    let border = hex_to_rgb("#112266").unwrap();
    assert_eq!(bar.pixel(2, 4), Some([fill[0], fill[1], fill[2], 255]));
    assert_eq!(bar.pixel(0, 0), Some([border[0], border[1], border[2], 255]));

    let empty = render_progress_bar(50, 8, 0.0, "mana").unwrap();
    let bg = hex_to_rgb("#0A0A3A").unwrap();
    assert_eq!(empty.pixel(2, 4), Some([bg[0], bg[1], bg[2], 255]));
}

#[test]
fn test_button_renders_label() {
    let painter = BitmapTextPainter;
    let plain = render_button(60, 20, "", &painter).unwrap();
    let labeled = render_button(60, 20, "OK", &painter).unwrap();
    assert_eq!(labeled.extent(), (60, 20));
    assert_ne!(plain, labeled);
}

#[test]
fn test_tooltip_renders_sections_deterministically() {
    let painter = BitmapTextPainter;
    let item = ItemData {
        name: "Emberfang".to_string(),
        quality: "epic".to_string(),
        slot: "Two-Hand".to_string(),
        bind: "Binds when equipped".to_string(),
        item_level: Some(60),
        primary_stats: vec!["+15 Strength".to_string()],
        secondary_stats: vec!["Equip: Increases crit by 1%".to_string()],
        flavor_text: "Still warm to the touch.".to_string(),
        source: "Drops from: Ignis".to_string(),
        ..ItemData::default()
    };

    let a = render_tooltip(&item, &painter).unwrap();
    let b = render_tooltip(&item, &painter).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.width(), 320 + 10);
    assert!(a.height() > 60);

    // A sparser item yields a shorter tooltip
    let minimal = ItemData {
        name: "Stick".to_string(),
        ..ItemData::default()
    };
    let short = render_tooltip(&minimal, &painter).unwrap();
    assert!(short.height() < a.height());
}
