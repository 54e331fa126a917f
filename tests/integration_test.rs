use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs `caretrek-assets creative -o <tmp>` and asserts that every documented
/// asset exists, is a PNG and has its documented dimensions.
#[test]
fn test_creative_assets_match_contract() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("assets");

    let output = run_generator(&["creative", "-o"], &output_dir);
    assert_success(&output, "creative");

    let expected = [
        ("icon.png", 1024, 1024),
        ("adaptive-icon.png", 108, 108),
        ("favicon.png", 192, 192),
        ("splash-icon.png", 1280, 1280),
        ("notification-icon.png", 192, 192),
        ("app-store-icon.png", 1024, 1024),
        ("banner-icon.png", 1200, 400),
    ];
    for (name, width, height) in expected {
        assert_png(&output_dir.join(name), width, height);
    }
    assert!(!output_dir.join("logo-variant.png").exists());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ Created icon.png (1024x1024)"));
    assert!(stdout.contains("✓ Created banner-icon.png (1200x400)"));
}

#[test]
fn test_professional_assets_and_manifest() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("assets");

    let output = run_generator(&["professional", "-o"], &output_dir);
    assert_success(&output, "professional");

    assert_png(&output_dir.join("logo-variant.png"), 512, 512);
    assert_png(&output_dir.join("splash-icon.png"), 1280, 1280);

    let manifest_content = std::fs::read_to_string(output_dir.join("manifest.json"))
        .expect("Failed to read manifest.json");
    let parsed: serde_json::Value =
        serde_json::from_str(&manifest_content).expect("manifest.json should be valid JSON");

    let images = parsed["images"].as_array().expect("images should be an array");
    assert_eq!(images.len(), 8);
    assert_eq!(parsed["info"]["version"], 1);
    assert_eq!(parsed["info"]["style"], "professional");

    for (i, image) in images.iter().enumerate() {
        let filename = image["filename"]
            .as_str()
            .unwrap_or_else(|| panic!("Image entry {} should have filename", i));
        let width = image["width"].as_u64().expect("width") as u32;
        let height = image["height"].as_u64().expect("height") as u32;
        assert_png(&output_dir.join(filename), width, height);
    }
}

#[test]
fn test_fit_centres_source_logo() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source_path = temp_dir.path().join("logo.png");
    create_test_image(&source_path, 400, 200);
    let output_dir = temp_dir.path().join("assets");

    let output = Command::new(get_binary_path())
        .arg("fit")
        .arg("--source")
        .arg(&source_path)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run caretrek-assets");
    assert_success(&output, "fit");

    assert_png(&output_dir.join("icon.png"), 1024, 1024);
    assert_png(&output_dir.join("splash-icon.png"), 1280, 1280);

    // the 400x200 logo is not upscaled inside the 1024 canvas
    let icon = image::open(output_dir.join("icon.png")).unwrap().to_rgba8();
    assert_eq!(icon.get_pixel(512, 512)[3], 255);
    assert_eq!(icon.get_pixel(512, 300)[3], 0);
    assert_eq!(icon.get_pixel(200, 512)[3], 0);

    // the 108 canvas gets a shrunk 108x54 copy
    let adaptive = image::open(output_dir.join("adaptive-icon.png")).unwrap().to_rgba8();
    assert_eq!(adaptive.dimensions(), (108, 108));
    assert_eq!(adaptive.get_pixel(54, 54)[3], 255);
    assert_eq!(adaptive.get_pixel(54, 10)[3], 0);
}

#[test]
fn test_expo_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let source_path = temp_dir.path().join("logo.png");
    create_test_image(&source_path, 512, 512);
    let output_dir = temp_dir.path().join("assets");

    let output = Command::new(get_binary_path())
        .arg("expo")
        .arg("--source")
        .arg(&source_path)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run caretrek-assets");
    assert_success(&output, "expo");

    assert_png(&output_dir.join("icon.png"), 1024, 1024);
    assert_png(&output_dir.join("adaptive-icon.png"), 1024, 1024);
    assert_png(&output_dir.join("splash-icon.png"), 1024, 1024);

    let adaptive = std::fs::read(output_dir.join("adaptive-icon.png")).unwrap();
    let splash = std::fs::read(output_dir.join("splash-icon.png")).unwrap();
    assert_eq!(adaptive, splash);
}

/// A missing source image is reported but is not a failure.
#[test]
fn test_missing_source_exits_cleanly() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("assets");
    let missing = temp_dir.path().join("does-not-exist.png");

    let output = Command::new(get_binary_path())
        .arg("fit")
        .arg("--source")
        .arg(&missing)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run caretrek-assets");
    assert_success(&output, "fit with missing source");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Source image not found"), "stdout: {stdout}");
    assert!(!output_dir.exists());
}

/// Errors are printed with their cause chain and the exit status stays 0.
#[test]
fn test_errors_are_reported_not_fatal() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("assets");

    let output = Command::new(get_binary_path())
        .arg("creative")
        .arg("--primary")
        .arg("definitely-not-a-colour")
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run caretrek-assets");
    assert_success(&output, "creative with a bad colour");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("❌ Error creating icons"), "stdout: {stdout}");
    assert!(!output_dir.join("icon.png").exists());
}

#[test]
fn test_verify_assets_binary() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output_dir = temp_dir.path().join("assets");
    let source_path = temp_dir.path().join("logo.png");
    create_test_image(&source_path, 128, 128);

    let output = Command::new(get_binary_path())
        .arg("fit")
        .arg("--source")
        .arg(&source_path)
        .arg("-o")
        .arg(&output_dir)
        .output()
        .expect("Failed to run caretrek-assets");
    assert_success(&output, "fit");

    let verify = Command::new(env!("CARGO_BIN_EXE_verify-assets"))
        .arg(&output_dir)
        .output()
        .expect("Failed to run verify-assets");
    assert_success(&verify, "verify-assets");

    // shrink one asset behind the manifest's back
    RgbaImage::new(10, 10)
        .save(output_dir.join("favicon.png"))
        .expect("Failed to overwrite favicon");

    let verify = Command::new(env!("CARGO_BIN_EXE_verify-assets"))
        .arg(&output_dir)
        .output()
        .expect("Failed to run verify-assets");
    assert!(!verify.status.success());
    let stdout = String::from_utf8_lossy(&verify.stdout);
    assert!(stdout.contains("favicon.png is 10x10, expected 192x192"), "stdout: {stdout}");
}

fn run_generator(args: &[&str], output_dir: &Path) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .arg(output_dir)
        .output()
        .expect("Failed to run caretrek-assets")
}

fn assert_success(output: &Output, what: &str) {
    if !output.status.success() {
        eprintln!("Command failed with status: {}", output.status);
        eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
        panic!("caretrek-assets {} failed", what);
    }
}

fn assert_png(path: &Path, width: u32, height: u32) {
    assert!(path.exists(), "{} should exist", path.display());
    assert_eq!(
        image::ImageFormat::from_path(path).unwrap(),
        image::ImageFormat::Png
    );
    let img = image::open(path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e));
    assert_eq!(
        (img.width(), img.height()),
        (width, height),
        "{} has the wrong size",
        path.display()
    );
}

/// Creates an opaque test logo with a gradient
fn create_test_image(path: &Path, width: u32, height: u32) {
    let mut image = RgbaImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let red = (255.0 * x as f32 / width as f32) as u8;
        let green = (255.0 * y as f32 / height as f32) as u8;
        *pixel = Rgba([red, green, 128, 255]);
    }

    image.save(path).expect("Failed to save test image");
}

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_caretrek-assets"))
}
