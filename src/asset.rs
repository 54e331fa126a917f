//! Output contract of a single asset and the shared PNG writer.

use crate::palette::Palette;
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use rusttype::Font;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// File name, pixel dimensions and purpose of one generated asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSpec {
    pub file_name: &'static str,
    pub width: u32,
    pub height: u32,
    pub purpose: &'static str,
}

impl AssetSpec {
    pub const fn new(file_name: &'static str, width: u32, height: u32, purpose: &'static str) -> Self {
        Self {
            file_name,
            width,
            height,
            purpose,
        }
    }

    /// A canvas of this asset's size filled with `fill`.
    pub fn canvas(&self, fill: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(self.width, self.height, fill)
    }
}

pub const APP_ICON: AssetSpec = AssetSpec::new("icon.png", 1024, 1024, "Main app icon");
pub const ADAPTIVE_ICON: AssetSpec =
    AssetSpec::new("adaptive-icon.png", 108, 108, "Android adaptive icon (foreground)");
pub const FAVICON: AssetSpec = AssetSpec::new("favicon.png", 192, 192, "Web favicon");
pub const SPLASH_ICON: AssetSpec = AssetSpec::new("splash-icon.png", 1280, 1280, "Splash screen");
pub const NOTIFICATION_ICON: AssetSpec =
    AssetSpec::new("notification-icon.png", 192, 192, "Notifications");
pub const APP_STORE_ICON: AssetSpec =
    AssetSpec::new("app-store-icon.png", 1024, 1024, "App store");
pub const BANNER_ICON: AssetSpec = AssetSpec::new("banner-icon.png", 1200, 400, "Header banner");
pub const LOGO_VARIANT: AssetSpec = AssetSpec::new("logo-variant.png", 512, 512, "Logo variant");

/// A procedurally drawn asset: its contract plus the routine that draws it.
#[derive(Clone, Copy)]
pub struct Asset {
    pub spec: AssetSpec,
    pub draw: fn(&DrawContext) -> RgbaImage,
}

impl std::fmt::Debug for Asset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Asset").field("spec", &self.spec).finish()
    }
}

/// Inputs shared by every drawing routine of one run.
pub struct DrawContext {
    pub palette: Palette,
    pub font: Option<Font<'static>>,
    pub app_name: String,
    pub tagline: String,
}

impl Default for DrawContext {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            font: None,
            app_name: "CareTrek".to_string(),
            tagline: "Bridging Generations".to_string(),
        }
    }
}

/// Write an RGBA image as a best-compression PNG.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_png(image, &mut out)
        .with_context(|| format!("Failed to write PNG: {}", path.display()))?;
    out.flush()?;
    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image: &RgbaImage, w: W) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::WARM_ORANGE;
    use tempfile::TempDir;

    #[test]
    fn test_canvas_has_spec_dimensions() {
        let spec = AssetSpec::new("banner-icon.png", 1200, 400, "Header banner");
        let canvas = spec.canvas(WARM_ORANGE);
        assert_eq!(canvas.dimensions(), (1200, 400));
        assert_eq!(*canvas.get_pixel(1199, 399), WARM_ORANGE);
    }

    #[test]
    fn test_save_png_round_trips_dimensions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.png");
        let image = RgbaImage::from_pixel(30, 20, WARM_ORANGE);

        save_png(&image, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (30, 20));
        assert_eq!(
            image::ImageFormat::from_path(&path).unwrap(),
            image::ImageFormat::Png
        );
    }

    #[test]
    fn test_save_png_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("out.png");
        let image = RgbaImage::new(4, 4);
        assert!(save_png(&image, &path).is_err());
    }
}
