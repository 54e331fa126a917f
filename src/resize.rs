//! Asset sets derived from an existing logo image instead of drawn from scratch.

use crate::asset::{AssetSpec, ADAPTIVE_ICON, APP_ICON, FAVICON, SPLASH_ICON};
use crate::palette::TRANSPARENT;
use image::{imageops::FilterType, DynamicImage, RgbaImage};

/// Assets produced by [`fit_assets`], in write order.
pub const FIT_ASSETS: [AssetSpec; 4] = [APP_ICON, FAVICON, ADAPTIVE_ICON, SPLASH_ICON];

pub const EXPO_ICON: AssetSpec = APP_ICON;
pub const EXPO_ADAPTIVE_ICON: AssetSpec =
    AssetSpec::new("adaptive-icon.png", 1024, 1024, "Android adaptive icon (logo in safe zone)");
pub const EXPO_SPLASH_ICON: AssetSpec =
    AssetSpec::new("splash-icon.png", 1024, 1024, "Splash screen");

/// Edge of the logo inside the Expo adaptive canvas, about 70% of it.
const EXPO_LOGO_SIZE: u32 = 720;

/// Shrink `source` to fit inside `width`x`height`, keeping its aspect ratio.
/// Images that already fit are returned unchanged.
pub fn fit_within(source: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if source.width() <= width && source.height() <= height {
        return source.clone();
    }
    source.resize(width, height, FilterType::Lanczos3)
}

/// Centre `source` (shrunk to fit) on a transparent canvas of the spec's size.
pub fn fit_onto_canvas(source: &DynamicImage, spec: &AssetSpec) -> RgbaImage {
    let fitted = fit_within(source, spec.width, spec.height).to_rgba8();
    let mut canvas = spec.canvas(TRANSPARENT);

    let x = (spec.width - fitted.width()) / 2;
    let y = (spec.height - fitted.height()) / 2;
    image::imageops::overlay(&mut canvas, &fitted, x.into(), y.into());

    canvas
}

/// icon, favicon, adaptive foreground and splash, each the centred logo.
pub fn fit_assets(source: &DynamicImage) -> Vec<(AssetSpec, RgbaImage)> {
    FIT_ASSETS
        .iter()
        .map(|spec| (*spec, fit_onto_canvas(source, spec)))
        .collect()
}

/// The Expo layout: a stretched full-bleed icon, plus an adaptive icon and
/// splash that keep the logo inside the launcher-mask safe zone.
pub fn expo_assets(source: &DynamicImage) -> Vec<(AssetSpec, RgbaImage)> {
    let icon = source
        .resize_exact(EXPO_ICON.width, EXPO_ICON.height, FilterType::Lanczos3)
        .to_rgba8();

    let logo = source
        .resize_exact(EXPO_LOGO_SIZE, EXPO_LOGO_SIZE, FilterType::Lanczos3)
        .to_rgba8();
    let mut adaptive = EXPO_ADAPTIVE_ICON.canvas(TRANSPARENT);
    let x = (EXPO_ADAPTIVE_ICON.width - EXPO_LOGO_SIZE) / 2;
    let y = (EXPO_ADAPTIVE_ICON.height - EXPO_LOGO_SIZE) / 2;
    image::imageops::replace(&mut adaptive, &logo, x.into(), y.into());

    let splash = adaptive.clone();

    vec![
        (EXPO_ICON, icon),
        (EXPO_ADAPTIVE_ICON, adaptive),
        (EXPO_SPLASH_ICON, splash),
    ]
}
