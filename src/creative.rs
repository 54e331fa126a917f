//! The flat, creative icon set: solid hearts over soft ring gradients.

use crate::asset::{
    Asset, DrawContext, ADAPTIVE_ICON, APP_ICON, APP_STORE_ICON, BANNER_ICON, FAVICON,
    NOTIFICATION_ICON, SPLASH_ICON,
};
use crate::draw::{
    draw_text_centered, fill_circle, fill_heart, fill_rect, linear_gradient, plus_sign,
    radial_rings, ring, Direction,
};
use crate::palette::{lerp, TRANSPARENT};
use image::RgbaImage;
use tracing::debug;

pub const ASSETS: &[Asset] = &[
    Asset { spec: APP_ICON, draw: main_icon },
    Asset { spec: ADAPTIVE_ICON, draw: adaptive_icon },
    Asset { spec: FAVICON, draw: favicon },
    Asset { spec: SPLASH_ICON, draw: splash_icon },
    Asset { spec: NOTIFICATION_ICON, draw: notification_icon },
    Asset { spec: APP_STORE_ICON, draw: app_store_icon },
    Asset { spec: BANNER_ICON, draw: banner_icon },
];

/// Heart and medical cross on a white disc inside a green-to-beige halo.
///
/// The halo rings are painted outermost first, so the gradient is visible.
/// Painting them innermost first, as the first version of this icon did,
/// leaves an almost flat beige disc.
pub fn main_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = APP_ICON.canvas(TRANSPARENT);
    let center = (APP_ICON.width / 2) as i32;
    let radius = center as u32 - 20;

    radial_rings(&mut img, (center, center), radius, 1, |r| {
        lerp(p.primary, p.accent, r as f32 / radius as f32)
    });

    let inner_radius = radius as f32 - 80.0;
    fill_circle(&mut img, (center, center), inner_radius as i32, p.white);

    let c = center as f32;
    fill_heart(&mut img, (c, c - 50.0), inner_radius * 1.2, 5, p.secondary);

    let cross_size = inner_radius * 0.3;
    let cross = (c + inner_radius * 0.4, c + inner_radius * 0.3);
    plus_sign(&mut img, cross, cross_size, (cross_size / 4.0).floor(), p.primary);

    img
}

/// Foreground layer only; everything stays inside the 72px safe zone.
pub fn adaptive_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = ADAPTIVE_ICON.canvas(TRANSPARENT);
    let c = (ADAPTIVE_ICON.width / 2) as f32;

    fill_heart(&mut img, (c, c - 5.0), 35.0, 10, p.secondary);
    plus_sign(&mut img, (c, c + 15.0), 8.0, 2.0, p.primary);

    img
}

pub fn favicon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = FAVICON.canvas(TRANSPARENT);
    let center = (FAVICON.width / 2) as i32;
    let radius = center - 10;
    let inner_radius = radius - 15;

    fill_circle(&mut img, (center, center), radius, p.primary);
    fill_circle(&mut img, (center, center), inner_radius, p.white);

    let c = center as f32;
    fill_heart(&mut img, (c, c - 5.0), inner_radius as f32 * 0.8, 15, p.secondary);

    img
}

/// Big heart over a beige-to-green ring gradient, app name and tagline below.
pub fn splash_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = SPLASH_ICON.canvas(p.white);
    let center = SPLASH_ICON.width / 2;

    radial_rings(&mut img, (center as i32, center as i32), center, 20, |r| {
        lerp(p.accent, p.primary, (center - r) as f32 / center as f32)
    });

    let c = center as f32;
    fill_heart(&mut img, (c, c - 100.0), c * 0.6, 3, p.secondary);

    match &ctx.font {
        Some(font) => {
            let title_y = center as i32 + 200;
            draw_text_centered(&mut img, font, 120.0, title_y, &ctx.app_name, p.primary);
            draw_text_centered(&mut img, font, 60.0, title_y + 150, &ctx.tagline, p.secondary);
        }
        None => debug!("splash-icon.png: no font, skipping title"),
    }

    img
}

/// White plus on an orange disc.
pub fn notification_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = NOTIFICATION_ICON.canvas(TRANSPARENT);
    let center = (NOTIFICATION_ICON.width / 2) as i32;
    let radius = center - 10;

    fill_circle(&mut img, (center, center), radius, p.secondary);

    let c = center as f32;
    plus_sign(&mut img, (c, c), (radius - 20) as f32, 10.0, p.white);

    img
}

/// Rounded square: graded corner rings, then the solid body, then the heart.
pub fn app_store_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = APP_STORE_ICON.canvas(TRANSPARENT);
    let size = APP_STORE_ICON.width as i32;
    let corner = 200;
    let margin = 20;
    let center = size / 2;
    let outer = (size - 2 * margin) / 2;

    for i in 0..corner {
        let color = lerp(p.primary, p.accent, i as f32 / corner as f32);
        ring(&mut img, (center, center), outer - i, 1, color);
    }

    let (near, far) = (margin as f32, (size - margin) as f32);
    let corner = corner as f32;
    fill_rect(&mut img, near + corner, near, far - corner, far, p.primary);
    fill_rect(&mut img, near, near + corner, far, far - corner, p.primary);

    let c = center as f32;
    fill_heart(&mut img, (c, c - 50.0), 300.0, 2, p.secondary);

    img
}

/// Horizontal beige-to-green band with a heart on the left.
pub fn banner_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = BANNER_ICON.canvas(p.white);

    linear_gradient(&mut img, Direction::Horizontal, p.accent, p.primary);
    fill_heart(&mut img, (150.0, 200.0), 150.0, 5, p.secondary);

    img
}
