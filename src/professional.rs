//! The layered, professional icon set.
//!
//! Hearts here are stacks of shrinking heart layers, each a little darker than
//! the last, which reads as a soft gradient toward the middle of the shape.

use crate::asset::{
    Asset, DrawContext, ADAPTIVE_ICON, APP_ICON, APP_STORE_ICON, BANNER_ICON, FAVICON,
    LOGO_VARIANT, NOTIFICATION_ICON, SPLASH_ICON,
};
use crate::draw::{
    draw_text, draw_text_centered, fill_circle, fill_heart, fill_rect, linear_gradient,
    outline_heart, plus_sign, radial_rings, ring, text_extent, Direction,
};
use crate::palette::{lerp, shade, with_alpha, TRANSPARENT};
use image::{Rgba, RgbaImage};
use tracing::debug;

pub const ASSETS: &[Asset] = &[
    Asset { spec: APP_ICON, draw: main_icon },
    Asset { spec: ADAPTIVE_ICON, draw: adaptive_icon },
    Asset { spec: FAVICON, draw: favicon },
    Asset { spec: SPLASH_ICON, draw: splash_icon },
    Asset { spec: NOTIFICATION_ICON, draw: notification_icon },
    Asset { spec: APP_STORE_ICON, draw: app_store_icon },
    Asset { spec: BANNER_ICON, draw: banner_icon },
    Asset { spec: LOGO_VARIANT, draw: logo_variant },
];

/// Paint concentric heart layers from `outer` down to (but excluding) `inner`.
///
/// Layer `size` gets `base` darkened by `darken * (outer - size) / (outer - inner)`.
#[allow(clippy::too_many_arguments)]
fn layered_heart(
    img: &mut RgbaImage,
    center: (f32, f32),
    outer: f32,
    inner: f32,
    step: usize,
    base: Rgba<u8>,
    darken: f32,
    alpha: u8,
) {
    let span = outer - inner;
    // a bound that lands exactly on an integer still gets its layer
    let smallest = (inner - 1e-4).floor() as i32 + 1;
    for size in (smallest..=(outer as i32)).rev().step_by(step) {
        let ratio = (outer - size as f32) / span;
        let color = with_alpha(shade(base, 1.0 - ratio * darken), alpha);
        fill_heart(img, center, size as f32, 2, color);
    }
}

/// Disc filled with the primary-to-accent ring gradient (primary outside).
fn gradient_disc(img: &mut RgbaImage, center: i32, radius: u32, ctx: &DrawContext) {
    let p = &ctx.palette;
    radial_rings(img, (center, center), radius, 2, |r| {
        lerp(p.primary, p.accent, (radius - r) as f32 / radius as f32)
    });
}

/// Layered heart and medical cross on a shadowed white disc, ringed by dots.
pub fn main_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = APP_ICON.canvas(TRANSPARENT);
    let center = (APP_ICON.width / 2) as i32;

    gradient_disc(&mut img, center, center as u32, ctx);

    let inner_radius = (center as f32 * 0.75) as i32;
    fill_circle(&mut img, (center, center), inner_radius + 15, Rgba([0, 0, 0, 15]));
    fill_circle(&mut img, (center, center), inner_radius, p.white);

    let c = center as f32;
    let heart_size = inner_radius as f32 * 0.5;
    let heart = (c, c - 80.0);
    outline_heart(&mut img, heart, heart_size * 1.05, 2, p.secondary);
    layered_heart(&mut img, heart, heart_size * 1.05, heart_size * 0.8, 2, p.secondary, 0.2, 255);

    let cross_size = inner_radius as f32 * 0.25;
    let cross_at = c + inner_radius as f32 * 0.35;
    plus_sign(&mut img, (cross_at, cross_at), cross_size, 6.0, p.primary);

    for angle in [0.0f32, 90.0, 180.0, 270.0] {
        let t = angle.to_radians();
        let dot_x = heart.0 + t.cos() * (heart_size + 100.0);
        let dot_y = heart.1 + t.sin() * (heart_size + 100.0);
        fill_circle(&mut img, (dot_x.round() as i32, dot_y.round() as i32), 15, p.accent);
    }

    img
}

pub fn adaptive_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = ADAPTIVE_ICON.canvas(TRANSPARENT);
    let c = (ADAPTIVE_ICON.width / 2) as f32;

    layered_heart(&mut img, (c, c - 3.0), 28.0, 28.0 * 0.6, 1, p.secondary, 0.15, 255);
    plus_sign(&mut img, (c, c + 18.0), 6.0, 2.0, p.primary);

    img
}

pub fn favicon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = FAVICON.canvas(TRANSPARENT);
    let center = (FAVICON.width / 2) as i32;
    let radius = center - 8;

    gradient_disc(&mut img, center, radius as u32, ctx);

    let inner_radius = radius - 18;
    fill_circle(&mut img, (center, center), inner_radius, p.white);

    let c = center as f32;
    let heart_size = inner_radius as f32 * 0.65;
    fill_heart(&mut img, (c, c - 15.0), heart_size, 2, p.secondary);
    outline_heart(&mut img, (c, c - 15.0), heart_size, 2, p.secondary);

    img
}

/// Drop-shadowed heart over a radial wash, with a shadowed title underneath.
pub fn splash_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = SPLASH_ICON.canvas(p.white);
    let (cx, cy) = ((SPLASH_ICON.width / 2) as i32, (SPLASH_ICON.height / 2) as i32);

    // reach past the corners so the whole canvas is washed
    let max_radius = ((cx * cx + cy * cy) as f32).sqrt() as u32 + 100;
    radial_rings(&mut img, (cx, cy), max_radius, 20, |r| {
        lerp(p.accent, p.primary, r as f32 / max_radius as f32)
    });

    let heart_size = 300.0;
    let (hx, hy) = (cx as f32, cy as f32 - 150.0);
    for offset in [8.0f32, 4.0, 0.0] {
        let alpha = if offset == 0.0 {
            255
        } else {
            (255.0 * (1.0 - offset / 12.0)) as u8
        };
        let center = (hx + offset, hy + offset);
        layered_heart(&mut img, center, heart_size, heart_size * 0.7, 2, p.secondary, 0.1, alpha);
    }

    match &ctx.font {
        Some(font) => {
            let title_y = cy + 250;
            let (title_w, _) = text_extent(font, 140.0, &ctx.app_name);
            let title_x = (SPLASH_ICON.width as i32 - title_w) / 2;
            draw_text(
                &mut img,
                font,
                140.0,
                (title_x + 3, title_y + 3),
                &ctx.app_name,
                Rgba([0, 0, 0, 50]),
            );
            draw_text(&mut img, font, 140.0, (title_x, title_y), &ctx.app_name, p.primary);
            draw_text_centered(&mut img, font, 50.0, title_y + 180, &ctx.tagline, p.secondary);
        }
        None => debug!("splash-icon.png: no font, skipping title"),
    }

    img
}

/// White plus on a disc darkening from the rim toward the centre.
pub fn notification_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = NOTIFICATION_ICON.canvas(TRANSPARENT);
    let center = (NOTIFICATION_ICON.width / 2) as i32;
    let radius = (center - 12) as u32;

    radial_rings(&mut img, (center, center), radius, 2, |r| {
        let ratio = (radius - r) as f32 / radius as f32;
        shade(p.secondary, 1.0 - ratio * 0.3)
    });

    let c = center as f32;
    plus_sign(&mut img, (c, c), (radius - 30) as f32, 10.0, p.white);

    img
}

pub fn app_store_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = APP_STORE_ICON.canvas(TRANSPARENT);
    let size = APP_STORE_ICON.width as i32;
    let corner = 200;
    let margin = 20;
    let center = size / 2;
    let outer = (size - 2 * margin) / 2;

    for i in (1..=corner).rev().step_by(2) {
        let color = lerp(p.primary, p.accent, i as f32 / corner as f32);
        ring(&mut img, (center, center), outer - i, 2, color);
    }

    let (near, far) = (margin as f32, (size - margin) as f32);
    let corner = corner as f32;
    fill_rect(&mut img, near + corner, near, far - corner, far, p.primary);
    fill_rect(&mut img, near, near + corner, far, far - corner, p.primary);

    let c = center as f32;
    layered_heart(&mut img, (c, c - 80.0), 350.0, 350.0 * 0.7, 3, p.secondary, 0.2, 255);

    img
}

/// Gradient band, heart on the left, app name right-aligned in white.
pub fn banner_icon(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = BANNER_ICON.canvas(p.white);

    linear_gradient(&mut img, Direction::Horizontal, p.accent, p.primary);

    let heart = (150.0, (BANNER_ICON.height / 2) as f32);
    fill_heart(&mut img, heart, 120.0, 2, p.secondary);
    outline_heart(&mut img, heart, 120.0, 2, p.secondary);

    match &ctx.font {
        Some(font) => {
            let (text_w, text_h) = text_extent(font, 80.0, &ctx.app_name);
            let x = BANNER_ICON.width as i32 - text_w - 100;
            let y = (BANNER_ICON.height as i32 - text_h) / 2;
            draw_text(&mut img, font, 80.0, (x, y), &ctx.app_name, p.white);
        }
        None => debug!("banner-icon.png: no font, skipping title"),
    }

    img
}

pub fn logo_variant(ctx: &DrawContext) -> RgbaImage {
    let p = &ctx.palette;
    let mut img = LOGO_VARIANT.canvas(TRANSPARENT);
    let center = (LOGO_VARIANT.width / 2) as i32;
    let radius = center - 20;

    gradient_disc(&mut img, center, radius as u32, ctx);

    let inner_radius = radius - 40;
    fill_circle(&mut img, (center, center), inner_radius, p.white);

    let c = center as f32;
    let heart_size = inner_radius as f32 * 0.6;
    fill_heart(&mut img, (c, c - 30.0), heart_size, 2, p.secondary);
    outline_heart(&mut img, (c, c - 30.0), heart_size, 2, p.secondary);

    let plus_at = c + inner_radius as f32 * 0.3;
    plus_sign(&mut img, (plus_at, plus_at), inner_radius as f32 * 0.25, 8.0, p.primary);

    img
}
