//! Drawing primitives used by the procedural styles.
//!
//! Every painter composites its colour over the existing pixels, so a
//! translucent fill (shadows, text shadows) blends instead of punching a
//! see-through hole into the image. Each pixel is blended at most once per
//! primitive.

use crate::geometry::{heart_points, rect_from_corners, to_polygon};
use crate::palette::{lerp, with_alpha};
use image::{GrayImage, Pixel, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_hollow_circle_mut,
    draw_line_segment_mut, draw_polygon_mut, draw_text_mut, Canvas,
};
use rusttype::{point, Font, Scale};

/// Source-over view of an image.
///
/// Opaque colours are drawn straight into the image. Translucent colours are
/// first rasterised into a coverage mask, and [`Over::finish`] blends every
/// covered pixel once, however often the rasteriser visited it.
struct Over<'a> {
    img: &'a mut RgbaImage,
    color: Rgba<u8>,
    coverage: Option<GrayImage>,
}

impl<'a> Over<'a> {
    fn new(img: &'a mut RgbaImage, color: Rgba<u8>) -> Self {
        let coverage = (color[3] != 255).then(|| GrayImage::new(img.width(), img.height()));
        Self {
            img,
            color,
            coverage,
        }
    }

    /// Colour to hand to the rasteriser. When masking, its alpha is the coverage.
    fn ink(&self) -> Rgba<u8> {
        match self.coverage {
            Some(_) => Rgba([255, 255, 255, 255]),
            None => self.color,
        }
    }

    fn finish(self) {
        let Self {
            img,
            color,
            coverage,
        } = self;
        let Some(mask) = coverage else {
            return;
        };
        for (x, y, covered) in mask.enumerate_pixels() {
            if covered[0] == 0 {
                continue;
            }
            let alpha = (color[3] as u32 * covered[0] as u32 / 255) as u8;
            img.get_pixel_mut(x, y).blend(&with_alpha(color, alpha));
        }
    }
}

impl Canvas for Over<'_> {
    type Pixel = Rgba<u8>;

    fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        match &self.coverage {
            Some(_) => Rgba([0, 0, 0, 0]),
            None => *self.img.get_pixel(x, y),
        }
    }

    fn draw_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        match &mut self.coverage {
            Some(mask) => {
                let covered = mask.get_pixel_mut(x, y);
                covered[0] = covered[0].max(color[3]);
            }
            None => match color[3] {
                255 => self.img.put_pixel(x, y, color),
                0 => {}
                _ => self.img.get_pixel_mut(x, y).blend(&color),
            },
        }
    }
}

fn blended(img: &mut RgbaImage, color: Rgba<u8>, paint: impl FnOnce(&mut Over<'_>, Rgba<u8>)) {
    if color[3] == 0 {
        return;
    }
    let mut canvas = Over::new(img, color);
    let ink = canvas.ink();
    paint(&mut canvas, ink);
    canvas.finish();
}

pub fn fill_circle(img: &mut RgbaImage, center: (i32, i32), radius: i32, color: Rgba<u8>) {
    if radius <= 0 {
        return;
    }
    blended(img, color, |canvas, ink| draw_filled_circle_mut(canvas, center, radius, ink));
}

/// Circle outline `width` pixels thick, growing inward from `radius`.
pub fn ring(img: &mut RgbaImage, center: (i32, i32), radius: i32, width: i32, color: Rgba<u8>) {
    blended(img, color, |canvas, ink| {
        for r in (radius - width + 1).max(1)..=radius {
            draw_hollow_circle_mut(canvas, center, r, ink);
        }
    });
}

/// Filled rectangle from inclusive corners.
pub fn fill_rect(img: &mut RgbaImage, x0: f32, y0: f32, x1: f32, y1: f32, color: Rgba<u8>) {
    let Some(rect) = rect_from_corners(
        x0.round() as i32,
        y0.round() as i32,
        x1.round() as i32,
        y1.round() as i32,
    ) else {
        return;
    };
    blended(img, color, |canvas, ink| draw_filled_rect_mut(canvas, rect, ink));
}

/// A plus sign made of two crossed bars centred on `center`.
pub fn plus_sign(
    img: &mut RgbaImage,
    center: (f32, f32),
    half_len: f32,
    half_width: f32,
    color: Rgba<u8>,
) {
    let (cx, cy) = center;
    fill_rect(img, cx - half_len, cy - half_width, cx + half_len, cy + half_width, color);
    fill_rect(img, cx - half_width, cy - half_len, cx + half_width, cy + half_len, color);
}

pub fn fill_heart(
    img: &mut RgbaImage,
    center: (f32, f32),
    size: f32,
    step_degrees: u32,
    color: Rgba<u8>,
) {
    let polygon = to_polygon(&heart_points(center, size, step_degrees));
    if polygon.is_empty() {
        return;
    }
    blended(img, color, |canvas, ink| draw_polygon_mut(canvas, &polygon, ink));
}

pub fn outline_heart(
    img: &mut RgbaImage,
    center: (f32, f32),
    size: f32,
    step_degrees: u32,
    color: Rgba<u8>,
) {
    let points = heart_points(center, size, step_degrees);
    if points.len() < 3 {
        return;
    }
    blended(img, color, |canvas, ink| {
        for (i, &start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            draw_line_segment_mut(canvas, start, end, ink);
        }
    });
}

/// Fake a radial gradient by painting concentric discs, outermost first.
///
/// Discs have radii `radius, radius - step, ...` down to the last positive
/// one; `color_at` receives each disc radius. A pixel therefore ends up with
/// the colour of the smallest disc containing it. Pixels farther than
/// `radius` from the centre are left untouched.
pub fn radial_rings(
    img: &mut RgbaImage,
    center: (i32, i32),
    radius: u32,
    step: u32,
    color_at: impl Fn(u32) -> Rgba<u8>,
) {
    if radius == 0 {
        return;
    }
    let step = step.max(1);
    let (cx, cy) = (center.0 as f32, center.1 as f32);
    let outer = radius as f32;

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > outer {
            continue;
        }
        let k = ((outer - distance) / step as f32).floor() as u32;
        let mut disc = radius - k.min(radius / step) * step;
        if disc == 0 {
            disc = step;
        }
        *pixel = color_at(disc);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// `from` at the left edge, `to` at the right edge
    Horizontal,
    /// `from` at the top edge, `to` at the bottom edge
    Vertical,
}

/// Opaque linear gradient over the whole image.
pub fn linear_gradient(img: &mut RgbaImage, direction: Direction, from: Rgba<u8>, to: Rgba<u8>) {
    let (width, height) = img.dimensions();
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let t = match direction {
            Direction::Horizontal => x as f32 / width as f32,
            Direction::Vertical => y as f32 / height as f32,
        };
        *pixel = lerp(from, to, t);
    }
}

/// Pixel extent of `text` rendered at `px` pixels: the right edge of the last
/// inked glyph, and the ascent-to-descent line height.
pub fn text_extent(font: &Font, px: f32, text: &str) -> (i32, i32) {
    let scale = Scale::uniform(px);
    let v_metrics = font.v_metrics(scale);
    let width = font
        .layout(text, scale, point(0.0, v_metrics.ascent))
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .map(|bounds| bounds.max.x)
        .max()
        .unwrap_or(0);
    let height = (v_metrics.ascent - v_metrics.descent).ceil() as i32;
    (width, height)
}

pub fn draw_text(
    img: &mut RgbaImage,
    font: &Font,
    px: f32,
    position: (i32, i32),
    text: &str,
    color: Rgba<u8>,
) {
    blended(img, color, |canvas, ink| {
        draw_text_mut(canvas, ink, position.0, position.1, Scale::uniform(px), font, text)
    });
}

/// Draw `text` horizontally centred at row `y`. Returns the x it was drawn at.
pub fn draw_text_centered(
    img: &mut RgbaImage,
    font: &Font,
    px: f32,
    y: i32,
    text: &str,
    color: Rgba<u8>,
) -> i32 {
    let (width, _) = text_extent(font, px, text);
    let x = (img.width() as i32 - width) / 2;
    draw_text(img, font, px, (x, y), text, color);
    x
}
