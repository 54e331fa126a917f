//! Parametric shapes sampled into point lists.

use imageproc::point::Point;
use imageproc::rect::Rect;

/// Sample the parametric heart curve around `center`.
///
/// The curve spans roughly `1.6 * size` horizontally; `step_degrees` controls
/// how many vertices the resulting polygon has (`360 / step_degrees`).
pub fn heart_points(center: (f32, f32), size: f32, step_degrees: u32) -> Vec<(f32, f32)> {
    let (cx, cy) = center;
    let scale = size / 20.0;
    let step = step_degrees.max(1) as usize;

    (0..360)
        .step_by(step)
        .map(|angle| {
            let t = (angle as f32).to_radians();
            let hx = 16.0 * t.sin().powi(3);
            let hy = 13.0 * t.cos()
                - 5.0 * (2.0 * t).cos()
                - 2.0 * (3.0 * t).cos()
                - (4.0 * t).cos();
            (cx + hx * scale, cy - hy * scale)
        })
        .collect()
}

/// Round points to pixels for the polygon rasteriser.
///
/// Consecutive duplicates and a trailing point equal to the first are dropped,
/// since the rasteriser panics on closed rings. Returns an empty list when
/// fewer than three distinct vertices remain.
pub fn to_polygon(points: &[(f32, f32)]) -> Vec<Point<i32>> {
    let mut polygon: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for &(x, y) in points {
        let p = Point::new(x.round() as i32, y.round() as i32);
        if polygon.last() != Some(&p) {
            polygon.push(p);
        }
    }
    while polygon.len() > 1 && polygon.first() == polygon.last() {
        polygon.pop();
    }
    if polygon.len() < 3 {
        polygon.clear();
    }
    polygon
}

/// Rectangle from inclusive corner coordinates, clipped to the positive
/// quadrant size. `None` when the corners are inverted.
pub fn rect_from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Option<Rect> {
    if x1 < x0 || y1 < y0 {
        return None;
    }
    let width = (x1 - x0 + 1) as u32;
    let height = (y1 - y0 + 1) as u32;
    Some(Rect::at(x0, y0).of_size(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heart_point_count() {
        assert_eq!(heart_points((0.0, 0.0), 20.0, 5).len(), 72);
        assert_eq!(heart_points((0.0, 0.0), 20.0, 2).len(), 180);
        assert_eq!(heart_points((0.0, 0.0), 20.0, 15).len(), 24);
    }

    #[test]
    fn test_heart_top_notch_and_tip() {
        // With size 20 the scale is 1, so the raw curve is visible.
        let points = heart_points((100.0, 100.0), 20.0, 90);
        // t = 0: the notch between the lobes, 5 units above the centre
        assert!((points[0].0 - 100.0).abs() < 1e-4);
        assert!((points[0].1 - 95.0).abs() < 1e-4);
        // t = 180: the bottom tip, 17 units below the centre
        assert!((points[2].0 - 100.0).abs() < 1e-3);
        assert!((points[2].1 - 117.0).abs() < 1e-3);
    }

    #[test]
    fn test_heart_is_symmetric() {
        let points = heart_points((50.0, 50.0), 40.0, 10);
        let n = points.len();
        for i in 1..n {
            let (lx, ly) = points[i];
            let (rx, ry) = points[n - i];
            assert!((lx - 50.0 + (rx - 50.0)).abs() < 1e-3);
            assert!((ly - ry).abs() < 1e-3);
        }
    }

    #[test]
    fn test_polygon_is_never_closed() {
        let points = heart_points((54.0, 51.0), 4.0, 2);
        let polygon = to_polygon(&points);
        assert!(polygon.len() >= 3);
        assert_ne!(polygon.first(), polygon.last());
        for pair in polygon.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn test_degenerate_polygon_is_empty() {
        let points = heart_points((10.0, 10.0), 0.1, 10);
        assert!(to_polygon(&points).is_empty());
    }

    #[test]
    fn test_rect_from_corners_is_inclusive() {
        let rect = rect_from_corners(10, 20, 19, 24).unwrap();
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.width(), 10);
        assert_eq!(rect.height(), 5);
        assert!(rect_from_corners(5, 5, 4, 5).is_none());
    }
}
