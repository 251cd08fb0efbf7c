//! Drawing helpers the primitive set of imageproc lacks

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Filled axis-aligned rectangle; zero-sized rectangles draw nothing
pub fn fill_rect(image: &mut RgbImage, x: i32, y: i32, width: i32, height: i32, color: Rgb<u8>) {
    if width <= 0 || height <= 0 {
        return;
    }
    draw_filled_rect_mut(image, Rect::at(x, y).of_size(width as u32, height as u32), color);
}

/// Line segment with a given stroke width and round caps
pub fn thick_line(
    image: &mut RgbImage,
    from: (f32, f32),
    to: (f32, f32),
    width: f32,
    color: Rgb<u8>,
) {
    let radius = (width / 2.0).max(1.0);
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = (dx * dx + dy * dy).sqrt();

    if length >= 1.0 {
        let (nx, ny) = (-dy / length * radius, dx / length * radius);
        let corners = [
            Point::new((from.0 + nx).round() as i32, (from.1 + ny).round() as i32),
            Point::new((to.0 + nx).round() as i32, (to.1 + ny).round() as i32),
            Point::new((to.0 - nx).round() as i32, (to.1 - ny).round() as i32),
            Point::new((from.0 - nx).round() as i32, (from.1 - ny).round() as i32),
        ];
        if corners[0] != corners[3] {
            draw_polygon_mut(image, &corners, color);
        }
    }

    let r = radius.round() as i32;
    draw_filled_circle_mut(image, (from.0.round() as i32, from.1.round() as i32), r, color);
    draw_filled_circle_mut(image, (to.0.round() as i32, to.1.round() as i32), r, color);
}

/// Stroke part of an ellipse between two angles (degrees, clockwise from +x
/// with y pointing down, so 0..180 is the lower half)
pub fn stroke_arc(
    image: &mut RgbImage,
    center: (f32, f32),
    radii: (f32, f32),
    degrees: (f32, f32),
    width: f32,
    color: Rgb<u8>,
) {
    const STEPS: usize = 24;
    let point = |t: f32| {
        let angle = t.to_radians();
        (center.0 + radii.0 * angle.cos(), center.1 + radii.1 * angle.sin())
    };

    let mut previous = point(degrees.0);
    for step in 1..=STEPS {
        let t = degrees.0 + (degrees.1 - degrees.0) * step as f32 / STEPS as f32;
        let next = point(t);
        thick_line(image, previous, next, width, color);
        previous = next;
    }
}

/// Filled ellipse with every row below `max_y` left untouched
pub fn fill_ellipse_above(
    image: &mut RgbImage,
    center: (i32, i32),
    radii: (i32, i32),
    max_y: i32,
    color: Rgb<u8>,
) {
    let (cx, cy) = center;
    let (rx, ry) = radii;
    if rx <= 0 || ry <= 0 {
        return;
    }

    let top = (cy - ry).max(0);
    let bottom = (cy + ry).min(max_y).min(image.height() as i32 - 1);
    for y in top..=bottom {
        let t = (y - cy) as f32 / ry as f32;
        let half = (rx as f32 * (1.0 - t * t).max(0.0).sqrt()).round() as i32;
        let start = (cx - half).max(0);
        let end = (cx + half).min(image.width() as i32 - 1);
        for x in start..=end {
            image.put_pixel(x as u32, y as u32, color);
        }
    }
}
