//! Pixel drawing primitives: lines, rectangles, ellipses, flood fill
//!
//! All primitives write through bounds-checked pixel access, so coordinates
//! partially or fully outside the buffer are clipped silently rather than
//! rejected.

use std::collections::VecDeque;

use bitvec::prelude::*;

use crate::raster::buffer::{PixelBuffer, Rgba};

/// Draw a line from (x0, y0) to (x1, y1), endpoints inclusive
///
/// Integer Bresenham walk, symmetric in all eight octants.
pub fn draw_line(canvas: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        canvas.set_pixel(x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draw a rectangle outline between two corner coordinates
///
/// Corners are accepted in any order.
pub fn draw_rect(canvas: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    draw_line(canvas, x0, y0, x1, y0, color);
    draw_line(canvas, x0, y1, x1, y1, color);
    draw_line(canvas, x0, y0, x0, y1, color);
    draw_line(canvas, x1, y0, x1, y1, color);
}

/// Fill the closed rectangle between two corner coordinates
///
/// Corners are accepted in any order; the fill covers both of them.
pub fn draw_filled_rect(canvas: &mut PixelBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let left = x0.min(x1).max(0);
    let right = x0.max(x1).min(canvas.width() as i32 - 1);
    let top = y0.min(y1).max(0);
    let bottom = y0.max(y1).min(canvas.height() as i32 - 1);

    for y in top..=bottom {
        for x in left..=right {
            canvas.set_pixel(x, y, color);
        }
    }
}

/// Draw an ellipse outline centered at (cx, cy) with radii (rx, ry)
///
/// Midpoint algorithm with the standard steep/shallow region split; each
/// step reflects the computed point into all four quadrants.
pub fn draw_ellipse(canvas: &mut PixelBuffer, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba) {
    let rx2 = i64::from(rx) * i64::from(rx);
    let ry2 = i64::from(ry) * i64::from(ry);
    let mut x: i64 = 0;
    let mut y = i64::from(ry);

    // Region 1: slope magnitude below 1
    let mut p1 = ry2 as f64 - rx2 as f64 * f64::from(ry) + 0.25 * rx2 as f64;
    let mut dx = 2 * ry2 * x;
    let mut dy = 2 * rx2 * y;

    while dx < dy {
        plot_quadrants(canvas, cx, cy, x as i32, y as i32, color);
        x += 1;
        dx += 2 * ry2;
        if p1 < 0.0 {
            p1 += (dx + ry2) as f64;
        } else {
            y -= 1;
            dy -= 2 * rx2;
            p1 += (dx - dy + ry2) as f64;
        }
    }

    // Region 2: slope magnitude at or above 1
    let mut p2 = ry2 as f64 * (x as f64 + 0.5).powi(2) + rx2 as f64 * ((y - 1) as f64).powi(2)
        - (rx2 * ry2) as f64;
    while y >= 0 {
        plot_quadrants(canvas, cx, cy, x as i32, y as i32, color);
        y -= 1;
        dy -= 2 * rx2;
        if p2 > 0.0 {
            p2 += (rx2 - dy) as f64;
        } else {
            x += 1;
            dx += 2 * ry2;
            p2 += (dx - dy + rx2) as f64;
        }
    }
}

fn plot_quadrants(canvas: &mut PixelBuffer, cx: i32, cy: i32, x: i32, y: i32, color: Rgba) {
    canvas.set_pixel(cx + x, cy + y, color);
    canvas.set_pixel(cx - x, cy + y, color);
    canvas.set_pixel(cx + x, cy - y, color);
    canvas.set_pixel(cx - x, cy - y, color);
}

/// Fill the interior of an ellipse, writing only transparent pixels
///
/// Scan-line evaluation of the ellipse equation; used for sprite floor
/// shadows, which must not paint over the character silhouette.
pub fn fill_ellipse(canvas: &mut PixelBuffer, cx: i32, cy: i32, rx: i32, ry: i32, color: Rgba) {
    if ry == 0 || rx == 0 {
        return;
    }
    for y in (cy - ry).max(0)..=(cy + ry).min(canvas.height() as i32 - 1) {
        let dy = f64::from(y - cy);
        let ry_f = f64::from(ry);
        let inside = 1.0 - (dy * dy) / (ry_f * ry_f);
        if inside < 0.0 {
            continue;
        }
        let span = f64::from(rx) * inside.sqrt();
        let x_start = (f64::from(cx) - span) as i32;
        let x_end = (f64::from(cx) + span) as i32;
        for x in x_start.max(0)..=x_end.min(canvas.width() as i32 - 1) {
            if canvas.alpha(x, y) == 0 {
                canvas.set_pixel(x, y, color);
            }
        }
    }
}

/// Flood fill the 4-connected region containing (x, y)
///
/// Breadth-first traversal with an explicit visited bitmap. The target color
/// is captured before any mutation, so repainting with a color already
/// present elsewhere in the buffer cannot re-queue filled pixels. No-op when
/// the start is out of bounds or already the fill color.
pub fn flood_fill(canvas: &mut PixelBuffer, x: i32, y: i32, color: Rgba) {
    let Some(target) = canvas.pixel(x, y) else {
        return;
    };
    if target == color {
        return;
    }

    let width = canvas.width() as usize;
    let mut visited: BitVec = bitvec![0; width * canvas.height() as usize];
    let mut queue = VecDeque::new();
    queue.push_back((x, y));

    while let Some((cx, cy)) = queue.pop_front() {
        let Some(current) = canvas.pixel(cx, cy) else {
            continue;
        };
        let index = cy as usize * width + cx as usize;
        if visited.get(index).as_deref() == Some(&true) {
            continue;
        }
        if current != target {
            continue;
        }
        visited.set(index, true);
        canvas.set_pixel(cx, cy, color);

        queue.push_back((cx + 1, cy));
        queue.push_back((cx - 1, cy));
        queue.push_back((cx, cy + 1));
        queue.push_back((cx, cy - 1));
    }
}
