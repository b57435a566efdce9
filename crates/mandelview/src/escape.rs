//! CPU reference for the fragment shader.
//!
//! Same recurrence, same bailout, same `f32` arithmetic, same pixel mapping,
//! so a CPU image matches what the GPU draws up to float rounding. Tests use
//! it as the golden image; nothing on the render path calls it.

use mandelview_engine::coords::Vec2;

use crate::view::View;

/// Iterations of `z ← z² + c` from `z = 0` while `|z|² < 4`, capped at
/// `max_iterations`.
///
/// Points in the set return `max_iterations`. The bailout is strict, so a
/// point reaching `|z| = 2` exactly counts as escaped.
pub fn escape_time(c: Vec2, max_iterations: u32) -> u32 {
    let mut z = Vec2::zero();
    let mut iter = 0;
    while iter < max_iterations && z.dot_self() < 4.0 {
        z = Vec2::new(z.x * z.x - z.y * z.y, 2.0 * z.x * z.y) + c;
        iter += 1;
    }
    iter
}

/// Gray level for an iteration count: `iter / max_iterations` as unorm8.
pub fn shade(iterations: u32, max_iterations: u32) -> u8 {
    let max = max_iterations.max(1);
    let v = iterations.min(max) as f32 / max as f32;
    (v * 255.0).round() as u8
}

/// Renders `view` into a `width × height` grayscale buffer, row-major from
/// the top row.
pub fn render_grayscale(view: &View, width: u32, height: u32, max_iterations: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(width as usize * height as usize);
    for py in 0..height {
        for px in 0..width {
            let c = view.pixel_to_complex(px, py, width, height);
            out.push(shade(escape_time(c, max_iterations), max_iterations));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_ITERATIONS;

    fn c(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── escape_time ───────────────────────────────────────────────────────

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_time(c(0.0, 0.0), MAX_ITERATIONS), 256);
    }

    #[test]
    fn period_two_cycle_never_escapes() {
        // 0 → -1 → 0 → ...
        assert_eq!(escape_time(c(-1.0, 0.0), MAX_ITERATIONS), 256);
    }

    #[test]
    fn i_is_bounded() {
        // i → -1+i → -i → -1+i → ...
        assert_eq!(escape_time(c(0.0, 1.0), MAX_ITERATIONS), 256);
    }

    #[test]
    fn two_escapes_after_one_step() {
        assert_eq!(escape_time(c(2.0, 0.0), MAX_ITERATIONS), 1);
    }

    #[test]
    fn one_escapes_after_two_steps() {
        // 0 → 1 → 2
        assert_eq!(escape_time(c(1.0, 0.0), MAX_ITERATIONS), 2);
    }

    #[test]
    fn bailout_is_strict() {
        // |z| = 2 exactly after one step; the set contains -2 but the loop stops.
        assert_eq!(escape_time(c(-2.0, 0.0), MAX_ITERATIONS), 1);
    }

    #[test]
    fn far_points_escape_immediately() {
        assert_eq!(escape_time(c(10.0, -10.0), MAX_ITERATIONS), 1);
    }

    #[test]
    fn cap_bounds_the_count() {
        assert_eq!(escape_time(c(0.0, 0.0), 17), 17);
        assert_eq!(escape_time(c(0.0, 0.0), 0), 0);
    }

    #[test]
    fn deterministic() {
        let p = c(-0.743_643_9, 0.131_825_9);
        assert_eq!(escape_time(p, MAX_ITERATIONS), escape_time(p, MAX_ITERATIONS));
    }

    // ── shade ─────────────────────────────────────────────────────────────

    #[test]
    fn shade_endpoints() {
        assert_eq!(shade(0, 256), 0);
        assert_eq!(shade(256, 256), 255);
        assert_eq!(shade(1, 256), 1);
        assert_eq!(shade(128, 256), 128);
    }

    #[test]
    fn shade_with_zero_cap_does_not_divide_by_zero() {
        assert_eq!(shade(0, 0), 0);
    }

    // ── render_grayscale ──────────────────────────────────────────────────

    #[test]
    fn image_has_one_byte_per_pixel() {
        assert_eq!(render_grayscale(&View::default(), 8, 6, MAX_ITERATIONS).len(), 48);
    }

    #[test]
    fn deep_inside_the_cardioid_is_white() {
        let view = View::new(c(-0.1, 0.0), 0.01);
        let img = render_grayscale(&view, 4, 3, MAX_ITERATIONS);
        assert!(img.iter().all(|&p| p == 255));
    }

    #[test]
    fn far_outside_is_near_black() {
        let view = View::new(c(10.0, 10.0), 1.0);
        let img = render_grayscale(&view, 4, 3, MAX_ITERATIONS);
        assert!(img.iter().all(|&p| p == 1));
    }

    #[test]
    fn golden_row_through_the_real_axis() {
        // One row, five pixels spanning [-2.5, 1.5) on the real axis:
        // pixel centers at -2.1, -1.3, -0.5, 0.3, 1.1.
        let view = View::new(c(-0.5, 0.0), 4.0);
        let img = render_grayscale(&view, 5, 1, MAX_ITERATIONS);
        assert_eq!(img.len(), 5);
        // -1.3 (period-4 bulb) and -0.5 (cardioid) lie in the set.
        assert_eq!(img[1], 255);
        assert_eq!(img[2], 255);
        // -2.1 escapes after one step, 1.1 after two.
        assert_eq!(img[0], shade(1, MAX_ITERATIONS));
        assert_eq!(img[4], shade(2, MAX_ITERATIONS));
        // 0.3 sits just right of the cusp at 0.25 and takes a while to leave.
        assert!(img[3] > img[4] && img[3] < 255);
    }
}
