use mandelview_engine::coords::Vec2;

/// Smallest zoom the view accepts.
pub const MIN_ZOOM: f32 = 1e-6;
/// Largest zoom the view accepts.
pub const MAX_ZOOM: f32 = 1e6;

/// Current view parameters: the whole mutable state of the viewer.
///
/// `zoom` is the width of the complex-plane region spread across the window,
/// so the window shows `center ± zoom / 2` on each axis. It is kept in
/// `[MIN_ZOOM, MAX_ZOOM]`, which keeps it positive and keeps `1 / zoom`
/// finite.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct View {
    pub center: Vec2,
    zoom: f32,
}

impl Default for View {
    fn default() -> Self {
        Self {
            center: Vec2::zero(),
            zoom: 1.0,
        }
    }
}

impl View {
    pub fn new(center: Vec2, zoom: f32) -> Self {
        let mut view = Self {
            center,
            zoom: 1.0,
        };
        view.set_zoom(zoom);
        view
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Sets `zoom`, clamped. Non-finite or non-positive values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) {
        if !zoom.is_finite() || zoom <= 0.0 {
            log::warn!("ignoring invalid zoom {zoom}");
            return;
        }
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Pan distance for one step: `pan_factor / zoom`.
    pub fn pan_step(&self, pan_factor: f32) -> f32 {
        pan_factor / self.zoom
    }

    /// Moves the center by `delta` (complex-plane units).
    pub fn pan(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// The "zoom in" key: `zoom *= step`.
    pub fn zoom_in(&mut self, step: f32) {
        self.set_zoom(self.zoom * step);
    }

    /// The "zoom out" key: `zoom /= step`.
    pub fn zoom_out(&mut self, step: f32) {
        self.set_zoom(self.zoom / step);
    }

    /// Complex-plane point at the center of pixel `(px, py)`.
    ///
    /// Pixels are counted from the top-left; the plane's +y points up. This is
    /// the same mapping the fragment shader applies to `@builtin(position)`.
    pub fn pixel_to_complex(&self, px: u32, py: u32, width: u32, height: u32) -> Vec2 {
        let w = width.max(1) as f32;
        let h = height.max(1) as f32;
        let u = (px as f32 + 0.5) / w;
        let v = 1.0 - (py as f32 + 0.5) / h;
        Vec2::new(
            (u - 0.5) * self.zoom + self.center.x,
            (v - 0.5) * self.zoom + self.center.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-5 * a.abs().max(b.abs()).max(1.0)
    }

    // ── zoom ──────────────────────────────────────────────────────────────

    #[test]
    fn starts_at_origin_with_unit_zoom() {
        let v = View::default();
        assert_eq!(v.center, Vec2::zero());
        assert_eq!(v.zoom(), 1.0);
    }

    #[test]
    fn zoom_in_n_times_multiplies_by_step_pow_n() {
        let mut v = View::default();
        for _ in 0..10 {
            v.zoom_in(1.1);
        }
        assert!(close(v.zoom(), 1.1f32.powi(10)), "zoom = {}", v.zoom());
    }

    #[test]
    fn zoom_out_n_times_divides_by_step_pow_n() {
        let mut v = View::default();
        for _ in 0..10 {
            v.zoom_out(1.1);
        }
        assert!(close(v.zoom(), 1.1f32.powi(-10)), "zoom = {}", v.zoom());
    }

    #[test]
    fn zoom_in_then_out_round_trips() {
        let mut v = View::default();
        v.zoom_in(1.1);
        v.zoom_out(1.1);
        assert!(close(v.zoom(), 1.0));
    }

    #[test]
    fn zoom_never_reaches_zero() {
        let mut v = View::default();
        for _ in 0..10_000 {
            v.zoom_out(1.1);
        }
        assert_eq!(v.zoom(), MIN_ZOOM);
        assert!(v.pan_step(0.1).is_finite());
    }

    #[test]
    fn zoom_is_capped() {
        let mut v = View::default();
        for _ in 0..10_000 {
            v.zoom_in(1.1);
        }
        assert_eq!(v.zoom(), MAX_ZOOM);
    }

    #[test]
    fn invalid_zoom_is_ignored() {
        let mut v = View::new(Vec2::zero(), 2.0);
        v.set_zoom(0.0);
        v.set_zoom(-1.0);
        v.set_zoom(f32::NAN);
        v.set_zoom(f32::INFINITY);
        assert_eq!(v.zoom(), 2.0);
    }

    // ── pan ───────────────────────────────────────────────────────────────

    #[test]
    fn pan_step_scales_inversely_with_zoom() {
        assert!(close(View::new(Vec2::zero(), 1.0).pan_step(0.1), 0.1));
        assert!(close(View::new(Vec2::zero(), 2.0).pan_step(0.1), 0.05));
        assert!(close(View::new(Vec2::zero(), 0.5).pan_step(0.1), 0.2));
    }

    #[test]
    fn pan_is_additive() {
        let mut v = View::default();
        v.pan(Vec2::new(0.1, 0.0));
        v.pan(Vec2::new(0.1, -0.2));
        assert!(close(v.center.x, 0.2));
        assert!(close(v.center.y, -0.2));
    }

    // ── pixel mapping ─────────────────────────────────────────────────────

    #[test]
    fn corner_pixels_span_zoom_around_center() {
        let v = View::new(Vec2::new(-0.5, 0.25), 2.0);
        let (w, h) = (800, 600);

        let top_left = v.pixel_to_complex(0, 0, w, h);
        let bottom_right = v.pixel_to_complex(w - 1, h - 1, w, h);

        // Pixel centers sit half a pixel inside the ±zoom/2 edges.
        assert!(close(top_left.x, -0.5 - 1.0 + 2.0 * 0.5 / 800.0));
        assert!(close(top_left.y, 0.25 + 1.0 - 2.0 * 0.5 / 600.0));
        assert!(close(bottom_right.x, -0.5 + 1.0 - 2.0 * 0.5 / 800.0));
        assert!(close(bottom_right.y, 0.25 - 1.0 + 2.0 * 0.5 / 600.0));
    }

    #[test]
    fn upper_rows_map_to_larger_imaginary_parts() {
        let v = View::default();
        assert!(v.pixel_to_complex(0, 0, 4, 4).y > v.pixel_to_complex(0, 3, 4, 4).y);
    }
}
