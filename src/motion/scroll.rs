//! Scroll-progress projections.
//!
//! A section's progress runs 0 → 1 while it travels through the viewport:
//! 0 when its top edge reaches the bottom of the viewport, 1 when its
//! bottom edge leaves the top. Opacity and scale are piecewise-linear maps
//! of that scalar.

/// Progress stops shared by the fade / scale curves.
pub const IN_OUT_STOPS: [f32; 4] = [0.0, 0.3, 0.7, 1.0];

/// Progress of a section through the viewport, in `[0, 1]`.
///
/// `section_top` is relative to the viewport top (negative once scrolled past).
pub fn section_progress(section_top: f32, section_height: f32, viewport_height: f32) -> f32 {
    let travel = section_height + viewport_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - section_top) / travel).clamp(0.0, 1.0)
}

/// Piecewise-linear interpolation of `input` over `stops`, clamped at both ends.
///
/// `stops` must be ascending and the same length as `values`.
pub fn interpolate(input: f32, stops: &[f32], values: &[f32]) -> f32 {
    debug_assert_eq!(stops.len(), values.len());
    let n = stops.len().min(values.len());
    if n == 0 {
        return 0.0;
    }
    if input <= stops[0] {
        return values[0];
    }
    for i in 1..n {
        if input <= stops[i] {
            let span = stops[i] - stops[i - 1];
            if span <= 0.0 {
                return values[i];
            }
            let t = (input - stops[i - 1]) / span;
            return values[i - 1] + (values[i] - values[i - 1]) * t;
        }
    }
    values[n - 1]
}

/// Fade in over the first 30%, hold, fade out over the last 30%.
pub fn fade_in_out(progress: f32) -> f32 {
    interpolate(progress, &IN_OUT_STOPS, &[0.0, 1.0, 1.0, 0.0])
}

/// Grow from 0.8 to 1 on entry, shrink back on exit.
pub fn scale_in_out(progress: f32) -> f32 {
    interpolate(progress, &IN_OUT_STOPS, &[0.8, 1.0, 1.0, 0.8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_spans_entry_to_exit() {
        // 600px viewport, 400px section
        assert_eq!(section_progress(600.0, 400.0, 600.0), 0.0);
        assert_eq!(section_progress(-400.0, 400.0, 600.0), 1.0);
        assert!((section_progress(100.0, 400.0, 600.0) - 0.5).abs() < 1e-6);
        assert_eq!(section_progress(2000.0, 400.0, 600.0), 0.0);
        assert_eq!(section_progress(-2000.0, 400.0, 600.0), 1.0);
        assert_eq!(section_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn interpolation_clamps_and_blends() {
        let stops = [0.0, 0.5, 1.0];
        let values = [10.0, 20.0, 0.0];
        assert_eq!(interpolate(-1.0, &stops, &values), 10.0);
        assert_eq!(interpolate(0.25, &stops, &values), 15.0);
        assert_eq!(interpolate(0.75, &stops, &values), 10.0);
        assert_eq!(interpolate(5.0, &stops, &values), 0.0);
    }

    #[test]
    fn fade_curve_shape() {
        assert_eq!(fade_in_out(0.0), 0.0);
        assert!((fade_in_out(0.15) - 0.5).abs() < 1e-5);
        assert_eq!(fade_in_out(0.5), 1.0);
        assert_eq!(fade_in_out(1.0), 0.0);
        assert_eq!(scale_in_out(0.0), 0.8);
        assert_eq!(scale_in_out(0.5), 1.0);
    }
}
