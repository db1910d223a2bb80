//! Deterministic series coloring and hover emphasis.
//!
//! Hover transforms are *projections* (channel normalization / absolute
//! alpha), never relative scales: applying one twice with the same hover
//! index yields bit-identical output. That keeps per-frame recoloring
//! idempotent no matter how redraws interleave.

use pulse_core::{Color, GraphSeries};

const BASE_SATURATION: f32 = 0.75;
const BASE_VALUE: f32 = 0.95;

/// Brightness target for the hovered series (max channel).
const HOVER_VALUE: f32 = 1.0;
/// Brightness target for de-emphasized neighbors in stacked mode.
const DIM_VALUE: f32 = 0.55;
/// Alpha for de-emphasized lines in overlaid (unstacked) mode.
const DIM_ALPHA: f32 = 0.3;

/// Base color for the series at `index` out of `total`.
///
/// Hues are spread evenly over `index / total` so the palette is a pure
/// function of the pair: repeated calls are identical, and screenshots stay
/// stable as long as the series count does.
pub fn base_color(index: usize, total: usize) -> Color {
    let total = total.max(1);
    let h = (index % total) as f32 / total as f32;
    let (r, g, b) = hsv_to_rgb(h, BASE_SATURATION, BASE_VALUE);
    Color::rgba(r, g, b, 1.0)
}

/// Recolor `series` for hover feedback: the series whose `index` equals
/// `hover_index` is emphasized, all others are de-emphasized.
///
/// Returns a new vec; the input (which must carry base colors) is not
/// mutated. Matching is on the `index` field, not slice position, so
/// filtered views highlight correctly.
///
/// Stacked bands sit against each other, so their de-emphasis darkens while
/// staying opaque and hue-distinguishable; overlaid lines are ghosted to a
/// fixed alpha instead.
pub fn to_hover_color(series: &[GraphSeries], hover_index: usize, stacked: bool) -> Vec<GraphSeries> {
    series
        .iter()
        .map(|s| {
            let color = if s.index == hover_index {
                emphasize(s.color)
            } else {
                de_emphasize(s.color, stacked)
            };
            GraphSeries {
                color,
                ..s.clone()
            }
        })
        .collect()
}

/// Normalize the max channel to `HOVER_VALUE`, keeping hue and saturation.
fn emphasize(c: Color) -> Color {
    scale_to_value(c, HOVER_VALUE).with_alpha(1.0)
}

fn de_emphasize(c: Color, stacked: bool) -> Color {
    if stacked {
        scale_to_value(c, DIM_VALUE).with_alpha(1.0)
    } else {
        c.with_alpha(DIM_ALPHA)
    }
}

fn scale_to_value(c: Color, value: f32) -> Color {
    let max = c.max_channel();
    if max <= 0.0 {
        return Color::rgba(value, value, value, c.a);
    }
    // Already at target (within float noise): return unchanged so repeated
    // application is bit-identical.
    if (max - value).abs() < 1e-6 {
        return c;
    }
    let k = value / max;
    Color::rgba(c.r * k, c.g * k, c.b * k, c.a)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let h = (h.fract() + 1.0).fract() * 6.0;
    let i = h.floor() as i32;
    let f = h - i as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i.rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_core::LabelSet;

    fn series(n: usize) -> Vec<GraphSeries> {
        (0..n)
            .map(|index| GraphSeries {
                labels: LabelSet::default(),
                color: base_color(index, n),
                points: vec![(0.0, Some(index as f64))],
                histograms: None,
                index,
            })
            .collect()
    }

    #[test]
    fn base_color_is_stable() {
        assert_eq!(base_color(2, 5), base_color(2, 5));
        assert_ne!(base_color(1, 5), base_color(2, 5));
    }

    #[test]
    fn hover_emphasizes_target_and_dims_rest() {
        let base = series(3);
        let hovered = to_hover_color(&base, 1, false);
        assert_eq!(hovered[1].color.a, 1.0);
        assert!(hovered[1].color.max_channel() > base[1].color.max_channel());
        assert_eq!(hovered[0].color.a, DIM_ALPHA);
        assert_eq!(hovered[2].color.a, DIM_ALPHA);
    }

    #[test]
    fn stacked_dim_stays_opaque_but_darker() {
        let base = series(2);
        let hovered = to_hover_color(&base, 0, true);
        assert_eq!(hovered[1].color.a, 1.0);
        assert!(hovered[1].color.max_channel() < base[1].color.max_channel());
    }

    #[test]
    fn hover_is_idempotent() {
        let base = series(4);
        for stacked in [false, true] {
            let once = to_hover_color(&base, 2, stacked);
            let twice = to_hover_color(&once, 2, stacked);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn hover_matches_on_index_field_in_filtered_views() {
        let base = series(3);
        let filtered: Vec<GraphSeries> = base.iter().skip(1).cloned().collect();
        let hovered = to_hover_color(&filtered, 2, false);
        // position 1 in the filtered slice carries index 2
        assert_eq!(hovered[1].color.a, 1.0);
        assert_eq!(hovered[0].color.a, DIM_ALPHA);
    }

    #[test]
    fn everything_dims_for_stale_hover_index() {
        let base = series(2);
        let hovered = to_hover_color(&base, 99, false);
        assert!(hovered.iter().all(|s| s.color.a == DIM_ALPHA));
    }
}
