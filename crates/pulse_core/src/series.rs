use rustc_hash::FxHashMap;

use crate::color::Color;
use crate::query::SampleHistogram;

/// Label name → label value. Unordered, names unique.
pub type LabelSet = FxHashMap<String, String>;

/// One drawable series: a label set's samples, ready for the backend.
///
/// `points` are `(x_ms, y)`; `y = None` is a gap (missing sample) that the
/// backend must not interpolate across.
///
/// `index` is the series' position in the normalized array and is the
/// identity used for hover/selection correlation. It stays stable across
/// display-mode re-normalizations and across filtered views (a filtered
/// slice keeps the original indexes), and is recomputed only when the
/// underlying query result changes.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSeries {
    pub labels: LabelSet,
    pub color: Color,
    pub points: Vec<(f64, Option<f64>)>,
    /// Native-histogram samples, passed through untouched for backends that
    /// can render them. Bucket semantics are not interpreted here.
    pub histograms: Option<Vec<SampleHistogram>>,
    pub index: usize,
}

impl GraphSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
