/// Return contiguous runs of non-gap points as half-open `[start, end)`
/// ranges.
///
/// Backends must not interpolate across a `y = None` gap; this gives them
/// the drawable runs directly. Gap points themselves belong to no run (they
/// only exist to keep x-axis continuity and sample counts intact).
pub fn runs_by_gap(points: &[(f64, Option<f64>)], out: &mut Vec<(usize, usize)>) {
    out.clear();
    let mut start = None;
    for (i, (_, y)) in points.iter().enumerate() {
        match (y.is_some(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                out.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, points.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_single_segment_when_no_gaps() {
        let pts = [(0.0, Some(1.0)), (1.0, Some(2.0)), (2.0, Some(3.0))];
        let mut runs = Vec::new();
        runs_by_gap(&pts, &mut runs);
        assert_eq!(runs, vec![(0, 3)]);
    }

    #[test]
    fn runs_split_on_gap_samples() {
        let pts = [
            (0.0, Some(1.0)),
            (1.0, Some(2.0)),
            (2.0, None),
            (3.0, Some(4.0)),
            (4.0, Some(5.0)),
        ];
        let mut runs = Vec::new();
        runs_by_gap(&pts, &mut runs);
        assert_eq!(runs, vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn runs_handle_edge_cases() {
        let mut runs = Vec::new();
        runs_by_gap(&[], &mut runs);
        assert!(runs.is_empty());

        runs_by_gap(&[(0.0, None)], &mut runs);
        assert!(runs.is_empty());

        runs_by_gap(&[(0.0, Some(1.0))], &mut runs);
        assert_eq!(runs, vec![(0, 1)]);

        runs_by_gap(&[(0.0, None), (1.0, Some(1.0))], &mut runs);
        assert_eq!(runs, vec![(1, 2)]);
    }
}
