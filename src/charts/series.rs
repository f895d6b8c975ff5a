//! Series Builder Module
//! Turns a decoded dataset into colored, renderable series.

use super::color::random_color_with;
use crate::data::WeightDataset;
use rand::Rng;

/// Bezier tension applied to every line series.
pub const LINE_TENSION: f64 = 0.3;

/// One user's renderable series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub label: String,
    pub data: Vec<Option<f64>>,
    /// Used for both fill and border.
    pub color: String,
    pub fill: bool,
    pub line_tension: f64,
}

impl SeriesEntry {
    pub fn background_color(&self) -> &str {
        &self.color
    }

    pub fn border_color(&self) -> &str {
        &self.color
    }

    /// Number of non-null points.
    pub fn value_count(&self) -> usize {
        self.data.iter().filter(|v| v.is_some()).count()
    }
}

/// One series per user, in dataset order, each with a fresh random color.
pub fn build_series(dataset: &WeightDataset) -> Vec<SeriesEntry> {
    build_series_with(dataset, &mut rand::rng())
}

pub fn build_series_with<R: Rng>(
    dataset: &WeightDataset,
    rng: &mut R,
) -> Vec<SeriesEntry> {
    dataset
        .user_weights
        .iter()
        .map(|(user, weights)| SeriesEntry {
            label: user.clone(),
            data: weights.clone(),
            color: random_color_with(&mut *rng),
            fill: false,
            line_tension: LINE_TENSION,
        })
        .collect()
}

/// Split a series into drawable runs of `[x, y]` points, x being the
/// date index.
///
/// With `span_gaps` null points are skipped and the run continues across
/// them; otherwise every null ends the current run.
pub fn line_segments(data: &[Option<f64>], span_gaps: bool) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (i, value) in data.iter().enumerate() {
        match value {
            Some(y) => current.push([i as f64, *y]),
            None if !span_gaps => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            None => {}
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Bezier control points around `current`, as the browser charting
/// library computes them for its `lineTension` option.
fn control_points(
    previous: [f64; 2],
    current: [f64; 2],
    next: [f64; 2],
    tension: f64,
) -> ([f64; 2], [f64; 2]) {
    let d01 = ((current[0] - previous[0]).powi(2) + (current[1] - previous[1]).powi(2)).sqrt();
    let d12 = ((next[0] - current[0]).powi(2) + (next[1] - current[1]).powi(2)).sqrt();
    let total = d01 + d12;
    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };

    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next[0] - previous[0];
    let dy = next[1] - previous[1];

    (
        [current[0] - fa * dx, current[1] - fa * dy],
        [current[0] + fb * dx, current[1] + fb * dy],
    )
}

fn cubic_bezier(p0: [f64; 2], c0: [f64; 2], c1: [f64; 2], p1: [f64; 2], t: f64) -> [f64; 2] {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    [
        a * p0[0] + b * c0[0] + c * c1[0] + d * p1[0],
        a * p0[1] + b * c0[1] + c * c1[1] + d * p1[1],
    ]
}

/// Smooth one run with `samples` interpolated points per span. The
/// output passes through every input point.
pub fn smooth_segment(points: &[[f64; 2]], tension: f64, samples: usize) -> Vec<[f64; 2]> {
    if points.len() < 3 || tension == 0.0 || samples == 0 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let controls: Vec<([f64; 2], [f64; 2])> = (0..points.len())
        .map(|i| {
            let previous = points[i.saturating_sub(1)];
            let next = points[(i + 1).min(last)];
            control_points(previous, points[i], next, tension)
        })
        .collect();

    let mut out = Vec::with_capacity(last * samples + 1);
    out.push(points[0]);
    for i in 0..last {
        let (_, c0) = controls[i];
        let (c1, _) = controls[i + 1];
        for step in 1..=samples {
            let t = step as f64 / samples as f64;
            out.push(cubic_bezier(points[i], c0, c1, points[i + 1], t));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn dataset() -> WeightDataset {
        WeightDataset {
            dates: vec!["2021-01-01".into(), "2021-01-02".into()],
            user_weights: vec![
                ("alice".into(), vec![Some(70.0), Some(71.0)]),
                ("bob".into(), vec![Some(80.0), None]),
            ],
        }
    }

    #[test]
    fn one_series_per_user_in_order() {
        let series = build_series(&dataset());
        let labels: Vec<&str> = series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["alice", "bob"]);
        for s in &series {
            assert_eq!(s.data.len(), 2);
            assert!(!s.fill);
            assert_eq!(s.line_tension, LINE_TENSION);
            assert_eq!(s.background_color(), s.border_color());
        }
        assert_eq!(series[1].value_count(), 1);
    }

    #[test]
    fn seeded_builds_match() {
        let a = build_series_with(&dataset(), &mut SmallRng::seed_from_u64(3));
        let b = build_series_with(&dataset(), &mut SmallRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn spanning_gaps_keeps_one_run() {
        let data = [Some(1.0), None, Some(3.0), Some(4.0)];
        let spanned = line_segments(&data, true);
        assert_eq!(spanned, vec![vec![[0.0, 1.0], [2.0, 3.0], [3.0, 4.0]]]);

        let broken = line_segments(&data, false);
        assert_eq!(broken, vec![vec![[0.0, 1.0]], vec![[2.0, 3.0], [3.0, 4.0]]]);
    }

    #[test]
    fn all_null_series_has_no_runs() {
        assert!(line_segments(&[None, None], true).is_empty());
        assert!(line_segments(&[None, None], false).is_empty());
    }

    #[test]
    fn smoothing_passes_through_data_points() {
        let points = [[0.0, 70.0], [1.0, 72.0], [2.0, 69.0], [3.0, 71.0]];
        let samples = 8;
        let smooth = smooth_segment(&points, LINE_TENSION, samples);
        assert_eq!(smooth.len(), 3 * samples + 1);
        for (i, p) in points.iter().enumerate() {
            let q = smooth[i * samples];
            assert!((q[0] - p[0]).abs() < 1e-9 && (q[1] - p[1]).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_tension_or_short_runs_are_unchanged() {
        let points = [[0.0, 1.0], [1.0, 2.0], [2.0, 0.0]];
        assert_eq!(smooth_segment(&points, 0.0, 8), points.to_vec());
        assert_eq!(smooth_segment(&points[..2], LINE_TENSION, 8), points[..2].to_vec());
    }
}
