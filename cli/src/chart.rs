//! Plot-ready view-models derived from server curves.

use decay_client::types::Curve;

/// One plottable series: parallel x/y samples.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// The series a curve contributes to a decay plot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataSet {
    pub original: Option<PointSet>,
    pub convolved: Option<PointSet>,
    pub noisy: Option<PointSet>,
}

/// Pair a curve's main series with its time axis.
pub fn curve_data_set(curve: &Curve) -> DataSet {
    DataSet {
        original: point_set(&curve.time_axis, &curve.raw),
        convolved: point_set(&curve.time_axis, &curve.convolved),
        noisy: point_set(&curve.time_axis, &curve.noisy),
    }
}

/// Every plottable series a curve carries, labeled.
pub fn series_summaries(curve: &Curve) -> Vec<(&'static str, PointSet)> {
    let x = &curve.time_axis;
    let mut series = Vec::new();
    let mut push = |label: &'static str, y: &[f64]| {
        if let Some(points) = point_set(x, y) {
            series.push((label, points));
        }
    };

    push("raw", &curve.raw);
    push("raw_scaled", &curve.raw_scaled);
    push("convolved", &curve.convolved);
    push("noisy", &curve.noisy);
    if let Some(irf) = &curve.irf {
        push("irf", irf);
    }
    if let Some(irf) = &curve.irf_scaled {
        push("irf_scaled", irf);
    }

    series
}

/// Human-readable summary of one series.
pub fn describe(points: &PointSet) -> String {
    let (x_lo, x_hi) = range(&points.x).unwrap_or((0.0, 0.0));
    let (y_lo, y_hi) = range(&points.y).unwrap_or((0.0, 0.0));
    format!(
        "{} pts, t [{x_lo:.3}, {x_hi:.3}], y [{y_lo:.3}, {y_hi:.3}]",
        points.x.len()
    )
}

fn point_set(x: &[f64], y: &[f64]) -> Option<PointSet> {
    // a series only plots against a time axis of the same length
    if y.is_empty() || x.len() != y.len() {
        return None;
    }
    Some(PointSet {
        x: x.to_vec(),
        y: y.to_vec(),
    })
}

fn range(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().copied().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
