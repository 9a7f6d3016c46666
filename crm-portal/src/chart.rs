//! SVG geometry for the KPI area chart.

/// SVG path data for a line and the filled area beneath it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartPaths {
    pub line: String,
    pub area: String,
}

/// Scale `values` into a `width` x `height` box. The smallest value sits on
/// the bottom edge and the largest on the top edge; a constant series is drawn
/// at mid-height. Non-finite values are dropped.
pub fn area_chart_paths(values: &[f64], width: f64, height: f64) -> ChartPaths {
    let mut values: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return ChartPaths::default();
    }
    if values.len() == 1 {
        values.push(values[0]);
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let step = width / (values.len() - 1) as f64;

    let points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = i as f64 * step;
            let y = if span.abs() < f64::EPSILON {
                height / 2.0
            } else {
                height - (v - min) / span * height
            };
            format!("{x:.1},{y:.1}")
        })
        .collect();

    let line = format!("M{}", points.join(" L"));
    let area = format!("{line} L{width:.1},{height:.1} L0.0,{height:.1} Z");
    ChartPaths { line, area }
}
