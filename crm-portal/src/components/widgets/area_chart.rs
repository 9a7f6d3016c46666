use dioxus::prelude::*;

use crm_portal::chart::area_chart_paths;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 180.0;

#[component]
pub fn AreaChart(title: String, points: Vec<(String, f64)>) -> Element {
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();
    let paths = area_chart_paths(&values, CHART_WIDTH, CHART_HEIGHT);
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    rsx! {
        div { class: "chart-card",
            h3 { class: "chart-title", "{title}" }
            svg {
                class: "chart-svg",
                view_box: "{view_box}",
                preserve_aspect_ratio: "none",
                path { class: "chart-area", d: "{paths.area}" }
                path { class: "chart-line", d: "{paths.line}" }
            }
            div { class: "chart-labels",
                for (label, _) in points.iter() {
                    span { key: "{label}", "{label}" }
                }
            }
        }
    }
}
