use dioxus::prelude::*;

use crm_portal::mock_data::{resolved_tickets_series, technical_kpis};

use crate::components::widgets::AreaChart;

/// Technical KPI overview.
#[component]
pub fn CorporateDashboard() -> Element {
    let kpis = technical_kpis();
    let series: Vec<(String, f64)> = resolved_tickets_series()
        .into_iter()
        .map(|(month, value)| (month.to_string(), value))
        .collect();

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Technical Overview" }
                p { class: "page-subtitle", "Service KPIs compared with the previous period" }
            }

            div { class: "card-grid",
                for kpi in kpis.iter() {
                    {
                        let trend = kpi.trend();
                        let delta = kpi
                            .delta_percent()
                            .map(|d| format!("{d:+.1}%"))
                            .unwrap_or_else(|| "n/a".to_string());

                        rsx! {
                            div { key: "{kpi.label}", class: "card kpi-card",
                                p { class: "kpi-label", "{kpi.label}" }
                                p { class: "kpi-value", "{kpi.value}{kpi.unit}" }
                                span { class: trend.class(), "{trend.glyph()} {delta}" }
                            }
                        }
                    }
                }
            }

            AreaChart { title: "Resolved tickets per month".to_string(), points: series }
        }
    }
}
