use dioxus::prelude::*;

use crm_portal::mock_data::all_leads;
use crm_portal::types::format_money;

use crate::components::widgets::Badge;
use crate::Route;

#[component]
pub fn Leads() -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Leads" }
            }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Company" }
                        th { "Stage" }
                        th { class: "numeric", "Est. value" }
                        th { "Owner" }
                    }
                }
                tbody {
                    for lead in all_leads().iter() {
                        tr { key: "{lead.id}",
                            td {
                                Link { to: Route::LeadDetails { id: lead.id }, "{lead.name}" }
                            }
                            td { "{lead.company}" }
                            td { Badge { badge: lead.stage.badge() } }
                            td { class: "numeric", "{format_money(lead.estimated_value_cents)}" }
                            td { "{lead.owner}" }
                        }
                    }
                }
            }
        }
    }
}
