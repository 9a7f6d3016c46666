use dioxus::prelude::*;

use crm_portal::mock_data::find_lead;
use crm_portal::types::format_money;

use crate::components::widgets::{Badge, NotFoundView};

#[component]
pub fn LeadDetails(id: u32) -> Element {
    let Some(lead) = find_lead(id) else {
        return rsx! {
            NotFoundView {
                title: "Lead not found".to_string(),
                message: format!("There is no lead with id {id}."),
            }
        };
    };

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "{lead.name}" }
                p { class: "page-subtitle", "{lead.company}" }
                Badge { badge: lead.stage.badge() }
            }

            div { class: "detail-grid",
                div { class: "card",
                    h3 { "Contact" }
                    dl { class: "detail-list",
                        dt { "Email" }
                        dd { "{lead.email}" }
                        dt { "Phone" }
                        dd { "{lead.phone}" }
                        dt { "Source" }
                        dd { "{lead.source}" }
                        dt { "Created" }
                        dd { "{lead.created_on}" }
                    }
                }
                div { class: "card",
                    h3 { "Opportunity" }
                    dl { class: "detail-list",
                        dt { "Estimated value" }
                        dd { "{format_money(lead.estimated_value_cents)}" }
                        dt { "Owner" }
                        dd { "{lead.owner}" }
                    }
                }
                div { class: "card detail-notes",
                    h3 { "Notes" }
                    if lead.notes.is_empty() {
                        p { class: "muted", "No notes yet." }
                    }
                    ul {
                        for (idx, note) in lead.notes.iter().enumerate() {
                            li { key: "{idx}", "{note}" }
                        }
                    }
                }
            }
        }
    }
}
