use dioxus::prelude::*;

use crm_portal::mock_data::field_team;
use crm_portal::types::{status_counts, MemberStatus};

use crate::components::widgets::Badge;

/// Team status cards for the field organisation.
#[component]
pub fn FieldDashboard() -> Element {
    let team = field_team();
    let counts = status_counts(&team);

    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Field Operations" }
                p { class: "page-subtitle", "Live status of the field team" }
            }

            div { class: "summary-row",
                div { class: "summary-chip",
                    Badge { badge: MemberStatus::Active.badge() }
                    span { "{counts.active}" }
                }
                div { class: "summary-chip",
                    Badge { badge: MemberStatus::OnBreak.badge() }
                    span { "{counts.on_break}" }
                }
                div { class: "summary-chip",
                    Badge { badge: MemberStatus::Inactive.badge() }
                    span { "{counts.inactive}" }
                }
            }

            div { class: "card-grid",
                for member in team.iter() {
                    div { key: "{member.id}", class: "card team-card",
                        div { class: "avatar", "{member.initials()}" }
                        div { class: "team-card-body",
                            h3 { "{member.name}" }
                            p { class: "muted", "{member.role} · {member.region}" }
                            p { class: "muted", "Open tickets: {member.open_tickets}" }
                        }
                        Badge { badge: member.status.badge() }
                    }
                }
            }
        }
    }
}
