use dioxus::prelude::*;

use crm_portal::types::StatusBadge;

#[component]
pub fn Badge(badge: StatusBadge) -> Element {
    rsx! {
        span { class: badge.class, "{badge.label}" }
    }
}
