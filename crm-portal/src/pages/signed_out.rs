use dioxus::prelude::*;

use crate::Route;

/// Landing page after logout.
#[component]
pub fn SignedOut() -> Element {
    rsx! {
        div { class: "signed-out",
            div { class: "card signed-out-card",
                h2 { "You have been signed out" }
                p { class: "muted", "Your session data was removed from this browser." }
                Link { class: "btn-primary", to: Route::FieldDashboard {}, "Back to dashboard" }
            }
        }
    }
}
