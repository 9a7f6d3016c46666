use dioxus::prelude::*;

/// Shown when a route or record does not exist. The only way out is back.
#[component]
pub fn NotFoundView(title: String, message: String) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "not-found",
            h1 { class: "not-found-code", "404" }
            h2 { class: "not-found-title", "{title}" }
            p { class: "not-found-message", "{message}" }
            button {
                class: "btn-primary",
                onclick: move |_| navigator.go_back(),
                "← Back"
            }
        }
    }
}
