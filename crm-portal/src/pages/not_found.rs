use dioxus::prelude::*;

use crate::components::widgets::NotFoundView;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        NotFoundView {
            title: "Page not found".to_string(),
            message: format!("Nothing lives at {path}."),
        }
    }
}
