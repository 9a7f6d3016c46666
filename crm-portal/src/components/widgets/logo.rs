use dioxus::prelude::*;
use tracing::warn;

use crm_portal::shell::LogoFallback;

/// Logo image that walks `candidates` in order when an image fails to load.
#[component]
pub fn Logo(candidates: Vec<String>, alt: String) -> Element {
    let mut fallback = use_signal(|| LogoFallback::new(candidates));
    let src = fallback.read().current().unwrap_or_default().to_string();

    rsx! {
        img {
            class: "sidebar-logo",
            src: "{src}",
            alt: "{alt}",
            onerror: move |_| {
                let failed = fallback.peek().current().unwrap_or_default().to_string();
                if fallback.write().on_error() {
                    warn!("logo {failed} failed to load, trying next candidate");
                }
            },
        }
    }
}
