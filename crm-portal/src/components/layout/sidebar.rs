use dioxus::prelude::*;

use crate::components::layout::authenticated_shell::use_shell;
use crate::components::navigation::NavigationMenu;
use crate::components::widgets::Logo;

#[component]
pub fn Sidebar(on_navigate: Option<EventHandler<String>>) -> Element {
    let portal = use_shell();
    let menu = portal.menu();
    let role = portal.role.read().label();
    let brand = portal.config.brand_name.clone();

    rsx! {
        div { class: "sidebar",
            div { class: "sidebar-header",
                Logo { candidates: portal.config.logo_candidates.clone(), alt: brand.clone() }
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "{brand}" }
                    span { class: "sidebar-brand-role", "{role}" }
                }
            }

            div { class: "sidebar-content",
                NavigationMenu { entries: menu, on_navigate: on_navigate }
            }
        }
    }
}
