use dioxus::prelude::*;

use crm_portal::shell::ViewportMode;

use crate::hooks::{use_portal_state, use_viewport_mode, PortalState};
use crate::Route;

/// Layout for every signed-in route: drawer, top bar and the routed page.
#[component]
pub fn AuthenticatedShell() -> Element {
    let portal = use_portal_state();
    use_context_provider(|| portal.clone());

    let viewport = use_viewport_mode(portal.config.overlay_breakpoint_px);
    let mode = *viewport.read();
    let drawer_open = portal.drawer.read().is_open();

    let mut ps_dismiss = portal.clone();
    let mut ps_keys = portal.clone();
    let mut ps_nav = portal.clone();

    rsx! {
        div {
            class: "shell-container",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    ps_keys.dismiss_drawer();
                }
            },

            {match mode {
                ViewportMode::Persistent => rsx! {
                    aside { class: "drawer drawer-persistent",
                        crate::components::layout::Sidebar {}
                    }
                },
                ViewportMode::Overlay => rsx! {
                    if drawer_open {
                        div {
                            class: "drawer-backdrop",
                            onclick: move |_| ps_dismiss.dismiss_drawer(),
                        }
                    }
                    aside {
                        class: if drawer_open { "drawer drawer-overlay drawer-overlay-open" } else { "drawer drawer-overlay" },
                        crate::components::layout::Sidebar {
                            on_navigate: move |_| ps_nav.close_after_navigate(),
                        }
                    }
                },
            }}

            div { class: "shell-main",
                crate::components::layout::TopBar { show_menu_button: mode == ViewportMode::Overlay }
                main { class: "content-area",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Shell state for components rendered inside [`AuthenticatedShell`].
pub fn use_shell() -> PortalState {
    use_context::<PortalState>()
}
