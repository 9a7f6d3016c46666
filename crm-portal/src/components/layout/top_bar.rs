use dioxus::prelude::*;

use crate::components::layout::authenticated_shell::use_shell;

#[component]
pub fn TopBar(show_menu_button: bool) -> Element {
    let portal = use_shell();
    let navigator = use_navigator();
    let user_name = portal.user_name();

    let mut ps_open = portal.clone();
    let ps_logout = portal.clone();

    rsx! {
        header { class: "top-bar",
            if show_menu_button {
                button {
                    class: "btn-hamburger",
                    title: "Open navigation",
                    onclick: move |_| ps_open.open_drawer(),
                    "☰"
                }
            }
            div { class: "top-bar-spacer" }
            span { class: "top-bar-user", "{user_name}" }
            button {
                class: "btn-secondary",
                onclick: move |_| ps_logout.logout(navigator),
                "Log out"
            }
        }
    }
}
