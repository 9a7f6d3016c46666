use dioxus::prelude::*;

use crm_portal::navigation::{menu_for_role, Role};

/// Which top-level menu sections each role sees.
#[component]
pub fn Roles() -> Element {
    rsx! {
        div { class: "page",
            header { class: "page-header",
                h2 { "Roles & Menus" }
            }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Role" }
                        th { "Key" }
                        th { "Menu sections" }
                    }
                }
                tbody {
                    for role in Role::ALL {
                        {
                            let sections = menu_for_role(role)
                                .iter()
                                .map(|entry| entry.label().to_string())
                                .collect::<Vec<_>>()
                                .join(", ");
                            rsx! {
                                tr { key: "{role}",
                                    td { "{role.label()}" }
                                    td { class: "mono", "{role}" }
                                    td { "{sections}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
