use dioxus::prelude::*;
use tracing::info;

use crm_portal::navigation::{resolve_menu, row_class, DisclosureState, MenuEntry, RowKind};

use crate::Route;

/// Side menu for one role. Disclosure flags live as long as this component
/// is mounted; every group starts open.
#[component]
pub fn NavigationMenu(entries: Vec<MenuEntry>, on_navigate: Option<EventHandler<String>>) -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let mut disclosure = use_signal(DisclosureState::new);

    let current_path = route.to_string();
    let rows = resolve_menu(&entries, &current_path, &disclosure.read());
    let any_closed = rows
        .iter()
        .any(|row| matches!(row.kind, RowKind::Group { open: false, .. }));

    rsx! {
        nav { class: "nav-menu",
            for (idx, row) in rows.into_iter().enumerate() {
                {
                    let class = row_class(&row);
                    let action = row.action();
                    let indent = format!("padding-left: {}rem;", 0.75 + row.depth as f64);
                    let glyph = row.icon.glyph();
                    let label = row.label.clone();
                    let expanded = match &row.kind {
                        RowKind::Group { open, .. } => Some(*open),
                        RowKind::Item { .. } => None,
                    };
                    let current = row.active && expanded.is_none();

                    rsx! {
                        button {
                            key: "{idx}",
                            class: "{class}",
                            style: "{indent}",
                            aria_expanded: expanded.map(|open| open.to_string()),
                            aria_current: if current { "page" } else { "false" },
                            onclick: move |_| {
                                if let Some(target) = action.clone().apply(&mut disclosure.write()) {
                                    info!("menu navigation to {target}");
                                    navigator.push(target.clone());
                                    if let Some(hook) = on_navigate {
                                        hook.call(target);
                                    }
                                }
                            },
                            span { class: "nav-icon", "{glyph}" }
                            span { class: "nav-label", "{label}" }
                            {expanded.map(|open| rsx! {
                                span { class: "nav-toggle", if open { "▾" } else { "▸" } }
                            })}
                        }
                    }
                }
            }
            if any_closed {
                button {
                    class: "nav-expand-all",
                    onclick: move |_| disclosure.write().expand_all(),
                    "Expand all"
                }
            }
        }
    }
}
