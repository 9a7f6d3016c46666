//! Menu definitions and their per-render resolution into rows.
//!
//! A menu is a static tree of [`MenuEntry`] values. Rendering never walks the
//! tree directly: [`resolve_menu`] flattens it against the current path and the
//! [`DisclosureState`] into the ordered list of rows that are visible right now.

use super::disclosure::{DisclosureState, GroupId};
use super::route_matcher::is_active;

/// Icons available to menu entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Dashboard,
    Field,
    Corporate,
    Sales,
    Leads,
    Orders,
    Admin,
    Access,
    Roles,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Dashboard => "▦",
            Icon::Field => "⚑",
            Icon::Corporate => "▤",
            Icon::Sales => "◈",
            Icon::Leads => "☎",
            Icon::Orders => "≣",
            Icon::Admin => "⚙",
            Icon::Access => "⚿",
            Icon::Roles => "☷",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuItem {
    pub target: String,
    pub label: String,
    pub icon: Icon,
    pub single_line: bool,
    pub suppress_selection_background: bool,
}

impl MenuItem {
    pub fn new(target: impl Into<String>, label: impl Into<String>, icon: Icon) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
            icon,
            single_line: false,
            suppress_selection_background: false,
        }
    }

    /// Truncate the label instead of wrapping it.
    pub fn single_line(mut self) -> Self {
        self.single_line = true;
        self
    }

    /// Mark the item active with text emphasis only.
    pub fn plain_selection(mut self) -> Self {
        self.suppress_selection_background = true;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuGroup {
    pub id: GroupId,
    pub label: String,
    pub icon: Icon,
    /// Path that highlights the group header. Only affects emphasis; the
    /// children are still gated by the disclosure flag alone.
    pub highlight_anchor: Option<String>,
    pub entries: Vec<MenuEntry>,
}

impl MenuGroup {
    pub fn new(id: &str, label: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: GroupId::new(id),
            label: label.into(),
            icon,
            highlight_anchor: None,
            entries: Vec::new(),
        }
    }

    pub fn highlight_on(mut self, anchor: impl Into<String>) -> Self {
        self.highlight_anchor = Some(anchor.into());
        self
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.entries.push(MenuEntry::Item(item));
        self
    }

    pub fn group(mut self, group: MenuGroup) -> Self {
        self.entries.push(MenuEntry::Group(group));
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuEntry {
    Item(MenuItem),
    Group(MenuGroup),
}

impl MenuEntry {
    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Item(item) => &item.label,
            MenuEntry::Group(group) => &group.label,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKind {
    Leaf,
    Group,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RowKind {
    Item {
        target: String,
        single_line: bool,
        suppress_selection_background: bool,
    },
    Group {
        id: GroupId,
        open: bool,
    },
}

/// One visible line of the rendered menu.
#[derive(Clone, Debug, PartialEq)]
pub struct MenuRow {
    pub depth: usize,
    pub label: String,
    pub icon: Icon,
    pub active: bool,
    pub kind: RowKind,
}

impl MenuRow {
    pub fn menu_kind(&self) -> MenuKind {
        match self.kind {
            RowKind::Item { .. } => MenuKind::Leaf,
            RowKind::Group { .. } => MenuKind::Group,
        }
    }

    /// What activating this row does.
    pub fn action(&self) -> MenuAction {
        match &self.kind {
            RowKind::Item { target, .. } => MenuAction::Navigate(target.clone()),
            RowKind::Group { id, .. } => MenuAction::Toggle(id.clone()),
        }
    }
}

/// The effect of activating a menu row.
#[derive(Clone, Debug, PartialEq)]
pub enum MenuAction {
    Navigate(String),
    Toggle(GroupId),
}

impl MenuAction {
    /// Apply the local part of the action. Returns the route to transition to,
    /// if any; toggles touch only the disclosure flags.
    pub fn apply(self, disclosure: &mut DisclosureState) -> Option<String> {
        match self {
            MenuAction::Navigate(target) => Some(target),
            MenuAction::Toggle(id) => {
                disclosure.toggle(&id);
                None
            }
        }
    }
}

/// Flatten `entries` into the rows visible for `current_path`.
pub fn resolve_menu(
    entries: &[MenuEntry],
    current_path: &str,
    disclosure: &DisclosureState,
) -> Vec<MenuRow> {
    let mut rows = Vec::new();
    push_rows(entries, 0, current_path, disclosure, &mut rows);
    rows
}

fn push_rows(
    entries: &[MenuEntry],
    depth: usize,
    current_path: &str,
    disclosure: &DisclosureState,
    rows: &mut Vec<MenuRow>,
) {
    for entry in entries {
        match entry {
            MenuEntry::Item(item) => rows.push(MenuRow {
                depth,
                label: item.label.clone(),
                icon: item.icon,
                active: is_active(current_path, &item.target),
                kind: RowKind::Item {
                    target: item.target.clone(),
                    single_line: item.single_line,
                    suppress_selection_background: item.suppress_selection_background,
                },
            }),
            MenuEntry::Group(group) => {
                let open = disclosure.is_open(&group.id);
                rows.push(MenuRow {
                    depth,
                    label: group.label.clone(),
                    icon: group.icon,
                    active: group
                        .highlight_anchor
                        .as_deref()
                        .is_some_and(|anchor| is_active(current_path, anchor)),
                    kind: RowKind::Group {
                        id: group.id.clone(),
                        open,
                    },
                });
                if open {
                    push_rows(&group.entries, depth + 1, current_path, disclosure, rows);
                }
            }
        }
    }
}

/// CSS classes for a row.
pub fn row_class(row: &MenuRow) -> String {
    let mut classes = vec![match row.menu_kind() {
        MenuKind::Leaf => "nav-item".to_string(),
        MenuKind::Group => "nav-group".to_string(),
    }];
    classes.push(format!("nav-depth-{}", row.depth.min(3)));

    match &row.kind {
        RowKind::Item {
            single_line,
            suppress_selection_background,
            ..
        } => {
            if row.active {
                classes.push(if *suppress_selection_background {
                    "nav-item-active-plain".to_string()
                } else {
                    "nav-item-active".to_string()
                });
            }
            if *single_line {
                classes.push("nav-item-single-line".to_string());
            }
        }
        RowKind::Group { open, .. } => {
            if *open {
                classes.push("nav-group-open".to_string());
            }
            if row.active {
                classes.push("nav-group-highlight".to_string());
            }
        }
    }

    classes.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_menu() -> Vec<MenuEntry> {
        vec![
            MenuEntry::Group(
                MenuGroup::new("dashboard", "Dashboard", Icon::Dashboard)
                    .highlight_on("/app/dashboard")
                    .item(MenuItem::new("/app/dashboard/field", "Field", Icon::Field))
                    .item(MenuItem::new("/app/dashboard/corporate", "Corporate", Icon::Corporate)),
            ),
            MenuEntry::Group(
                MenuGroup::new("admin", "Admin", Icon::Admin).group(
                    MenuGroup::new("access", "Access", Icon::Access)
                        .item(MenuItem::new("/app/roles", "Roles", Icon::Roles).plain_selection()),
                ),
            ),
            MenuEntry::Item(MenuItem::new("/app/orders", "Orders", Icon::Orders).single_line()),
        ]
    }

    fn labels(rows: &[MenuRow]) -> Vec<&str> {
        rows.iter().map(|r| r.label.as_str()).collect()
    }

    #[test]
    fn test_all_rows_visible_by_default() {
        let rows = resolve_menu(&sample_menu(), "/app/orders", &DisclosureState::new());
        assert_eq!(
            labels(&rows),
            vec!["Dashboard", "Field", "Corporate", "Admin", "Access", "Roles", "Orders"]
        );
        assert_eq!(rows[5].depth, 2);
        assert!(rows[6].active);
    }

    #[test]
    fn test_closed_parent_hides_nested_group() {
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&GroupId::from("admin"));
        let rows = resolve_menu(&sample_menu(), "/app/roles", &disclosure);
        assert_eq!(
            labels(&rows),
            vec!["Dashboard", "Field", "Corporate", "Admin", "Orders"]
        );
        // Child flag is untouched by the parent toggle.
        assert!(disclosure.is_open(&GroupId::from("access")));
    }

    #[test]
    fn test_highlight_anchor_independent_of_disclosure() {
        let mut disclosure = DisclosureState::new();
        disclosure.toggle(&GroupId::from("dashboard"));
        let rows = resolve_menu(&sample_menu(), "/app/dashboard/field", &disclosure);
        assert_eq!(rows[0].label, "Dashboard");
        assert!(rows[0].active);
        assert_eq!(rows[0].kind, RowKind::Group { id: GroupId::from("dashboard"), open: false });
        assert_eq!(rows[1].label, "Admin");
    }

    #[test]
    fn test_group_without_anchor_is_never_active() {
        let rows = resolve_menu(&sample_menu(), "/app/roles", &DisclosureState::new());
        assert!(!rows[3].active);
        assert!(rows[5].active);
    }

    #[test]
    fn test_row_actions() {
        let rows = resolve_menu(&sample_menu(), "/", &DisclosureState::new());
        let mut disclosure = DisclosureState::new();

        assert_eq!(rows[1].action().apply(&mut disclosure), Some("/app/dashboard/field".to_string()));
        assert!(disclosure.is_open(&GroupId::from("dashboard")));

        assert_eq!(rows[0].action().apply(&mut disclosure), None);
        assert!(!disclosure.is_open(&GroupId::from("dashboard")));
    }

    #[test]
    fn test_row_class_variants() {
        let rows = resolve_menu(&sample_menu(), "/app/roles", &DisclosureState::new());
        assert_eq!(row_class(&rows[0]), "nav-group nav-depth-0 nav-group-open");
        assert_eq!(row_class(&rows[5]), "nav-item nav-depth-2 nav-item-active-plain");
        assert_eq!(row_class(&rows[6]), "nav-item nav-depth-0 nav-item-single-line");

        let rows = resolve_menu(&sample_menu(), "/app/dashboard/field", &DisclosureState::new());
        assert_eq!(row_class(&rows[0]), "nav-group nav-depth-0 nav-group-open nav-group-highlight");
        assert_eq!(row_class(&rows[1]), "nav-item nav-depth-1 nav-item-active");
    }
}
