//! Role-based menu definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::menu::{Icon, MenuEntry, MenuGroup, MenuItem};

/// Route paths shared by the menus and the router.
pub mod paths {
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/super-admin/dashboard";
    pub const FIELD_DASHBOARD: &str = "/super-admin/dashboard/field";
    pub const CORPORATE_DASHBOARD: &str = "/super-admin/dashboard/corporate";
    pub const LEADS: &str = "/super-admin/leads";
    pub const PURCHASE_ORDERS: &str = "/super-admin/purchase-orders";
    pub const ROLES: &str = "/super-admin/roles";

    pub fn lead(id: u32) -> String {
        format!("{LEADS}/{id}")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    SuperAdmin,
    SalesManager,
    Technician,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::SuperAdmin, Role::SalesManager, Role::Technician];

    /// Parse a stored role value. Accepts `super-admin`, `super_admin` and
    /// `SUPER_ADMIN` spellings.
    pub fn parse(value: &str) -> Option<Role> {
        let normalized = value.trim().trim_matches('"').to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "super-admin" => Some(Role::SuperAdmin),
            "sales-manager" => Some(Role::SalesManager),
            "technician" => Some(Role::Technician),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super-admin",
            Role::SalesManager => "sales-manager",
            Role::Technician => "technician",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::SalesManager => "Sales Manager",
            Role::Technician => "Technician",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn field_item() -> MenuItem {
    MenuItem::new(paths::FIELD_DASHBOARD, "Field Operations", Icon::Field)
}

fn corporate_item() -> MenuItem {
    MenuItem::new(paths::CORPORATE_DASHBOARD, "Technical Overview", Icon::Corporate)
}

fn orders_item() -> MenuItem {
    MenuItem::new(paths::PURCHASE_ORDERS, "Purchase Orders", Icon::Orders).single_line()
}

fn dashboard_group() -> MenuGroup {
    MenuGroup::new("dashboard", "Dashboard", Icon::Dashboard).highlight_on(paths::DASHBOARD)
}

fn sales_group() -> MenuGroup {
    MenuGroup::new("sales", "Sales", Icon::Sales)
        .item(MenuItem::new(paths::LEADS, "Leads", Icon::Leads))
        .item(orders_item())
}

/// The static menu a role sees.
pub fn menu_for_role(role: Role) -> Vec<MenuEntry> {
    match role {
        Role::SuperAdmin => vec![
            MenuEntry::Group(dashboard_group().item(field_item()).item(corporate_item())),
            MenuEntry::Group(sales_group()),
            MenuEntry::Group(
                MenuGroup::new("administration", "Administration", Icon::Admin).group(
                    MenuGroup::new("access", "Access Control", Icon::Access).item(
                        MenuItem::new(paths::ROLES, "Roles & Menus", Icon::Roles).plain_selection(),
                    ),
                ),
            ),
        ],
        Role::SalesManager => vec![
            MenuEntry::Group(dashboard_group().item(corporate_item())),
            MenuEntry::Group(sales_group()),
        ],
        Role::Technician => vec![
            MenuEntry::Group(dashboard_group().item(field_item())),
            MenuEntry::Item(orders_item()),
        ],
    }
}
