use std::cell::RefCell;

use crm_portal::error::{PortalError, PortalResult};
use crm_portal::navigation::{
    menu_for_role, paths, resolve_menu, DisclosureState, GroupId, MenuAction, MenuRow, Role, RowKind,
};
use crm_portal::shell::{current_role, logout, DrawerState, LogoFallback, SESSION_KEYS};
use crm_portal::storage::{KeyValueStore, MemoryStore};

fn row<'a>(rows: &'a [MenuRow], label: &str) -> &'a MenuRow {
    rows.iter()
        .find(|r| r.label == label)
        .unwrap_or_else(|| panic!("no row labelled {label}"))
}

#[test]
fn test_corporate_dashboard_highlighting() {
    let menu = menu_for_role(Role::SuperAdmin);
    let rows = resolve_menu(&menu, "/super-admin/dashboard/corporate", &DisclosureState::new());

    let dashboard = row(&rows, "Dashboard");
    assert!(dashboard.active);
    assert_eq!(
        dashboard.kind,
        RowKind::Group { id: GroupId::from("dashboard"), open: true }
    );
    assert!(!row(&rows, "Field Operations").active);
    assert!(row(&rows, "Technical Overview").active);
    assert!(!row(&rows, "Leads").active);
}

#[test]
fn test_lead_detail_keeps_leads_active() {
    let menu = menu_for_role(Role::SuperAdmin);
    let rows = resolve_menu(&menu, &paths::lead(101), &DisclosureState::new());
    assert!(row(&rows, "Leads").active);
    assert!(!row(&rows, "Dashboard").active);
}

#[test]
fn test_collapsing_administration_hides_roles_until_reopened() {
    let menu = menu_for_role(Role::SuperAdmin);
    let mut disclosure = DisclosureState::new();

    let rows = resolve_menu(&menu, paths::ROLES, &disclosure);
    assert!(row(&rows, "Roles & Menus").active);

    let admin = row(&rows, "Administration").action();
    assert_eq!(admin, MenuAction::Toggle(GroupId::from("administration")));
    assert_eq!(admin.apply(&mut disclosure), None);

    let rows = resolve_menu(&menu, paths::ROLES, &disclosure);
    assert!(rows.iter().all(|r| r.label != "Access Control" && r.label != "Roles & Menus"));
    assert!(disclosure.is_open(&GroupId::from("access")));

    disclosure.toggle(&GroupId::from("administration"));
    let rows = resolve_menu(&menu, paths::ROLES, &disclosure);
    assert!(row(&rows, "Roles & Menus").active);
}

#[test]
fn test_overlay_navigation_closes_drawer() {
    let menu = menu_for_role(Role::Technician);
    let rows = resolve_menu(&menu, paths::FIELD_DASHBOARD, &DisclosureState::new());
    let mut drawer = DrawerState::default();
    let mut disclosure = DisclosureState::new();

    assert!(drawer.open());
    let target = row(&rows, "Purchase Orders").action().apply(&mut disclosure);
    assert_eq!(target.as_deref(), Some(paths::PURCHASE_ORDERS));
    assert!(drawer.on_navigate());
    assert!(!drawer.is_open());
}

/// Store that records every call into a shared log and can be told to fail.
struct LoggingStore<'a> {
    name: &'static str,
    log: &'a RefCell<Vec<String>>,
    inner: MemoryStore,
    fail: bool,
}

impl KeyValueStore for LoggingStore<'_> {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        self.log.borrow_mut().push(format!("{}:{key}", self.name));
        if self.fail {
            return Err(PortalError::Storage("QuotaExceededError".to_string()));
        }
        self.inner.remove(key)
    }
}

#[test]
fn test_logout_clears_before_navigating() {
    let log = RefCell::new(Vec::new());
    let seeded = || MemoryStore::with_entries(SESSION_KEYS.iter().map(|k| (*k, "x")));
    let session = LoggingStore { name: "session", log: &log, inner: seeded(), fail: true };
    let durable = LoggingStore { name: "durable", log: &log, inner: seeded(), fail: false };

    logout(&session, &durable, &SESSION_KEYS, paths::LOGIN, |route| {
        log.borrow_mut().push(format!("navigate:{route}"));
    });

    let entries = log.borrow().clone();
    assert_eq!(entries.len(), 9);
    assert_eq!(entries.last().map(String::as_str), Some("navigate:/login"));
    assert!(durable.inner.is_empty());
    assert_eq!(session.inner.len(), 4);
}

#[test]
fn test_role_menu_follows_stored_role() {
    let store = MemoryStore::with_entries([("auth_role", "SALES_MANAGER")]);
    let role = current_role(&store, Role::SuperAdmin);
    let labels: Vec<String> = menu_for_role(role).iter().map(|e| e.label().to_string()).collect();
    assert_eq!(labels, vec!["Dashboard", "Sales"]);
}

#[test]
fn test_logo_fallback_sequence() {
    let mut logo = LogoFallback::new(vec!["/candidate1".into(), "/candidate2".into(), "/candidate3".into()]);
    logo.on_error();
    logo.on_error();
    logo.on_error();
    assert_eq!(logo.current(), Some("/candidate3"));
}
