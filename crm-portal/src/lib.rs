//! CRM Portal - presentation logic for the CRM web client
//!
//! Everything here is renderer-independent and unit-testable:
//! - role-based menus, active-route matching and disclosure flags
//! - the authenticated shell's drawer, logo fallback and logout
//! - typed mock records and chart geometry for the dashboard pages
//!
//! The Dioxus components in the binary are thin views over these modules.

pub mod chart;
pub mod config;
pub mod error;
pub mod mock_data;
pub mod navigation;
pub mod shell;
pub mod storage;
pub mod types;

pub mod prelude {
    pub use crate::config::PortalConfig;
    pub use crate::error::{PortalError, PortalResult};
    pub use crate::navigation::{
        is_active, menu_for_role, paths, resolve_menu, DisclosureState, GroupId, MenuAction, MenuEntry, MenuRow, Role,
    };
    pub use crate::shell::{DrawerState, LogoFallback, ViewportMode};
    pub use crate::storage::{BrowserStorage, KeyValueStore, MemoryStore};
}
