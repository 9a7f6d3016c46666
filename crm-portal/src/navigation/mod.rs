//! Side navigation: route matching, disclosure flags and role menus.

pub mod disclosure;
pub mod menu;
pub mod roles;
pub mod route_matcher;

pub use disclosure::{DisclosureState, GroupId};
pub use menu::{resolve_menu, row_class, Icon, MenuAction, MenuEntry, MenuGroup, MenuItem, MenuKind, MenuRow, RowKind};
pub use roles::{menu_for_role, paths, Role};
pub use route_matcher::is_active;
