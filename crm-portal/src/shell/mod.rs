//! State behind the authenticated layout shell.

pub mod drawer;
pub mod logo;
pub mod session;

pub use drawer::{DrawerState, ViewportMode};
pub use logo::LogoFallback;
pub use session::{clear_session_keys, current_role, display_name, logout, signed_in_user, ClearReport, SessionUser, SESSION_KEYS};
