pub mod authenticated_shell;
pub mod sidebar;
pub mod top_bar;

pub use authenticated_shell::AuthenticatedShell;
pub use sidebar::Sidebar;
pub use top_bar::TopBar;
