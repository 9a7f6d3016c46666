pub mod use_portal_state;
pub mod use_viewport_mode;

pub use use_portal_state::{use_portal_state, PortalState, SessionStores};
pub use use_viewport_mode::use_viewport_mode;
