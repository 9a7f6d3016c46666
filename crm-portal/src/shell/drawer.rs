//! Drawer presentation mode and the overlay open/closed state machine.

use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportMode {
    /// Wide viewport: the drawer is always visible.
    Persistent,
    /// Narrow viewport: the drawer is an overlay toggled by the hamburger.
    Overlay,
}

impl ViewportMode {
    pub fn for_width(width_px: f64, breakpoint_px: f64) -> Self {
        if width_px >= breakpoint_px {
            ViewportMode::Persistent
        } else {
            ViewportMode::Overlay
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }

    /// Hamburger activation. Returns false when already open.
    pub fn open(&mut self) -> bool {
        self.transition(DrawerState::Open)
    }

    /// Backdrop click or Escape. Returns false when already closed.
    pub fn dismiss(&mut self) -> bool {
        self.transition(DrawerState::Closed)
    }

    /// A menu item was activated inside the overlay.
    pub fn on_navigate(&mut self) -> bool {
        self.transition(DrawerState::Closed)
    }

    fn transition(&mut self, next: DrawerState) -> bool {
        if *self == next {
            return false;
        }
        debug!(from = ?*self, to = ?next, "drawer transition");
        *self = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_mode_breakpoint() {
        assert_eq!(ViewportMode::for_width(1200.0, 900.0), ViewportMode::Persistent);
        assert_eq!(ViewportMode::for_width(900.0, 900.0), ViewportMode::Persistent);
        assert_eq!(ViewportMode::for_width(899.5, 900.0), ViewportMode::Overlay);
    }

    #[test]
    fn test_initially_closed() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
    }

    #[test]
    fn test_open_and_dismiss() {
        let mut drawer = DrawerState::default();
        assert!(drawer.open());
        assert!(drawer.is_open());
        assert!(drawer.dismiss());
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_repeated_requests_are_noops() {
        let mut drawer = DrawerState::default();
        assert!(!drawer.dismiss());
        assert!(!drawer.on_navigate());
        assert_eq!(drawer, DrawerState::Closed);

        drawer.open();
        assert!(!drawer.open());
        assert_eq!(drawer, DrawerState::Open);
    }

    #[test]
    fn test_navigation_closes_overlay() {
        let mut drawer = DrawerState::Open;
        assert!(drawer.on_navigate());
        assert_eq!(drawer, DrawerState::Closed);
    }
}
