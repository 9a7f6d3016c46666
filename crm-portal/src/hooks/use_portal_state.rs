use std::rc::Rc;

use dioxus::prelude::*;
use tracing::info;

use crm_portal::config::PortalConfig;
use crm_portal::navigation::{menu_for_role, MenuEntry, Role};
use crm_portal::shell::{current_role, display_name, logout as end_session, signed_in_user, DrawerState, SessionUser};
use crm_portal::storage::{BrowserStorage, KeyValueStore};

/// The two stores session keys live in.
#[derive(Clone)]
pub struct SessionStores {
    pub session: Rc<dyn KeyValueStore>,
    pub durable: Rc<dyn KeyValueStore>,
}

impl SessionStores {
    pub fn browser() -> Self {
        Self {
            session: Rc::new(BrowserStorage::session()),
            durable: Rc::new(BrowserStorage::durable()),
        }
    }
}

/// State shared by everything inside the authenticated shell.
#[derive(Clone)]
pub struct PortalState {
    pub config: PortalConfig,
    pub stores: SessionStores,
    pub role: Signal<Role>,
    pub user: Signal<Option<SessionUser>>,
    pub drawer: Signal<DrawerState>,
}

pub fn use_portal_state() -> PortalState {
    let config = use_context::<PortalConfig>();
    let stores = use_context::<SessionStores>();

    let role = use_signal({
        let session = stores.session.clone();
        let fallback = config.default_role;
        move || current_role(session.as_ref(), fallback)
    });
    let user = use_signal({
        let session = stores.session.clone();
        move || signed_in_user(session.as_ref())
    });
    let drawer = use_signal(DrawerState::default);

    PortalState {
        config,
        stores,
        role,
        user,
        drawer,
    }
}

impl PortalState {
    pub fn menu(&self) -> Vec<MenuEntry> {
        menu_for_role(*self.role.read())
    }

    pub fn user_name(&self) -> String {
        display_name(self.user.read().as_ref())
    }

    pub fn open_drawer(&mut self) {
        self.drawer.write().open();
    }

    pub fn dismiss_drawer(&mut self) {
        if self.drawer.peek().is_open() {
            self.drawer.write().dismiss();
        }
    }

    /// Hook for menu activations inside the overlay drawer.
    pub fn close_after_navigate(&mut self) {
        if self.drawer.peek().is_open() {
            self.drawer.write().on_navigate();
        }
    }

    pub fn logout(&self, navigator: Navigator) {
        info!("logging out {}", display_name(self.user.peek().as_ref()));
        end_session(
            self.stores.session.as_ref(),
            self.stores.durable.as_ref(),
            self.config.session_keys.as_slice(),
            &self.config.logout_route,
            |route| {
                navigator.replace(route.to_string());
            },
        );
    }
}
