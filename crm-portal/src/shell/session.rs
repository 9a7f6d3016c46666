//! Session keys: reading the signed-in user and clearing them on logout.

use serde::Deserialize;
use tracing::{info, warn};

use crate::navigation::Role;
use crate::storage::KeyValueStore;

pub const AUTH_TOKEN: &str = "auth_token";
pub const AUTH_USER: &str = "auth_user";
pub const AUTH_ROLE: &str = "auth_role";
pub const REMEMBER_EMAIL: &str = "remember_email";

pub const SESSION_KEYS: [&str; 4] = [AUTH_TOKEN, AUTH_USER, AUTH_ROLE, REMEMBER_EMAIL];

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionUser {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Read `auth_user`. Accepts a JSON object or a bare display name.
pub fn signed_in_user(store: &dyn KeyValueStore) -> Option<SessionUser> {
    let raw = match store.get(AUTH_USER) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return None,
        Err(err) => {
            warn!("could not read {AUTH_USER}: {err}");
            return None;
        }
    };

    match serde_json::from_str::<SessionUser>(&raw) {
        Ok(user) => Some(user),
        Err(_) => Some(SessionUser {
            name: raw.trim().to_string(),
            email: None,
        }),
    }
}

pub fn display_name(user: Option<&SessionUser>) -> String {
    user.map(|u| u.name.clone()).unwrap_or_else(|| "Guest".to_string())
}

/// Role stored in `auth_role`, or `fallback` when missing or unknown.
pub fn current_role(store: &dyn KeyValueStore, fallback: Role) -> Role {
    match store.get(AUTH_ROLE) {
        Ok(Some(raw)) => Role::parse(&raw).unwrap_or_else(|| {
            warn!("unknown role {raw:?}, using {fallback}");
            fallback
        }),
        Ok(None) => fallback,
        Err(err) => {
            warn!("could not read {AUTH_ROLE}: {err}");
            fallback
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearReport {
    pub removed: usize,
    pub failed: usize,
}

/// Remove `keys` from every store. Failures are logged and skipped.
pub fn clear_session_keys<K: AsRef<str>>(stores: &[&dyn KeyValueStore], keys: &[K]) -> ClearReport {
    let mut report = ClearReport::default();
    for store in stores {
        for key in keys {
            match store.remove(key.as_ref()) {
                Ok(()) => report.removed += 1,
                Err(err) => {
                    warn!("failed to clear {}: {err}", key.as_ref());
                    report.failed += 1;
                }
            }
        }
    }
    report
}

/// Clear the session from both stores, then navigate to `logout_route`.
///
/// `navigate` is always called, and only after both stores were visited.
pub fn logout<K, F>(
    session: &dyn KeyValueStore,
    durable: &dyn KeyValueStore,
    keys: &[K],
    logout_route: &str,
    navigate: F,
) -> ClearReport
where
    K: AsRef<str>,
    F: FnOnce(&str),
{
    let report = clear_session_keys(&[session, durable], keys);
    info!(
        removed = report.removed,
        failed = report.failed,
        "session cleared, redirecting to {logout_route}"
    );
    navigate(logout_route);
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PortalError, PortalResult};
    use crate::storage::MemoryStore;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> PortalResult<Option<String>> {
            Err(PortalError::Storage("SecurityError".into()))
        }
        fn set(&self, _key: &str, _value: &str) -> PortalResult<()> {
            Err(PortalError::Storage("SecurityError".into()))
        }
        fn remove(&self, _key: &str) -> PortalResult<()> {
            Err(PortalError::StorageUnavailable)
        }
    }

    fn seeded() -> MemoryStore {
        MemoryStore::with_entries([
            (AUTH_TOKEN, "t0k3n"),
            (AUTH_USER, r#"{"name":"Dana Reyes","email":"dana@example.com"}"#),
            (AUTH_ROLE, "super-admin"),
            (REMEMBER_EMAIL, "dana@example.com"),
            ("sidebar_hint_seen", "1"),
        ])
    }

    #[test]
    fn test_logout_removes_exactly_session_keys() {
        let session = seeded();
        let durable = seeded();
        let mut target = None;

        let report = logout(&session, &durable, &SESSION_KEYS, "/login", |route| {
            target = Some(route.to_string())
        });

        assert_eq!(report, ClearReport { removed: 8, failed: 0 });
        assert_eq!(target.as_deref(), Some("/login"));
        for store in [&session, &durable] {
            assert_eq!(store.len(), 1);
            assert!(store.contains("sidebar_hint_seen"));
        }
    }

    #[test]
    fn test_logout_navigates_when_both_stores_fail() {
        let mut navigated = false;
        let report = logout(&BrokenStore, &BrokenStore, &SESSION_KEYS, "/login", |_| navigated = true);
        assert!(navigated);
        assert_eq!(report, ClearReport { removed: 0, failed: 8 });
    }

    #[test]
    fn test_logout_with_one_failing_store() {
        let durable = seeded();
        let report = logout(&BrokenStore, &durable, &SESSION_KEYS, "/login", |_| {});
        assert_eq!(report, ClearReport { removed: 4, failed: 4 });
        assert!(!durable.contains(AUTH_TOKEN));
    }

    #[test]
    fn test_signed_in_user_json_and_plain() {
        let user = signed_in_user(&seeded()).unwrap();
        assert_eq!(user.name, "Dana Reyes");
        assert_eq!(user.email.as_deref(), Some("dana@example.com"));

        let plain = MemoryStore::with_entries([(AUTH_USER, "Sam Ortiz")]);
        assert_eq!(signed_in_user(&plain).unwrap().name, "Sam Ortiz");

        assert_eq!(signed_in_user(&MemoryStore::new()), None);
        assert_eq!(signed_in_user(&BrokenStore), None);
        assert_eq!(display_name(None), "Guest");
    }

    #[test]
    fn test_current_role_fallbacks() {
        assert_eq!(current_role(&seeded(), Role::Technician), Role::SuperAdmin);
        assert_eq!(current_role(&MemoryStore::new(), Role::Technician), Role::Technician);
        let odd = MemoryStore::with_entries([(AUTH_ROLE, "auditor")]);
        assert_eq!(current_role(&odd, Role::SalesManager), Role::SalesManager);
        assert_eq!(current_role(&BrokenStore, Role::SuperAdmin), Role::SuperAdmin);
    }
}
