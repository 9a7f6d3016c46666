//! Portal configuration.
//!
//! Values that used to be module-level constants (logout route, logo paths,
//! session keys, breakpoint) live here and are handed to components through
//! context.

use serde::Deserialize;
use tracing::warn;

use crate::error::PortalResult;
use crate::navigation::{paths, Role};
use crate::shell::SESSION_KEYS;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub brand_name: String,
    pub logout_route: String,
    pub logo_candidates: Vec<String>,
    pub session_keys: Vec<String>,
    /// Viewports at least this wide get the persistent drawer.
    pub overlay_breakpoint_px: f64,
    pub default_role: Role,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            brand_name: "Northwind CRM".to_string(),
            logout_route: paths::LOGIN.to_string(),
            logo_candidates: vec![
                "/candidate1".to_string(),
                "/candidate2".to_string(),
                "/candidate3".to_string(),
            ],
            session_keys: SESSION_KEYS.iter().map(|k| k.to_string()).collect(),
            overlay_breakpoint_px: 900.0,
            default_role: Role::SuperAdmin,
        }
    }
}

impl PortalConfig {
    pub fn from_json(raw: &str) -> PortalResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse `raw`, falling back to the defaults on error.
    pub fn load_or_default(raw: &str) -> Self {
        Self::from_json(raw).unwrap_or_else(|err| {
            warn!("{err}; using default portal configuration");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_yields_defaults() {
        assert_eq!(PortalConfig::from_json("{}").unwrap(), PortalConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = PortalConfig::from_json(
            r#"{ "logout_route": "/signed-out", "default_role": "technician" }"#,
        )
        .unwrap();
        assert_eq!(config.logout_route, "/signed-out");
        assert_eq!(config.default_role, Role::Technician);
        assert_eq!(config.session_keys.len(), 4);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(PortalConfig::from_json("{ logout_route: }").is_err());
        assert_eq!(PortalConfig::load_or_default("nope"), PortalConfig::default());
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = PortalConfig::from_json(include_str!("../assets/portal.json")).unwrap();
        assert_eq!(config.logo_candidates, vec!["/candidate1", "/candidate2", "/candidate3"]);
        assert_eq!(config.logout_route, "/login");
    }
}
