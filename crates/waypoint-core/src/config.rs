//! Router configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use waypoint_matcher::RouteConfig;

use crate::error::CoreError;
use crate::Result;

/// Name that link and view bindings look up when none is given
pub const DEFAULT_ROUTER_NAME: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Registry name of the router
    pub name: String,
    /// Class applied to links whose target includes the current route
    pub link_active_class: String,
    /// Class applied to links whose target is exactly the current route
    pub link_exact_active_class: String,
    /// Route table
    pub routes: Vec<RouteConfig>,
}

impl RouterConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_routes(mut self, routes: Vec<RouteConfig>) -> Self {
        self.routes = routes;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RouterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Config("Router name cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ROUTER_NAME.to_string(),
            link_active_class: "router-link-active".to_string(),
            link_exact_active_class: "router-link-exact-active".to_string(),
            routes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RouterConfig::default();
        assert_eq!(config.name, "default");
        assert_eq!(config.link_active_class, "router-link-active");
        assert_eq!(config.link_exact_active_class, "router-link-exact-active");
        assert!(config.routes.is_empty());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = RouterConfig::from_json_str(
            r#"{ "routes": [ { "path": "/about", "name": "about" } ] }"#,
        )
        .unwrap();

        assert_eq!(config.name, "default");
        assert_eq!(config.link_active_class, "router-link-active");
        assert_eq!(config.routes[0].name.as_deref(), Some("about"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = RouterConfig::from_json_str(r#"{ "name": "  " }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        let result = RouterConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = RouterConfig::load("/definitely/not/here/router.json");
        assert!(matches!(result, Err(CoreError::Io(_))));
    }
}
