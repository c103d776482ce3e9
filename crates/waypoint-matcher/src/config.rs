//! Route definitions
//!
//! A `RouteConfig` is the declarative input to the matcher. Nested
//! `children` are registered below their parent, with relative paths
//! resolved against the parent's pattern.

use serde::{Deserialize, Serialize};
use waypoint_location::StringDict;

use crate::record::DEFAULT_SLOT;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub path: String,
    /// Slot name -> component identifier
    #[serde(default)]
    pub components: StringDict,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteConfig>,
}

impl RouteConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Bind a component to a slot (`None` is the default slot)
    pub fn component(mut self, slot: Option<&str>, component: impl Into<String>) -> Self {
        self.components.set(slot.unwrap_or(DEFAULT_SLOT), component);
        self
    }

    pub fn child(mut self, child: RouteConfig) -> Self {
        self.children.push(child);
        self
    }
}
