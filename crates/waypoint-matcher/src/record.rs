//! Route records
//!
//! Records are the registered nodes of the routing table. They live in the
//! matcher's arena and point at their parent by `RecordId`.

use serde::{Deserialize, Serialize};
use waypoint_location::StringDict;

/// Slot used when a view or config does not name one
pub const DEFAULT_SLOT: &str = "default";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RouteRecord {
    pub(crate) id: RecordId,
    pub(crate) name: Option<String>,
    /// Absolute pattern, e.g. `/users/:id`
    pub(crate) path: String,
    pub(crate) components: StringDict,
    pub(crate) parent: Option<RecordId>,
}

impl RouteRecord {
    pub fn id(&self) -> RecordId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn parent(&self) -> Option<RecordId> {
        self.parent
    }

    pub fn components(&self) -> &StringDict {
        &self.components
    }

    /// Component identifier for a slot (`None` is the default slot)
    pub fn component(&self, slot: Option<&str>) -> Option<&str> {
        self.components.get(slot.unwrap_or(DEFAULT_SLOT))
    }

    /// True for the catch-all pattern that must sort after every other record
    pub fn is_catch_all(&self) -> bool {
        self.path.trim_start_matches('/') == "*"
    }
}
