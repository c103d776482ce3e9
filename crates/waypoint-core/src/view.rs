//! Router views
//!
//! A view nested `depth` views deep renders the record at that depth of the
//! matched chain, picking the component bound to its slot.

use waypoint_matcher::{Route, DEFAULT_SLOT};

use crate::router::Router;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    pub depth: usize,
    pub slot: Option<String>,
}

impl View {
    pub fn new(depth: usize) -> Self {
        Self { depth, slot: None }
    }

    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    pub fn slot(&self) -> &str {
        self.slot.as_deref().unwrap_or(DEFAULT_SLOT)
    }

    /// Component identifier this view shows for `route`
    pub fn component<'r>(&self, router: &'r Router, route: &Route) -> Option<&'r str> {
        let Some(record) = route
            .matched_record(self.depth)
            .and_then(|id| router.record(id))
        else {
            tracing::error!(depth = self.depth, path = %route.path(), "No matching route found");
            return None;
        };

        record.component(Some(self.slot()))
    }

    /// Component identifier for the router's current route
    pub fn current_component<'r>(&self, router: &'r Router) -> Option<&'r str> {
        let route = router.current_route()?;
        self.component(router, route)
    }
}
