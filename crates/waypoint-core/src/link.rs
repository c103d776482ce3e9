//! Router links
//!
//! The widget-independent half of a navigation link: which classes it
//! should carry for the current route, and what clicking it does.

use serde::{Deserialize, Serialize};
use waypoint_location::Location;
use waypoint_matcher::{is_included_route, is_same_route, Route};

use crate::router::Router;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub to: Location,
    /// Only count as active on an exact match
    #[serde(default)]
    pub exact: bool,
    /// Navigate with `replace` instead of `push`
    #[serde(default)]
    pub replace: bool,
    /// Overrides the router's active class
    #[serde(default)]
    pub active_class: Option<String>,
    /// Overrides the router's exact-active class
    #[serde(default)]
    pub exact_active_class: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkState {
    pub active: bool,
    pub exact_active: bool,
}

impl Link {
    pub fn new(to: Location) -> Self {
        Self {
            to,
            exact: false,
            replace: false,
            active_class: None,
            exact_active_class: None,
        }
    }

    /// Link to a path, the way link markup usually spells its target
    pub fn to_path(path: impl Into<String>) -> Self {
        Self::new(Location::from_path(path))
    }

    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = Some(class.into());
        self
    }

    pub fn with_exact_active_class(mut self, class: impl Into<String>) -> Self {
        self.exact_active_class = Some(class.into());
        self
    }

    /// Activity of this link while `current` is displayed
    pub fn state(&self, router: &Router, current: Option<&Route>) -> LinkState {
        let Some(current) = current else {
            return LinkState::default();
        };

        let location = router.matcher().normalize(&self.to, Some(current), false);
        let target = router.matcher().match_location(&location, Some(current));
        let exact_active = is_same_route(current, &target);
        let active = if self.exact {
            exact_active
        } else {
            is_included_route(current, &target)
        };

        LinkState {
            active,
            exact_active,
        }
    }

    /// Class names to apply while `current` is displayed
    pub fn classes(&self, router: &Router, current: Option<&Route>) -> Vec<String> {
        let state = self.state(router, current);
        let mut classes = Vec::new();

        if state.active {
            classes.push(
                self.active_class
                    .clone()
                    .unwrap_or_else(|| router.link_active_class().to_string()),
            );
        }
        if state.exact_active {
            classes.push(
                self.exact_active_class
                    .clone()
                    .unwrap_or_else(|| router.link_exact_active_class().to_string()),
            );
        }

        classes
    }

    /// Follow the link
    pub fn navigate(&self, router: &mut Router) {
        if self.replace {
            router.replace(&self.to);
        } else {
            router.push(&self.to);
        }
    }
}
