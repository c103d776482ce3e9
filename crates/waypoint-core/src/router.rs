//! Router
//!
//! One matcher plus one history. Navigation resolves a location against
//! the current route, matches it, and hands the route to the history.

use serde::Serialize;
use waypoint_history::{History, WatcherId};
use waypoint_location::Location;
use waypoint_matcher::{Matcher, RecordId, Route, RouteConfig, RouteRecord};

use crate::config::RouterConfig;
use crate::navigator::{Navigation, Navigator};
use crate::Result;

/// A normalized location together with the route it resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
    pub location: Location,
    pub route: Route,
}

#[derive(Debug)]
pub struct Router {
    name: String,
    link_active_class: String,
    link_exact_active_class: String,
    matcher: Matcher,
    history: History,
    navigator: Navigator,
}

impl Router {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from_config(&RouterConfig::new(name))
    }

    /// Build a router and register its route table.
    ///
    /// Definitions that fail to register are logged and skipped.
    pub fn from_config(config: &RouterConfig) -> Self {
        let mut router = Self {
            name: config.name.clone(),
            link_active_class: config.link_active_class.clone(),
            link_exact_active_class: config.link_exact_active_class.clone(),
            matcher: Matcher::new(),
            history: History::new(),
            navigator: Navigator::new(),
        };

        let records = router.add_routes(&config.routes);
        tracing::info!(router = %router.name, records = records.len(), "Created router");

        router
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn link_active_class(&self) -> &str {
        &self.link_active_class
    }

    pub fn link_exact_active_class(&self) -> &str {
        &self.link_exact_active_class
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Handle for watchers that navigate in response to a change
    pub fn navigator(&self) -> Navigator {
        self.navigator.clone()
    }

    // === Route table ===

    pub fn add_route_record(
        &mut self,
        config: &RouteConfig,
        parent: Option<RecordId>,
    ) -> Result<RecordId> {
        Ok(self.matcher.add_route_record(config, parent)?)
    }

    pub fn add_routes(&mut self, configs: &[RouteConfig]) -> Vec<RecordId> {
        self.matcher.add_routes(configs, None)
    }

    pub fn record(&self, id: RecordId) -> Option<&RouteRecord> {
        self.matcher.record(id)
    }

    // === Resolution ===

    pub fn match_location(&self, raw: &Location, current: Option<&Route>) -> Route {
        self.matcher.match_location(raw, current)
    }

    /// Normalize `location` against the current route, then match it
    pub fn resolve(&self, location: &Location, append: bool) -> Resolved {
        let current = self.history.current();
        let location = self.matcher.normalize(location, current, append);
        let route = self.matcher.match_location(&location, current);

        Resolved { location, route }
    }

    pub fn current_route(&self) -> Option<&Route> {
        self.history.current()
    }

    /// Record at `index` in the current route's matched chain
    pub fn matched_record(&self, index: usize) -> Option<&RouteRecord> {
        let id = self.current_route()?.matched_record(index)?;
        self.matcher.record(id)
    }

    // === Watchers ===

    pub fn watch<F>(&mut self, callback: F) -> WatcherId
    where
        F: FnMut(&Route, Option<&Route>) + Send + 'static,
    {
        self.history.watch(callback)
    }

    pub fn unwatch(&mut self, id: WatcherId) -> bool {
        self.history.unwatch(id)
    }

    // === Navigation ===

    pub fn push(&mut self, location: &Location) {
        self.navigate(Navigation::Push(location.clone()));
    }

    pub fn replace(&mut self, location: &Location) {
        self.navigate(Navigation::Replace(location.clone()));
    }

    pub fn go(&mut self, delta: isize) -> Option<&Route> {
        self.navigate(Navigation::Go(delta));
        self.current_route()
    }

    pub fn back(&mut self) -> Option<&Route> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&Route> {
        self.go(1)
    }

    /// Run `navigation`, then every navigation watchers deferred meanwhile
    pub fn navigate(&mut self, navigation: Navigation) {
        self.navigator.begin();

        let mut next = Some(navigation);
        while let Some(navigation) = next {
            self.apply(navigation);
            next = self.navigator.next();
        }
    }

    fn apply(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Push(location) => {
                let resolved = self.resolve(&location, false);
                tracing::debug!(router = %self.name, to = %resolved.route.full_path(), "Push");
                self.history.push(resolved.route);
            }
            Navigation::Replace(location) => {
                let resolved = self.resolve(&location, false);
                tracing::debug!(router = %self.name, to = %resolved.route.full_path(), "Replace");
                self.history.replace(resolved.route);
            }
            Navigation::Go(delta) => {
                self.history.go(delta);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waypoint_matcher::StringDict;

    fn router() -> Router {
        let config = RouterConfig::default().with_routes(vec![
            RouteConfig::new("/").named("home").component(None, "home-view"),
            RouteConfig::new("/users/:username")
                .named("user")
                .component(None, "user-view")
                .child(RouteConfig::new("posts").named("user-posts").component(None, "posts-view")),
        ]);
        Router::from_config(&config)
    }

    #[test]
    fn test_from_config() {
        let router = router();
        assert_eq!(router.name(), "default");
        assert_eq!(router.matcher().len(), 3);
        assert_eq!(router.link_active_class(), "router-link-active");
        assert!(router.current_route().is_none());
    }

    #[test]
    fn test_resolve_without_current_route() {
        let router = router();
        let resolved = router.resolve(&Location::from_path("/users/root?tab=1"), false);

        assert!(resolved.location.normalized);
        assert_eq!(resolved.location.path.as_deref(), Some("/users/root"));
        assert_eq!(resolved.route.param("username"), Some("root"));
        assert_eq!(resolved.route.query_value("tab"), Some("1"));
    }

    #[test]
    fn test_resolve_append() {
        let mut router = router();
        router.push(&Location::from_path("/users/root"));

        let resolved = router.resolve(&Location::from_path("posts"), true);
        assert_eq!(resolved.route.path(), "/users/root/posts");
        assert_eq!(resolved.route.matched().len(), 2);

        let resolved = router.resolve(&Location::from_path("guest"), false);
        assert_eq!(resolved.route.path(), "/users/guest");
    }

    #[test]
    fn test_matched_record() {
        let mut router = router();
        router.push(&Location::from_path("/users/root/posts"));

        assert_eq!(router.matched_record(0).unwrap().component(None), Some("user-view"));
        assert_eq!(router.matched_record(1).unwrap().component(None), Some("posts-view"));
        assert!(router.matched_record(2).is_none());
    }

    #[test]
    fn test_push_replace_go() {
        let mut router = router();
        router.push(&Location::from_path("/"));
        router.push(&Location::from_name("user").with_params(
            [("username", "root")].into_iter().collect::<StringDict>(),
        ));
        router.replace(&Location::from_params(
            [("username", "guest")].into_iter().collect(),
        ));

        assert_eq!(router.history().len(), 2);
        assert_eq!(router.current_route().unwrap().path(), "/users/guest");

        assert_eq!(router.back().unwrap().name(), Some("home"));
        assert_eq!(router.forward().unwrap().path(), "/users/guest");
        assert_eq!(router.go(-5).unwrap().path(), "/");
    }

    #[test]
    fn test_add_route_record_duplicate_name() {
        let mut router = router();
        let result = router.add_route_record(&RouteConfig::new("/again").named("home"), None);
        assert!(matches!(result, Err(crate::CoreError::Matcher(_))));
    }

    #[test]
    fn test_watcher_follow_up_navigation() {
        let mut router = router();
        let navigator = router.navigator();
        router.watch(move |to, _| {
            if to.path() == "/users/root" {
                assert!(navigator.push(Location::from_path("/users/root/posts")).is_ok());
            }
        });

        router.push(&Location::from_path("/"));
        router.push(&Location::from_path("/users/root"));

        let paths: Vec<&str> = router.history().entries().iter().map(|r| r.path()).collect();
        assert_eq!(paths, vec!["/", "/users/root", "/users/root/posts"]);
        assert!(!router.navigator().is_dispatching());
        assert_eq!(router.navigator().pending(), 0);
    }
}
