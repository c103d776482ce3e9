//! Resolved routes

use serde::{Deserialize, Serialize};
use waypoint_location::{path, Location, StringDict};

use crate::record::{RecordId, RouteRecord};

/// The immutable result of matching a location.
///
/// `matched` lists record ids from the root-most ancestor to the most
/// specific record. An empty chain means nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    name: Option<String>,
    path: String,
    full_path: String,
    hash: String,
    query: StringDict,
    params: StringDict,
    matched: Vec<RecordId>,
}

impl Route {
    /// Build a route from the record that matched (if any) and its
    /// ancestor chain, root first.
    pub fn build(record: Option<&RouteRecord>, location: &Location, matched: Vec<RecordId>) -> Self {
        let name = location
            .name
            .clone()
            .or_else(|| record.and_then(|r| r.name.clone()));

        let path = location
            .path
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or("/")
            .to_string();

        let full_path = Location {
            path: Some(path.clone()),
            ..location.clone()
        }
        .stringify();

        Self {
            name,
            path,
            full_path,
            hash: location.hash.clone().unwrap_or_default(),
            query: location.query.clone().unwrap_or_default(),
            params: location.params.clone().unwrap_or_default(),
            matched,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn query(&self) -> &StringDict {
        &self.query
    }

    pub fn params(&self) -> &StringDict {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    pub fn matched(&self) -> &[RecordId] {
        &self.matched
    }

    /// Record at `index` in the matched chain (0 is the root-most ancestor)
    pub fn matched_record(&self, index: usize) -> Option<RecordId> {
        self.matched.get(index).copied()
    }

    pub fn is_matched(&self) -> bool {
        !self.matched.is_empty()
    }
}

/// Exact route equality used for "exact active" highlighting.
///
/// Same path (ignoring a trailing `/`), hash and query; or, for named
/// routes, same name, hash, query and params.
pub fn is_same_route(a: &Route, b: &Route) -> bool {
    if a.hash != b.hash || a.query != b.query {
        return false;
    }

    if path::compare_paths(&a.path, &b.path).is_eq() {
        return true;
    }

    match (&a.name, &b.name) {
        (Some(a_name), Some(b_name)) => a_name == b_name && a.params == b.params,
        _ => false,
    }
}

/// Prefix inclusion used for "active" highlighting: `current` is at or
/// below `target`, carries the target's hash (if it has one) and a superset
/// of its query.
pub fn is_included_route(current: &Route, target: &Route) -> bool {
    path::starts_with(&current.path, &target.path)
        && (target.hash.is_empty() || current.hash == target.hash)
        && current.query.includes(&target.query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(path: &str) -> Route {
        let location = Location::from_path(path).normalize(None, false);
        Route::build(None, &location, Vec::new())
    }

    #[test]
    fn test_build_defaults() {
        let route = Route::build(None, &Location::default(), Vec::new());
        assert_eq!(route.path(), "/");
        assert_eq!(route.full_path(), "/");
        assert_eq!(route.hash(), "");
        assert!(route.query().is_empty());
        assert!(route.params().is_empty());
        assert!(!route.is_matched());
    }

    #[test]
    fn test_build_name_prefers_location() {
        let record = RouteRecord {
            id: RecordId(3),
            name: Some("record-name".to_string()),
            path: "/a".to_string(),
            components: StringDict::new(),
            parent: None,
        };

        let unnamed = Location::from_path("/a").normalize(None, false);
        let route = Route::build(Some(&record), &unnamed, vec![RecordId(3)]);
        assert_eq!(route.name(), Some("record-name"));
        assert_eq!(route.matched_record(0), Some(RecordId(3)));
        assert_eq!(route.matched_record(1), None);

        let named = Location::from_name("location-name").normalize(None, false);
        let route = Route::build(Some(&record), &named, vec![RecordId(3)]);
        assert_eq!(route.name(), Some("location-name"));
    }

    #[test]
    fn test_full_path() {
        let route = route("/search?q=rust#results");
        assert_eq!(route.path(), "/search");
        assert_eq!(route.full_path(), "/search?q=rust#results");
        assert_eq!(route.query_value("q"), Some("rust"));
    }

    #[test]
    fn test_same_route() {
        let a = route("/users/root?tab=posts");
        let b = route("/users/root/?tab=posts");
        let c = route("/users/root?tab=likes");

        assert!(is_same_route(&a, &a));
        assert!(is_same_route(&a, &b));
        assert!(is_same_route(&b, &a));
        assert!(!is_same_route(&a, &c));
        assert!(!is_same_route(&c, &a));
        assert!(!is_same_route(&a, &route("/users/root?tab=posts#top")));
    }

    #[test]
    fn test_included_route() {
        let current = route("/profile/events?tab=1&sort=asc#list");

        assert!(is_included_route(&current, &route("/profile")));
        assert!(is_included_route(&current, &route("/profile/?tab=1")));
        assert!(is_included_route(&current, &route("/profile#list")));
        assert!(!is_included_route(&current, &route("/profile/event")));
        assert!(!is_included_route(&current, &route("/profile?tab=2")));
        assert!(!is_included_route(&current, &route("/profile#other")));
    }
}
