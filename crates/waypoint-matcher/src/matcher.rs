//! Route matcher
//!
//! Owns the record arena plus three indices: by name, by pattern, and the
//! ordered scan list used for path matching. Child records are scanned
//! before their parent and catch-all records are always scanned last.

use std::collections::HashMap;

use waypoint_location::{path, Location, RouteContext, StringDict};

use crate::config::RouteConfig;
use crate::error::MatcherError;
use crate::record::{RecordId, RouteRecord};
use crate::route::Route;
use crate::Result;

/// Param key that receives whatever a trailing `*` segment captured
pub const PATH_MATCH_KEY: &str = "pathMatch";

#[derive(Debug, Default)]
pub struct Matcher {
    records: Vec<RouteRecord>,
    name_map: HashMap<String, RecordId>,
    path_map: HashMap<String, RecordId>,
    path_list: Vec<RecordId>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a single record below `parent`.
    ///
    /// The config's `children` are ignored here; see [`Matcher::add_routes`].
    /// A record whose pattern is already registered is still created and
    /// returned, but only the first one takes part in path matching. The
    /// same goes for every descendant of such a shadowed record.
    pub fn add_route_record(
        &mut self,
        config: &RouteConfig,
        parent: Option<RecordId>,
    ) -> Result<RecordId> {
        let parent_path = match parent {
            Some(id) => Some(
                self.record(id)
                    .ok_or(MatcherError::UnknownParent(id))?
                    .path
                    .as_str(),
            ),
            None => None,
        };
        let path = path::resolve(&config.path, parent_path, true);

        if let Some(name) = &config.name {
            if self.name_map.contains_key(name) {
                tracing::error!(name = %name, path = %path, "Duplicate named route definition");
                return Err(MatcherError::DuplicateName {
                    name: name.clone(),
                    path,
                });
            }
        }

        let segments: Vec<&str> = path.split('/').collect();
        if segments[..segments.len().saturating_sub(1)].contains(&"*") {
            tracing::warn!(path = %path, "Wildcard is only supported as the last segment");
        }

        let id = RecordId(self.records.len());
        if let Some(name) = &config.name {
            self.name_map.insert(name.clone(), id);
        }

        if self.path_map.contains_key(&path) {
            tracing::warn!(path = %path, "Duplicate route definition");
        } else {
            self.path_map.insert(path.clone(), id);
            match parent.map(|p| self.path_list.iter().position(|&r| r == p)) {
                None => self.path_list.push(id),
                Some(Some(index)) => self.path_list.insert(index, id),
                // The parent lost its path to an earlier record, so its
                // subtree stays reachable by name only.
                Some(None) => {
                    tracing::warn!(path = %path, "Parent route is shadowed, skipping path matching");
                }
            }
        }

        tracing::debug!(record = %id, path = %path, name = ?config.name, "Registered route record");

        self.records.push(RouteRecord {
            id,
            name: config.name.clone(),
            path,
            components: config.components.clone(),
            parent,
        });
        self.move_catch_all_last();

        Ok(id)
    }

    /// Register a tree of configs, depth first in declaration order.
    ///
    /// A config that fails to register is logged and skipped together with
    /// its children. Returns the ids of the records that were created.
    pub fn add_routes(&mut self, configs: &[RouteConfig], parent: Option<RecordId>) -> Vec<RecordId> {
        let mut created = Vec::new();

        for config in configs {
            match self.add_route_record(config, parent) {
                Ok(id) => {
                    created.push(id);
                    created.extend(self.add_routes(&config.children, Some(id)));
                }
                Err(e) => {
                    tracing::error!(path = %config.path, "Skipping route definition: {}", e);
                }
            }
        }

        created
    }

    fn move_catch_all_last(&mut self) {
        let records = &self.records;
        let (mut ordered, catch_all): (Vec<RecordId>, Vec<RecordId>) = self
            .path_list
            .iter()
            .copied()
            .partition(|id| !records[id.0].is_catch_all());
        ordered.extend(catch_all);
        self.path_list = ordered;
    }

    pub fn record(&self, id: RecordId) -> Option<&RouteRecord> {
        self.records.get(id.0)
    }

    pub fn record_by_name(&self, name: &str) -> Option<&RouteRecord> {
        self.name_map.get(name).and_then(|id| self.record(*id))
    }

    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Records in path-matching order
    pub fn path_list(&self) -> &[RecordId] {
        &self.path_list
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ancestor chain of a record, root first
    pub fn chain(&self, id: RecordId) -> Vec<RecordId> {
        let mut chain = Vec::new();
        let mut next = self.record(id);

        while let Some(record) = next {
            chain.push(record.id);
            next = record.parent.and_then(|parent| self.record(parent));
        }

        chain.reverse();
        chain
    }

    /// Borrowed view of a route for location normalization
    pub fn context<'a>(&'a self, route: &'a Route) -> RouteContext<'a> {
        RouteContext {
            name: route.name(),
            path: route.path(),
            params: route.params(),
            pattern: route
                .matched()
                .last()
                .and_then(|id| self.record(*id))
                .map(|record| record.path.as_str()),
        }
    }

    pub fn normalize(&self, raw: &Location, current: Option<&Route>, append: bool) -> Location {
        let context = current.map(|route| self.context(route));
        raw.normalize(context.as_ref(), append)
    }

    /// Resolve a raw location into a route.
    ///
    /// Unknown names and unmatched paths yield a route with an empty
    /// matched chain rather than an error.
    pub fn match_location(&self, raw: &Location, current: Option<&Route>) -> Route {
        let location = self.normalize(raw, current, false);

        if location.name.is_some() {
            self.match_by_name(location, current)
        } else if location.path.is_some() {
            self.match_by_path(location)
        } else {
            Route::build(None, &location, Vec::new())
        }
    }

    fn match_by_name(&self, mut location: Location, current: Option<&Route>) -> Route {
        let name = location.name.as_deref().unwrap_or_default();
        let Some(record) = self.record_by_name(name) else {
            tracing::warn!(name = %name, "Route with this name does not exist");
            return Route::build(None, &location, Vec::new());
        };

        let mut params = location.params.take().unwrap_or_default();
        if let Some(current) = current {
            for key in path::parse_keys(&record.path) {
                if params.contains_key(&key) {
                    continue;
                }
                if let Some(value) = current.param(&key) {
                    params.set(key.as_str(), value);
                }
            }
        }

        location.path = match path::fill_params(&record.path, &params) {
            Ok(filled) => Some(filled),
            Err(e) => {
                tracing::warn!(name = %name, "Cannot build path for named route: {}", e);
                None
            }
        };
        location.params = Some(params);

        Route::build(Some(record), &location, self.chain(record.id))
    }

    fn match_by_path(&self, mut location: Location) -> Route {
        let target = location.path.clone().unwrap_or_default();

        for id in &self.path_list {
            let record = &self.records[id.0];
            if let Some(captured) = match_pattern(&record.path, &target) {
                let mut params = location.params.take().unwrap_or_default();
                params.extend_from(&captured);
                location.params = Some(params);
                return Route::build(Some(record), &location, self.chain(record.id));
            }
        }

        Route::build(None, &location, Vec::new())
    }
}

/// Structurally match a concrete path against a pattern.
///
/// Literal segments must be equal, `:name` segments capture the aligned
/// segment and a `*` segment captures everything that remains under
/// [`PATH_MATCH_KEY`]. Without a wildcard both sides must have the same
/// number of segments. A single trailing `/` on either side is ignored.
pub fn match_pattern(pattern: &str, path: &str) -> Option<StringDict> {
    fn segments(path: &str) -> Vec<&str> {
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };
        trimmed.split('/').collect()
    }

    let expected = segments(pattern);
    let actual = segments(path);
    let mut params = StringDict::new();

    for (i, segment) in expected.iter().enumerate() {
        if *segment == "*" {
            let rest = actual.get(i..).map(|rest| rest.join("/")).unwrap_or_default();
            params.set(PATH_MATCH_KEY, rest);
            return Some(params);
        }

        let value = actual.get(i)?;
        match path::param_key(segment) {
            Some(key) => params.set(key, *value),
            None if segment == value => {}
            None => return None,
        }
    }

    (expected.len() == actual.len()).then_some(params)
}
