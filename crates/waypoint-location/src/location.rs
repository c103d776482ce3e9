//! Navigation locations
//!
//! A `Location` is what a caller asks for: either a named route with params,
//! or a (possibly relative) path with query and hash. Normalizing resolves it
//! against the route the caller is currently on.

use serde::{Deserialize, Serialize};

use crate::dict::StringDict;
use crate::path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: Option<String>,
    pub path: Option<String>,
    /// Fragment including the leading `#`
    pub hash: Option<String>,
    pub params: Option<StringDict>,
    pub query: Option<StringDict>,
    /// Set once the location has been resolved against a base route
    #[serde(default)]
    pub normalized: bool,
}

/// Borrowed view of the route a location is normalized against
#[derive(Debug, Clone, Copy)]
pub struct RouteContext<'a> {
    pub name: Option<&'a str>,
    pub path: &'a str,
    pub params: &'a StringDict,
    /// Pattern of the most specific matched record, if any
    pub pattern: Option<&'a str>,
}

impl Location {
    pub fn new(name: Option<&str>, path: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_string),
            path: path.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn from_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A params-only location, relative to the current route
    pub fn from_params(params: StringDict) -> Self {
        Self {
            params: Some(params),
            ..Self::default()
        }
    }

    pub fn with_params(mut self, params: StringDict) -> Self {
        self.params = Some(params);
        self
    }

    pub fn with_query(mut self, query: StringDict) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.as_ref()?.get(key)
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.as_ref()?.get(key)
    }

    /// Resolve this location against the current route.
    ///
    /// Named and already-normalized locations are returned as copies.
    /// A params-only location reuses the current route (by name, or by
    /// refilling its pattern). Everything else is treated as a path.
    pub fn normalize(&self, current: Option<&RouteContext<'_>>, append: bool) -> Location {
        if self.normalized || self.name.is_some() {
            return self.clone();
        }

        if self.path.is_none() {
            if let Some(params) = &self.params {
                match current {
                    Some(current) => return self.normalize_params(params, current),
                    None => {
                        tracing::warn!("Relative params navigation requires a current route");
                    }
                }
            }
        }

        self.normalize_path(current, append)
    }

    fn normalize_params(&self, raw: &StringDict, current: &RouteContext<'_>) -> Location {
        let mut location = self.clone();
        location.normalized = true;

        let mut params = current.params.clone();
        params.extend_from(raw);

        if let Some(name) = current.name {
            location.name = Some(name.to_string());
        } else if let Some(pattern) = current.pattern {
            match path::fill_params(pattern, &params) {
                Ok(filled) => location.path = Some(filled),
                Err(e) => {
                    tracing::warn!(pattern = %pattern, "Cannot refill current route: {}", e);
                }
            }
        } else {
            tracing::warn!(
                path = %current.path,
                "Relative params navigation requires a current route"
            );
        }

        location.params = Some(params);
        location
    }

    fn normalize_path(&self, current: Option<&RouteContext<'_>>, append: bool) -> Location {
        let base = current.map(|c| c.path).unwrap_or("/");
        let mut query = StringDict::new();
        let mut hash = self.hash.clone();

        let resolved = match &self.path {
            Some(raw) => {
                let (rest, fragment) = match raw.find('#') {
                    Some(i) => (&raw[..i], Some(&raw[i..])),
                    None => (raw.as_str(), None),
                };
                let (path, query_str) = match rest.split_once('?') {
                    Some((path, query_str)) => (path, Some(query_str)),
                    None => (rest, None),
                };

                if let Some(query_str) = query_str {
                    query = path::parse_query(query_str);
                }
                if let Some(fragment) = fragment {
                    hash = Some(fragment.to_string());
                }

                if path.is_empty() {
                    base.to_string()
                } else {
                    path::resolve(path, Some(base), append)
                }
            }
            None => base.to_string(),
        };

        if let Some(raw_query) = &self.query {
            query.extend_from(raw_query);
        }

        Location {
            name: None,
            path: Some(resolved),
            hash,
            params: None,
            query: Some(query),
            normalized: true,
        }
    }

    /// Render `path?query#hash`
    pub fn stringify(&self) -> String {
        let mut out = self.path.clone().unwrap_or_else(|| "/".to_string());

        if let Some(query) = self.query.as_ref().filter(|q| !q.is_empty()) {
            let pairs: Vec<String> = query
                .iter()
                .map(|(key, value)| format!("{}={}", key, value))
                .collect();
            out.push('?');
            out.push_str(&pairs.join("&"));
        }

        if let Some(hash) = &self.hash {
            out.push_str(hash);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(
        name: Option<&'a str>,
        path: &'a str,
        params: &'a StringDict,
        pattern: Option<&'a str>,
    ) -> RouteContext<'a> {
        RouteContext {
            name,
            path,
            params,
            pattern,
        }
    }

    #[test]
    fn test_normalize_query() {
        let raw = Location::from_path("/search?type=issue&order=desc");
        let location = raw.normalize(None, false);

        assert!(location.normalized);
        assert_eq!(location.path.as_deref(), Some("/search"));
        assert_eq!(location.query_value("type"), Some("issue"));
        assert_eq!(location.query_value("order"), Some("desc"));
    }

    #[test]
    fn test_normalize_hash() {
        let raw = Location::from_path("/search?type=issue#pagination");
        let location = raw.normalize(None, false);

        assert_eq!(location.hash.as_deref(), Some("#pagination"));
        assert_eq!(location.query_value("type"), Some("issue"));
        assert_eq!(location.path.as_deref(), Some("/search"));
    }

    #[test]
    fn test_normalize_relative_path() {
        let params = StringDict::new();
        let current = context(None, "/users/root", &params, Some("/users/:username"));

        let location = Location::from_path("posts").normalize(Some(&current), false);
        assert_eq!(location.path.as_deref(), Some("/users/posts"));

        let location = Location::from_path("posts").normalize(Some(&current), true);
        assert_eq!(location.path.as_deref(), Some("/users/root/posts"));

        let location = Location::from_path("?tab=1").normalize(Some(&current), false);
        assert_eq!(location.path.as_deref(), Some("/users/root"));
        assert_eq!(location.query_value("tab"), Some("1"));
    }

    #[test]
    fn test_raw_query_wins() {
        let raw = Location::from_path("/search?type=issue")
            .with_query([("type", "pr"), ("page", "2")].into_iter().collect());
        let location = raw.normalize(None, false);

        assert_eq!(location.query_value("type"), Some("pr"));
        assert_eq!(location.query_value("page"), Some("2"));
    }

    #[test]
    fn test_named_location_is_copied() {
        let raw = Location::from_name("user").with_params([("id", "7")].into_iter().collect());
        let location = raw.normalize(None, false);
        assert_eq!(location, raw);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = Location::from_path("/a/b?x=1#h").normalize(None, false);
        let twice = once.normalize(None, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_relative_params_on_named_route() {
        let current_params: StringDict = [("username", "root"), ("tab", "a")].into_iter().collect();
        let current = context(Some("user"), "/users/root", &current_params, Some("/users/:username"));

        let raw = Location::from_params([("tab", "b")].into_iter().collect());
        let location = raw.normalize(Some(&current), false);

        assert!(location.normalized);
        assert_eq!(location.name.as_deref(), Some("user"));
        assert_eq!(location.param("username"), Some("root"));
        assert_eq!(location.param("tab"), Some("b"));
    }

    #[test]
    fn test_relative_params_refill_pattern() {
        let current_params: StringDict = [("username", "root")].into_iter().collect();
        let current = context(None, "/users/root", &current_params, Some("/users/:username"));

        let raw = Location::from_params([("username", "guest")].into_iter().collect());
        let location = raw.normalize(Some(&current), false);

        assert_eq!(location.name, None);
        assert_eq!(location.path.as_deref(), Some("/users/guest"));
    }

    #[test]
    fn test_relative_params_without_current_route() {
        let raw = Location::from_params([("id", "1")].into_iter().collect());
        let location = raw.normalize(None, false);
        assert_eq!(location.path.as_deref(), Some("/"));
    }

    #[test]
    fn test_stringify() {
        let location = Location::from_path("/search?type=issue&order=desc#top").normalize(None, false);
        assert_eq!(location.stringify(), "/search?type=issue&order=desc#top");
        assert_eq!(Location::default().stringify(), "/");
    }
}
