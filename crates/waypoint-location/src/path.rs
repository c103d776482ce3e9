//! Path utilities
//!
//! Pure helpers shared by location normalization and route matching.
//! Patterns are `/`-separated; a segment of the form `:name` is a dynamic
//! parameter and a final `*` segment is a wildcard.

use std::cmp::Ordering;

use crate::dict::StringDict;
use crate::error::LocationError;
use crate::Result;

/// Resolve `relative` against `base`.
///
/// Absolute paths are returned unchanged and `?query` / `#hash` inputs are
/// appended to the base. Otherwise the last base segment is dropped (unless
/// `append` is set and the base does not end with `/`), then `..` and `.`
/// segments are applied left to right. `..` never climbs above the root.
pub fn resolve(relative: &str, base: Option<&str>, append: bool) -> String {
    if relative.starts_with('/') {
        return relative.to_string();
    }

    let base = match base {
        Some(base) if !base.is_empty() => base,
        _ => "/",
    };

    if relative.starts_with('?') || relative.starts_with('#') {
        return format!("{}{}", base, relative);
    }

    let mut stack: Vec<&str> = base.split('/').collect();
    if !append || stack.last().is_some_and(|last| last.is_empty()) {
        stack.pop();
    }

    for segment in relative.split('/') {
        match segment {
            ".." => {
                stack.pop();
            }
            "." => {}
            _ => stack.push(segment),
        }
    }

    let segments: Vec<&str> = stack.into_iter().filter(|s| !s.is_empty()).collect();
    format!("/{}", segments.join("/"))
}

/// Parse a query string (without the leading `?`) into a table.
///
/// Pairs are split on `&`, then on the first `=`; a pair without `=` maps
/// to an empty value.
pub fn parse_query(query: &str) -> StringDict {
    let mut dict = StringDict::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        match pair.split_once('=') {
            Some((key, value)) => dict.set(key, value),
            None => dict.set(pair, ""),
        }
    }

    dict
}

/// Extract the `:name` parameter keys of a pattern, left to right
pub fn parse_keys(pattern: &str) -> Vec<String> {
    pattern
        .split('/')
        .filter_map(param_key)
        .map(str::to_string)
        .collect()
}

/// Substitute `params` into every `:name` segment of `pattern`
pub fn fill_params(pattern: &str, params: &StringDict) -> Result<String> {
    let mut segments = Vec::new();

    for segment in pattern.split('/') {
        match param_key(segment) {
            Some(key) => {
                let value = params
                    .get(key)
                    .ok_or_else(|| LocationError::MissingParam {
                        key: key.to_string(),
                        pattern: pattern.to_string(),
                    })?;
                segments.push(value);
            }
            None => segments.push(segment),
        }
    }

    Ok(segments.join("/"))
}

/// Compare two paths, treating a single trailing `/` as insignificant
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    fn trim(path: &str) -> &str {
        path.strip_suffix('/').unwrap_or(path)
    }

    trim(a).cmp(trim(b))
}

/// Segment-aware prefix test.
///
/// `"/profile/events"` starts with `"/profile"` and `"/profile/"`, but not
/// with `"/profile/event"`.
pub fn starts_with(path: &str, prefix: &str) -> bool {
    let p = path.as_bytes();
    let q = prefix.as_bytes();
    let common = p.iter().zip(q).take_while(|(a, b)| a == b).count();
    let mut consumed = common;

    if common < p.len() && common < q.len() {
        return false;
    }

    if consumed < q.len() {
        // "/path/to/a" against "/path/to/a/"
        if q[consumed] == b'/' && consumed + 1 == q.len() {
            consumed += 1;
        } else {
            return false;
        }
    }

    if consumed > 0 {
        if q[consumed - 1] == b'/' {
            return true;
        }
        if common < p.len() && p[common] == b'/' {
            return true;
        }
    }

    common == p.len() && consumed == q.len()
}

/// The parameter name of a `:name` segment
pub fn param_key(segment: &str) -> Option<&str> {
    segment
        .strip_prefix(':')
        .filter(|key| !key.is_empty())
}
