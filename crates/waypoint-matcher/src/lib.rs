//! Waypoint Route Matching
//!
//! The static routing table and the algorithm that turns a `Location`
//! into a resolved `Route`:
//! 1. Named locations → lookup by name, params filled into the pattern
//! 2. Path locations → ordered scan over registered patterns
//! 3. No match → a route with an empty matched chain

mod config;
mod error;
mod matcher;
mod record;
mod route;

pub use config::RouteConfig;
pub use error::MatcherError;
pub use matcher::{match_pattern, Matcher, PATH_MATCH_KEY};
pub use record::{RecordId, RouteRecord, DEFAULT_SLOT};
pub use route::{is_included_route, is_same_route, Route};

pub use waypoint_location::{Location, StringDict};

pub type Result<T> = std::result::Result<T, MatcherError>;
