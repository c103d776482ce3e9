//! Waypoint Locations
//!
//! Leaf building blocks of the navigation engine:
//! - `StringDict`: string tables used for params, query and component slots
//! - path utilities: relative resolution, query parsing, `:param` handling
//! - `Location`: a navigation intent, before and after normalization

mod dict;
mod error;
mod location;
pub mod path;

pub use dict::StringDict;
pub use error::LocationError;
pub use location::{Location, RouteContext};

pub type Result<T> = std::result::Result<T, LocationError>;
