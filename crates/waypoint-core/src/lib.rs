//! Waypoint Core
//!
//! Composes one matcher and one history into a `Router`, and provides the
//! pieces that link and view bindings attach through: a by-name registry,
//! link activity and view slot resolution.

mod config;
mod error;
mod link;
mod navigator;
mod registry;
mod router;
mod view;

pub use config::{RouterConfig, DEFAULT_ROUTER_NAME};
pub use error::CoreError;
pub use link::{Link, LinkState};
pub use navigator::{Navigation, Navigator};
pub use registry::{RouterRegistry, SharedRouter};
pub use router::{Resolved, Router};
pub use view::View;

// Re-export core components
pub use waypoint_history::{History, WatcherId};
pub use waypoint_location::{path, Location, LocationError, StringDict};
pub use waypoint_matcher::{
    is_included_route, is_same_route, Matcher, MatcherError, RecordId, Route, RouteConfig,
    RouteRecord, DEFAULT_SLOT, PATH_MATCH_KEY,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
