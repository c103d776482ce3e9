//! Route-change watchers

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use waypoint_matcher::Route;

/// Handle returned by `History::watch`, used to unwatch later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatcherId(Uuid);

impl WatcherId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for WatcherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

type Callback = Box<dyn FnMut(&Route, Option<&Route>) + Send>;

pub struct Watcher {
    id: WatcherId,
    callback: Callback,
}

impl Watcher {
    pub(crate) fn new<F>(callback: F) -> Self
    where
        F: FnMut(&Route, Option<&Route>) + Send + 'static,
    {
        Self {
            id: WatcherId::new(),
            callback: Box::new(callback),
        }
    }

    pub fn id(&self) -> WatcherId {
        self.id
    }

    pub(crate) fn notify(&mut self, to: &Route, from: Option<&Route>) {
        (self.callback)(to, from);
    }
}

impl std::fmt::Debug for Watcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Watcher").field("id", &self.id).finish()
    }
}
