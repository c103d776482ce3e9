//! Router registry
//!
//! Link and view bindings created independently of each other find "their"
//! router by name through a registry owned by whoever composes them.
//!
//! Watchers may capture a registry clone. While a router is notifying, its
//! lock is held by the navigating caller, so watchers navigate through
//! [`RouterRegistry::navigate`], which defers instead of locking.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

use crate::config::DEFAULT_ROUTER_NAME;
use crate::error::CoreError;
use crate::navigator::{Navigation, Navigator};
use crate::router::Router;
use crate::Result;

pub type SharedRouter = Arc<Mutex<Router>>;

#[derive(Clone)]
struct Entry {
    router: SharedRouter,
    navigator: Navigator,
}

#[derive(Clone)]
pub struct RouterRegistry {
    routers: Arc<RwLock<HashMap<String, Entry>>>,
}

impl RouterRegistry {
    pub fn new() -> Self {
        Self {
            routers: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a router under its own name
    pub fn register(&self, router: Router) -> Result<SharedRouter> {
        let name = router.name().to_string();
        let mut routers = self.routers.write();

        if routers.contains_key(&name) {
            tracing::error!(router = %name, "Router is already registered");
            return Err(CoreError::DuplicateRouter(name));
        }

        let navigator = router.navigator();
        let shared = Arc::new(Mutex::new(router));
        routers.insert(
            name.clone(),
            Entry {
                router: Arc::clone(&shared),
                navigator,
            },
        );

        tracing::info!(router = %name, "Registered router");

        Ok(shared)
    }

    pub fn get_by_name(&self, name: &str) -> Result<SharedRouter> {
        self.entry(name).map(|entry| entry.router)
    }

    /// The router bindings use when they do not name one
    pub fn get_default(&self) -> Result<SharedRouter> {
        self.get_by_name(DEFAULT_ROUTER_NAME)
    }

    /// Navigate the named router.
    ///
    /// Runs immediately when the router is idle. From inside one of its
    /// watchers the navigation is queued and runs once the current
    /// navigation completes.
    pub fn navigate(&self, name: &str, navigation: Navigation) -> Result<()> {
        let entry = self.entry(name)?;

        if let Err(navigation) = entry.navigator.defer(navigation) {
            entry.router.lock().navigate(navigation);
        }

        Ok(())
    }

    pub fn remove(&self, name: &str) -> Option<SharedRouter> {
        let removed = self.routers.write().remove(name).map(|entry| entry.router);
        if removed.is_some() {
            tracing::info!(router = %name, "Removed router");
        }
        removed
    }

    pub fn contains(&self, name: &str) -> bool {
        self.routers.read().contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.routers.read().keys().cloned().collect();
        names.sort();
        names
    }

    fn entry(&self, name: &str) -> Result<Entry> {
        self.routers.read().get(name).cloned().ok_or_else(|| {
            tracing::error!(router = %name, "No router with this name was found");
            CoreError::RouterNotFound(name.to_string())
        })
    }
}

impl Default for RouterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
