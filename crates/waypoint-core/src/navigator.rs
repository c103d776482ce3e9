//! Deferred navigation
//!
//! Watchers run while their router is mid-navigation, so they cannot drive
//! it directly. They hold a `Navigator` instead: navigations requested
//! during a notification are queued and run by the router, in request
//! order, as soon as the current one has finished.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use waypoint_location::Location;

/// A navigation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    Push(Location),
    Replace(Location),
    Go(isize),
}

#[derive(Debug, Default)]
struct Queue {
    dispatching: bool,
    pending: VecDeque<Navigation>,
}

/// Cloneable handle onto a router's navigation queue
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    queue: Arc<Mutex<Queue>>,
}

impl Navigator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue `navigation` if the router is dispatching.
    ///
    /// Hands the navigation back when the router is idle; the caller
    /// then runs it on the router itself.
    pub fn defer(&self, navigation: Navigation) -> std::result::Result<(), Navigation> {
        let mut queue = self.queue.lock();
        if !queue.dispatching {
            return Err(navigation);
        }

        tracing::debug!(?navigation, pending = queue.pending.len() + 1, "Deferred navigation");
        queue.pending.push_back(navigation);
        Ok(())
    }

    pub fn push(&self, location: Location) -> std::result::Result<(), Navigation> {
        self.defer(Navigation::Push(location))
    }

    pub fn replace(&self, location: Location) -> std::result::Result<(), Navigation> {
        self.defer(Navigation::Replace(location))
    }

    pub fn go(&self, delta: isize) -> std::result::Result<(), Navigation> {
        self.defer(Navigation::Go(delta))
    }

    pub fn is_dispatching(&self) -> bool {
        self.queue.lock().dispatching
    }

    pub fn pending(&self) -> usize {
        self.queue.lock().pending.len()
    }

    pub(crate) fn begin(&self) {
        self.queue.lock().dispatching = true;
    }

    /// Next queued navigation; ends the dispatch once the queue is empty.
    ///
    /// Both happen under one lock, so a request is either drained here or
    /// handed back to its caller, never stranded.
    pub(crate) fn next(&self) -> Option<Navigation> {
        let mut queue = self.queue.lock();
        let next = queue.pending.pop_front();
        if next.is_none() {
            queue.dispatching = false;
        }
        next
    }
}
