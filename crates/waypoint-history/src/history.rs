//! History management

use waypoint_matcher::Route;

use crate::watcher::{Watcher, WatcherId};

/// Ordered routes plus a cursor.
///
/// `current()` is always `entries[index]` (or `None` while empty).
/// Watchers are notified in registration order before the entries change,
/// so `from` is the route being left.
#[derive(Debug, Default)]
pub struct History {
    index: usize,
    entries: Vec<Route>,
    watchers: Vec<Watcher>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn watch<F>(&mut self, callback: F) -> WatcherId
    where
        F: FnMut(&Route, Option<&Route>) + Send + 'static,
    {
        let watcher = Watcher::new(callback);
        let id = watcher.id();
        self.watchers.push(watcher);
        id
    }

    /// Remove a watcher; returns false if it was not registered
    pub fn unwatch(&mut self, id: WatcherId) -> bool {
        let before = self.watchers.len();
        self.watchers.retain(|w| w.id() != id);
        self.watchers.len() != before
    }

    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }

    pub fn current(&self) -> Option<&Route> {
        self.entries.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Route] {
        &self.entries
    }

    /// Drop every entry after the cursor, then append `route`
    pub fn push(&mut self, route: Route) {
        notify(&mut self.watchers, &route, self.entries.get(self.index));

        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(route);
        self.index = self.entries.len() - 1;

        tracing::debug!(
            index = self.index,
            length = self.entries.len(),
            path = %self.entries[self.index].full_path(),
            "History push"
        );
    }

    /// Overwrite the entry under the cursor. An empty history is pushed to.
    pub fn replace(&mut self, route: Route) {
        if self.entries.is_empty() {
            self.push(route);
            return;
        }

        notify(&mut self.watchers, &route, self.entries.get(self.index));
        self.entries[self.index] = route;

        tracing::debug!(
            index = self.index,
            path = %self.entries[self.index].full_path(),
            "History replace"
        );
    }

    /// Move the cursor by `delta`, clamped to the stored entries
    pub fn go(&mut self, delta: isize) -> Option<&Route> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        let target = self.index.saturating_add_signed(delta).min(last);
        let from = self.index;

        notify(
            &mut self.watchers,
            &self.entries[target],
            self.entries.get(from),
        );
        self.index = target;

        tracing::debug!(from, to = target, delta, "History go");

        self.current()
    }

    pub fn back(&mut self) -> Option<&Route> {
        self.go(-1)
    }

    pub fn forward(&mut self) -> Option<&Route> {
        self.go(1)
    }
}

fn notify(watchers: &mut [Watcher], to: &Route, from: Option<&Route>) {
    for watcher in watchers.iter_mut() {
        watcher.notify(to, from);
    }
}
