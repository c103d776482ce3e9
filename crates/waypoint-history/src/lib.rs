//! Waypoint History
//!
//! Browser-style navigation history over resolved routes:
//! - `push` truncates the forward entries, then appends
//! - `replace` overwrites the entry under the cursor
//! - `go` moves the cursor, clamped to the stored entries
//!
//! Every transition notifies the registered watchers with `(to, from)`.

mod history;
mod watcher;

pub use history::History;
pub use watcher::{Watcher, WatcherId};
