//! Application state for the API server.

use std::sync::Arc;

use crate::calendar::{Clock, SystemClock};
use crate::db::Database;

/// Shared application state.
///
/// Generic over `D: Database` so handlers never name a storage backend.
/// Dependencies are injected via constructor, not created internally.
pub struct AppState<D: Database> {
    db: Arc<D>,
    clock: Arc<dyn Clock>,
}

// Manual Clone impl - we only need the Arcs to be cloneable, not D
impl<D: Database> Clone for AppState<D> {
    fn clone(&self) -> Self {
        Self {
            db: Arc::clone(&self.db),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<D: Database> AppState<D> {
    /// Create state backed by the machine's local date.
    pub fn new(db: D) -> Self {
        Self::with_clock(db, SystemClock)
    }

    /// Create state with an explicit date source.
    pub fn with_clock(db: D, clock: impl Clock + 'static) -> Self {
        Self {
            db: Arc::new(db),
            clock: Arc::new(clock),
        }
    }

    /// Get a reference to the database.
    pub fn db(&self) -> &D {
        &self.db
    }

    /// Title of the today list for the current date.
    pub fn today_title(&self) -> String {
        self.clock.today_title()
    }
}
