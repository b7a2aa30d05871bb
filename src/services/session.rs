//! Process-local session state: the fetched table and the selected symbol.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::TickerTable;

/// The two live values the dashboard holds between page renders, plus the
/// fetch timestamp for the health endpoint.
#[derive(Debug, Clone)]
pub struct Session {
    pub symbol: String,
    pub table: TickerTable,
    pub fetched_at: DateTime<Utc>,
}

/// Holder of the current session.
///
/// Lifecycle: created empty, filled by the first successful fetch,
/// overwritten by the next fetch, read by every page render, cleared only
/// by process end. Report routines receive an explicit `&Session`; nothing
/// reads this store ambiently.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Option<Session>>,
}

/// Shared session store for the axum handlers
pub type SharedSessionStore = Arc<SessionStore>;

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Replace the held session after a successful fetch
    pub async fn replace(&self, symbol: String, table: TickerTable) {
        let session = Session {
            symbol,
            table,
            fetched_at: Utc::now(),
        };
        *self.inner.write().await = Some(session);
    }

    /// Clone the current session for a page render
    pub async fn snapshot(&self) -> Option<Session> {
        self.inner.read().await.clone()
    }

    pub async fn is_loaded(&self) -> bool {
        self.inner.read().await.is_some()
    }
}
