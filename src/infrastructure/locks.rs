use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::Mutex as AsyncMutex;
use uuid::Uuid;

/// Per-league mutual exclusion for draft mutations.
///
/// Draft start, pick, and reset each read state, decide, then write; the
/// read-validate-write sequence must be serialized per league or two racing
/// picks can both see the same drafted count and both pass turn validation.
/// Each league gets its own async mutex so unrelated leagues never contend;
/// the registry itself is guarded by a short-lived sync lock.
///
/// The conditional `drafted_by IS NULL` update and the unique pick-slot
/// index remain in place underneath, so even a second process skipping this
/// registry cannot double-draft a player.
#[derive(Clone, Default)]
pub struct LeagueLocks {
    inner: Arc<Mutex<HashMap<Uuid, Arc<AsyncMutex<()>>>>>,
}

impl LeagueLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock for a league, creating it on first use.
    pub fn for_league(&self, league_id: Uuid) -> Arc<AsyncMutex<()>> {
        let mut map = self.inner.lock().expect("league lock registry poisoned");
        map.entry(league_id).or_default().clone()
    }
}
