use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Clock, Match, MatchRegistry, Result};

/// Thread-safe handle to a single registry (one mutex around the whole map).
///
/// Each operation holds the lock for its entire check-then-mutate sequence,
/// so two callers racing to start the same pairing cannot both succeed.
#[derive(Clone)]
pub struct SharedScoreboard {
    inner: Arc<Mutex<MatchRegistry>>,
}

impl Default for SharedScoreboard {
    fn default() -> Self {
        Self::new(MatchRegistry::new())
    }
}

impl SharedScoreboard {
    pub fn new(registry: MatchRegistry) -> Self {
        SharedScoreboard {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::new(MatchRegistry::with_clock(clock))
    }

    pub fn start_match(&self, home_team: &str, away_team: &str) -> Result<()> {
        self.lock().start_match(home_team, away_team)
    }

    pub fn update_score(
        &self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<()> {
        self.lock()
            .update_score(home_team, away_team, home_score, away_score)
    }

    pub fn finish_match(&self, home_team: &str, away_team: &str) -> Result<()> {
        self.lock().finish_match(home_team, away_team)
    }

    pub fn summary(&self) -> Vec<Match> {
        self.lock().summary()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Operations never leave the map half-updated, so a poisoned guard is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, MatchRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
