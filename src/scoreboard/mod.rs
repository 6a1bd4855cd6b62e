//! Registry of matches currently in progress.
//!
//! Matches are keyed by their ordered (home, away) pairing. A team may take
//! part in at most one active match at a time, on either side. Every
//! operation validates fully before touching the map, so a rejected call
//! leaves the registry unchanged.

pub mod clock;
pub mod error;
pub mod models;
pub mod ranking;
pub mod shared;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ScoreboardError;
pub use models::{Match, MatchKey};
pub use shared::SharedScoreboard;

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

pub type Result<T> = std::result::Result<T, ScoreboardError>;

pub struct MatchRegistry {
    matches: HashMap<MatchKey, Match>,
    clock: Arc<dyn Clock>,
    /// Latest start instant handed out, used to keep start times non-decreasing
    latest_start: Option<DateTime<Utc>>,
    next_sequence: u64,
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchRegistry {
    /// Empty registry stamping start times from the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        MatchRegistry {
            matches: HashMap::new(),
            clock,
            latest_start: None,
            next_sequence: 0,
        }
    }

    /// Start a new match at 0-0.
    ///
    /// Rejections, in the order they are checked:
    /// * an empty team name, or a team facing itself;
    /// * the exact (home, away) pairing is already active → `DuplicateMatch`;
    /// * both teams are busy in other matches → `BothTeamsBusy`;
    /// * one of them is busy → `TeamBusy` naming it, home checked first.
    pub fn start_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        validate_team_name(home_team)?;
        validate_team_name(away_team)?;
        if home_team == away_team {
            return Err(ScoreboardError::SameTeam(home_team.to_string()));
        }

        let key = MatchKey::new(home_team, away_team);
        if self.matches.contains_key(&key) {
            return Err(ScoreboardError::DuplicateMatch);
        }

        match (self.is_team_playing(home_team), self.is_team_playing(away_team)) {
            (true, true) => return Err(ScoreboardError::BothTeamsBusy),
            (true, false) => return Err(ScoreboardError::TeamBusy(home_team.to_string())),
            (false, true) => return Err(ScoreboardError::TeamBusy(away_team.to_string())),
            (false, false) => {}
        }

        let start_time = self.next_start_time();
        self.next_sequence += 1;
        let m = Match::new(key.clone(), start_time, self.next_sequence);
        self.matches.insert(key, m);

        debug!(
            "Match started: {} vs {} at {}",
            home_team,
            away_team,
            start_time.to_rfc3339()
        );
        Ok(())
    }

    /// Replace the score of an active match.
    ///
    /// Negative scores are rejected before the pairing is looked up, so a
    /// negative update for an unknown pairing reports `NegativeScore`.
    pub fn update_score(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_score: i32,
        away_score: i32,
    ) -> Result<()> {
        if home_score < 0 || away_score < 0 {
            return Err(ScoreboardError::NegativeScore);
        }

        let m = self
            .matches
            .get_mut(&MatchKey::new(home_team, away_team))
            .ok_or(ScoreboardError::NotFound)?;
        m.set_score(home_score as u32, away_score as u32);

        debug!("Score updated: {}", m);
        Ok(())
    }

    /// Remove an active match for good. Other matches are untouched.
    pub fn finish_match(&mut self, home_team: &str, away_team: &str) -> Result<()> {
        let finished = self
            .matches
            .remove(&MatchKey::new(home_team, away_team))
            .ok_or(ScoreboardError::NotFound)?;

        debug!("Match finished: {}", finished);
        Ok(())
    }

    /// Snapshot of all active matches, ranked for display.
    ///
    /// The returned records are copies; later registry changes do not show
    /// up in them.
    pub fn summary(&self) -> Vec<Match> {
        let mut snapshot: Vec<Match> = self.matches.values().cloned().collect();
        snapshot.sort_by(ranking::compare_for_summary);
        snapshot
    }

    pub fn get(&self, home_team: &str, away_team: &str) -> Option<&Match> {
        self.matches.get(&MatchKey::new(home_team, away_team))
    }

    pub fn contains(&self, home_team: &str, away_team: &str) -> bool {
        self.get(home_team, away_team).is_some()
    }

    /// Whether `team` is home or away in any active match.
    pub fn is_team_playing(&self, team: &str) -> bool {
        self.matches.values().any(|m| m.involves(team))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    fn next_start_time(&mut self) -> DateTime<Utc> {
        let now = self.clock.now();
        let start = match self.latest_start {
            Some(latest) if now < latest => {
                warn!(
                    "Clock went backwards ({} < {}), reusing the latest start time",
                    now.to_rfc3339(),
                    latest.to_rfc3339()
                );
                latest
            }
            _ => now,
        };
        self.latest_start = Some(start);
        start
    }
}

fn validate_team_name(team: &str) -> Result<()> {
    if team.trim().is_empty() {
        return Err(ScoreboardError::EmptyTeamName);
    }
    Ok(())
}
