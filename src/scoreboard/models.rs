use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Storage key of an active match: the ordered (home, away) pairing.
///
/// `(A, B)` and `(B, A)` are different pairings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MatchKey {
    pub home: String,
    pub away: String,
}

impl MatchKey {
    pub fn new(home: &str, away: &str) -> Self {
        MatchKey {
            home: home.to_string(),
            away: away.to_string(),
        }
    }
}

/// One match in progress.
///
/// Only the registry creates or mutates a `Match`; callers see copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    home_team: String,
    away_team: String,
    home_score: u32,
    away_score: u32,
    /// Always `home_score + away_score`
    total_score: u32,
    start_time: DateTime<Utc>,
    /// Registry-wide start counter, last-resort tie-break for the summary
    #[serde(skip)]
    sequence: u64,
}

impl Match {
    pub(crate) fn new(key: MatchKey, start_time: DateTime<Utc>, sequence: u64) -> Self {
        Match {
            home_team: key.home,
            away_team: key.away,
            home_score: 0,
            away_score: 0,
            total_score: 0,
            start_time,
            sequence,
        }
    }

    /// Replace both score components. Callers validate non-negativity first.
    pub(crate) fn set_score(&mut self, home_score: u32, away_score: u32) {
        self.home_score = home_score;
        self.away_score = away_score;
        // u32::MAX >= 2 * i32::MAX, inputs come from non-negative i32
        self.total_score = home_score + away_score;
    }

    pub(crate) fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn home_score(&self) -> u32 {
        self.home_score
    }

    pub fn away_score(&self) -> u32 {
        self.away_score
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub(crate) fn sequence(&self) -> u64 {
        self.sequence
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} - {} {}",
            self.home_team, self.home_score, self.away_team, self.away_score
        )
    }
}
