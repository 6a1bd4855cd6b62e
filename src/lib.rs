//! Live scoreboard: an in-memory registry of matches in progress with a
//! ranked summary, plus a small command-script driver around it.

pub mod config;
pub mod report;
pub mod scoreboard;
pub mod script;

pub use scoreboard::{
    Clock, ManualClock, Match, MatchKey, MatchRegistry, ScoreboardError, SharedScoreboard,
    SystemClock,
};
