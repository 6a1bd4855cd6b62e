//! Line-oriented command scripts replayed against a [`MatchRegistry`].
//!
//! ```text
//! # comments and blank lines are ignored
//! start Mexico | Canada
//! update Mexico | Canada | 0 | 5
//! finish Mexico | Canada
//! summary
//! ```
//!
//! Arguments are separated by `|` so team names may contain spaces.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::scoreboard::{Match, MatchRegistry, ScoreboardError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start { home: String, away: String },
    Update { home: String, away: String, home_score: i32, away_score: i32 },
    Finish { home: String, away: String },
    Summary,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command '{0}'")]
    UnknownCommand(String),
    #[error("'{verb}' expects {expected} argument(s), got {got}")]
    WrongArity {
        verb: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("invalid score '{0}'")]
    InvalidScore(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("line {line}: {source}")]
    Rejected {
        line: usize,
        #[source]
        source: ScoreboardError,
    },
}

/// Parse one script line. Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let args: Vec<&str> = if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('|').map(str::trim).collect()
    };

    let command = match verb.to_lowercase().as_str() {
        "start" => {
            let [home, away] = expect_args::<2>("start", &args)?;
            Command::Start {
                home: home.to_string(),
                away: away.to_string(),
            }
        }
        "update" => {
            let [home, away, home_score, away_score] = expect_args::<4>("update", &args)?;
            Command::Update {
                home: home.to_string(),
                away: away.to_string(),
                home_score: parse_score(home_score)?,
                away_score: parse_score(away_score)?,
            }
        }
        "finish" => {
            let [home, away] = expect_args::<2>("finish", &args)?;
            Command::Finish {
                home: home.to_string(),
                away: away.to_string(),
            }
        }
        "summary" => {
            expect_args::<0>("summary", &args)?;
            Command::Summary
        }
        _ => return Err(ParseError::UnknownCommand(verb.to_string())),
    };
    Ok(Some(command))
}

fn expect_args<'a, const N: usize>(
    verb: &'static str,
    args: &[&'a str],
) -> Result<[&'a str; N], ParseError> {
    <[&str; N]>::try_from(args).map_err(|_| ParseError::WrongArity {
        verb,
        expected: N,
        got: args.len(),
    })
}

fn parse_score(raw: &str) -> Result<i32, ParseError> {
    raw.parse()
        .map_err(|_| ParseError::InvalidScore(raw.to_string()))
}

/// Apply a command to the registry. `Summary` yields a snapshot.
pub fn apply(
    registry: &mut MatchRegistry,
    command: &Command,
) -> Result<Option<Vec<Match>>, ScoreboardError> {
    match command {
        Command::Start { home, away } => registry.start_match(home, away)?,
        Command::Update {
            home,
            away,
            home_score,
            away_score,
        } => registry.update_score(home, away, *home_score, *away_score)?,
        Command::Finish { home, away } => registry.finish_match(home, away)?,
        Command::Summary => return Ok(Some(registry.summary())),
    }
    Ok(None)
}

/// What a script run produced.
#[derive(Debug, Default)]
pub struct ScriptOutcome {
    /// Snapshots requested by `summary` lines, in script order
    pub snapshots: Vec<Vec<Match>>,
    /// Commands the registry rejected (only populated with keep-going)
    pub rejected: Vec<ScriptError>,
    /// Number of commands applied successfully
    pub applied: usize,
    /// Summary after the last command
    pub final_summary: Vec<Match>,
}

/// Replays scripts against a registry it borrows.
pub struct ScriptRunner<'a> {
    registry: &'a mut MatchRegistry,
    keep_going: bool,
}

impl<'a> ScriptRunner<'a> {
    pub fn new(registry: &'a mut MatchRegistry, keep_going: bool) -> Self {
        ScriptRunner {
            registry,
            keep_going,
        }
    }

    /// Run every line of `script`.
    ///
    /// Parse errors always stop the run. A rejected command stops it too
    /// unless the runner was built with `keep_going`.
    pub fn run(&mut self, script: &str) -> Result<ScriptOutcome, ScriptError> {
        let mut outcome = ScriptOutcome::default();

        for (idx, raw) in script.lines().enumerate() {
            let line = idx + 1;
            let command = match parse_line(raw) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(source) => return Err(ScriptError::Parse { line, source }),
            };

            match apply(self.registry, &command) {
                Ok(snapshot) => {
                    debug!("line {}: applied {:?}", line, command);
                    outcome.applied += 1;
                    if let Some(snapshot) = snapshot {
                        outcome.snapshots.push(snapshot);
                    }
                }
                Err(source) if self.keep_going => {
                    warn!("line {}: {}", line, source);
                    outcome.rejected.push(ScriptError::Rejected { line, source });
                }
                Err(source) => return Err(ScriptError::Rejected { line, source }),
            }
        }

        outcome.final_summary = self.registry.summary();
        info!(
            "Script finished: {} applied, {} rejected, {} match(es) in progress",
            outcome.applied,
            outcome.rejected.len(),
            outcome.final_summary.len()
        );
        Ok(outcome)
    }
}
