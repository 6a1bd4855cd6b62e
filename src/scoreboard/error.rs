use thiserror::Error;

/// Reasons a scoreboard operation is rejected.
///
/// Every variant is a validation failure on the caller's input. The registry
/// is left exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error("Match already exists")]
    DuplicateMatch,

    #[error("Both teams are already in matches")]
    BothTeamsBusy,

    #[error("Team {0} is already in a match")]
    TeamBusy(String),

    #[error("Scores cannot be negative")]
    NegativeScore,

    #[error("Match not found")]
    NotFound,

    #[error("Team name cannot be empty")]
    EmptyTeamName,

    #[error("Team {0} cannot play against itself")]
    SameTeam(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ScoreboardError::DuplicateMatch.to_string(), "Match already exists");
        assert_eq!(
            ScoreboardError::BothTeamsBusy.to_string(),
            "Both teams are already in matches"
        );
        assert_eq!(
            ScoreboardError::TeamBusy("Mexico".into()).to_string(),
            "Team Mexico is already in a match"
        );
        assert_eq!(ScoreboardError::NegativeScore.to_string(), "Scores cannot be negative");
        assert_eq!(ScoreboardError::NotFound.to_string(), "Match not found");
    }
}
