use std::cmp::Ordering;

use super::models::Match;

/// Summary order: highest total score first, then the most recently started
/// match, then the later start sequence when two matches share an instant.
pub fn compare_for_summary(a: &Match, b: &Match) -> Ordering {
    b.total_score()
        .cmp(&a.total_score())
        .then_with(|| b.start_time().cmp(&a.start_time()))
        .then_with(|| b.sequence().cmp(&a.sequence()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::models::MatchKey;
    use chrono::{Duration, TimeZone, Utc};

    fn make_match(home: &str, away: &str, minute: i64, sequence: u64, score: (u32, u32)) -> Match {
        let kickoff = Utc.with_ymd_and_hms(2024, 6, 14, 19, 0, 0).unwrap();
        let mut m = Match::new(
            MatchKey::new(home, away),
            kickoff + Duration::minutes(minute),
            sequence,
        );
        m.set_score(score.0, score.1);
        m
    }

    #[test]
    fn test_higher_total_first() {
        let a = make_match("Spain", "Brazil", 0, 1, (10, 2));
        let b = make_match("Mexico", "Canada", 5, 2, (0, 5));
        assert_eq!(compare_for_summary(&a, &b), Ordering::Less);
        assert_eq!(compare_for_summary(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_equal_total_most_recent_first() {
        let older = make_match("Spain", "Brazil", 0, 1, (10, 2));
        let newer = make_match("Uruguay", "Italy", 10, 2, (6, 6));
        assert_eq!(compare_for_summary(&newer, &older), Ordering::Less);
    }

    #[test]
    fn test_same_instant_falls_back_to_sequence() {
        let first = make_match("Germany", "France", 0, 1, (2, 2));
        let second = make_match("Argentina", "Australia", 0, 2, (3, 1));
        assert_eq!(compare_for_summary(&second, &first), Ordering::Less);
        assert_eq!(compare_for_summary(&first, &first), Ordering::Equal);
    }
}
