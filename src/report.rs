use anyhow::Result;

use crate::scoreboard::Match;

/// Numbered, one line per match: `1. Uruguay 6 - Italy 6`
pub fn render_text(summary: &[Match]) -> String {
    if summary.is_empty() {
        return "No matches in progress".to_string();
    }
    summary
        .iter()
        .enumerate()
        .map(|(i, m)| format!("{}. {}", i + 1, m))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(summary: &[Match]) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoreboard::{ManualClock, MatchRegistry};
    use chrono::{Duration, TimeZone, Utc};
    use std::sync::Arc;

    fn sample_summary() -> Vec<Match> {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 14, 19, 0, 0).unwrap());
        let mut registry = MatchRegistry::with_clock(Arc::new(clock.clone()));
        registry.start_match("Spain", "Brazil").unwrap();
        clock.advance(Duration::minutes(1));
        registry.start_match("Uruguay", "Italy").unwrap();
        registry.update_score("Spain", "Brazil", 10, 2).unwrap();
        registry.update_score("Uruguay", "Italy", 6, 6).unwrap();
        registry.summary()
    }

    #[test]
    fn test_render_text() {
        assert_eq!(
            render_text(&sample_summary()),
            "1. Uruguay 6 - Italy 6\n2. Spain 10 - Brazil 2"
        );
    }

    #[test]
    fn test_render_text_empty() {
        assert_eq!(render_text(&[]), "No matches in progress");
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_summary()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["home_team"], "Uruguay");
        assert_eq!(rows[0]["total_score"], 12);
        assert_eq!(rows[1]["start_time"], "2024-06-14T19:00:00Z");
    }
}
