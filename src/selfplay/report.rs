//! Self-play report generation.

use crate::board::{Marker, Scores};
use serde::Serialize;

/// Result of a single self-play game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub final_scores: Scores,
    /// Every placement in order, X first
    pub moves: Vec<(usize, usize)>,
    pub opening_plies: usize,
    /// Marker with the higher final score, None on a tie
    pub winner: Option<Marker>,
}

impl GameRecord {
    pub fn new(final_scores: Scores, moves: Vec<(usize, usize)>, opening_plies: usize) -> Self {
        Self {
            final_scores,
            moves,
            opening_plies,
            winner: final_scores.leader(),
        }
    }
}

/// Aggregated results from a batch of self-play games.
#[derive(Debug, Clone, Serialize)]
pub struct SelfPlayReport {
    pub num_games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
    pub avg_score_x: f64,
    pub avg_score_o: f64,
    pub max_score: u32,
    pub games: Vec<GameRecord>,
}

impl SelfPlayReport {
    pub fn from_games(games: Vec<GameRecord>) -> Self {
        let num_games = games.len() as u32;
        let count = |winner: Option<Marker>| games.iter().filter(|g| g.winner == winner).count() as u32;
        let avg = |marker: Marker| {
            if games.is_empty() {
                0.0
            } else {
                games
                    .iter()
                    .map(|g| g.final_scores.get(marker) as f64)
                    .sum::<f64>()
                    / games.len() as f64
            }
        };
        let max_score = games
            .iter()
            .map(|g| g.final_scores.x.max(g.final_scores.o))
            .max()
            .unwrap_or(0);

        Self {
            num_games,
            x_wins: count(Some(Marker::X)),
            o_wins: count(Some(Marker::O)),
            ties: count(None),
            avg_score_x: avg(Marker::X),
            avg_score_o: avg(Marker::O),
            max_score,
            games,
        }
    }

    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════\n");
        report.push_str("               SELF-PLAY REPORT\n");
        report.push_str("═══════════════════════════════════════════════\n\n");

        report.push_str(&format!("Games played:   {}\n", self.num_games));
        report.push_str(&format!("X wins:         {}\n", self.x_wins));
        report.push_str(&format!("O wins:         {}\n", self.o_wins));
        report.push_str(&format!("Ties:           {}\n", self.ties));
        report.push_str(&format!("Avg score X:    {:.2}\n", self.avg_score_x));
        report.push_str(&format!("Avg score O:    {:.2}\n", self.avg_score_o));
        report.push_str(&format!("Best score:     {}\n", self.max_score));

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(x: u32, o: u32) -> GameRecord {
        GameRecord::new(Scores { x, o }, vec![(0, 0)], 0)
    }

    #[test]
    fn test_report_counts_outcomes() {
        let report = SelfPlayReport::from_games(vec![record(3, 1), record(2, 5), record(4, 4)]);
        assert_eq!(report.num_games, 3);
        assert_eq!(report.x_wins, 1);
        assert_eq!(report.o_wins, 1);
        assert_eq!(report.ties, 1);
        assert!((report.avg_score_x - 3.0).abs() < 1e-9);
        assert!((report.avg_score_o - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.max_score, 5);
    }

    #[test]
    fn test_empty_report() {
        let report = SelfPlayReport::from_games(Vec::new());
        assert_eq!(report.num_games, 0);
        assert_eq!(report.avg_score_x, 0.0);
        assert_eq!(report.max_score, 0);
    }

    #[test]
    fn test_text_and_json_output() {
        let report = SelfPlayReport::from_games(vec![record(3, 1)]);
        assert!(report.to_text().contains("X wins:         1"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["x_wins"], 1);
        assert_eq!(json["games"][0]["final_scores"]["x"], 3);
        assert_eq!(json["games"][0]["winner"], "X");
    }
}
