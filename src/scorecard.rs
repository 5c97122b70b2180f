//! Round scoring and the best-rounds table
//!
//! A `Scorecard` follows one round as it is played; `BestRounds` keeps the
//! ten best finished rounds, lowest stroke total first. Both serialize so
//! shells can persist them between sessions.

use serde::{Deserialize, Serialize};

/// Maximum number of best rounds to keep
pub const MAX_BEST_ROUNDS: usize = 10;

/// Strokes for one round, hole by hole
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Scorecard {
    /// Strokes per finished hole, in course order.
    pub strokes: Vec<u32>,
}

impl Scorecard {
    /// Empty card for a fresh round.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Record a finished hole.
    pub fn record(&mut self, strokes: u32) {
        self.strokes.push(strokes);
    }

    /// Stroke total so far.
    pub fn total(&self) -> u32 {
        self.strokes.iter().sum()
    }

    /// Holes finished so far.
    pub fn holes_played(&self) -> usize {
        self.strokes.len()
    }

    /// Whether every hole of a course of `holes` has been finished.
    pub fn is_complete(&self, holes: usize) -> bool {
        self.strokes.len() >= holes
    }
}

/// A finished round on the best-rounds table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundEntry {
    /// Stroke total; the ranking key, lower is better.
    pub total: u32,
    /// Per-hole strokes for display.
    pub strokes: Vec<u32>,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// The ten best finished rounds, lowest total first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BestRounds {
    pub entries: Vec<RoundEntry>,
}

impl BestRounds {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a stroke total qualifies for the table
    pub fn qualifies(&self, total: u32) -> bool {
        if total == 0 {
            // A finished round has at least one stroke per hole.
            return false;
        }
        if self.entries.len() < MAX_BEST_ROUNDS {
            return true;
        }
        // Check if the total beats the worst kept round
        self.entries.last().map(|e| total < e.total).unwrap_or(true)
    }

    /// Get the rank a total would achieve (1-indexed, None if it doesn't
    /// qualify). Ties rank behind the rounds already on the table.
    pub fn potential_rank(&self, total: u32) -> Option<usize> {
        if !self.qualifies(total) {
            return None;
        }
        let rank = self.entries.iter().position(|e| total < e.total);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a finished round to the table (if it qualifies)
    /// Returns the rank achieved (1-indexed) or None if it didn't qualify
    pub fn add_round(&mut self, card: &Scorecard, timestamp: f64) -> Option<usize> {
        let total = card.total();
        if !self.qualifies(total) {
            return None;
        }

        let entry = RoundEntry {
            total,
            strokes: card.strokes.clone(),
            timestamp,
        };

        // Find insertion point (sorted ascending by total)
        let pos = self.entries.iter().position(|e| total < e.total);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, entry);
                i + 1
            }
            None => {
                self.entries.push(entry);
                self.entries.len()
            }
        };

        // Trim to max size
        self.entries.truncate(MAX_BEST_ROUNDS);

        Some(rank)
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the best total (if any)
    pub fn best_total(&self) -> Option<u32> {
        self.entries.first().map(|e| e.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(strokes: &[u32]) -> Scorecard {
        Scorecard {
            strokes: strokes.to_vec(),
        }
    }

    #[test]
    fn test_scorecard_totals() {
        let mut sc = Scorecard::new();
        assert_eq!(sc.total(), 0);
        assert!(!sc.is_complete(3));

        sc.record(2);
        sc.record(5);
        sc.record(3);
        assert_eq!(sc.total(), 10);
        assert_eq!(sc.holes_played(), 3);
        assert!(sc.is_complete(3));
    }

    #[test]
    fn test_lower_total_ranks_first() {
        let mut best = BestRounds::new();
        assert!(best.is_empty());

        assert_eq!(best.add_round(&card(&[4, 4, 4]), 1.0), Some(1));
        assert_eq!(best.add_round(&card(&[2, 2, 2]), 2.0), Some(1));
        assert_eq!(best.add_round(&card(&[3, 3, 3]), 3.0), Some(2));

        let totals: Vec<u32> = best.entries.iter().map(|e| e.total).collect();
        assert_eq!(totals, [6, 9, 12]);
        assert_eq!(best.best_total(), Some(6));
    }

    #[test]
    fn test_ties_rank_behind_existing_rounds() {
        let mut best = BestRounds::new();
        best.add_round(&card(&[3, 3]), 1.0);
        assert_eq!(best.potential_rank(6), Some(2));
        assert_eq!(best.add_round(&card(&[2, 4]), 2.0), Some(2));
    }

    #[test]
    fn test_table_keeps_only_the_best_ten() {
        let mut best = BestRounds::new();
        for total in 2..=(MAX_BEST_ROUNDS as u32 + 1) {
            best.add_round(&card(&[total]), total as f64);
        }
        assert_eq!(best.entries.len(), MAX_BEST_ROUNDS);

        // Worse than everything kept: rejected outright.
        assert!(!best.qualifies(99));
        assert_eq!(best.potential_rank(99), None);
        assert_eq!(best.add_round(&card(&[99]), 12.0), None);

        // A better round takes the top and pushes the worst one off.
        assert_eq!(best.add_round(&card(&[1]), 13.0), Some(1));
        assert_eq!(best.entries.len(), MAX_BEST_ROUNDS);
        assert_eq!(best.best_total(), Some(1));
        assert_eq!(best.entries.last().unwrap().total, 10);
    }

    #[test]
    fn test_unplayed_card_never_qualifies() {
        let best = BestRounds::new();
        assert!(!best.qualifies(0));
        assert_eq!(
            BestRounds::new().add_round(&Scorecard::new(), 1.0),
            None
        );
    }
}
