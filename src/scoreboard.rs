//! Score tallies for the two players
//!
//! The simulation only increments these; showing them is up to the HUD.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::Side;

/// Points won by each side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award a point to `side`
    pub fn record(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    /// Points for one side
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Total points played
    pub fn total(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Side currently ahead (None when tied)
    pub fn leader(&self) -> Option<Side> {
        match self.left.cmp(&self.right) {
            std::cmp::Ordering::Greater => Some(Side::Left),
            std::cmp::Ordering::Less => Some(Side::Right),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_leader() {
        let mut score = Score::new();
        assert_eq!(score.leader(), None);

        score.record(Side::Right);
        assert_eq!(score.get(Side::Right), 1);
        assert_eq!(score.leader(), Some(Side::Right));

        score.record(Side::Left);
        score.record(Side::Left);
        assert_eq!(score.leader(), Some(Side::Left));
        assert_eq!(score.total(), 3);
        assert_eq!(score.to_string(), "2 - 1");
    }

    #[test]
    fn test_saturates() {
        let mut score = Score { left: u32::MAX, right: 0 };
        score.record(Side::Left);
        assert_eq!(score.left, u32::MAX);
        assert_eq!(score.total(), u32::MAX);
    }
}
