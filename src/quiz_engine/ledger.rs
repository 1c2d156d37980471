use serde::{Deserialize, Serialize};

/// Session score, never below `floor` after a penalty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLedger {
    score: i64,
    floor: i64,
}

impl ScoreLedger {
    pub fn new(floor: i64) -> Self {
        ScoreLedger { score: 0, floor }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// Correct pick: unclamped increase.
    pub fn award(&mut self, points: i64) -> i64 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    /// Wrong pick: `points` is usually negative; the result is clamped to the floor.
    pub fn penalize(&mut self, points: i64) -> i64 {
        self.score = self.score.saturating_add(points).max(self.floor);
        self.score
    }
}

/// Display numbering for rounds. Starts at 0, the first round is 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCounter(u64);

impl QuestionCounter {
    pub fn increment(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn current(&self) -> u64 {
        self.0
    }
}
