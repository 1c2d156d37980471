use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Types used when nothing else is configured.
pub const DEFAULT_TYPES: [&str; 1] = ["HSK1"];
pub const DEFAULT_ANSWERS_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoring {
    /// Points added on the correct pick.
    pub correct: i64,
    /// Points added on a wrong pick, normally negative.
    pub wrong: i64,
    /// Lowest score a wrong pick can leave behind.
    pub floor: i64,
}

impl Default for Scoring {
    fn default() -> Self {
        Scoring { correct: 10, wrong: -10, floor: 0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoNext {
    pub enabled: bool,
    pub delay: Duration,
}

impl AutoNext {
    pub fn delay_ms(&self) -> u64 {
        self.delay.as_millis() as u64
    }
}

impl Default for AutoNext {
    fn default() -> Self {
        AutoNext { enabled: true, delay: Duration::from_secs(2) }
    }
}

/// Every knob the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizConfig {
    pub scoring: Scoring,
    pub auto_next: AutoNext,
    pub answers_count: usize,
    pub default_types: Vec<String>,
    /// Reveal the full entry detail after a correct pick.
    pub flip_on_correct: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            scoring: Scoring::default(),
            auto_next: AutoNext::default(),
            answers_count: DEFAULT_ANSWERS_COUNT,
            default_types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            flip_on_correct: true,
        }
    }
}
