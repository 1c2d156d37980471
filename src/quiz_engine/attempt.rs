//! Per-round attempt state: which options are still pickable, how picks
//! score, and when the round locks.
//!
//! The machine has two phases. It starts `Active` and moves to `Locked`
//! exactly once, on the first correct pick. Nothing here renders or
//! schedules anything; the session turns outcomes into notifications.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::quiz_engine::{config::Scoring, ledger::ScoreLedger};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AttemptPhase {
    Active,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickOutcome {
    Correct { score: i64 },
    Wrong { score: i64 },
    /// Locked round, repeated wrong pick, hidden option, or unknown id.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    correct_id: u64,
    option_ids: Vec<u64>,
    answered: bool,
    wrong_picks: BTreeSet<u64>,
    hidden: BTreeSet<u64>,
}

impl Attempt {
    pub fn new(correct_id: u64, option_ids: Vec<u64>) -> Self {
        Attempt {
            correct_id,
            option_ids,
            answered: false,
            wrong_picks: BTreeSet::new(),
            hidden: BTreeSet::new(),
        }
    }

    pub fn phase(&self) -> AttemptPhase {
        if self.answered { AttemptPhase::Locked } else { AttemptPhase::Active }
    }

    pub fn answered(&self) -> bool {
        self.answered
    }

    pub fn wrong_picks(&self) -> &BTreeSet<u64> {
        &self.wrong_picks
    }

    pub fn hidden(&self) -> &BTreeSet<u64> {
        &self.hidden
    }

    /// Whether picking `id` would be scored right now.
    pub fn is_selectable(&self, id: u64) -> bool {
        !self.answered
            && self.option_ids.contains(&id)
            && !self.wrong_picks.contains(&id)
            && !self.hidden.contains(&id)
    }

    pub fn pick(&mut self, id: u64, ledger: &mut ScoreLedger, scoring: &Scoring) -> PickOutcome {
        if !self.is_selectable(id) {
            return PickOutcome::Ignored;
        }
        if id == self.correct_id {
            self.answered = true;
            PickOutcome::Correct { score: ledger.award(scoring.correct) }
        } else {
            self.wrong_picks.insert(id);
            PickOutcome::Wrong { score: ledger.penalize(scoring.wrong) }
        }
    }

    /// Hide one random wrong option that is still pickable.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<u64> {
        if self.answered {
            return None;
        }
        let candidates: Vec<u64> = self
            .option_ids
            .iter()
            .copied()
            .filter(|&id| id != self.correct_id && self.is_selectable(id))
            .collect();
        let id = *candidates.choose(rng)?;
        self.hidden.insert(id);
        Some(id)
    }
}
