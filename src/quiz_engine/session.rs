//! The session controller: owns every piece of mutable quiz state and turns
//! external events (pick, hint, skip, continue, timer) into transitions.
//!
//! All work is synchronous. The only deferred action is the auto-advance
//! deadline, which the host observes by calling [`QuizSession::tick`].

use std::time::Instant;

use rand::Rng;

use crate::quiz_engine::{
    attempt::{Attempt, AttemptPhase, PickOutcome},
    auto_advance::AutoAdvance,
    config::QuizConfig,
    error::{QuizError, Result},
    events::QuizEvents,
    filter::filtered_view,
    generator::generate_round,
    ledger::{QuestionCounter, ScoreLedger},
    models::{Dataset, Entry, Round},
    preferences::sanitize_types,
};

pub struct QuizSession<R, E> {
    dataset: Dataset,
    config: QuizConfig,
    active_types: Vec<String>,
    rng: R,
    events: E,
    ledger: ScoreLedger,
    counter: QuestionCounter,
    round: Round,
    attempt: Attempt,
    auto_advance: AutoAdvance,
}

impl<R: Rng, E: QuizEvents> QuizSession<R, E> {
    /// Start a session and its first round.
    ///
    /// Fails with [`QuizError::EmptyDataset`] when there is nothing to ask.
    pub fn new(dataset: Dataset, config: QuizConfig, mut rng: R, mut events: E) -> Result<Self> {
        let active_types = config.default_types.clone();
        let round = {
            let view = filtered_view(&dataset, &active_types);
            generate_round(&mut rng, &dataset, &view, config.answers_count)
                .ok_or(QuizError::EmptyDataset)?
        };

        let mut counter = QuestionCounter::default();
        let number = counter.increment();
        let attempt = attempt_for(&round);
        tracing::debug!(number, correct = round.question.correct_id(), "round started");
        events.on_round_start(number, &round);

        Ok(QuizSession {
            ledger: ScoreLedger::new(config.scoring.floor),
            dataset,
            config,
            active_types,
            rng,
            events,
            counter,
            round,
            attempt,
            auto_advance: AutoAdvance::default(),
        })
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    pub fn phase(&self) -> AttemptPhase {
        self.attempt.phase()
    }

    pub fn score(&self) -> i64 {
        self.ledger.score()
    }

    pub fn question_number(&self) -> u64 {
        self.counter.current()
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn active_types(&self) -> &[String] {
        &self.active_types
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    pub fn pending_advance(&self) -> Option<Instant> {
        self.auto_advance.due_at()
    }

    /// Entries the current type selection draws from.
    pub fn filtered_view(&self) -> Vec<&Entry> {
        filtered_view(&self.dataset, &self.active_types)
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Pick the option with `id`. `now` anchors the auto-advance deadline.
    pub fn pick(&mut self, id: u64, now: Instant) -> PickOutcome {
        let outcome = self.attempt.pick(id, &mut self.ledger, &self.config.scoring);
        tracing::debug!(id, ?outcome, "pick");

        match outcome {
            PickOutcome::Correct { score } => {
                self.events.on_score_changed(score);
                self.events.on_option_marked_correct(id);
                if self.config.flip_on_correct {
                    self.events.on_reveal(&self.round.question.correct);
                }
                if self.config.auto_next.enabled {
                    self.auto_advance.arm(self.config.auto_next.delay, now);
                    self.events.on_round_will_auto_advance(self.config.auto_next.delay_ms());
                }
            }
            PickOutcome::Wrong { score } => {
                self.events.on_score_changed(score);
                self.events.on_option_marked_wrong(id);
            }
            PickOutcome::Ignored => {}
        }
        outcome
    }

    /// Hide one random wrong option. `None` when locked or nothing is left.
    pub fn hint(&mut self) -> Option<u64> {
        let id = self.attempt.hint(&mut self.rng)?;
        self.events.on_option_hidden(id);
        Some(id)
    }

    /// Abandon the current round and start a new one.
    pub fn skip(&mut self) {
        self.next_round();
    }

    /// Move on after answering (or at any time).
    pub fn advance(&mut self) {
        self.next_round();
    }

    /// Fire the auto-advance if it is due. Returns whether a new round started.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.auto_advance.take_due(now) {
            self.next_round();
            true
        } else {
            false
        }
    }

    /// Replace the type selection and start a fresh round with it.
    pub fn set_types<S: AsRef<str>>(&mut self, types: &[S]) {
        self.active_types = sanitize_types(types.iter().map(|t| t.as_ref()));
        self.next_round();
    }

    fn next_round(&mut self) {
        self.auto_advance.cancel();
        let view = filtered_view(&self.dataset, &self.active_types);
        // The dataset was non-empty at construction and never changes, so the
        // view is never empty here.
        let Some(round) = generate_round(&mut self.rng, &self.dataset, &view, self.config.answers_count)
        else {
            return;
        };
        self.attempt = attempt_for(&round);
        self.round = round;
        let number = self.counter.increment();
        tracing::debug!(number, correct = self.round.question.correct_id(), "round started");
        self.events.on_round_start(number, &self.round);
    }
}

fn attempt_for(round: &Round) -> Attempt {
    Attempt::new(
        round.question.correct_id(),
        round.options.iter().map(|o| o.id).collect(),
    )
}
