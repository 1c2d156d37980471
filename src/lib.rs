//! # hanzi_quiz
//!
//! A flashcard quiz engine for Vietnamese / simplified Chinese / pinyin
//! vocabulary.
//!
//! Each round shows one field of a vocabulary entry as the prompt and asks
//! the learner to pick the matching value, rendered from a different field,
//! among several choices.
//!
//! ## How it works
//!
//! 1. Load a [`Dataset`] from a JSON array of records. Records without a
//!    `TYPE` are dropped; ids fall back to the record's position.
//! 2. Build a [`QuizConfig`], optionally overlaid with stored
//!    [`Preferences`].
//! 3. Create a [`QuizSession`] with a random source and a [`QuizEvents`]
//!    sink. The session picks a question from the entries whose type is
//!    selected (or from everything when none match) and builds a shuffled,
//!    duplicate-free option set.
//! 4. Feed it events: [`QuizSession::pick`], [`QuizSession::hint`],
//!    [`QuizSession::skip`], [`QuizSession::advance`], and
//!    [`QuizSession::tick`] for the auto-advance deadline.
//!
//! ## Quick start
//!
//! ```rust
//! use std::time::Instant;
//! use hanzi_quiz::{make_rng, Dataset, NoopEvents, PickOutcome, QuizConfig, QuizSession};
//!
//! let dataset = Dataset::from_json_str(r#"[
//!     { "id": 1, "TYPE": "HSK1", "VIETNAMESE": "một", "SIMPLIFIED": "一", "PINYIN": "yī" },
//!     { "id": 2, "TYPE": "HSK1", "VIETNAMESE": "hai", "SIMPLIFIED": "二", "PINYIN": "èr" }
//! ]"#).unwrap();
//!
//! let mut session =
//!     QuizSession::new(dataset, QuizConfig::default(), make_rng(Some(42)), NoopEvents).unwrap();
//!
//! let round = session.round();
//! println!("{}: {}", round.question.instruction, round.question.prompt());
//! for option in &round.options {
//!     println!("  [{}] {}", option.id, round.label(option));
//! }
//!
//! let correct = session.round().question.correct_id();
//! assert!(matches!(session.pick(correct, Instant::now()), PickOutcome::Correct { .. }));
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `hanzi_quiz::QuizSession`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    available_types, filtered_view, generate_round, make_rng, AttemptPhase, AutoNext, Dataset,
    Entry, Field, NoopEvents, PickOutcome, Preferences, Question, QuizConfig, QuizError,
    QuizEvents, QuizSession, Round, Scoring,
};

#[cfg(test)]
mod tests;
