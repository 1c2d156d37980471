//! Cross-module tests for the `hanzi_quiz` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical rounds |
//! | Normalization | Ids unique, types non-empty over messy input |
//! | Round shape | ask ≠ answer; correct id exactly once; no repeated ids |
//! | Sourcing | Large enough filtered view never reaches the fallback pool |
//! | Scoring | Floor clamp; lock after correct; wrong picks are final |
//! | Auto-advance | skip/continue cancel a pending advance |
//! | Scenarios | Tiny dataset, unknown type, wrong-then-right walk-through |
//! | Events | Sink sees the expected notifications in order |

use std::collections::HashSet;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use crate::quiz_engine::{
    AttemptPhase, Dataset, Entry, Field, PickOutcome, QuizConfig, QuizEvents, QuizSession, Round,
    Scoring,
};

// ── helpers ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum Event {
    RoundStart(u64),
    Score(i64),
    Wrong(u64),
    Correct(u64),
    Hidden(u64),
    Reveal(u64),
    AutoAdvance(u64),
}

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<Event>,
}

impl QuizEvents for Recorder {
    fn on_round_start(&mut self, number: u64, _round: &Round) {
        self.events.push(Event::RoundStart(number));
    }
    fn on_score_changed(&mut self, score: i64) {
        self.events.push(Event::Score(score));
    }
    fn on_option_marked_wrong(&mut self, id: u64) {
        self.events.push(Event::Wrong(id));
    }
    fn on_option_marked_correct(&mut self, id: u64) {
        self.events.push(Event::Correct(id));
    }
    fn on_option_hidden(&mut self, id: u64) {
        self.events.push(Event::Hidden(id));
    }
    fn on_reveal(&mut self, entry: &Entry) {
        self.events.push(Event::Reveal(entry.id));
    }
    fn on_round_will_auto_advance(&mut self, delay_ms: u64) {
        self.events.push(Event::AutoAdvance(delay_ms));
    }
}

/// `n` entries per type, ids numbered from 1 across types.
fn vocab(types: &[(&str, u64)]) -> Dataset {
    let mut records = Vec::new();
    let mut id = 0u64;
    for (ty, n) in types {
        for _ in 0..*n {
            id += 1;
            records.push(json!({
                "id": id,
                "TYPE": ty,
                "VIETNAMESE": format!("nghĩa {id}"),
                "SIMPLIFIED": format!("字{id}"),
                "PINYIN": format!("zì {id}"),
            }));
        }
    }
    Dataset::from_json_value(&json!(records))
}

fn session(dataset: Dataset, config: QuizConfig, seed: u64) -> QuizSession<StdRng, Recorder> {
    QuizSession::new(dataset, config, StdRng::seed_from_u64(seed), Recorder::default()).unwrap()
}

fn option_ids(round: &Round) -> Vec<u64> {
    round.options.iter().map(|o| o.id).collect()
}

fn a_wrong_option(round: &Round) -> u64 {
    let correct = round.question.correct_id();
    round.options.iter().map(|o| o.id).find(|&id| id != correct).unwrap()
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_rounds() {
    let ds = vocab(&[("HSK1", 6), ("HSK2", 6)]);
    let mut a = session(ds.clone(), QuizConfig::default(), 12345);
    let mut b = session(ds, QuizConfig::default(), 12345);
    for _ in 0..20 {
        assert_eq!(a.round(), b.round());
        a.skip();
        b.skip();
    }
}

// ── normalization ────────────────────────────────────────────────────────────

#[test]
fn normalized_entries_have_ids_and_types() {
    let ds = Dataset::from_json_value(&json!([
        { "id": "7", "TYPE": "HSK1" },
        { "ID": 7, "TYPE": "HSK1" },
        { "id": "x", "TYPE": "HSK2" },
        { "TYPE": "" },
        { "id": 1e300, "TYPE": "HSK3" },
        42,
        { "TYPE": 3 },
    ]));
    let mut ids = HashSet::new();
    for e in ds.entries() {
        assert!(!e.entry_type.is_empty());
        assert!(ids.insert(e.id), "duplicate id {}", e.id);
    }
    // The last record falls back to position 7, which the first one already took.
    assert_eq!(ds.len(), 3);
}

// ── round shape ──────────────────────────────────────────────────────────────

#[test]
fn ask_and_answer_fields_always_differ() {
    let ds = vocab(&[("HSK1", 10)]);
    for seed in SEEDS {
        let mut s = session(ds.clone(), QuizConfig::default(), seed);
        for _ in 0..50 {
            let q = &s.round().question;
            assert_ne!(q.ask, q.answer);
            assert!(Field::ALL.contains(&q.ask) && Field::ALL.contains(&q.answer));
            s.skip();
        }
    }
}

#[test]
fn correct_id_appears_exactly_once_and_nothing_repeats() {
    let ds = vocab(&[("HSK1", 3), ("HSK2", 8)]);
    for seed in SEEDS {
        let mut s = session(ds.clone(), QuizConfig::default(), seed);
        for _ in 0..50 {
            let round = s.round();
            let ids = option_ids(round);
            let correct = round.question.correct_id();
            assert_eq!(ids.iter().filter(|&&id| id == correct).count(), 1);
            let unique: HashSet<u64> = ids.iter().copied().collect();
            assert_eq!(unique.len(), ids.len(), "repeated option id in {ids:?}");
            assert_eq!(ids.len(), 4);
            s.skip();
        }
    }
}

// ── sourcing ─────────────────────────────────────────────────────────────────

#[test]
fn large_filtered_view_never_uses_fallback_pool() {
    // ids 1..=5 are HSK1, 6..=25 are HSK2.
    let ds = vocab(&[("HSK1", 5), ("HSK2", 20)]);
    for seed in SEEDS {
        let mut s = session(ds.clone(), QuizConfig::default(), seed);
        for _ in 0..50 {
            for id in option_ids(s.round()) {
                assert!(id <= 5, "option {id} came from outside the filtered view");
            }
            s.skip();
        }
    }
}

#[test]
fn small_filtered_view_is_used_in_full_before_fallback() {
    let ds = vocab(&[("HSK1", 2), ("HSK2", 20)]);
    let mut s = session(ds, QuizConfig::default(), 3);
    for _ in 0..30 {
        let ids = option_ids(s.round());
        assert!(ids.contains(&1) && ids.contains(&2));
        assert_eq!(ids.len(), 4);
        s.skip();
    }
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn wrong_pick_never_drops_below_floor() {
    let config = QuizConfig {
        scoring: Scoring { correct: 5, wrong: -10, floor: 0 },
        ..QuizConfig::default()
    };
    let mut s = session(vocab(&[("HSK1", 4)]), config, 8);
    let now = Instant::now();

    let correct = s.round().question.correct_id();
    s.pick(correct, now);
    assert_eq!(s.score(), 5);

    s.advance();
    let wrong = a_wrong_option(s.round());
    assert_eq!(s.pick(wrong, now), PickOutcome::Wrong { score: 0 });
    assert_eq!(s.score(), 0);
}

#[test]
fn locked_round_ignores_further_picks() {
    let mut s = session(vocab(&[("HSK1", 4)]), QuizConfig::default(), 2);
    let now = Instant::now();
    let correct = s.round().question.correct_id();
    let wrong = a_wrong_option(s.round());

    s.pick(correct, now);
    let score = s.score();
    let attempt = s.attempt().clone();
    let events_before = s.events().events.len();

    assert_eq!(s.pick(wrong, now), PickOutcome::Ignored);
    assert_eq!(s.pick(correct, now), PickOutcome::Ignored);
    assert_eq!(s.hint(), None);
    assert_eq!(s.score(), score);
    assert_eq!(s.attempt(), &attempt);
    assert_eq!(s.phase(), AttemptPhase::Locked);
    assert_eq!(s.events().events.len(), events_before);
}

// ── auto-advance ─────────────────────────────────────────────────────────────

#[test]
fn skip_cancels_pending_auto_advance() {
    let mut s = session(vocab(&[("HSK1", 4)]), QuizConfig::default(), 5);
    let now = Instant::now();
    let correct = s.round().question.correct_id();
    s.pick(correct, now);
    assert!(s.pending_advance().is_some());

    s.skip();
    assert_eq!(s.question_number(), 2);
    assert!(s.pending_advance().is_none());
    assert!(!s.tick(now + Duration::from_secs(60)));
    assert_eq!(s.question_number(), 2);
}

#[test]
fn continue_cancels_pending_auto_advance() {
    let mut s = session(vocab(&[("HSK1", 4)]), QuizConfig::default(), 6);
    let now = Instant::now();
    let correct = s.round().question.correct_id();
    s.pick(correct, now);

    s.advance();
    assert!(!s.tick(now + Duration::from_secs(60)));
    assert_eq!(s.question_number(), 2);
    assert_eq!(s.phase(), AttemptPhase::Active);
}

#[test]
fn auto_advance_fires_once() {
    let mut s = session(vocab(&[("HSK1", 4)]), QuizConfig::default(), 9);
    let now = Instant::now();
    let correct = s.round().question.correct_id();
    s.pick(correct, now);

    assert!(s.tick(now + Duration::from_secs(2)));
    assert!(!s.tick(now + Duration::from_secs(4)));
    assert_eq!(s.question_number(), 2);
}

#[test]
fn question_counter_increments_every_round() {
    let mut s = session(vocab(&[("HSK1", 4)]), QuizConfig::default(), 10);
    assert_eq!(s.question_number(), 1);
    s.skip();
    s.advance();
    s.skip();
    assert_eq!(s.question_number(), 4);
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn three_entry_dataset_yields_three_options() {
    let ds = vocab(&[("HSK1", 3)]);
    let config = QuizConfig { default_types: vec!["HSK1".into()], answers_count: 4, ..QuizConfig::default() };
    let mut s = session(ds, config, 1);
    for _ in 0..10 {
        let mut ids = option_ids(s.round());
        ids.sort();
        assert_eq!(ids, vec![1, 2, 3]);
        s.skip();
    }
}

#[test]
fn wrong_then_right_walk_through() {
    let ds = Dataset::from_json_value(&json!([
        { "id": 3, "TYPE": "HSK1", "VIETNAMESE": "ba",  "SIMPLIFIED": "三", "PINYIN": "sān" },
        { "id": 7, "TYPE": "HSK1", "VIETNAMESE": "bảy", "SIMPLIFIED": "七", "PINYIN": "qī" },
    ]));
    let config = QuizConfig {
        scoring: Scoring { correct: 10, wrong: -10, floor: -100 },
        ..QuizConfig::default()
    };
    let mut s = session(ds, config, 0);
    for _ in 0..200 {
        if s.round().question.correct_id() == 7 {
            break;
        }
        s.skip();
    }
    assert_eq!(s.round().question.correct_id(), 7);
    let now = Instant::now();

    assert_eq!(s.pick(3, now), PickOutcome::Wrong { score: -10 });
    assert_eq!(s.attempt().wrong_picks().iter().copied().collect::<Vec<_>>(), vec![3]);
    assert!(!s.attempt().is_selectable(3));
    assert!(s.attempt().is_selectable(7));

    assert_eq!(s.pick(3, now), PickOutcome::Ignored);
    assert_eq!(s.score(), -10);

    assert_eq!(s.pick(7, now), PickOutcome::Correct { score: 0 });
    assert_eq!(s.phase(), AttemptPhase::Locked);
}

#[test]
fn unknown_default_type_falls_back_to_full_dataset() {
    let ds = vocab(&[("HSK1", 3), ("HSK2", 3)]);
    let config = QuizConfig { default_types: vec!["NOPE".into()], ..QuizConfig::default() };
    let mut s = session(ds, config, 4);
    assert_eq!(s.filtered_view().len(), 6);
    let seen: HashSet<u64> = (0..100)
        .map(|_| {
            let id = s.round().question.correct_id();
            s.skip();
            id
        })
        .collect();
    assert!(seen.iter().any(|&id| id > 3), "HSK2 entries must be reachable");
    assert!(seen.iter().any(|&id| id <= 3), "HSK1 entries must be reachable");
}

// ── events ───────────────────────────────────────────────────────────────────

#[test]
fn sink_sees_wrong_then_correct_sequence() {
    let mut s = session(vocab(&[("HSK1", 4)]), QuizConfig::default(), 11);
    let now = Instant::now();
    let correct = s.round().question.correct_id();
    let wrong = a_wrong_option(s.round());

    s.pick(wrong, now);
    s.pick(correct, now);

    assert_eq!(
        s.events().events,
        vec![
            Event::RoundStart(1),
            Event::Score(0),
            Event::Wrong(wrong),
            Event::Score(10),
            Event::Correct(correct),
            Event::Reveal(correct),
            Event::AutoAdvance(2000),
        ]
    );
}

#[test]
fn reveal_is_skipped_without_flip_on_correct() {
    let config = QuizConfig { flip_on_correct: false, ..QuizConfig::default() };
    let mut s = session(vocab(&[("HSK1", 4)]), config, 12);
    let correct = s.round().question.correct_id();
    s.pick(correct, Instant::now());
    assert!(!s.events().events.iter().any(|e| matches!(e, Event::Reveal(_))));
}

#[test]
fn hint_is_reported_and_hidden_option_cannot_be_scored() {
    let mut s = session(vocab(&[("HSK1", 4)]), QuizConfig::default(), 13);
    let hidden = s.hint().unwrap();
    assert_ne!(hidden, s.round().question.correct_id());
    assert_eq!(s.events().events.last(), Some(&Event::Hidden(hidden)));

    assert_eq!(s.pick(hidden, Instant::now()), PickOutcome::Ignored);
    assert_eq!(s.score(), 0);
}
