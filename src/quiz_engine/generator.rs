use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::quiz_engine::{
    answer_set::build_answer_set,
    models::{Dataset, Entry, Round},
    selector::select_question,
};

/// Seeded generator for reproducible sessions, entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    }
}

/// Build one round: question from the view, options from view then dataset.
///
/// Returns `None` only when `view` is empty.
pub fn generate_round<R: Rng + ?Sized>(
    rng: &mut R,
    dataset: &Dataset,
    view: &[&Entry],
    answers_count: usize,
) -> Option<Round> {
    let question = select_question(rng, view)?;
    let options = build_answer_set(rng, &question.correct, view, dataset, answers_count);
    Some(Round { question, options })
}
