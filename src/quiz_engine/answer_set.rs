//! Builds the multiple-choice option set for a round.
//!
//! Distractors come from the filtered view first so they share the learner's
//! chosen categories. Only when that pool runs dry does the builder reach
//! into the full dataset. The result never repeats an id and is never
//! padded: a dataset with fewer distinct ids than requested yields fewer
//! options.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::models::{Dataset, Entry};

/// Assemble up to `count` options, the correct entry always among them.
pub fn build_answer_set<R: Rng + ?Sized>(
    rng: &mut R,
    correct: &Entry,
    view: &[&Entry],
    dataset: &Dataset,
    count: usize,
) -> Vec<Entry> {
    let mut used = HashSet::from([correct.id]);
    let mut options = vec![correct.clone()];

    draw_from(rng, view.iter().copied(), count, &mut used, &mut options);
    draw_from(rng, dataset.entries().iter(), count, &mut used, &mut options);

    options.shuffle(rng);
    options
}

/// Add entries from `pool` in random order until `options` holds `count`.
fn draw_from<'a, R: Rng + ?Sized>(
    rng: &mut R,
    pool: impl Iterator<Item = &'a Entry>,
    count: usize,
    used: &mut HashSet<u64>,
    options: &mut Vec<Entry>,
) {
    if options.len() >= count {
        return;
    }
    let mut pool: Vec<&Entry> = pool.filter(|e| !used.contains(&e.id)).collect();
    pool.shuffle(rng);
    for entry in pool {
        if options.len() >= count {
            break;
        }
        if used.insert(entry.id) {
            options.push(entry.clone());
        }
    }
}
