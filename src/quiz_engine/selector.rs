use rand::seq::SliceRandom;
use rand::Rng;

use crate::quiz_engine::models::{Entry, Field, Question};

/// Pick an ask field uniformly, then an answer field from the other two.
pub fn pick_fields<R: Rng + ?Sized>(rng: &mut R) -> (Field, Field) {
    let ask = Field::ALL[rng.gen_range(0..Field::ALL.len())];
    let rest: Vec<Field> = Field::ALL.into_iter().filter(|f| *f != ask).collect();
    let answer = rest[rng.gen_range(0..rest.len())];
    (ask, answer)
}

/// Instruction shown above the prompt for an (ask, answer) pair.
///
/// Returns `None` only when both fields are the same, which `pick_fields`
/// never produces.
pub fn instruction(ask: Field, answer: Field) -> Option<&'static str> {
    use Field::*;
    let text = match (ask, answer) {
        (Vietnamese, Chinese)    => "Choose the Chinese characters for this meaning",
        (Vietnamese, Pinyin)     => "Choose the pinyin for this meaning",
        (Chinese,    Vietnamese) => "Choose the meaning of these characters",
        (Chinese,    Pinyin)     => "Choose the pinyin for these characters",
        (Pinyin,     Vietnamese) => "Choose the meaning of this pinyin",
        (Pinyin,     Chinese)    => "Choose the Chinese characters for this pinyin",
        (Vietnamese, Vietnamese) | (Chinese, Chinese) | (Pinyin, Pinyin) => return None,
    };
    Some(text)
}

/// Choose the correct entry and field pair for a new round.
///
/// Returns `None` for an empty view.
pub fn select_question<R: Rng + ?Sized>(rng: &mut R, view: &[&Entry]) -> Option<Question> {
    let correct = (*view.choose(rng)?).clone();
    let (ask, answer) = pick_fields(rng);
    let instruction = instruction(ask, answer)?;
    Some(Question { correct, ask, answer, instruction })
}
