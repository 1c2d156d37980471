use crate::quiz_engine::models::{Entry, Round};

/// Receiver of semantic quiz events. The presentation layer implements this
/// and owns every visual and audio effect; all methods default to no-ops.
pub trait QuizEvents {
    /// A new round begins; `number` is the question counter value.
    fn on_round_start(&mut self, _number: u64, _round: &Round) {}

    fn on_score_changed(&mut self, _score: i64) {}

    fn on_option_marked_wrong(&mut self, _id: u64) {}

    fn on_option_marked_correct(&mut self, _id: u64) {}

    /// A hint removed this option from play.
    fn on_option_hidden(&mut self, _id: u64) {}

    /// Full detail of the answered entry. Only sent when flip-on-correct is on.
    fn on_reveal(&mut self, _entry: &Entry) {}

    fn on_round_will_auto_advance(&mut self, _delay_ms: u64) {}
}

/// Sink that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEvents;

impl QuizEvents for NoopEvents {}

impl<T: QuizEvents + ?Sized> QuizEvents for &mut T {
    fn on_round_start(&mut self, number: u64, round: &Round) {
        (**self).on_round_start(number, round)
    }

    fn on_score_changed(&mut self, score: i64) {
        (**self).on_score_changed(score)
    }

    fn on_option_marked_wrong(&mut self, id: u64) {
        (**self).on_option_marked_wrong(id)
    }

    fn on_option_marked_correct(&mut self, id: u64) {
        (**self).on_option_marked_correct(id)
    }

    fn on_option_hidden(&mut self, id: u64) {
        (**self).on_option_hidden(id)
    }

    fn on_reveal(&mut self, entry: &Entry) {
        (**self).on_reveal(entry)
    }

    fn on_round_will_auto_advance(&mut self, delay_ms: u64) {
        (**self).on_round_will_auto_advance(delay_ms)
    }
}
