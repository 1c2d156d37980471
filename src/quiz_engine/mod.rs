//! Question engine: dataset handling, round generation, and attempt scoring.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | Entry, Field, Dataset, Question and Round types |
//! | `normalizer`   | Raw JSON records → validated, id-keyed dataset; file loading |
//! | `filter`       | Narrow the dataset to selected types, falling back to all |
//! | `selector`     | Pick the correct entry and an ask/answer field pair |
//! | `answer_set`   | Duplicate-free, shuffled option set with two-tier sourcing |
//! | `generator`    | `generate_round()` entry point and RNG construction |
//! | `attempt`      | Per-round state machine: picks, lockout, hints |
//! | `ledger`       | Floor-clamped score and question counter |
//! | `auto_advance` | Cancellable single-shot next-round deadline |
//! | `events`       | Notification sink the presentation layer implements |
//! | `config`       | Engine knobs and their defaults |
//! | `preferences`  | Lenient load/save of the persisted preference store |
//! | `session`      | `QuizSession`, the controller tying it all together |
//! | `error`        | `QuizError` |

pub mod answer_set;
pub mod attempt;
pub mod auto_advance;
pub mod config;
pub mod error;
pub mod events;
pub mod filter;
pub mod generator;
pub mod ledger;
pub mod models;
pub mod normalizer;
pub mod preferences;
pub mod selector;
pub mod session;

pub use attempt::{AttemptPhase, PickOutcome};
pub use config::{AutoNext, QuizConfig, Scoring};
pub use error::{QuizError, Result};
pub use events::{NoopEvents, QuizEvents};
pub use filter::{available_types, filtered_view};
pub use generator::{generate_round, make_rng};
pub use models::{Dataset, Entry, Field, Question, Round};
pub use preferences::Preferences;
pub use session::QuizSession;
