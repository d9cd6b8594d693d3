pub mod loaders;
pub mod profile;
pub mod question;
pub mod report;
pub mod theme;

pub use loaders::{normalize, read_table_questions, NormalizedInput};
pub use profile::Profile;
pub use question::{Question, QuestionBatch, MAX_QUESTIONS};
pub use report::{Block, BlockKind, FailureEntry, RunSummary, Tone};
pub use theme::{Palette, Theme};
