pub mod answer_format;
pub mod question_ctx;
pub mod question_flow;

pub use answer_format::format_answer;
pub use question_ctx::QuestionCtx;
pub use question_flow::{FailureKind, ItemOutcome, QuestionFlow};
