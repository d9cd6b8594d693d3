pub mod question_source;
pub mod spreadsheet;

pub use question_source::{normalize, text_questions, NormalizedInput};
pub use spreadsheet::{first_column_questions, read_table_questions};
