pub mod record;

pub use record::{QuestionOption, QuestionRecord, OPTION_LETTERS};
