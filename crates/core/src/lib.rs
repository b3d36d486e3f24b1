mod question;
pub use question::QuizQuestion;

mod question_set;
pub use question_set::{EMBEDDED_QUESTIONS, QuestionSet};
