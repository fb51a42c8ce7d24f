//! Question model, merge semantics, and default synthesis

pub mod question;
pub mod set;
pub mod synthesize;

pub use question::{Question, QuestionError, QuestionType};
pub use set::QuestionSet;
pub use synthesize::synthesize_defaults;
