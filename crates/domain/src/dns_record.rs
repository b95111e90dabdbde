mod answer;
mod record_type;

pub use answer::{AnswerRecord, ResolutionAnswer};
pub use record_type::RecordType;
