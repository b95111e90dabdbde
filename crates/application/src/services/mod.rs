mod answer_rewriter;

pub use answer_rewriter::AnswerRewriter;
