pub mod answer_view;
pub mod query_response;

pub use answer_view::AnswerView;
pub use query_response::{ModelError, QueryResponse};
