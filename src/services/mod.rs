pub mod analysis;

pub use analysis::{chat_with_data, generate_insights, generate_report};
