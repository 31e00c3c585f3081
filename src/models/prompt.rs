use serde::Serialize;

/// System/user message pair for a single completion call.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}
