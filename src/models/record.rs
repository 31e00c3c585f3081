/// One row of caller-supplied tabular data. No schema beyond string keys.
pub type Record = serde_json::Map<String, serde_json::Value>;
