use serde::Deserialize;

use super::Record;

pub const INVALID_DATA: &str = "Invalid data provided";
pub const QUESTION_AND_DATA_REQUIRED: &str = "Question and data are required";
pub const INSIGHTS_REQUIRED: &str = "Insights are required";

// Missing fields deserialize to empty values so they are rejected by
// `validate` with a 400 instead of failing the JSON decode.

#[derive(Deserialize, Debug, Default)]
pub struct InsightsRequest {
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ChatRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub data: Vec<Record>,
}

#[derive(Deserialize, Debug, Default)]
pub struct ReportRequest {
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub insights: String,
}

impl InsightsRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.data.is_empty() { return Err(INVALID_DATA.into()); }
        Ok(())
    }
}

impl ChatRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.question.trim().is_empty() || self.data.is_empty() {
            return Err(QUESTION_AND_DATA_REQUIRED.into());
        }
        Ok(())
    }
}

impl ReportRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.data.is_empty() { return Err(INVALID_DATA.into()); }
        if self.insights.trim().is_empty() { return Err(INSIGHTS_REQUIRED.into()); }
        Ok(())
    }
}
