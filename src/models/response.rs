use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "AI Smart Dashboard API";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InsightsResponse {
    pub insights: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReportResponse {
    pub report: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RootStatus {
    pub message: &'static str,
    pub status: &'static str,
}

impl RootStatus {
    pub fn running() -> Self {
        Self { message: SERVICE_NAME, status: "running" }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub openai_configured: bool,
}

impl HealthStatus {
    pub fn healthy(openai_configured: bool) -> Self {
        Self { status: "healthy", openai_configured }
    }
}
