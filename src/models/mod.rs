pub mod prompt;
pub mod record;
pub mod request;
pub mod response;

pub use prompt::Prompt;
pub use record::Record;
pub use request::{ChatRequest, InsightsRequest, ReportRequest};
pub use response::{ChatResponse, HealthStatus, InsightsResponse, ReportResponse, RootStatus};
