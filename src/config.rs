//! Process configuration read once at function start.

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1/";
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:3001",
    "http://127.0.0.1:3000",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `None` when no credential was provided; AI endpoints then answer 500.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Loads `.env` (if any) and then reads the process environment.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key = non_blank("OPENAI_API_KEY").or_else(|| non_blank("OPENAI_KEY"));
        let openai_base_url =
            non_blank("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let openai_model = non_blank("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let allowed_origins = match non_blank("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Self { openai_api_key, openai_base_url, openai_model, allowed_origins }
    }
}
