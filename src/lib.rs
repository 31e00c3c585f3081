pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod prompts;
pub mod services;
pub mod state;
pub mod telemetry;

pub use error::{AppError, Result};
