use std::sync::Arc;

use smart_dashboard_api::{http::handle_health, state::OpenAiState, telemetry};
use vercel_runtime::{run, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init()?;
    let state = Arc::new(OpenAiState::from_env());
    run(move |req| {
        let state = Arc::clone(&state);
        async move { handle_health(&state, req).await }
    })
    .await
}
