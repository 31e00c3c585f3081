//! Request handling shared by the Vercel function binaries under `api/`.

use serde::de::DeserializeOwned;
use tracing::{info, warn};
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use super::{
    cors::request_origin,
    response::{error_response, json_response, method_not_allowed},
};
use crate::{
    clients::CompletionClient,
    error::{AppError, Result},
    models::{HealthStatus, RootStatus},
    services,
    state::AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Insights,
    Chat,
    Report,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Insights => "/api/insights",
            Endpoint::Chat => "/api/chat",
            Endpoint::Report => "/api/report",
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.is_empty() {
        return Err(AppError::Validation("Empty body".into()));
    }
    serde_json::from_slice(body).map_err(|e| AppError::InvalidJson(e.to_string()))
}

async fn dispatch<C: CompletionClient>(
    endpoint: Endpoint,
    state: &AppState<C>,
    body: &[u8],
) -> Result<Response<Body>> {
    let backend = &state.backend;
    let resp = match endpoint {
        Endpoint::Insights => {
            let out = services::generate_insights(backend, parse_body(body)?).await?;
            json_response(StatusCode::OK, &out)?
        }
        Endpoint::Chat => {
            let out = services::chat_with_data(backend, parse_body(body)?).await?;
            json_response(StatusCode::OK, &out)?
        }
        Endpoint::Report => {
            let out = services::generate_report(backend, parse_body(body)?).await?;
            json_response(StatusCode::OK, &out)?
        }
    };
    Ok(resp)
}

/// POST handler for one of the three analysis routes.
pub async fn handle_task<C: CompletionClient>(
    endpoint: Endpoint,
    state: &AppState<C>,
    req: Request,
) -> std::result::Result<Response<Body>, Error> {
    match req.method().as_str() {
        "OPTIONS" => return Ok(state.cors.preflight(&req)?),
        "POST" => {}
        _ => return Ok(state.cors.apply(request_origin(&req), method_not_allowed("POST")?)),
    }

    let resp = match dispatch(endpoint, state, req.body()).await {
        Ok(resp) => resp,
        Err(err) => {
            let (status, body) = error_response(&err);
            warn!(path = endpoint.path(), status = status.as_u16(), error = %err, "request failed");
            json_response(status, &body)?
        }
    };
    info!(path = endpoint.path(), status = resp.status().as_u16(), "handled");
    Ok(state.cors.apply(request_origin(&req), resp))
}

/// `GET /`
pub async fn handle_root<C>(state: &AppState<C>, req: Request) -> std::result::Result<Response<Body>, Error> {
    let resp = match req.method().as_str() {
        "OPTIONS" => return Ok(state.cors.preflight(&req)?),
        "GET" | "HEAD" => json_response(StatusCode::OK, &RootStatus::running())?,
        _ => method_not_allowed("GET")?,
    };
    Ok(state.cors.apply(request_origin(&req), resp))
}

/// `GET /health`
pub async fn handle_health<C>(state: &AppState<C>, req: Request) -> std::result::Result<Response<Body>, Error> {
    let resp = match req.method().as_str() {
        "OPTIONS" => return Ok(state.cors.preflight(&req)?),
        "GET" | "HEAD" => {
            json_response(StatusCode::OK, &HealthStatus::healthy(state.backend.is_configured()))?
        }
        _ => method_not_allowed("GET")?,
    };
    Ok(state.cors.apply(request_origin(&req), resp))
}
