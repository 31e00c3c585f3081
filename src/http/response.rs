use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use crate::error::AppError;

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    match err {
        AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({"error":"Validation","detail":msg})),
        AppError::InvalidJson(msg) => (StatusCode::BAD_REQUEST, json!({"error":"Invalid JSON","detail":msg})),
        AppError::NotConfigured => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"NotConfigured","detail":err.to_string()})),
        AppError::Upstream { .. } => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"Upstream","detail":err.to_string()})),
        AppError::Other(e) => (StatusCode::INTERNAL_SERVER_ERROR, json!({"error":"Internal","detail":e.to_string()})),
    }
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(value)?.into())?)
}

pub fn method_not_allowed(allow: &str) -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header("Allow", allow)
        .header("Content-Type", "application/json")
        .body(json!({"error":"Method Not Allowed","detail":format!("Use {allow}")}).to_string().into())?)
}
