use tracing::{error, info};

use crate::{
    clients::{CompletionBackend, CompletionClient, CompletionRequest},
    error::{AppError, Result},
    models::{
        ChatRequest, ChatResponse, InsightsRequest, InsightsResponse, Prompt, ReportRequest,
        ReportResponse,
    },
    prompts::{self, Task, TEMPERATURE},
};

pub async fn generate_insights<C: CompletionClient>(
    backend: &CompletionBackend<C>,
    req: InsightsRequest,
) -> Result<InsightsResponse> {
    req.validate().map_err(AppError::Validation)?;
    let prompt = prompts::insights_prompt(&req.data, req.context.as_deref())?;
    let insights = run_task(backend, Task::Insights, prompt, req.data.len()).await?;
    Ok(InsightsResponse { insights })
}

pub async fn chat_with_data<C: CompletionClient>(
    backend: &CompletionBackend<C>,
    req: ChatRequest,
) -> Result<ChatResponse> {
    req.validate().map_err(AppError::Validation)?;
    let prompt = prompts::chat_prompt(req.question.trim(), &req.data)?;
    let response = run_task(backend, Task::Chat, prompt, req.data.len()).await?;
    Ok(ChatResponse { response })
}

pub async fn generate_report<C: CompletionClient>(
    backend: &CompletionBackend<C>,
    req: ReportRequest,
) -> Result<ReportResponse> {
    req.validate().map_err(AppError::Validation)?;
    let prompt = prompts::report_prompt(&req.data, &req.insights)?;
    let report = run_task(backend, Task::Report, prompt, req.data.len()).await?;
    Ok(ReportResponse { report })
}

async fn run_task<C: CompletionClient>(
    backend: &CompletionBackend<C>,
    task: Task,
    prompt: Prompt,
    rows: usize,
) -> Result<String> {
    let client = backend.client()?;
    let request = CompletionRequest { prompt, temperature: TEMPERATURE, max_tokens: task.max_tokens() };

    match client.complete(request).await {
        Ok(Some(text)) if !text.is_empty() => {
            info!(task = task.name(), rows, chars = text.len(), "completion received");
            Ok(text)
        }
        Ok(_) => {
            info!(task = task.name(), rows, "empty completion, using fallback");
            Ok(task.fallback().to_string())
        }
        Err(e) => {
            error!(task = task.name(), error = %e, "completion failed");
            Err(AppError::Upstream { prefix: task.error_prefix(), message: e.0 })
        }
    }
}
