//! Prompt templates for the three analysis tasks.
//!
//! Each builder renders a bounded JSON preview of the caller's rows (a plain
//! prefix of the input) and embeds it in a fixed instruction template.

use tracing::debug;

use crate::{
    error::Result,
    models::{Prompt, Record},
};

/// Sampling temperature shared by every task.
pub const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Insights,
    Chat,
    Report,
}

impl Task {
    pub const fn name(self) -> &'static str {
        match self {
            Task::Insights => "insights",
            Task::Chat => "chat",
            Task::Report => "report",
        }
    }

    /// Maximum number of leading rows included in the prompt.
    pub const fn row_limit(self) -> usize {
        match self {
            Task::Insights => 100,
            Task::Chat => 200,
            Task::Report => 50,
        }
    }

    pub const fn max_tokens(self) -> u64 {
        match self {
            Task::Insights => 1000,
            Task::Chat => 500,
            Task::Report => 2000,
        }
    }

    /// Returned in place of an empty completion.
    pub const fn fallback(self) -> &'static str {
        match self {
            Task::Insights => "No insights generated",
            Task::Chat => "Unable to generate response",
            Task::Report => "Unable to generate report",
        }
    }

    pub const fn error_prefix(self) -> &'static str {
        match self {
            Task::Insights => "Error generating insights",
            Task::Chat => "Error in chat",
            Task::Report => "Error generating report",
        }
    }

    const fn persona(self) -> &'static str {
        match self {
            Task::Insights => {
                "You are a professional business analyst. Provide clear, actionable insights from data."
            }
            Task::Chat => {
                "You are a helpful data analyst assistant. Answer questions about the data clearly and accurately."
            }
            Task::Report => {
                "You are a professional report writer. Create well-structured, professional business reports."
            }
        }
    }
}

/// Compact JSON array of at most `task.row_limit()` leading rows.
pub fn data_preview(task: Task, records: &[Record]) -> Result<String> {
    let kept = records.len().min(task.row_limit());
    if kept < records.len() {
        debug!(task = task.name(), kept, supplied = records.len(), "truncated data preview");
    }
    let preview = serde_json::to_string(&records[..kept]).map_err(anyhow::Error::from)?;
    Ok(preview)
}

pub fn insights_prompt(records: &[Record], context: Option<&str>) -> Result<Prompt> {
    let task = Task::Insights;
    let preview = data_preview(task, records)?;
    let context = match context.map(str::trim) {
        Some(c) if !c.is_empty() => format!("Additional context: {c}"),
        _ => String::new(),
    };

    let user = format!(
        "You are an expert data analyst. Analyze the following business data and provide:
1. Key insights (3-5 bullet points)
2. Trends and patterns
3. Recommendations

Data sample:
{preview}

{context}

Provide your analysis in a structured format with clear insights."
    );

    Ok(Prompt { system: task.persona().to_string(), user })
}

pub fn chat_prompt(question: &str, records: &[Record]) -> Result<Prompt> {
    let task = Task::Chat;
    let preview = data_preview(task, records)?;

    let user = format!(
        "You are an AI assistant helping analyze business data. Answer the following question based on the provided data.

Question: {question}

Data:
{preview}

Provide a clear, concise answer. If the question cannot be answered with the available data, say so."
    );

    Ok(Prompt { system: task.persona().to_string(), user })
}

pub fn report_prompt(records: &[Record], insights: &str) -> Result<Prompt> {
    let task = Task::Report;
    let preview = data_preview(task, records)?;

    let user = format!(
        "Create a professional business report in Markdown format based on the following data and insights.

Data summary: {preview}
Insights: {insights}

Format the report with:
1. Executive Summary
2. Key Findings
3. Data Analysis
4. Recommendations
5. Conclusion

Use proper Markdown formatting with headers, lists, and emphasis."
    );

    Ok(Prompt { system: task.persona().to_string(), user })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn rows(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| json!({ "id": i, "revenue": i * 10 }).as_object().cloned().unwrap_or_default())
            .collect()
    }

    fn preview_ids(prompt_text: &str) -> Vec<u64> {
        let start = prompt_text.find('[').expect("preview start");
        let end = prompt_text.rfind(']').expect("preview end");
        let parsed: Vec<Value> = serde_json::from_str(&prompt_text[start..=end]).unwrap();
        parsed.iter().map(|row| row["id"].as_u64().unwrap()).collect()
    }

    #[test]
    fn chat_keeps_all_rows_under_the_cap() {
        let prompt = chat_prompt("How many rows?", &rows(150)).unwrap();
        assert_eq!(preview_ids(&prompt.user), (0..150).collect::<Vec<_>>());
    }

    #[test]
    fn insights_takes_exactly_the_first_hundred() {
        let prompt = insights_prompt(&rows(150), None).unwrap();
        assert_eq!(preview_ids(&prompt.user), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn report_takes_exactly_the_first_fifty() {
        let prompt = report_prompt(&rows(150), "sales up").unwrap();
        assert_eq!(preview_ids(&prompt.user), (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn insights_context_is_optional() {
        let with = insights_prompt(&rows(1), Some("Focus on Q3")).unwrap();
        assert!(with.user.contains("Additional context: Focus on Q3"));

        let without = insights_prompt(&rows(1), Some("   ")).unwrap();
        assert!(!without.user.contains("Additional context"));
        assert!(without.system.contains("business analyst"));
    }

    #[test]
    fn chat_embeds_question() {
        let prompt = chat_prompt("What is total revenue?", &rows(2)).unwrap();
        assert!(prompt.user.contains("Question: What is total revenue?"));
        assert!(prompt.system.contains("data analyst assistant"));
    }

    #[test]
    fn report_lists_five_sections() {
        let prompt = report_prompt(&rows(2), "- revenue grew 10%").unwrap();
        for section in [
            "Executive Summary",
            "Key Findings",
            "Data Analysis",
            "Recommendations",
            "Conclusion",
        ] {
            assert!(prompt.user.contains(section), "missing {section}");
        }
        assert!(prompt.user.contains("Insights: - revenue grew 10%"));
        assert!(prompt.system.contains("report writer"));
    }

    #[test]
    fn task_parameters() {
        assert_eq!(
            [Task::Insights, Task::Chat, Task::Report].map(Task::max_tokens),
            [1000, 500, 2000]
        );
        assert_eq!(Task::Chat.fallback(), "Unable to generate response");
    }
}
