//! Letter Pipeline: the two-stage prompt chain.
//!
//! Flow: summary prompt → LLM → letter prompt (summary substituted verbatim) → LLM.
//!
//! Strictly linear. Stage 2 has a data dependency on stage 1 and never starts
//! unless stage 1 returned non-empty text. Nothing is retried and the model's
//! output is not parsed or checked beyond being non-empty.

use std::sync::Arc;

use tracing::{debug, info};

use crate::errors::AppError;
use crate::letter::models::{LetterRequest, PipelineResult, SummaryLength};
use crate::letter::prompts::{
    LETTER_PROMPT_TEMPLATE, LETTER_TEMPLATE_NAME, LETTER_VARIABLES, SUMMARY_PROMPT_TEMPLATE,
    SUMMARY_TEMPLATE_NAME, SUMMARY_VARIABLES,
};
use crate::letter::template::PromptTemplate;
use crate::llm_client::TextGenerator;

/// Sampling temperature for both stages.
pub const TEMPERATURE: f32 = 0.4;

/// Event dates go into the prompt as ISO `YYYY-MM-DD`.
const EVENT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Holds the injected generator and the validated templates. Shared across requests.
pub struct LetterPipeline {
    generator: Arc<dyn TextGenerator>,
    summary_length: SummaryLength,
    summary_template: PromptTemplate,
    letter_template: PromptTemplate,
}

impl LetterPipeline {
    /// Builds the pipeline, validating both templates against their declared variables.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        summary_length: SummaryLength,
    ) -> Result<Self, AppError> {
        Ok(Self {
            generator,
            summary_length,
            summary_template: PromptTemplate::new(
                SUMMARY_TEMPLATE_NAME,
                SUMMARY_PROMPT_TEMPLATE,
                SUMMARY_VARIABLES,
            )?,
            letter_template: PromptTemplate::new(
                LETTER_TEMPLATE_NAME,
                LETTER_PROMPT_TEMPLATE,
                LETTER_VARIABLES,
            )?,
        })
    }

    /// Runs summarize → draft for one request.
    pub async fn run(&self, request: &LetterRequest) -> Result<PipelineResult, AppError> {
        // Stage 1: summarize
        let summary_prompt = self.summary_prompt(request)?;
        info!(
            "Stage 1: summarizing {} description ({} chars)",
            request.issue.topic,
            request.issue.description.chars().count()
        );
        let summary = self.generate(&self.summary_template, &summary_prompt).await?;

        // Stage 2: draft
        let letter_prompt = self.letter_prompt(request, &summary)?;
        info!("Stage 2: drafting {}", request.letter_type);
        let letter = self.generate(&self.letter_template, &letter_prompt).await?;

        info!(
            "Pipeline complete: summary {} chars, letter {} chars",
            summary.chars().count(),
            letter.chars().count()
        );

        Ok(PipelineResult { summary, letter })
    }

    fn summary_prompt(&self, request: &LetterRequest) -> Result<String, AppError> {
        let sentence_range = self.summary_length.to_string();
        self.summary_template.bind(&[
            ("sentence_range", sentence_range.as_str()),
            ("description", request.issue.description.as_str()),
        ])
    }

    fn letter_prompt(&self, request: &LetterRequest, summary: &str) -> Result<String, AppError> {
        let event_date = request
            .issue
            .event_date
            .format(EVENT_DATE_FORMAT)
            .to_string();
        let opponent_address = request.opponent.address.as_deref().unwrap_or_default();

        self.letter_template.bind(&[
            ("voice_instruction", request.role_context.voice_instruction.as_str()),
            ("letter_type", request.letter_type.label()),
            ("sender_identity", request.role_context.sender_identity.as_str()),
            ("opponent_name", request.opponent.name.as_str()),
            ("opponent_address", opponent_address),
            ("topic", request.issue.topic.label()),
            ("event_date", event_date.as_str()),
            ("intro_line", request.role_context.intro_line.as_str()),
            ("summary", summary),
        ])
    }

    /// One generator call. Errors and blank output both become `AppError::Generation`.
    async fn generate(&self, template: &PromptTemplate, prompt: &str) -> Result<String, AppError> {
        debug!(
            "Calling generator for '{}' prompt ({} chars)",
            template.name(),
            prompt.len()
        );

        let text = self
            .generator
            .generate(prompt, TEMPERATURE)
            .await
            .map_err(|e| AppError::Generation(format!("{} stage failed: {e}", template.name())))?;

        if text.trim().is_empty() {
            return Err(AppError::Generation(format!(
                "{} stage returned empty text",
                template.name()
            )));
        }

        Ok(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
