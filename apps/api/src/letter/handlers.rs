//! Axum route handlers for the Letter API.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::letter::intake::normalize;
use crate::letter::models::{LetterType, PipelineResult, RawForm, Role, Topic};
use crate::state::AppState;

/// Filename for the downloadable letter.
pub const DOWNLOAD_FILENAME: &str = "generated_letter.txt";

const DISCLAIMER: &str =
    "This tool is for general information and letter drafting only. Not legal advice.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Choice<T: Serialize> {
    pub value: T,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FormOptionsResponse {
    pub topics: Vec<Choice<Topic>>,
    pub roles: Vec<Choice<Role>>,
    pub letter_types: Vec<Choice<LetterType>>,
    pub collect_opponent_address: bool,
    pub disclaimer: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub letter: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/letters/options
///
/// The selectable values for the intake form under the current settings.
pub async fn handle_form_options(State(state): State<AppState>) -> Json<FormOptionsResponse> {
    let settings = &state.letter_settings;

    Json(FormOptionsResponse {
        topics: Topic::ALL
            .iter()
            .map(|&t| Choice {
                value: t,
                label: t.label(),
            })
            .collect(),
        roles: settings
            .role_model
            .roles()
            .iter()
            .map(|&r| Choice {
                value: r,
                label: r.label(settings.role_model),
            })
            .collect(),
        letter_types: LetterType::ALL
            .iter()
            .map(|&l| Choice {
                value: l,
                label: l.label(),
            })
            .collect(),
        collect_opponent_address: settings.collect_opponent_address,
        disclaimer: DISCLAIMER,
    })
}

/// POST /api/v1/letters
///
/// Validates the form, then runs summarize → draft. Nothing is stored.
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    Json(form): Json<RawForm>,
) -> Result<Json<PipelineResult>, AppError> {
    let submission_id = Uuid::new_v4();
    let span = info_span!("submission", %submission_id);

    async move {
        let today = Local::now().date_naive();
        let request = normalize(form, &state.letter_settings, today)?;
        info!(
            "Form accepted: topic={:?} letter_type={:?}",
            request.issue.topic, request.letter_type
        );

        let result = state.pipeline.run(&request).await?;
        Ok::<_, AppError>(Json(result))
    }
    .instrument(span)
    .await
}

/// POST /api/v1/letters/download
///
/// Returns the given letter as a plain-text attachment.
pub async fn handle_download_letter(
    Json(request): Json<DownloadRequest>,
) -> Result<Response, AppError> {
    if request.letter.trim().is_empty() {
        return Err(AppError::Validation("letter cannot be empty".to_string()));
    }

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
        ],
        request.letter,
    )
        .into_response())
}
