use std::sync::Arc;

use crate::letter::models::LetterSettings;
use crate::letter::pipeline::LetterPipeline;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Holds the injected text generator; stateless per call, so shared freely.
    pub pipeline: Arc<LetterPipeline>,
    /// Form variant flags: role model, opponent address collection, summary length, voice.
    pub letter_settings: LetterSettings,
}
