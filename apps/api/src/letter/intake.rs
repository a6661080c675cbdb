//! Intake: validates a submitted form and turns it into a `LetterRequest`.

use chrono::NaiveDate;

use crate::errors::AppError;
use crate::letter::models::{
    IssueReport, LetterRequest, LetterSettings, OpponentParty, PartyIdentity, RawForm,
};
use crate::letter::voice::derive_role_context;

/// Validates `form` and derives the narrative parameters for the letter.
///
/// Client fields default to the user's own when the writer represents themself.
/// Fails with `MissingRequiredField` (naming every blank field) when any of
/// user_name, opponent_name, description, client_name or client_address is
/// empty after trimming and defaulting. `today` stands in for a missing event date.
pub fn normalize(
    form: RawForm,
    settings: &LetterSettings,
    today: NaiveDate,
) -> Result<LetterRequest, AppError> {
    if !settings.role_model.offers(form.role) {
        return Err(AppError::Validation(format!(
            "role '{:?}' is not available for this form",
            form.role
        )));
    }

    let user = PartyIdentity {
        name: form.user_name.trim().to_string(),
        address: form.user_address.trim().to_string(),
    };

    let client = if form.role.is_self() {
        user.clone()
    } else {
        PartyIdentity {
            name: trimmed(form.client_name),
            address: trimmed(form.client_address),
        }
    };

    let opponent_name = form.opponent_name.trim().to_string();
    let description = form.description.trim().to_string();

    let missing: Vec<&'static str> = [
        ("user_name", user.name.is_empty()),
        ("opponent_name", opponent_name.is_empty()),
        ("description", description.is_empty()),
        ("client_name", client.name.is_empty()),
        ("client_address", client.address.is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, blank)| blank.then_some(field))
    .collect();

    if !missing.is_empty() {
        return Err(AppError::MissingRequiredField(missing));
    }

    let opponent_address = if settings.collect_opponent_address {
        Some(trimmed(form.opponent_address)).filter(|a| !a.is_empty())
    } else {
        None
    };

    let role_context = derive_role_context(
        form.role,
        &user,
        &client,
        settings.role_model,
        settings.voice_resolution,
    );

    Ok(LetterRequest {
        issue: IssueReport {
            topic: form.topic,
            description,
            event_date: form.event_date.unwrap_or(today),
        },
        role_context,
        opponent: OpponentParty {
            name: opponent_name,
            address: opponent_address,
        },
        letter_type: form.letter_type,
    })
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
