//! Voice calibration: maps the writer's role to sender identity, opening line,
//! and the narrative-voice instruction handed to the letter stage.
//!
//! CRITICAL: only a legal assistant may be told to use legal phrasing or refer to a firm.
//! Self-representing and layperson writers never get firm language, whatever the topic.

use crate::letter::models::{PartyIdentity, Role, RoleContext, RoleModel, VoiceResolution};

const SELF_INTRO: &str = "I am writing regarding the following matter.";

const SELF_VOICE: &str = "The letter is written by an individual on their own behalf. \
    Use first-person language and DO NOT include references to law firms or legal representation.";

const LAYPERSON_VOICE: &str = "The letter is written by a layperson on behalf of someone else. \
    Use third-person language, but avoid legal terminology or any reference to law firms.";

const LEGAL_ASSISTANT_VOICE: &str = "The letter is written by a legal assistant working at a law firm. \
    Use professional tone and include appropriate legal phrasing.";

/// Derives the narrative parameters for a letter. Pure: same inputs, same output.
///
/// `client` must already be defaulted to `user` for the self-representing role.
pub fn derive_role_context(
    role: Role,
    user: &PartyIdentity,
    client: &PartyIdentity,
    role_model: RoleModel,
    resolution: VoiceResolution,
) -> RoleContext {
    let sender_identity = match role {
        Role::SelfRepresenting => format!("{}\n{}", client.name, client.address),
        Role::Layperson | Role::LegalAssistant => format!(
            "{}\n{}\n(c/o {}, {})",
            client.name, client.address, user.name, user.address
        ),
    };

    let intro_line = match role {
        Role::SelfRepresenting => SELF_INTRO.to_string(),
        Role::Layperson => format!(
            "I am writing on behalf of {} regarding the following matter.",
            client.name
        ),
        Role::LegalAssistant => format!(
            "I am writing on behalf of my client, {}, regarding the following matter.",
            client.name
        ),
    };

    let voice_instruction = match resolution {
        VoiceResolution::PreResolved => resolved_voice(role).to_string(),
        VoiceResolution::Raw => raw_voice(role, role_model),
    };

    RoleContext {
        sender_identity,
        intro_line,
        voice_instruction,
    }
}

fn resolved_voice(role: Role) -> &'static str {
    match role {
        Role::SelfRepresenting => SELF_VOICE,
        Role::Layperson => LAYPERSON_VOICE,
        Role::LegalAssistant => LEGAL_ASSISTANT_VOICE,
    }
}

/// Passes the form's role label through and leaves person and register to the model.
fn raw_voice(role: Role, role_model: RoleModel) -> String {
    format!(
        "Writer: {}. Choose first-person or third-person language and a suitable level of \
        formality for this writer.",
        role.label(role_model)
    )
}
