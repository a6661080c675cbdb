// All LLM prompt text for the letter pipeline.
// Each template's variable list must match its `{placeholders}` exactly;
// `PromptTemplate::new` checks this when the pipeline is built.

/// Stage 1: condense the free-text description.
pub const SUMMARY_TEMPLATE_NAME: &str = "summary";

pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Summarize the legal issue in {sentence_range} sentences clearly and formally:

Description: {description}"#;

pub const SUMMARY_VARIABLES: &[&str] = &["sentence_range", "description"];

/// Stage 2: draft the letter from the stage-1 summary and the normalized form.
pub const LETTER_TEMPLATE_NAME: &str = "letter";

pub const LETTER_PROMPT_TEMPLATE: &str = r#"You are a legal assistant.

Instructions:
{voice_instruction}

Generate a formal {letter_type} based on the following:

From:
{sender_identity}

To:
{opponent_name}
{opponent_address}

Topic: {topic}
Date of Issue: {event_date}

Opening:
{intro_line}

Summary of the issue:
{summary}

Write a clear and professional letter including:
- Date and subject line
- Proper salutation
- Body with issue background, action requested, and any deadlines
- Closing and polite sign-off
Do not include placeholder text like [Law Firm Letterhead] or [Law Firm Name] unless specifically instructed."#;

pub const LETTER_VARIABLES: &[&str] = &[
    "voice_instruction",
    "letter_type",
    "sender_identity",
    "opponent_name",
    "opponent_address",
    "topic",
    "event_date",
    "intro_line",
    "summary",
];
