use std::fmt;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::letter::models::{LetterSettings, RoleModel, SummaryLength, VoiceResolution};
use crate::llm_client::DEFAULT_MODEL;

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Clone)]
pub struct Config {
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    pub port: u16,
    pub rust_log: String,
    pub letter: LetterSettings,
}

// The API key must never reach the logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("anthropic_api_key", &"<redacted>")
            .field("anthropic_model", &self.anthropic_model)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .field("letter", &self.letter)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            anthropic_model: std::env::var("ANTHROPIC_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            letter: letter_settings_from_env()?,
        })
    }
}

fn letter_settings_from_env() -> Result<LetterSettings> {
    let defaults = LetterSettings::default();

    Ok(LetterSettings {
        role_model: optional_env("ROLE_MODEL")?.unwrap_or(defaults.role_model),
        collect_opponent_address: optional_env("COLLECT_OPPONENT_ADDRESS")?
            .unwrap_or(defaults.collect_opponent_address),
        summary_length: optional_env("SUMMARY_SENTENCES")?.unwrap_or(defaults.summary_length),
        voice_resolution: optional_env("VOICE_RESOLUTION")?
            .unwrap_or(defaults.voice_resolution),
    })
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads and parses an optional variable. Unset is `None`; set but unparseable is an error.
fn optional_env<T>(key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid value for '{key}': {e}")),
        Err(_) => Ok(None),
    }
}

impl FromStr for RoleModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" => Ok(RoleModel::Binary),
            "tri_mode_with_firm" | "tri" => Ok(RoleModel::TriModeWithFirm),
            other => Err(format!(
                "unknown role model '{other}' (expected 'binary' or 'tri_mode_with_firm')"
            )),
        }
    }
}

impl FromStr for VoiceResolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pre_resolved" => Ok(VoiceResolution::PreResolved),
            "raw" => Ok(VoiceResolution::Raw),
            other => Err(format!(
                "unknown voice resolution '{other}' (expected 'pre_resolved' or 'raw')"
            )),
        }
    }
}

/// Parses `"N-M"` (or a single `"N"`) into a sentence range.
impl FromStr for SummaryLength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (min, max) = match s.split_once('-') {
            Some((lo, hi)) => (lo.trim(), hi.trim()),
            None => (s.trim(), s.trim()),
        };
        let min = min
            .parse::<u8>()
            .map_err(|_| format!("'{s}' is not a sentence range like '1-2'"))?;
        let max = max
            .parse::<u8>()
            .map_err(|_| format!("'{s}' is not a sentence range like '1-2'"))?;
        SummaryLength::new(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_length_parses_range() {
        let len: SummaryLength = "2-3".parse().unwrap();
        assert_eq!((len.min(), len.max()), (2, 3));
    }

    #[test]
    fn test_summary_length_parses_single_value() {
        let len: SummaryLength = "2".parse().unwrap();
        assert_eq!((len.min(), len.max()), (2, 2));
    }

    #[test]
    fn test_summary_length_rejects_inverted_range() {
        assert!("3-1".parse::<SummaryLength>().is_err());
        assert!("0-2".parse::<SummaryLength>().is_err());
        assert!("one-two".parse::<SummaryLength>().is_err());
    }

    #[test]
    fn test_role_model_parses_case_insensitively() {
        assert_eq!("Binary".parse::<RoleModel>().unwrap(), RoleModel::Binary);
        assert_eq!(
            "tri_mode_with_firm".parse::<RoleModel>().unwrap(),
            RoleModel::TriModeWithFirm
        );
        assert!("quad".parse::<RoleModel>().is_err());
    }

    #[test]
    fn test_voice_resolution_parses() {
        assert_eq!(
            "raw".parse::<VoiceResolution>().unwrap(),
            VoiceResolution::Raw
        );
        assert_eq!(
            "PRE_RESOLVED".parse::<VoiceResolution>().unwrap(),
            VoiceResolution::PreResolved
        );
    }

    #[test]
    fn test_debug_output_redacts_api_key() {
        let config = Config {
            anthropic_api_key: "sk-ant-very-secret".to_string(),
            anthropic_model: DEFAULT_MODEL.to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            letter: LetterSettings::default(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("sk-ant-very-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
