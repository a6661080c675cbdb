//! Letter domain types: the raw form, the normalized request, and the service settings
//! that collapse the form variants into one configuration.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Form enumerations
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    TenancyDispute,
    EmploymentIssue,
    ContractBreach,
    Others,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::TenancyDispute,
        Topic::EmploymentIssue,
        Topic::ContractBreach,
        Topic::Others,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::TenancyDispute => "Tenancy Dispute",
            Topic::EmploymentIssue => "Employment Issue",
            Topic::ContractBreach => "Contract Breach",
            Topic::Others => "Others",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LetterType {
    LetterOfDemand,
    ComplaintLetter,
}

impl LetterType {
    pub const ALL: [LetterType; 2] = [LetterType::LetterOfDemand, LetterType::ComplaintLetter];

    pub fn label(self) -> &'static str {
        match self {
            LetterType::LetterOfDemand => "Letter of Demand",
            LetterType::ComplaintLetter => "Complaint Letter",
        }
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who is writing the letter. `LegalAssistant` only exists under `RoleModel::TriModeWithFirm`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[serde(alias = "myself")]
    SelfRepresenting,
    #[serde(alias = "on_behalf_of_client")]
    Layperson,
    LegalAssistant,
}

impl Role {
    pub fn is_self(self) -> bool {
        self == Role::SelfRepresenting
    }

    /// The label the form shows for this role under the given role model.
    pub fn label(self, model: RoleModel) -> &'static str {
        match (model, self) {
            (RoleModel::Binary, Role::SelfRepresenting) => "Myself",
            (RoleModel::Binary, _) => "On behalf of a client",
            (RoleModel::TriModeWithFirm, Role::SelfRepresenting) => {
                "Individual writing for myself"
            }
            (RoleModel::TriModeWithFirm, Role::Layperson) => {
                "Non-legal individual writing on behalf of someone"
            }
            (RoleModel::TriModeWithFirm, Role::LegalAssistant) => {
                "Legal assistant working for a law firm"
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Settings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoleModel {
    /// Myself / on behalf of a client.
    Binary,
    /// Myself / layperson for someone / legal assistant at a firm.
    TriModeWithFirm,
}

impl RoleModel {
    pub fn roles(self) -> &'static [Role] {
        match self {
            RoleModel::Binary => &[Role::SelfRepresenting, Role::Layperson],
            RoleModel::TriModeWithFirm => {
                &[Role::SelfRepresenting, Role::Layperson, Role::LegalAssistant]
            }
        }
    }

    pub fn offers(self, role: Role) -> bool {
        self.roles().contains(&role)
    }
}

/// Whether the narrative voice is decided here or left to the letter-stage model.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VoiceResolution {
    PreResolved,
    Raw,
}

/// Target sentence count for the stage-1 summary. Always `1 <= min <= max`.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SummaryLength {
    min: u8,
    max: u8,
}

impl SummaryLength {
    pub fn new(min: u8, max: u8) -> Result<Self, String> {
        if min == 0 || min > max {
            return Err(format!(
                "summary sentence range must satisfy 1 <= min <= max (got {min}-{max})"
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }
}

impl Default for SummaryLength {
    fn default() -> Self {
        Self { min: 1, max: 2 }
    }
}

impl fmt::Display for SummaryLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min() == self.max() {
            write!(f, "{}", self.min())
        } else {
            write!(f, "{}-{}", self.min(), self.max())
        }
    }
}

/// Feature flags that cover every form variant with one code path.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LetterSettings {
    pub role_model: RoleModel,
    pub collect_opponent_address: bool,
    pub summary_length: SummaryLength,
    pub voice_resolution: VoiceResolution,
}

impl Default for LetterSettings {
    fn default() -> Self {
        Self {
            role_model: RoleModel::TriModeWithFirm,
            collect_opponent_address: true,
            summary_length: SummaryLength::default(),
            voice_resolution: VoiceResolution::PreResolved,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw form input
// ────────────────────────────────────────────────────────────────────────────

/// Form values exactly as submitted. Nothing here is trusted until `normalize` runs.
#[derive(Debug, Clone, Deserialize)]
pub struct RawForm {
    pub topic: Topic,
    pub role: Role,
    pub letter_type: LetterType,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_address: String,
    /// Ignored when `role` is self-representing.
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub client_address: Option<String>,
    #[serde(default)]
    pub opponent_name: String,
    #[serde(default)]
    pub opponent_address: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Defaults to the submission date.
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Normalized request
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PartyIdentity {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OpponentParty {
    pub name: String,
    /// `None` when opponent addresses are not collected.
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IssueReport {
    pub topic: Topic,
    pub description: String,
    pub event_date: NaiveDate,
}

/// Narrative parameters derived from the role selection and identities.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoleContext {
    pub sender_identity: String,
    pub intro_line: String,
    pub voice_instruction: String,
}

/// The unit handed to the prompt pipeline. Only `intake::normalize` builds one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LetterRequest {
    pub issue: IssueReport,
    pub role_context: RoleContext,
    pub opponent: OpponentParty,
    pub letter_type: LetterType,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PipelineResult {
    pub summary: String,
    pub letter: String,
}
