use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::EntryId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeCount {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl EmployeeCount {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "Small (1-50 employees)",
            Self::Medium => "Medium (51-500 employees)",
            Self::Large => "Large (501-5000 employees)",
            Self::Enterprise => "Enterprise (5000+ employees)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyReputation {
    Startup,
    Established,
    #[serde(rename = "industry-leader", alias = "industry_leader")]
    IndustryLeader,
    Fortune500,
}

impl CompanyReputation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Startup => "Startup / Early-stage",
            Self::Established => "Established Company",
            Self::IndustryLeader => "Industry Leader",
            Self::Fortune500 => "Fortune 500",
        }
    }

    pub const fn is_prestigious(self) -> bool {
        matches!(self, Self::Fortune500 | Self::IndustryLeader)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Degree {
    Bachelors,
    Masters,
    Doctorate,
    Professional,
    Other,
}

impl Degree {
    /// Wire name, as written in intake documents.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bachelors => "bachelors",
            Self::Masters => "masters",
            Self::Doctorate => "doctorate",
            Self::Professional => "professional",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Bachelors => "Bachelor's Degree",
            Self::Masters => "Master's Degree",
            Self::Doctorate => "Doctorate (PhD)",
            Self::Professional => "Professional Degree (MD, JD, MBA)",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Colleague,
    Mentor,
    Supervisor,
    Collaborator,
    Client,
    Other,
}

impl Relationship {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Colleague => "colleague",
            Self::Mentor => "mentor",
            Self::Supervisor => "supervisor",
            Self::Collaborator => "collaborator",
            Self::Client => "client",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Colleague => "Colleague",
            Self::Mentor => "Mentor/Advisor",
            Self::Supervisor => "Supervisor/Manager",
            Self::Collaborator => "Research Collaborator",
            Self::Client => "Client/Partner",
            Self::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentHistoryEntry {
    #[serde(default)]
    pub id: EntryId,
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub industry: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_current_role: bool,
    pub responsibilities: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_count: Option<EmployeeCount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_reputation: Option<CompanyReputation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationHistoryEntry {
    #[serde(default)]
    pub id: EntryId,
    pub institution: String,
    pub degree: Degree,
    pub field_of_study: String,
    pub graduation_year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publications: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_focus: Option<String>,
    #[serde(default)]
    pub advisor_notable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalConnectionEntry {
    #[serde(default)]
    pub id: EntryId,
    pub relationship: Relationship,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_achievements: Option<String>,
    #[serde(default)]
    pub can_provide_reference: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_relevance: Option<String>,
}

/// Optional background questionnaire used to seed recommendations and drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntakeData {
    pub employment_history: Vec<EmploymentHistoryEntry>,
    pub education_history: Vec<EducationHistoryEntry>,
    pub professional_connections: Vec<ProfessionalConnectionEntry>,
    pub wants_recommendations: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Records stored in one of the intake lists.
pub trait IntakeRecord {
    fn id(&self) -> &EntryId;
    fn set_id(&mut self, id: EntryId);
}

macro_rules! impl_intake_record {
    ($($record:ty),+ $(,)?) => {
        $(
            impl IntakeRecord for $record {
                fn id(&self) -> &EntryId {
                    &self.id
                }

                fn set_id(&mut self, id: EntryId) {
                    self.id = id;
                }
            }
        )+
    };
}

impl_intake_record!(
    EmploymentHistoryEntry,
    EducationHistoryEntry,
    ProfessionalConnectionEntry,
);

/// Append a record, issuing a fresh id when the supplied one is already taken.
pub(crate) fn push_record<T: IntakeRecord>(records: &mut Vec<T>, mut record: T) -> EntryId {
    if records.iter().any(|existing| existing.id() == record.id()) {
        record.set_id(EntryId::generate());
    }
    let id = record.id().clone();
    records.push(record);
    id
}

/// Replace the record with `id`, keeping the id. Unknown ids are ignored.
pub(crate) fn replace_record<T: IntakeRecord>(records: &mut [T], id: &EntryId, mut record: T) -> bool {
    match records.iter_mut().find(|existing| existing.id() == id) {
        Some(slot) => {
            record.set_id(id.clone());
            *slot = record;
            true
        }
        None => {
            debug!(%id, "intake update ignored for unknown record");
            false
        }
    }
}

pub(crate) fn remove_record<T: IntakeRecord>(records: &mut Vec<T>, id: &EntryId) -> bool {
    let before = records.len();
    records.retain(|record| record.id() != id);
    let removed = records.len() != before;
    if !removed {
        debug!(%id, "intake removal ignored for unknown record");
    }
    removed
}

impl IntakeData {
    pub fn is_empty(&self) -> bool {
        self.employment_history.is_empty()
            && self.education_history.is_empty()
            && self.professional_connections.is_empty()
    }

    pub fn total_publications(&self) -> u32 {
        self.education_history
            .iter()
            .map(|entry| entry.publications.unwrap_or(0))
            .sum()
    }
}
