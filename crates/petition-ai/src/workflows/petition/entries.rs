use serde::{Deserialize, Serialize};

use super::domain::{Criterion, EntryId};
use super::evidence::{normalize, Evidence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardScope {
    Local,
    Regional,
    National,
    International,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MembershipStatus {
    Active,
    Former,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardEntry {
    #[serde(default)]
    pub id: EntryId,
    pub name: String,
    pub organization: String,
    pub date: String,
    pub description: String,
    pub scope: AwardScope,
    pub significance: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipEntry {
    #[serde(default)]
    pub id: EntryId,
    pub organization: String,
    pub requirements: String,
    pub date_joined: String,
    pub status: MembershipStatus,
    pub achievements: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedMaterialEntry {
    #[serde(default)]
    pub id: EntryId,
    pub publication: String,
    pub title: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub circulation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgingEntry {
    #[serde(default)]
    pub id: EntryId,
    pub organization: String,
    pub role: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub context: String,
    pub submissions_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionEntry {
    #[serde(default)]
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub date: String,
    pub recognition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorshipEntry {
    #[serde(default)]
    pub id: EntryId,
    pub title: String,
    pub publication: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coauthors: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalEmploymentEntry {
    #[serde(default)]
    pub id: EntryId,
    pub company: String,
    pub role: String,
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub responsibilities: String,
    pub critical_nature: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Evidence>,
}

/// Compensation record. Pay stubs and equity proof are kept as separate bundles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemunerationEntry {
    #[serde(default)]
    pub id: EntryId,
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub work_location: String,
    pub salary: u64,
    pub currency: String,
    pub year: i32,
    pub comparative_data: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paystub_evidence: Option<Evidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity_evidence: Option<Evidence>,
}

/// One evidence record filed under a criterion, tagged by its criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CriterionEntry {
    Award(AwardEntry),
    Membership(MembershipEntry),
    PublishedMaterial(PublishedMaterialEntry),
    Judging(JudgingEntry),
    Contribution(ContributionEntry),
    Authorship(AuthorshipEntry),
    CriticalEmployment(CriticalEmploymentEntry),
    Remuneration(RemunerationEntry),
}

impl CriterionEntry {
    pub fn criterion(&self) -> Criterion {
        match self {
            Self::Award(_) => Criterion::Awards,
            Self::Membership(_) => Criterion::Membership,
            Self::PublishedMaterial(_) => Criterion::PublishedMaterial,
            Self::Judging(_) => Criterion::Judging,
            Self::Contribution(_) => Criterion::Contributions,
            Self::Authorship(_) => Criterion::Authorship,
            Self::CriticalEmployment(_) => Criterion::CriticalEmployment,
            Self::Remuneration(_) => Criterion::Remuneration,
        }
    }

    pub fn id(&self) -> &EntryId {
        match self {
            Self::Award(entry) => &entry.id,
            Self::Membership(entry) => &entry.id,
            Self::PublishedMaterial(entry) => &entry.id,
            Self::Judging(entry) => &entry.id,
            Self::Contribution(entry) => &entry.id,
            Self::Authorship(entry) => &entry.id,
            Self::CriticalEmployment(entry) => &entry.id,
            Self::Remuneration(entry) => &entry.id,
        }
    }

    pub(crate) fn set_id(&mut self, id: EntryId) {
        match self {
            Self::Award(entry) => entry.id = id,
            Self::Membership(entry) => entry.id = id,
            Self::PublishedMaterial(entry) => entry.id = id,
            Self::Judging(entry) => entry.id = id,
            Self::Contribution(entry) => entry.id = id,
            Self::Authorship(entry) => entry.id = id,
            Self::CriticalEmployment(entry) => entry.id = id,
            Self::Remuneration(entry) => entry.id = id,
        }
    }

    /// Short human readable heading used in listings.
    pub fn headline(&self) -> String {
        match self {
            Self::Award(entry) => format!("{} ({})", entry.name, entry.organization),
            Self::Membership(entry) => entry.organization.clone(),
            Self::PublishedMaterial(entry) => format!("{} in {}", entry.title, entry.publication),
            Self::Judging(entry) => format!("{} at {}", entry.role, entry.organization),
            Self::Contribution(entry) => entry.title.clone(),
            Self::Authorship(entry) => entry.title.clone(),
            Self::CriticalEmployment(entry) => format!("{} at {}", entry.role, entry.company),
            Self::Remuneration(entry) => format!("{} at {} ({})", entry.position, entry.company, entry.year),
        }
    }

    pub fn evidence_count(&self) -> usize {
        let count = |slot: &Option<Evidence>| slot.as_ref().map_or(0, Evidence::item_count);
        match self {
            Self::Award(entry) => count(&entry.evidence),
            Self::Membership(entry) => count(&entry.evidence),
            Self::PublishedMaterial(entry) => count(&entry.evidence),
            Self::Judging(entry) => count(&entry.evidence),
            Self::Contribution(entry) => count(&entry.evidence),
            Self::Authorship(entry) => count(&entry.evidence),
            Self::CriticalEmployment(entry) => count(&entry.evidence),
            Self::Remuneration(entry) => {
                count(&entry.paystub_evidence) + count(&entry.equity_evidence)
            }
        }
    }

    /// Collapse every empty evidence bundle to absent.
    pub(crate) fn normalize_evidence(&mut self) {
        match self {
            Self::Award(entry) => normalize(&mut entry.evidence),
            Self::Membership(entry) => normalize(&mut entry.evidence),
            Self::PublishedMaterial(entry) => normalize(&mut entry.evidence),
            Self::Judging(entry) => normalize(&mut entry.evidence),
            Self::Contribution(entry) => normalize(&mut entry.evidence),
            Self::Authorship(entry) => normalize(&mut entry.evidence),
            Self::CriticalEmployment(entry) => normalize(&mut entry.evidence),
            Self::Remuneration(entry) => {
                normalize(&mut entry.paystub_evidence);
                normalize(&mut entry.equity_evidence);
            }
        }
    }
}

macro_rules! impl_from_entry {
    ($($source:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$source> for CriterionEntry {
                fn from(value: $source) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_entry!(
    AwardEntry => Award,
    MembershipEntry => Membership,
    PublishedMaterialEntry => PublishedMaterial,
    JudgingEntry => Judging,
    ContributionEntry => Contribution,
    AuthorshipEntry => Authorship,
    CriticalEmploymentEntry => CriticalEmployment,
    RemunerationEntry => Remuneration,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn remuneration() -> RemunerationEntry {
        RemunerationEntry {
            id: EntryId::from("rem-1"),
            company: "Globex".to_string(),
            position: "Principal Engineer".to_string(),
            work_location: "Seattle, WA".to_string(),
            salary: 310_000,
            currency: "USD".to_string(),
            year: 2024,
            comparative_data: "Top 5% per BLS survey".to_string(),
            paystub_evidence: Some(Evidence::default()),
            equity_evidence: None,
        }
    }

    #[test]
    fn entries_know_their_criterion() {
        let entry = CriterionEntry::from(remuneration());
        assert_eq!(entry.criterion(), Criterion::Remuneration);
        assert_eq!(entry.id().as_str(), "rem-1");
    }

    #[test]
    fn normalization_collapses_both_remuneration_bundles() {
        let mut entry = CriterionEntry::from(remuneration());
        entry.normalize_evidence();
        match entry {
            CriterionEntry::Remuneration(inner) => {
                assert!(inner.paystub_evidence.is_none());
                assert!(inner.equity_evidence.is_none());
            }
            other => panic!("unexpected entry {other:?}"),
        }
    }

    #[test]
    fn entries_are_tagged_by_kind_on_the_wire() {
        let value = serde_json::to_value(CriterionEntry::from(remuneration())).expect("json");
        assert_eq!(value["kind"], "remuneration");
        assert_eq!(value["salary"], 310_000);
    }

    #[test]
    fn missing_id_is_generated_on_deserialize() {
        let entry: CriterionEntry = serde_json::from_value(serde_json::json!({
            "kind": "contribution",
            "title": "Open-source scheduler",
            "description": "Work-stealing runtime",
            "impact": "Adopted by 40 companies",
            "date": "2022-05",
            "recognition": "Conference keynote"
        }))
        .expect("deserialize");
        assert!(!entry.id().as_str().is_empty());
        assert_eq!(entry.evidence_count(), 0);
    }
}
