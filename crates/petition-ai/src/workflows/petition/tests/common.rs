use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::petition::entries::{
    AwardEntry, AwardScope, ContributionEntry, CriterionEntry, JudgingEntry, MembershipEntry,
    MembershipStatus,
};
use crate::workflows::petition::intake::{
    CompanyReputation, Degree, EducationHistoryEntry, EmployeeCount, EmploymentHistoryEntry,
    IntakeData, ProfessionalConnectionEntry, Relationship,
};
use crate::workflows::petition::repository::{
    ApplicationStore, MemoryStore, StoreError, StoredApplication,
};
use crate::workflows::petition::{Criterion, EntryId, PetitionApplication, PetitionService};

pub(super) fn award(id: &str) -> CriterionEntry {
    CriterionEntry::Award(AwardEntry {
        id: EntryId::from(id),
        name: "Innovator of the Year".to_string(),
        organization: "IEEE".to_string(),
        date: "2022-05".to_string(),
        description: "Annual award for applied research".to_string(),
        scope: AwardScope::International,
        significance: "One recipient out of 4,000 nominees".to_string(),
        evidence: None,
    })
}

pub(super) fn membership(id: &str) -> CriterionEntry {
    CriterionEntry::Membership(MembershipEntry {
        id: EntryId::from(id),
        organization: "Royal Academy of Engineering".to_string(),
        requirements: "Nomination by two fellows".to_string(),
        date_joined: "2021".to_string(),
        status: MembershipStatus::Active,
        achievements: "Chaired the AI working group".to_string(),
        evidence: None,
    })
}

pub(super) fn judging(id: &str) -> CriterionEntry {
    CriterionEntry::Judging(JudgingEntry {
        id: EntryId::from(id),
        organization: "NeurIPS".to_string(),
        role: "Area chair".to_string(),
        start_date: "2023-01".to_string(),
        end_date: None,
        context: "Reviewed submissions for the main track".to_string(),
        submissions_count: 24,
        evidence: None,
    })
}

pub(super) fn contribution(id: &str) -> CriterionEntry {
    CriterionEntry::Contribution(ContributionEntry {
        id: EntryId::from(id),
        title: "Open-source vector index".to_string(),
        description: "Approximate nearest neighbour library".to_string(),
        impact: "Adopted by 300 companies".to_string(),
        date: "2020".to_string(),
        recognition: "Featured in ACM Queue".to_string(),
        evidence: None,
    })
}

/// Application with awards, membership and judging each holding one entry and complete.
pub(super) fn eligible_application() -> PetitionApplication {
    let mut application = PetitionApplication::new();
    for (criterion, entry) in [
        (Criterion::Awards, award("award-1")),
        (Criterion::Membership, membership("membership-1")),
        (Criterion::Judging, judging("judging-1")),
    ] {
        assert!(application.add_entry(criterion, entry));
        assert!(application.set_complete(criterion, true));
    }
    application
}

pub(super) fn fortune_vp_employment() -> EmploymentHistoryEntry {
    EmploymentHistoryEntry {
        id: EntryId::from("employment-1"),
        company: "Globex".to_string(),
        role: "VP of Engineering".to_string(),
        industry: "technology".to_string(),
        start_date: "2017-03".to_string(),
        end_date: Some("2022-08".to_string()),
        is_current_role: false,
        responsibilities: "Ran the platform organization".to_string(),
        achievements: None,
        employee_count: Some(EmployeeCount::Enterprise),
        company_reputation: Some(CompanyReputation::Fortune500),
    }
}

pub(super) fn doctorate(publications: u32) -> EducationHistoryEntry {
    EducationHistoryEntry {
        id: EntryId::from("education-1"),
        institution: "ETH Zurich".to_string(),
        degree: Degree::Doctorate,
        field_of_study: "Computer Science".to_string(),
        graduation_year: 2016,
        honors: None,
        publications: Some(publications),
        research_focus: None,
        advisor_notable: false,
    }
}

pub(super) fn reference(name: &str) -> ProfessionalConnectionEntry {
    ProfessionalConnectionEntry {
        id: EntryId::from(name),
        relationship: Relationship::Mentor,
        name: name.to_string(),
        occupation: Some("Professor".to_string()),
        industry: None,
        professional_achievements: None,
        can_provide_reference: true,
        field_relevance: None,
    }
}

pub(super) fn intake_with(
    employment: Vec<EmploymentHistoryEntry>,
    education: Vec<EducationHistoryEntry>,
    connections: Vec<ProfessionalConnectionEntry>,
) -> IntakeData {
    IntakeData {
        employment_history: employment,
        education_history: education,
        professional_connections: connections,
        wants_recommendations: true,
        completed_at: None,
    }
}

pub(super) fn build_service() -> (Arc<PetitionService<MemoryStore>>, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let service = Arc::new(PetitionService::new(store.clone()));
    (service, store)
}

/// Store whose writes always fail, to prove mutations survive persistence errors.
#[derive(Debug, Default)]
pub(super) struct UnavailableStore;

impl ApplicationStore for UnavailableStore {
    fn load(&self) -> Result<Option<StoredApplication>, StoreError> {
        Err(unavailable())
    }

    fn save(&self, _stored: &StoredApplication) -> Result<(), StoreError> {
        Err(unavailable())
    }

    fn clear(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

fn unavailable() -> StoreError {
    StoreError::Io(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "read-only volume",
    ))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    serde_json::from_slice(&bytes).expect("json body")
}
