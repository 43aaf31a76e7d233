//! O-1A evidence wizard: criteria capture, intake-driven recommendations and drafts, and
//! the reviewer workflow that follows submission.

pub mod application;
pub mod criteria;
pub mod domain;
pub mod entries;
pub mod evidence;
pub mod generator;
pub mod intake;
pub mod progress;
pub mod recommendation;
pub mod repository;
pub mod review;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use application::PetitionApplication;
pub use criteria::{CriteriaBoard, CriterionState, CriterionStatus};
pub use domain::{
    definitions, Criterion, CriterionDefinition, Demographics, DemographicsPatch, EntryId,
    UserRole, VisaType, ELIGIBILITY_THRESHOLD,
};
pub use entries::{
    AuthorshipEntry, AwardEntry, AwardScope, ContributionEntry, CriterionEntry,
    CriticalEmploymentEntry, JudgingEntry, MembershipEntry, MembershipStatus,
    PublishedMaterialEntry, RemunerationEntry,
};
pub use evidence::{Evidence, FileAttachment, UrlReference};
pub use generator::GeneratedDrafts;
pub use intake::{
    CompanyReputation, Degree, EducationHistoryEntry, EmployeeCount, EmploymentHistoryEntry,
    IntakeData, IntakeRecord, ProfessionalConnectionEntry, Relationship,
};
pub use progress::{CriterionProgressEntry, PetitionProgress};
pub use recommendation::{
    generate_recommendations, generate_recommendations_at, CriterionRecommendation,
    RecommendationResult, DEFAULT_TOP_COUNT, RECOMMENDED_SCORE_THRESHOLD,
};
pub use repository::{
    ApplicationStore, JsonFileStore, MemoryStore, StoreError, StoredApplication, SCHEMA_VERSION,
    STORAGE_KEY,
};
pub use review::{ApplicationReview, CriterionReview, EntryReview, ReviewStatus, ReviewSummary};
pub use router::{petition_router, PETITION_API_PREFIX};
pub use service::{MutationOutcome, PetitionService};
