use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::criteria::{CriteriaBoard, CriterionState};
use super::domain::{Criterion, Demographics, DemographicsPatch, EntryId, UserRole};
use super::entries::CriterionEntry;
use super::generator;
use super::intake::{
    push_record, remove_record, replace_record, EducationHistoryEntry, EmploymentHistoryEntry, IntakeData,
    ProfessionalConnectionEntry,
};
use super::recommendation::{generate_recommendations, RecommendationResult};
use super::review::{ApplicationReview, ReviewStatus, ReviewSummary};

/// Complete state of one applicant's petition.
///
/// Every operation is synchronous and leaves the container consistent. Invalid requests
/// (unknown ids, submission below the threshold, review actions before submission) are
/// absorbed as no-ops and reported through the returned `bool`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetitionApplication {
    pub demographics: Option<Demographics>,
    pub criteria: CriteriaBoard,
    pub intake: Option<IntakeData>,
    pub recommendations: Option<RecommendationResult>,
    pub review: Option<ApplicationReview>,
    pub is_submitted: bool,
    pub role: UserRole,
}

impl PetitionApplication {
    pub fn new() -> Self {
        Self::default()
    }

    // demographics

    pub fn set_demographics(&mut self, demographics: Demographics) {
        self.demographics = Some(demographics);
    }

    pub fn update_demographics(&mut self, patch: DemographicsPatch) -> bool {
        match self.demographics.as_mut() {
            Some(demographics) => {
                demographics.apply(patch);
                true
            }
            None => {
                debug!("demographics update ignored before demographics exist");
                false
            }
        }
    }

    pub fn clear_demographics(&mut self) {
        self.demographics = None;
    }

    // criteria

    pub fn criterion(&self, criterion: Criterion) -> &CriterionState {
        self.criteria.state(criterion)
    }

    pub fn entries(&self, criterion: Criterion) -> &[CriterionEntry] {
        self.criteria.entries(criterion)
    }

    pub fn entry(&self, criterion: Criterion, id: &EntryId) -> Option<&CriterionEntry> {
        self.criteria.state(criterion).entry(id)
    }

    pub fn add_entry(&mut self, criterion: Criterion, entry: CriterionEntry) -> bool {
        self.criteria.add_entry(criterion, entry)
    }

    pub fn update_entry(&mut self, criterion: Criterion, id: &EntryId, entry: CriterionEntry) -> bool {
        self.criteria.update_entry(criterion, id, entry)
    }

    pub fn update_entry_with<F>(&mut self, criterion: Criterion, id: &EntryId, patch: F) -> bool
    where
        F: FnOnce(&mut CriterionEntry),
    {
        self.criteria.update_entry_with(criterion, id, patch)
    }

    pub fn remove_entry(&mut self, criterion: Criterion, id: &EntryId) -> bool {
        self.criteria.remove_entry(criterion, id)
    }

    pub fn set_complete(&mut self, criterion: Criterion, complete: bool) -> bool {
        self.criteria.set_complete(criterion, complete)
    }

    pub fn set_draft(&mut self, criterion: Criterion, draft: bool) {
        self.criteria.set_draft(criterion, draft);
    }

    pub fn completed_count(&self) -> usize {
        self.criteria.completed_count()
    }

    pub fn can_submit_for_review(&self) -> bool {
        self.criteria.can_submit_for_review()
    }

    pub fn has_existing_entries(&self) -> bool {
        self.criteria.has_existing_entries()
    }

    // intake

    pub fn set_intake(&mut self, intake: IntakeData) {
        self.intake = Some(intake);
    }

    fn intake_mut(&mut self) -> &mut IntakeData {
        self.intake.get_or_insert_with(IntakeData::default)
    }

    pub fn set_wants_recommendations(&mut self, wants: bool) {
        self.intake_mut().wants_recommendations = wants;
    }

    pub fn complete_intake(&mut self, at: DateTime<Utc>) {
        self.intake_mut().completed_at = Some(at);
    }

    pub fn add_employment(&mut self, entry: EmploymentHistoryEntry) -> EntryId {
        push_record(&mut self.intake_mut().employment_history, entry)
    }

    pub fn update_employment(&mut self, id: &EntryId, entry: EmploymentHistoryEntry) -> bool {
        self.intake
            .as_mut()
            .is_some_and(|intake| replace_record(&mut intake.employment_history, id, entry))
    }

    pub fn remove_employment(&mut self, id: &EntryId) -> bool {
        self.intake
            .as_mut()
            .is_some_and(|intake| remove_record(&mut intake.employment_history, id))
    }

    pub fn add_education(&mut self, entry: EducationHistoryEntry) -> EntryId {
        push_record(&mut self.intake_mut().education_history, entry)
    }

    pub fn update_education(&mut self, id: &EntryId, entry: EducationHistoryEntry) -> bool {
        self.intake
            .as_mut()
            .is_some_and(|intake| replace_record(&mut intake.education_history, id, entry))
    }

    pub fn remove_education(&mut self, id: &EntryId) -> bool {
        self.intake
            .as_mut()
            .is_some_and(|intake| remove_record(&mut intake.education_history, id))
    }

    pub fn add_connection(&mut self, entry: ProfessionalConnectionEntry) -> EntryId {
        push_record(&mut self.intake_mut().professional_connections, entry)
    }

    pub fn update_connection(&mut self, id: &EntryId, entry: ProfessionalConnectionEntry) -> bool {
        self.intake
            .as_mut()
            .is_some_and(|intake| replace_record(&mut intake.professional_connections, id, entry))
    }

    pub fn remove_connection(&mut self, id: &EntryId) -> bool {
        self.intake
            .as_mut()
            .is_some_and(|intake| remove_record(&mut intake.professional_connections, id))
    }

    // recommendations

    /// Pure scoring over the supplied intake; nothing is cached.
    pub fn compute_recommendations(intake: &IntakeData) -> RecommendationResult {
        generate_recommendations(intake)
    }

    pub fn set_recommendations(&mut self, result: RecommendationResult) {
        self.recommendations = Some(result);
    }

    pub fn clear_recommendations(&mut self) {
        self.recommendations = None;
    }

    /// Score the current intake (empty when none was captured) and cache the result.
    pub fn refresh_recommendations(&mut self) -> &RecommendationResult {
        let result = match self.intake.as_ref() {
            Some(intake) => generate_recommendations(intake),
            None => generate_recommendations(&IntakeData::default()),
        };
        self.recommendations.insert(result)
    }

    /// Seed empty target criteria with drafts from intake. Returns the criteria seeded.
    pub fn populate_from_intake(&mut self) -> Vec<Criterion> {
        self.populate_from_intake_for_year(Utc::now().year())
    }

    pub fn populate_from_intake_for_year(&mut self, current_year: i32) -> Vec<Criterion> {
        match self.intake.as_ref() {
            Some(intake) => generator::populate_from_intake(&mut self.criteria, intake, current_year),
            None => {
                debug!("populate ignored without intake data");
                Vec::new()
            }
        }
    }

    // review

    pub fn submit_for_review(&mut self) -> bool {
        self.submit_for_review_at(Utc::now())
    }

    pub fn submit_for_review_at(&mut self, at: DateTime<Utc>) -> bool {
        if self.is_submitted {
            debug!("application already submitted");
            return false;
        }
        if !self.can_submit_for_review() {
            debug!(completed = self.completed_count(), "submission below eligibility threshold");
            return false;
        }

        self.review = Some(ApplicationReview::snapshot(&self.criteria, at));
        self.is_submitted = true;
        info!(completed = self.completed_count(), "application submitted for review");
        true
    }

    pub fn set_criterion_review_status(
        &mut self,
        criterion: Criterion,
        status: ReviewStatus,
        comment: Option<String>,
    ) -> bool {
        match self.review.as_mut() {
            Some(review) => review.set_criterion_status(criterion, status, comment, Utc::now()),
            None => {
                debug!(%criterion, "review action ignored before submission");
                false
            }
        }
    }

    pub fn set_entry_review_status(
        &mut self,
        criterion: Criterion,
        entry_id: &EntryId,
        status: ReviewStatus,
        comment: Option<String>,
    ) -> bool {
        match self.review.as_mut() {
            Some(review) => {
                review.set_entry_status(criterion, entry_id, status, comment, Utc::now())
            }
            None => {
                debug!(%criterion, %entry_id, "review action ignored before submission");
                false
            }
        }
    }

    /// All zero until a review exists.
    pub fn review_summary(&self) -> ReviewSummary {
        self.review
            .as_ref()
            .map(ApplicationReview::summary)
            .unwrap_or_default()
    }

    pub fn unreviewed_entries(&self, criterion: Criterion) -> Vec<&CriterionEntry> {
        match self.review.as_ref() {
            Some(review) => review.unreviewed_entries(criterion, self.criteria.state(criterion)),
            None => Vec::new(),
        }
    }

    // role

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    pub fn toggle_role(&mut self) -> UserRole {
        self.role = self.role.toggled();
        self.role
    }

    pub fn reset(&mut self) {
        *self = Self::default();
        info!("application reset");
    }
}
