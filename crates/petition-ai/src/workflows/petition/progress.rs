use serde::Serialize;

use super::application::PetitionApplication;
use super::criteria::CriterionStatus;
use super::domain::{definitions, Criterion, ELIGIBILITY_THRESHOLD};
use super::review::{ReviewStatus, ReviewSummary};

#[derive(Debug, Clone, Serialize)]
pub struct CriterionProgressEntry {
    pub criterion: Criterion,
    pub title: &'static str,
    pub commonality: u8,
    pub entry_count: usize,
    pub status: CriterionStatus,
    pub status_label: &'static str,
    pub recommended: bool,
    pub recommendation_score: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_status: Option<ReviewStatus>,
}

/// Read-only dashboard over one application, criteria in commonality order.
#[derive(Debug, Clone, Serialize)]
pub struct PetitionProgress {
    pub criteria: Vec<CriterionProgressEntry>,
    pub completed_count: usize,
    pub required_count: usize,
    pub can_submit_for_review: bool,
    pub is_submitted: bool,
    pub has_demographics: bool,
    pub intake_completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_summary: Option<ReviewSummary>,
}

impl PetitionProgress {
    pub fn from_application(application: &PetitionApplication) -> Self {
        let recommendations = application.recommendations.as_ref();
        let review = application.review.as_ref();

        let criteria = definitions()
            .iter()
            .map(|definition| {
                let criterion = definition.criterion;
                let state = application.criterion(criterion);
                let status = state.status();
                CriterionProgressEntry {
                    criterion,
                    title: definition.title,
                    commonality: definition.commonality,
                    entry_count: state.entries.len(),
                    status,
                    status_label: status.label(),
                    recommended: recommendations
                        .is_some_and(|result| result.is_recommended(criterion)),
                    recommendation_score: recommendations
                        .map_or(0, |result| result.score_for(criterion)),
                    review_status: review
                        .and_then(|review| review.criterion(criterion))
                        .map(|review| review.status),
                }
            })
            .collect();

        Self {
            criteria,
            completed_count: application.completed_count(),
            required_count: ELIGIBILITY_THRESHOLD,
            can_submit_for_review: application.can_submit_for_review(),
            is_submitted: application.is_submitted,
            has_demographics: application.demographics.is_some(),
            intake_completed: application
                .intake
                .as_ref()
                .is_some_and(|intake| intake.completed_at.is_some()),
            review_summary: review.map(|review| review.summary()),
        }
    }

    pub fn remaining_to_submit(&self) -> usize {
        self.required_count.saturating_sub(self.completed_count)
    }
}
