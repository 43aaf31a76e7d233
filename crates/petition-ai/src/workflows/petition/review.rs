use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::criteria::{CriteriaBoard, CriterionState};
use super::domain::{Criterion, EntryId, ELIGIBILITY_THRESHOLD};
use super::entries::CriterionEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    ChangesRequested,
}

impl ReviewStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::ChangesRequested => "Changes Requested",
        }
    }
}

/// Reviewer verdict on a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryReview {
    pub entry_id: EntryId,
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl EntryReview {
    fn pending(entry_id: EntryId) -> Self {
        Self {
            entry_id,
            status: ReviewStatus::Pending,
            comment: None,
            reviewed_at: None,
        }
    }
}

/// Reviewer verdict on a criterion plus one review per entry that existed at submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionReview {
    pub criterion: Criterion,
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub entry_reviews: Vec<EntryReview>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

impl CriterionReview {
    pub fn entry_review(&self, entry_id: &EntryId) -> Option<&EntryReview> {
        self.entry_reviews
            .iter()
            .find(|review| &review.entry_id == entry_id)
    }
}

/// Counts of criterion-level statuses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub approved: usize,
    pub rejected: usize,
    pub pending: usize,
    pub changes_requested: usize,
}

impl ReviewSummary {
    pub fn total(&self) -> usize {
        self.approved + self.rejected + self.pending + self.changes_requested
    }

    pub fn minimum_met(&self) -> bool {
        self.approved >= ELIGIBILITY_THRESHOLD
    }
}

/// Review state created once at submission and mutated only by reviewer actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationReview {
    pub submitted_at: DateTime<Utc>,
    pub criteria: BTreeMap<Criterion, CriterionReview>,
}

impl ApplicationReview {
    /// Snapshot every criterion and each entry it currently holds, all pending.
    pub fn snapshot(board: &CriteriaBoard, submitted_at: DateTime<Utc>) -> Self {
        let criteria = board
            .iter()
            .map(|(criterion, state)| {
                let entry_reviews = state
                    .entries
                    .iter()
                    .map(|entry| EntryReview::pending(entry.id().clone()))
                    .collect();
                (
                    criterion,
                    CriterionReview {
                        criterion,
                        status: ReviewStatus::Pending,
                        comment: None,
                        entry_reviews,
                        reviewed_at: None,
                    },
                )
            })
            .collect();

        Self {
            submitted_at,
            criteria,
        }
    }

    pub fn criterion(&self, criterion: Criterion) -> Option<&CriterionReview> {
        self.criteria.get(&criterion)
    }

    /// A `None` comment keeps whatever comment was recorded before.
    pub fn set_criterion_status(
        &mut self,
        criterion: Criterion,
        status: ReviewStatus,
        comment: Option<String>,
        at: DateTime<Utc>,
    ) -> bool {
        let Some(review) = self.criteria.get_mut(&criterion) else {
            debug!(%criterion, "criterion missing from review snapshot");
            return false;
        };

        review.status = status;
        if comment.is_some() {
            review.comment = comment;
        }
        review.reviewed_at = Some(at);
        true
    }

    /// Entries that were not part of the snapshot are ignored.
    pub fn set_entry_status(
        &mut self,
        criterion: Criterion,
        entry_id: &EntryId,
        status: ReviewStatus,
        comment: Option<String>,
        at: DateTime<Utc>,
    ) -> bool {
        let Some(review) = self
            .criteria
            .get_mut(&criterion)
            .and_then(|review| {
                review
                    .entry_reviews
                    .iter_mut()
                    .find(|entry| &entry.entry_id == entry_id)
            })
        else {
            debug!(%criterion, %entry_id, "entry missing from review snapshot");
            return false;
        };

        review.status = status;
        if comment.is_some() {
            review.comment = comment;
        }
        review.reviewed_at = Some(at);
        true
    }

    pub fn summary(&self) -> ReviewSummary {
        self.criteria
            .values()
            .fold(ReviewSummary::default(), |mut summary, review| {
                match review.status {
                    ReviewStatus::Approved => summary.approved += 1,
                    ReviewStatus::Rejected => summary.rejected += 1,
                    ReviewStatus::Pending => summary.pending += 1,
                    ReviewStatus::ChangesRequested => summary.changes_requested += 1,
                }
                summary
            })
    }

    /// Entries added after submission, which carry no entry review.
    pub fn unreviewed_entries<'a>(
        &self,
        criterion: Criterion,
        state: &'a CriterionState,
    ) -> Vec<&'a CriterionEntry> {
        let review = self.criteria.get(&criterion);
        state
            .entries
            .iter()
            .filter(|entry| {
                review
                    .and_then(|review| review.entry_review(entry.id()))
                    .is_none()
            })
            .collect()
    }
}
