use super::common::*;

use crate::workflows::petition::{Criterion, EntryId, PetitionApplication, ReviewStatus};

#[test]
fn submission_below_threshold_is_absorbed() {
    let mut application = PetitionApplication::new();
    application.add_entry(Criterion::Awards, award("award-1"));
    application.set_complete(Criterion::Awards, true);

    assert!(!application.submit_for_review());
    assert!(!application.is_submitted);
    assert!(application.review.is_none());
}

#[test]
fn submission_snapshots_every_criterion_as_pending() {
    let mut application = eligible_application();
    application.add_entry(Criterion::Awards, award("award-2"));

    assert!(application.submit_for_review());
    assert!(application.is_submitted);

    let review = application.review.as_ref().expect("review created");
    assert_eq!(review.criteria.len(), 8);
    assert!(review
        .criteria
        .values()
        .all(|criterion| criterion.status == ReviewStatus::Pending));

    let awards = review.criterion(Criterion::Awards).expect("awards reviewed");
    assert_eq!(awards.entry_reviews.len(), 2);
    assert!(awards
        .entry_reviews
        .iter()
        .all(|entry| entry.status == ReviewStatus::Pending));
    assert_eq!(
        review
            .criterion(Criterion::Remuneration)
            .expect("remuneration reviewed")
            .entry_reviews
            .len(),
        0
    );
}

#[test]
fn second_submission_is_a_no_op() {
    let mut application = eligible_application();
    assert!(application.submit_for_review());
    application.set_criterion_review_status(Criterion::Awards, ReviewStatus::Approved, None);
    let before = application.review.clone();

    assert!(!application.submit_for_review());
    assert_eq!(application.review, before);
}

#[test]
fn review_actions_before_submission_are_absorbed() {
    let mut application = eligible_application();

    assert!(!application.set_criterion_review_status(
        Criterion::Awards,
        ReviewStatus::Approved,
        Some("Strong".to_string())
    ));
    assert!(!application.set_entry_review_status(
        Criterion::Awards,
        &EntryId::from("award-1"),
        ReviewStatus::Approved,
        None
    ));
    assert!(application.review.is_none());
    assert_eq!(application.review_summary().total(), 0);
}

#[test]
fn reviewer_updates_statuses_and_comments() {
    let mut application = eligible_application();
    application.submit_for_review();

    assert!(application.set_criterion_review_status(
        Criterion::Awards,
        ReviewStatus::ChangesRequested,
        Some("Add the award certificate".to_string())
    ));
    assert!(application.set_criterion_review_status(
        Criterion::Awards,
        ReviewStatus::Approved,
        None
    ));
    assert!(application.set_entry_review_status(
        Criterion::Awards,
        &EntryId::from("award-1"),
        ReviewStatus::Rejected,
        Some("Regional only".to_string())
    ));

    let awards = application
        .review
        .as_ref()
        .and_then(|review| review.criterion(Criterion::Awards))
        .expect("awards reviewed");
    assert_eq!(awards.status, ReviewStatus::Approved);
    assert_eq!(awards.comment.as_deref(), Some("Add the award certificate"));
    assert!(awards.reviewed_at.is_some());
    let entry = awards
        .entry_review(&EntryId::from("award-1"))
        .expect("entry reviewed");
    assert_eq!(entry.status, ReviewStatus::Rejected);
    assert_eq!(entry.comment.as_deref(), Some("Regional only"));
}

#[test]
fn unknown_entry_review_is_absorbed() {
    let mut application = eligible_application();
    application.submit_for_review();
    let before = application.review.clone();

    assert!(!application.set_entry_review_status(
        Criterion::Awards,
        &EntryId::from("missing"),
        ReviewStatus::Approved,
        None
    ));
    assert_eq!(application.review, before);
}

#[test]
fn entries_added_after_submission_stay_unreviewed() {
    let mut application = eligible_application();
    application.submit_for_review();
    application.add_entry(Criterion::Awards, award("late-award"));

    let unreviewed = application.unreviewed_entries(Criterion::Awards);
    assert_eq!(unreviewed.len(), 1);
    assert_eq!(unreviewed[0].id(), &EntryId::from("late-award"));
    assert!(!application.set_entry_review_status(
        Criterion::Awards,
        &EntryId::from("late-award"),
        ReviewStatus::Approved,
        None
    ));
    assert_eq!(
        application
            .review
            .as_ref()
            .and_then(|review| review.criterion(Criterion::Awards))
            .map(|review| review.entry_reviews.len()),
        Some(1)
    );
}

#[test]
fn summary_counts_criterion_statuses() {
    let mut application = eligible_application();
    application.submit_for_review();
    for criterion in [Criterion::Awards, Criterion::Membership] {
        application.set_criterion_review_status(criterion, ReviewStatus::Approved, None);
    }
    application.set_criterion_review_status(Criterion::Judging, ReviewStatus::Rejected, None);

    let summary = application.review_summary();
    assert_eq!(summary.approved, 2);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.pending, 5);
    assert_eq!(summary.changes_requested, 0);
    assert!(!summary.minimum_met());

    application.set_criterion_review_status(Criterion::Judging, ReviewStatus::Approved, None);
    assert!(application.review_summary().minimum_met());
}

#[test]
fn reset_clears_everything() {
    let mut application = eligible_application();
    application.submit_for_review();
    application.toggle_role();

    application.reset();

    assert_eq!(application, PetitionApplication::default());
    assert!(!application.is_submitted);
    assert!(application.review.is_none());
}
