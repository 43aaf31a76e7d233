use super::common::*;

use crate::workflows::petition::entries::{AwardEntry, CriterionEntry};
use crate::workflows::petition::evidence::Evidence;
use crate::workflows::petition::{Criterion, CriterionStatus, EntryId, PetitionApplication};

#[test]
fn two_completed_criteria_are_not_enough_to_submit() {
    let mut application = PetitionApplication::new();
    assert!(application.add_entry(Criterion::Awards, award("award-1")));
    assert!(application.set_complete(Criterion::Awards, true));
    assert!(application.add_entry(Criterion::Membership, membership("membership-1")));
    assert!(application.set_complete(Criterion::Membership, true));

    assert_eq!(application.completed_count(), 2);
    assert!(!application.can_submit_for_review());
}

#[test]
fn third_completed_criterion_unlocks_submission() {
    let application = eligible_application();

    assert_eq!(application.completed_count(), 3);
    assert!(application.can_submit_for_review());
}

#[test]
fn eligibility_is_recomputed_after_removal() {
    let mut application = eligible_application();
    assert!(application.remove_entry(Criterion::Judging, &EntryId::from("judging-1")));

    assert_eq!(application.completed_count(), 2);
    assert!(!application.can_submit_for_review());
}

#[test]
fn removing_only_entry_of_complete_criterion_clears_completion() {
    let mut application = PetitionApplication::new();
    application.add_entry(Criterion::Awards, award("award-1"));
    application.set_complete(Criterion::Awards, true);

    assert!(application.remove_entry(Criterion::Awards, &EntryId::from("award-1")));

    let state = application.criterion(Criterion::Awards);
    assert!(!state.is_complete);
    assert!(state.entries.is_empty());
    assert_eq!(state.status(), CriterionStatus::Empty);
}

#[test]
fn completing_empty_criterion_is_absorbed() {
    let mut application = PetitionApplication::new();

    assert!(!application.set_complete(Criterion::Judging, true));
    assert!(!application.criterion(Criterion::Judging).is_complete);
    assert_eq!(application.completed_count(), 0);
}

#[test]
fn add_entry_marks_draft_and_uncompleting_restores_draft() {
    let mut application = PetitionApplication::new();
    application.add_entry(Criterion::Contributions, contribution("contribution-1"));
    assert!(application.criterion(Criterion::Contributions).is_draft);
    assert_eq!(
        application.criterion(Criterion::Contributions).status(),
        CriterionStatus::Draft
    );

    application.set_complete(Criterion::Contributions, true);
    let state = application.criterion(Criterion::Contributions);
    assert!(state.is_complete);
    assert!(!state.is_draft);

    assert!(application.set_complete(Criterion::Contributions, false));
    let state = application.criterion(Criterion::Contributions);
    assert!(!state.is_complete);
    assert!(state.is_draft);
}

#[test]
fn set_draft_leaves_completion_alone() {
    let mut application = eligible_application();
    application.set_draft(Criterion::Awards, true);

    let state = application.criterion(Criterion::Awards);
    assert!(state.is_complete);
    assert!(state.is_draft);
    assert_eq!(state.status(), CriterionStatus::Complete);
}

#[test]
fn unknown_ids_are_no_ops() {
    let mut application = eligible_application();
    let before = application.clone();
    let missing = EntryId::from("missing");

    assert!(!application.update_entry(Criterion::Awards, &missing, award("other")));
    assert!(!application.remove_entry(Criterion::Awards, &missing));
    assert!(!application.update_entry_with(Criterion::Awards, &missing, |_| {}));

    assert_eq!(application, before);
}

#[test]
fn update_entry_keeps_id_and_flags() {
    let mut application = eligible_application();
    let id = EntryId::from("award-1");
    let CriterionEntry::Award(mut replacement) = award("ignored") else {
        unreachable!("fixture builds an award");
    };
    replacement.name = "Turing Fellowship".to_string();

    assert!(application.update_entry(Criterion::Awards, &id, replacement.into()));

    let entry = application.entry(Criterion::Awards, &id).expect("entry kept");
    assert_eq!(entry.id(), &id);
    assert_eq!(entry.headline(), "Turing Fellowship (IEEE)");
    assert!(application.criterion(Criterion::Awards).is_complete);
}

#[test]
fn entries_of_another_kind_are_rejected() {
    let mut application = PetitionApplication::new();

    assert!(!application.add_entry(Criterion::Awards, judging("judging-1")));
    assert!(application.entries(Criterion::Awards).is_empty());
    assert!(!application.has_existing_entries());

    application.add_entry(Criterion::Awards, award("award-1"));
    assert!(!application.update_entry(
        Criterion::Awards,
        &EntryId::from("award-1"),
        membership("membership-1")
    ));
    assert!(matches!(
        application.entry(Criterion::Awards, &EntryId::from("award-1")),
        Some(CriterionEntry::Award(_))
    ));
}

#[test]
fn colliding_ids_are_reissued() {
    let mut application = PetitionApplication::new();
    application.add_entry(Criterion::Awards, award("award-1"));
    application.add_entry(Criterion::Awards, award("award-1"));

    let entries = application.entries(Criterion::Awards);
    assert_eq!(entries.len(), 2);
    assert_ne!(entries[0].id(), entries[1].id());
}

#[test]
fn empty_evidence_bundles_are_dropped_on_add() {
    let mut application = PetitionApplication::new();
    let CriterionEntry::Award(fixture) = award("award-1") else {
        unreachable!("fixture builds an award");
    };
    let entry = AwardEntry {
        evidence: Some(Evidence::default()),
        ..fixture
    };

    application.add_entry(Criterion::Awards, entry.into());

    match application.entry(Criterion::Awards, &EntryId::from("award-1")) {
        Some(CriterionEntry::Award(stored)) => assert!(stored.evidence.is_none()),
        other => panic!("unexpected entry: {other:?}"),
    }
}

#[test]
fn completion_requires_entries_across_mixed_operations() {
    let mut application = eligible_application();
    application.add_entry(Criterion::Awards, award("award-2"));
    application.remove_entry(Criterion::Awards, &EntryId::from("award-1"));
    application.set_complete(Criterion::Remuneration, true);
    application.remove_entry(Criterion::Awards, &EntryId::from("award-2"));
    application.set_complete(Criterion::Awards, true);

    for (criterion, state) in application.criteria.iter() {
        assert!(
            !state.is_complete || !state.entries.is_empty(),
            "{criterion} complete without entries"
        );
    }
    assert_eq!(application.completed_count(), 2);
}
