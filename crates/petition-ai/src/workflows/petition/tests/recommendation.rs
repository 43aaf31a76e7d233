use super::common::*;

use chrono::{TimeZone, Utc};

use crate::workflows::petition::intake::{CompanyReputation, EmployeeCount, IntakeData};
use crate::workflows::petition::recommendation::{
    generate_recommendations, generate_recommendations_at, DEFAULT_TOP_COUNT,
};
use crate::workflows::petition::{Criterion, PetitionApplication};

fn scores(intake: &IntakeData) -> Vec<(Criterion, u8)> {
    generate_recommendations(intake)
        .recommended_criteria
        .iter()
        .map(|recommendation| (recommendation.criterion, recommendation.score))
        .collect()
}

#[test]
fn fortune_500_vp_scores_critical_employment_and_remuneration() {
    let intake = intake_with(vec![fortune_vp_employment()], Vec::new(), Vec::new());
    let result = generate_recommendations(&intake);

    assert_eq!(result.score_for(Criterion::CriticalEmployment), 70);
    assert_eq!(result.score_for(Criterion::Remuneration), 30);
    assert_eq!(result.recommended_criteria[0].criterion, Criterion::CriticalEmployment);
    assert_eq!(result.recommended_criteria[1].criterion, Criterion::Remuneration);
    assert!(result.is_recommended(Criterion::Remuneration));
    assert!(!result.is_recommended(Criterion::Awards));

    let critical = result.get(Criterion::CriticalEmployment).expect("scored");
    assert_eq!(
        critical.reasoning,
        "Employment at Fortune 500 company: Globex. Leadership position as VP of Engineering. \
         Role at enterprise-scale organization (Globex)"
    );
    assert_eq!(critical.suggested_evidence.len(), 2);
}

#[test]
fn doctorate_with_publications_scores_authorship_judging_contributions() {
    let intake = intake_with(Vec::new(), vec![doctorate(3)], Vec::new());
    let ranked = scores(&intake);

    assert_eq!(
        ranked,
        vec![
            (Criterion::Authorship, 70),
            (Criterion::Judging, 25),
            (Criterion::Contributions, 25),
            (Criterion::Awards, 0),
            (Criterion::Membership, 0),
            (Criterion::PublishedMaterial, 0),
            (Criterion::CriticalEmployment, 0),
            (Criterion::Remuneration, 0),
        ]
    );

    let result = generate_recommendations(&intake);
    assert_eq!(
        result.primary_strengths,
        vec![
            "Advanced doctoral education with research expertise".to_string(),
            "Publication track record with 3 publications".to_string(),
        ]
    );
}

#[test]
fn publication_points_are_capped_per_entry() {
    let intake = intake_with(Vec::new(), vec![doctorate(12)], Vec::new());
    let result = generate_recommendations(&intake);

    assert_eq!(result.score_for(Criterion::Authorship), 25 + 45);
}

#[test]
fn scores_are_clamped_to_one_hundred() {
    let employment = (0..4)
        .map(|index| {
            let mut entry = fortune_vp_employment();
            entry.company = format!("Globex {index}");
            entry
        })
        .collect();
    let intake = intake_with(employment, Vec::new(), Vec::new());
    let result = generate_recommendations(&intake);

    assert_eq!(result.score_for(Criterion::CriticalEmployment), 100);
    assert!(result
        .recommended_criteria
        .iter()
        .all(|recommendation| recommendation.score <= 100));
}

#[test]
fn references_boost_every_criterion_and_note_membership() {
    let intake = intake_with(Vec::new(), Vec::new(), vec![reference("Grace Hopper")]);
    let result = generate_recommendations(&intake);

    assert_eq!(result.recommended_criteria.len(), 8);
    assert!(result
        .recommended_criteria
        .iter()
        .all(|recommendation| recommendation.score == 5));
    let membership = result.get(Criterion::Membership).expect("scored");
    assert_eq!(
        membership.reasoning,
        "Grace Hopper (mentor) can provide reference letter"
    );
    assert!(result
        .primary_strengths
        .contains(&"Strong professional network with available references".to_string()));
}

#[test]
fn empty_intake_yields_declaration_order_and_fallback_reasoning() {
    let result = generate_recommendations(&IntakeData::default());

    let order: Vec<Criterion> = result
        .recommended_criteria
        .iter()
        .map(|recommendation| recommendation.criterion)
        .collect();
    assert_eq!(order, Criterion::ordered().to_vec());
    assert!(result.recommended_criteria.iter().all(|recommendation| {
        recommendation.score == 0
            && recommendation.reasoning
                == "No strong signals detected for this criterion based on provided information."
    }));
    assert!(result.primary_strengths.is_empty());
    assert_eq!(result.top(DEFAULT_TOP_COUNT).len(), 3);
    assert_eq!(result.top(20).len(), 8);
}

#[test]
fn identical_intake_yields_identical_results() {
    let mut employment = fortune_vp_employment();
    employment.achievements =
        Some("Rebuilt the settlement platform and cut processing costs by forty percent".to_string());
    employment.employee_count = Some(EmployeeCount::Large);
    employment.company_reputation = Some(CompanyReputation::IndustryLeader);
    let intake = intake_with(
        vec![employment],
        vec![doctorate(2)],
        vec![reference("Barbara Liskov")],
    );
    let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).single().expect("valid time");

    assert_eq!(
        generate_recommendations_at(&intake, at),
        generate_recommendations_at(&intake, at)
    );
}

#[test]
fn refresh_caches_result_for_current_intake() {
    let mut application = PetitionApplication::new();
    application.set_intake(intake_with(vec![fortune_vp_employment()], Vec::new(), Vec::new()));

    let score = application
        .refresh_recommendations()
        .score_for(Criterion::CriticalEmployment);
    assert_eq!(score, 70);
    assert!(application.recommendations.is_some());

    application.clear_recommendations();
    assert!(application.recommendations.is_none());

    let computed = PetitionApplication::compute_recommendations(
        application.intake.as_ref().expect("intake present"),
    );
    assert!(application.recommendations.is_none());
    application.set_recommendations(computed);
    assert!(application.recommendations.is_some());
}

#[test]
fn partition_groups_by_threshold() {
    let intake = intake_with(vec![fortune_vp_employment()], Vec::new(), Vec::new());
    let result = generate_recommendations(&intake);
    let (recommended, other) = result.partition();

    assert_eq!(recommended.len(), 2);
    assert_eq!(other.len(), 6);
}
