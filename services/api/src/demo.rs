use crate::infra::{open_service, ConfiguredStore};
use chrono::{Datelike, Utc};
use clap::Args;
use petition_ai::config::AppConfig;
use petition_ai::error::AppError;
use petition_ai::workflows::petition::{
    generate_recommendations, CompanyReputation, Criterion, Degree, EducationHistoryEntry,
    EmployeeCount, EmploymentHistoryEntry, EntryId, IntakeData, JudgingEntry, MemoryStore,
    PetitionProgress, PetitionService, ProfessionalConnectionEntry, RecommendationResult,
    Relationship, ReviewStatus, DEFAULT_TOP_COUNT,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Year used for generated remuneration drafts (defaults to the current year).
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Stop after submission instead of walking through reviewer decisions.
    #[arg(long)]
    pub(crate) skip_review: bool,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Path to an intake JSON document
    #[arg(long)]
    pub(crate) intake: PathBuf,
    /// Number of top-ranked criteria to print
    #[arg(long, default_value_t = DEFAULT_TOP_COUNT)]
    pub(crate) top: usize,
}

pub(crate) fn run_intake_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs { intake, top } = args;

    let raw = std::fs::read_to_string(&intake)?;
    let intake_data: IntakeData = serde_json::from_str(&raw)?;
    let result = generate_recommendations(&intake_data);

    println!("Criterion recommendations for {}", intake.display());
    render_recommendations(&result, top);
    Ok(())
}

pub(crate) fn run_status() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let store = ConfiguredStore::from_config(&config.storage);
    println!("Stored application ({})", store.describe());

    let service = open_service(&config.storage)?;
    render_progress(&service.progress());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { year, skip_review } = args;
    let year = year.unwrap_or_else(|| Utc::now().year());

    println!("O-1A petition walkthrough");
    let service = PetitionService::new(Arc::new(MemoryStore::default()));

    let intake = demo_intake();
    println!(
        "\nIntake: {} employment, {} education, {} connections",
        intake.employment_history.len(),
        intake.education_history.len(),
        intake.professional_connections.len()
    );
    service.mutate(|application| {
        application.set_intake(intake);
        application.complete_intake(Utc::now());
        true
    });

    let recommendations =
        service.mutate_with(|application| application.refresh_recommendations().clone());
    println!("\nRecommendations");
    render_recommendations(&recommendations, DEFAULT_TOP_COUNT);

    let seeded = service.mutate_with(|application| application.populate_from_intake_for_year(year));
    println!("\nDraft entries generated from intake");
    if seeded.is_empty() {
        println!("- none (every target criterion already had entries)");
    }
    for criterion in &seeded {
        let headlines = service.read(|application| {
            application
                .entries(*criterion)
                .iter()
                .map(|entry| entry.headline())
                .collect::<Vec<_>>()
        });
        println!("- {}: {}", criterion.label(), headlines.join("; "));
    }

    service.mutate(|application| application.add_entry(Criterion::Judging, demo_judging().into()));
    for criterion in [
        Criterion::CriticalEmployment,
        Criterion::Authorship,
        Criterion::Judging,
    ] {
        let outcome = service.mutate(|application| application.set_complete(criterion, true));
        println!(
            "Marked {} complete ({} of 3 required)",
            criterion.label(),
            outcome.completed_count
        );
    }

    let outcome = service.mutate(|application| application.submit_for_review());
    if !outcome.applied {
        println!("\nSubmission refused: {} criteria complete", outcome.completed_count);
        return Ok(());
    }
    println!("\nSubmitted for review");

    if skip_review {
        render_progress(&service.progress());
        return Ok(());
    }

    service.mutate(|application| {
        application.toggle_role();
        true
    });
    let decisions = [
        (Criterion::CriticalEmployment, ReviewStatus::Approved, None),
        (Criterion::Authorship, ReviewStatus::Approved, None),
        (
            Criterion::Judging,
            ReviewStatus::ChangesRequested,
            Some("Attach the program committee invitation".to_string()),
        ),
    ];
    for (criterion, status, comment) in decisions {
        service.mutate(|application| {
            application.set_criterion_review_status(criterion, status, comment)
        });
        println!("Reviewer marked {} as {}", criterion.label(), status.label());
    }

    render_progress(&service.progress());
    Ok(())
}

fn render_recommendations(result: &RecommendationResult, top: usize) {
    for (rank, recommendation) in result.top(top).iter().enumerate() {
        let marker = if recommendation.is_recommended() {
            "recommended"
        } else {
            "weak signal"
        };
        println!(
            "{}. {} - score {} ({})",
            rank + 1,
            recommendation.criterion.label(),
            recommendation.score,
            marker
        );
        println!("   {}", recommendation.reasoning);
        for evidence in &recommendation.suggested_evidence {
            println!("   * {evidence}");
        }
    }

    if result.primary_strengths.is_empty() {
        println!("Primary strengths: none identified");
    } else {
        println!("Primary strengths");
        for strength in &result.primary_strengths {
            println!("- {strength}");
        }
    }
}

fn render_progress(progress: &PetitionProgress) {
    println!("\nCriteria progress");
    for entry in &progress.criteria {
        let review = entry
            .review_status
            .map(|status| format!(" | review {}", status.label()))
            .unwrap_or_default();
        println!(
            "- {}: {} ({} entries){}",
            entry.title, entry.status_label, entry.entry_count, review
        );
    }
    println!(
        "Completed {} of {} required | submitted: {}",
        progress.completed_count, progress.required_count, progress.is_submitted
    );

    match &progress.review_summary {
        Some(summary) => println!(
            "Review: {} approved, {} rejected, {} changes requested, {} pending | minimum met: {}",
            summary.approved,
            summary.rejected,
            summary.changes_requested,
            summary.pending,
            summary.minimum_met()
        ),
        None if progress.can_submit_for_review => println!("Ready to submit for review"),
        None => println!(
            "{} more criteria needed before submission",
            progress.remaining_to_submit()
        ),
    }
}

fn demo_intake() -> IntakeData {
    IntakeData {
        employment_history: vec![EmploymentHistoryEntry {
            id: EntryId::generate(),
            company: "Hooli".to_string(),
            role: "Director of Infrastructure".to_string(),
            industry: "technology".to_string(),
            start_date: "2018-04".to_string(),
            end_date: Some("2024-02".to_string()),
            is_current_role: false,
            responsibilities: "Owned the global edge network and its on-call rotation".to_string(),
            achievements: Some(
                "Designed the anycast rollout that cut median latency by 40% for 200M users"
                    .to_string(),
            ),
            employee_count: Some(EmployeeCount::Enterprise),
            company_reputation: Some(CompanyReputation::Fortune500),
        }],
        education_history: vec![EducationHistoryEntry {
            id: EntryId::generate(),
            institution: "Carnegie Mellon University".to_string(),
            degree: Degree::Doctorate,
            field_of_study: "Networked Systems".to_string(),
            graduation_year: 2017,
            honors: Some("Best Dissertation Award".to_string()),
            publications: Some(5),
            research_focus: Some("Congestion control for datacenter fabrics".to_string()),
            advisor_notable: true,
        }],
        professional_connections: vec![ProfessionalConnectionEntry {
            id: EntryId::generate(),
            relationship: Relationship::Collaborator,
            name: "Dr. Radia Perlman".to_string(),
            occupation: Some("Network protocol designer".to_string()),
            industry: Some("networking".to_string()),
            professional_achievements: Some("Inventor of the spanning tree protocol".to_string()),
            can_provide_reference: true,
            field_relevance: Some("Routing and bridging protocols".to_string()),
        }],
        wants_recommendations: true,
        completed_at: None,
    }
}

fn demo_judging() -> JudgingEntry {
    JudgingEntry {
        id: EntryId::generate(),
        organization: "USENIX NSDI".to_string(),
        role: "Program committee member".to_string(),
        start_date: "2022-06".to_string(),
        end_date: None,
        context: "Reviewed full papers for the spring and fall deadlines".to_string(),
        submissions_count: 32,
        evidence: None,
    }
}
