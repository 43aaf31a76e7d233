//! Best-effort draft entries derived from intake data.
//!
//! Drafts are only ever written into criteria that have no entries at all, so running the
//! generator again after the applicant has edited anything leaves their work alone.

use serde::Serialize;
use tracing::info;

use super::criteria::CriteriaBoard;
use super::domain::{Criterion, EntryId};
use super::entries::{
    AuthorshipEntry, AwardEntry, AwardScope, CriterionEntry, CriticalEmploymentEntry,
    RemunerationEntry,
};
use super::intake::{CompanyReputation, EmployeeCount, EmploymentHistoryEntry, IntakeData};

const DEFAULT_CURRENCY: &str = "USD";
const NOTABLE_ADVISOR_NOTE: &str = "Including notable advisor";

/// Drafts produced for the four criteria the generator knows how to seed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedDrafts {
    pub critical_employment: Vec<CriticalEmploymentEntry>,
    pub remuneration: Vec<RemunerationEntry>,
    pub authorship: Vec<AuthorshipEntry>,
    pub awards: Vec<AwardEntry>,
}

impl GeneratedDrafts {
    /// Build drafts from intake. `current_year` fills remuneration years when the
    /// employment has no end date.
    pub fn from_intake(intake: &IntakeData, current_year: i32) -> Self {
        let mut drafts = Self::default();

        for employment in &intake.employment_history {
            drafts.critical_employment.push(CriticalEmploymentEntry {
                id: EntryId::generate(),
                company: employment.company.clone(),
                role: employment.role.clone(),
                start_date: employment.start_date.clone(),
                end_date: employment.end_date.clone(),
                responsibilities: employment.responsibilities.clone(),
                critical_nature: critical_nature(employment),
                evidence: None,
            });

            if let Some(reputation) = employment
                .company_reputation
                .filter(|reputation| reputation.is_prestigious())
            {
                drafts
                    .remuneration
                    .push(remuneration_placeholder(employment, reputation, current_year));
            }
        }

        for education in &intake.education_history {
            if education.publications.is_some_and(|count| count > 0) {
                let publication = match education.research_focus.as_deref() {
                    Some(focus) if !focus.is_empty() => {
                        format!("{} - {}", education.field_of_study, focus)
                    }
                    _ => education.field_of_study.clone(),
                };

                drafts.authorship.push(AuthorshipEntry {
                    id: EntryId::generate(),
                    title: format!("Research publications from {}", education.institution),
                    publication,
                    date: education.graduation_year.to_string(),
                    coauthors: education
                        .advisor_notable
                        .then(|| NOTABLE_ADVISOR_NOTE.to_string()),
                    citations: None,
                    doi: None,
                    evidence: None,
                });
            }
        }

        for education in &intake.education_history {
            let Some(honors) = education
                .honors
                .as_deref()
                .filter(|honors| !honors.trim().is_empty())
            else {
                continue;
            };

            drafts.awards.push(AwardEntry {
                id: EntryId::generate(),
                name: honors.to_string(),
                organization: education.institution.clone(),
                date: education.graduation_year.to_string(),
                description: format!(
                    "Academic honor received during {} in {}",
                    education.degree.key(),
                    education.field_of_study
                ),
                scope: AwardScope::National,
                significance: format!(
                    "Recognized for academic excellence at {}",
                    education.institution
                ),
                evidence: None,
            });
        }

        drafts
    }

    fn into_batches(self) -> [(Criterion, Vec<CriterionEntry>); 4] {
        fn convert<T: Into<CriterionEntry>>(entries: Vec<T>) -> Vec<CriterionEntry> {
            entries.into_iter().map(Into::into).collect()
        }

        [
            (Criterion::CriticalEmployment, convert(self.critical_employment)),
            (Criterion::Remuneration, convert(self.remuneration)),
            (Criterion::Authorship, convert(self.authorship)),
            (Criterion::Awards, convert(self.awards)),
        ]
    }
}

/// Seed each empty target criterion with its drafts. Returns the criteria that changed.
pub fn populate_from_intake(
    board: &mut CriteriaBoard,
    intake: &IntakeData,
    current_year: i32,
) -> Vec<Criterion> {
    let drafts = GeneratedDrafts::from_intake(intake, current_year);
    let mut seeded = Vec::new();

    for (criterion, entries) in drafts.into_batches() {
        let count = entries.len();
        if board.seed_if_empty(criterion, entries) {
            info!(%criterion, drafts = count, "seeded criterion from intake");
            seeded.push(criterion);
        }
    }

    seeded
}

fn critical_nature(employment: &EmploymentHistoryEntry) -> String {
    let company = &employment.company;
    let mut parts = Vec::new();

    match employment.company_reputation {
        Some(CompanyReputation::Fortune500) => {
            parts.push(format!("Held critical role at Fortune 500 company {company}."))
        }
        Some(CompanyReputation::IndustryLeader) => parts.push(format!(
            "Served in essential capacity at industry-leading organization {company}."
        )),
        Some(CompanyReputation::Established) => {
            parts.push(format!("Key contributor at established company {company}."))
        }
        Some(CompanyReputation::Startup) | None => {}
    }

    match employment.employee_count {
        Some(EmployeeCount::Enterprise) => {
            parts.push("Organization employs 5000+ employees globally.".to_string())
        }
        Some(EmployeeCount::Large) => {
            parts.push("Organization employs 500-5000 employees.".to_string())
        }
        _ => {}
    }

    if let Some(achievements) = employment
        .achievements
        .as_deref()
        .filter(|text| !text.trim().is_empty())
    {
        parts.push(format!("Key achievements: {achievements}"));
    }

    if parts.is_empty() {
        return format!(
            "Served as {} with responsibilities including: {}",
            employment.role, employment.responsibilities
        );
    }

    parts.join(" ")
}

fn remuneration_placeholder(
    employment: &EmploymentHistoryEntry,
    reputation: CompanyReputation,
    current_year: i32,
) -> RemunerationEntry {
    let tier = match reputation {
        CompanyReputation::Fortune500 => "Fortune 500",
        _ => "industry-leading",
    };
    let year = employment
        .end_date
        .as_deref()
        .and_then(|date| date.split('-').next())
        .and_then(|year| year.trim().parse::<i32>().ok())
        .unwrap_or(current_year);

    RemunerationEntry {
        id: EntryId::generate(),
        company: employment.company.clone(),
        position: employment.role.clone(),
        work_location: String::new(),
        salary: 0,
        currency: DEFAULT_CURRENCY.to_string(),
        year,
        comparative_data: format!(
            "Position at {tier} company {}. Please add salary data and comparative market data.",
            employment.company
        ),
        paystub_evidence: None,
        equity_evidence: None,
    }
}
