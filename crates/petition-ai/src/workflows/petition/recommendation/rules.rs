use std::collections::BTreeMap;

use super::super::domain::Criterion;
use super::super::intake::{
    CompanyReputation, Degree, EducationHistoryEntry, EmployeeCount, EmploymentHistoryEntry,
    ProfessionalConnectionEntry,
};

/// Case-insensitive substrings that mark a role title as leadership.
pub(crate) const LEADERSHIP_TITLES: [&str; 18] = [
    "vp",
    "vice president",
    "director",
    "lead",
    "head",
    "chief",
    "cto",
    "ceo",
    "cfo",
    "coo",
    "founder",
    "co-founder",
    "partner",
    "principal",
    "senior director",
    "executive",
    "president",
    "manager",
];

const PUBLICATION_POINTS: u32 = 15;
const PUBLICATION_CAP: u32 = 45;
const REFERENCE_BOOST: u32 = 5;

pub(crate) fn is_leadership_role(role: &str) -> bool {
    let role = role.to_lowercase();
    LEADERSHIP_TITLES.iter().any(|title| role.contains(title))
}

fn longer_than(text: Option<&str>, limit: usize) -> bool {
    text.is_some_and(|text| text.chars().count() > limit)
}

/// Running total for one criterion.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ScoreAccumulator {
    pub score: u32,
    pub reasons: Vec<String>,
    pub evidence: Vec<String>,
}

/// Additive accumulators for all eight criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreBoard {
    scores: BTreeMap<Criterion, ScoreAccumulator>,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        let scores = Criterion::ordered()
            .into_iter()
            .map(|criterion| (criterion, ScoreAccumulator::default()))
            .collect();
        Self { scores }
    }
}

impl ScoreBoard {
    fn slot(&mut self, criterion: Criterion) -> &mut ScoreAccumulator {
        self.scores.entry(criterion).or_default()
    }

    fn award(&mut self, criterion: Criterion, points: u32, reason: String, evidence: Option<String>) {
        let slot = self.slot(criterion);
        slot.score += points;
        slot.reasons.push(reason);
        if let Some(evidence) = evidence {
            slot.evidence.push(evidence);
        }
    }

    fn note(&mut self, criterion: Criterion, reason: String, evidence: Option<String>) {
        self.award(criterion, 0, reason, evidence);
    }

    fn boost_all(&mut self, points: u32) {
        for criterion in Criterion::ordered() {
            self.slot(criterion).score += points;
        }
    }

    pub fn into_ordered(self) -> Vec<(Criterion, ScoreAccumulator)> {
        let mut scores = self.scores;
        Criterion::ordered()
            .into_iter()
            .map(|criterion| (criterion, scores.remove(&criterion).unwrap_or_default()))
            .collect()
    }
}

pub(crate) fn score_employment(board: &mut ScoreBoard, entries: &[EmploymentHistoryEntry]) {
    for entry in entries {
        let company = &entry.company;

        match entry.company_reputation {
            Some(CompanyReputation::Fortune500) => {
                board.award(
                    Criterion::CriticalEmployment,
                    30,
                    format!("Employment at Fortune 500 company: {company}"),
                    Some(format!("Document your role and achievements at {company}")),
                );
                board.award(
                    Criterion::Remuneration,
                    30,
                    format!("Fortune 500 compensation typically high at {company}"),
                    Some(format!("Gather pay stubs or offer letters from {company}")),
                );
            }
            Some(CompanyReputation::IndustryLeader) => {
                board.award(
                    Criterion::CriticalEmployment,
                    25,
                    format!("Employment at industry-leading company: {company}"),
                    Some(format!("Document your critical role at {company}")),
                );
                board.award(
                    Criterion::Remuneration,
                    20,
                    format!("Industry leader compensation at {company}"),
                    None,
                );
            }
            _ => {}
        }

        if is_leadership_role(&entry.role) {
            board.award(
                Criterion::CriticalEmployment,
                25,
                format!("Leadership position as {}", entry.role),
                Some(format!(
                    "Get org charts and letters confirming your {} responsibilities",
                    entry.role
                )),
            );
        }

        match entry.employee_count {
            Some(EmployeeCount::Enterprise) => board.award(
                Criterion::CriticalEmployment,
                15,
                format!("Role at enterprise-scale organization ({company})"),
                None,
            ),
            Some(EmployeeCount::Large) => board.award(
                Criterion::CriticalEmployment,
                10,
                format!("Role at large organization ({company})"),
                None,
            ),
            _ => {}
        }

        if longer_than(entry.achievements.as_deref(), 50) {
            board.award(
                Criterion::Contributions,
                15,
                format!("Notable achievements at {company}"),
                Some(format!(
                    "Document the impact and recognition of your achievements at {company}"
                )),
            );
            board.award(
                Criterion::Awards,
                10,
                format!("Achievements may include recognitions at {company}"),
                Some(format!(
                    "List any awards or recognitions received during your time at {company}"
                )),
            );
        }
    }
}

pub(crate) fn score_education(board: &mut ScoreBoard, entries: &[EducationHistoryEntry]) {
    for entry in entries {
        let institution = &entry.institution;

        match entry.degree {
            Degree::Doctorate => {
                board.award(
                    Criterion::Authorship,
                    25,
                    format!(
                        "Doctorate in {} typically involves publications",
                        entry.field_of_study
                    ),
                    Some(format!(
                        "Gather your dissertation and any published papers from {institution}"
                    )),
                );
                board.award(
                    Criterion::Judging,
                    25,
                    "PhD graduates often serve as peer reviewers".to_string(),
                    Some("Document any peer review experience from your academic career".to_string()),
                );
                board.award(
                    Criterion::Contributions,
                    25,
                    "Doctoral research represents original contributions".to_string(),
                    Some("Describe the significance of your doctoral research".to_string()),
                );
            }
            Degree::Masters => {
                board.award(
                    Criterion::Authorship,
                    10,
                    "Masters degree may include thesis work".to_string(),
                    Some("Include your thesis if published".to_string()),
                );
                board.award(
                    Criterion::Contributions,
                    10,
                    "Masters research may have contributions".to_string(),
                    None,
                );
            }
            _ => {}
        }

        if let Some(publications) = entry.publications.filter(|count| *count > 0) {
            let points = publications
                .saturating_mul(PUBLICATION_POINTS)
                .min(PUBLICATION_CAP);
            board.award(
                Criterion::Authorship,
                points,
                format!("{publications} publication(s) during education at {institution}"),
                Some("Compile all academic publications with citation counts".to_string()),
            );
        }

        if let Some(honors) = entry.honors.as_deref().filter(|honors| !honors.is_empty()) {
            board.award(
                Criterion::Awards,
                15,
                format!("Academic honors: {honors}"),
                Some(format!("Document your {honors} with official certificates")),
            );
        }

        if longer_than(entry.research_focus.as_deref(), 20) {
            board.award(
                Criterion::Contributions,
                15,
                format!("Research focus in {}", entry.field_of_study),
                Some("Describe the impact of your research on the field".to_string()),
            );
        }

        if entry.advisor_notable {
            board.award(
                Criterion::Membership,
                10,
                format!("Worked with notable advisor at {institution}"),
                Some("Get a recommendation letter from your advisor".to_string()),
            );
        }
    }
}

pub(crate) fn score_connections(board: &mut ScoreBoard, entries: &[ProfessionalConnectionEntry]) {
    for entry in entries {
        let name = &entry.name;

        if entry.can_provide_reference {
            board.boost_all(REFERENCE_BOOST);
            board.note(
                Criterion::Membership,
                format!(
                    "{name} ({}) can provide reference letter",
                    entry.relationship.key()
                ),
                Some(format!("Request a detailed recommendation letter from {name}")),
            );
        }

        if longer_than(entry.field_relevance.as_deref(), 10) {
            board.award(
                Criterion::Membership,
                5,
                format!("{name} has relevant expertise in your field"),
                None,
            );
        }

        if longer_than(entry.professional_achievements.as_deref(), 20) {
            board.award(
                Criterion::PublishedMaterial,
                5,
                format!("Professional network includes {name} with notable achievements"),
                None,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leadership_detection_is_case_insensitive_substring() {
        assert!(is_leadership_role("VP of Engineering"));
        assert!(is_leadership_role("Engineering Manager"));
        assert!(is_leadership_role("Team LEAD"));
        assert!(!is_leadership_role("Software Engineer"));
    }

    #[test]
    fn length_checks_count_characters() {
        assert!(!longer_than(Some("0123456789"), 10));
        assert!(longer_than(Some("0123456789a"), 10));
        assert!(!longer_than(None, 0));
    }

    #[test]
    fn boost_touches_every_criterion() {
        let mut board = ScoreBoard::default();
        board.boost_all(5);
        assert!(board
            .into_ordered()
            .iter()
            .all(|(_, accumulator)| accumulator.score == 5 && accumulator.reasons.is_empty()));
    }
}
