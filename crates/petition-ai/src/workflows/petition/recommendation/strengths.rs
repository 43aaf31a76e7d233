use super::super::intake::{Degree, IntakeData};
use super::rules::is_leadership_role;

/// Qualitative findings over the whole intake. These never affect scores.
pub(crate) fn primary_strengths(intake: &IntakeData) -> Vec<String> {
    let mut strengths = Vec::new();

    let has_leadership = intake
        .employment_history
        .iter()
        .any(|entry| is_leadership_role(&entry.role));
    let has_prestigious_employer = intake.employment_history.iter().any(|entry| {
        entry
            .company_reputation
            .is_some_and(|reputation| reputation.is_prestigious())
    });

    match (has_leadership, has_prestigious_employer) {
        (true, true) => strengths.push(
            "Strong employment background with leadership at prestigious organizations".to_string(),
        ),
        (true, false) => {
            strengths.push("Leadership experience demonstrated through senior roles".to_string())
        }
        (false, true) => strengths.push("Employment at well-regarded organizations".to_string()),
        (false, false) => {}
    }

    if intake
        .education_history
        .iter()
        .any(|entry| entry.degree == Degree::Doctorate)
    {
        strengths.push("Advanced doctoral education with research expertise".to_string());
    }

    let publications = intake.total_publications();
    if publications > 2 {
        strengths.push(format!(
            "Publication track record with {publications} publications"
        ));
    }

    if intake
        .professional_connections
        .iter()
        .any(|entry| entry.can_provide_reference)
    {
        strengths.push("Strong professional network with available references".to_string());
    }

    strengths
}
