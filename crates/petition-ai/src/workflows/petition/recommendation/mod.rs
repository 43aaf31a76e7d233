mod rules;
mod strengths;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Criterion;
use super::intake::IntakeData;
use rules::{score_connections, score_education, score_employment, ScoreBoard};
use strengths::primary_strengths;

/// Scores at or above this value group a criterion as recommended.
pub const RECOMMENDED_SCORE_THRESHOLD: u8 = 30;
pub const MAX_SCORE: u8 = 100;
pub const DEFAULT_TOP_COUNT: usize = 3;

pub(crate) const NO_SIGNAL_REASONING: &str =
    "No strong signals detected for this criterion based on provided information.";

/// Relevance estimate for one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionRecommendation {
    pub criterion: Criterion,
    pub score: u8,
    pub reasoning: String,
    pub suggested_evidence: Vec<String>,
}

impl CriterionRecommendation {
    pub fn is_recommended(&self) -> bool {
        self.score >= RECOMMENDED_SCORE_THRESHOLD
    }
}

/// Ranked recommendations, highest score first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommended_criteria: Vec<CriterionRecommendation>,
    pub primary_strengths: Vec<String>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResult {
    pub fn top(&self, count: usize) -> &[CriterionRecommendation] {
        let end = count.min(self.recommended_criteria.len());
        &self.recommended_criteria[..end]
    }

    pub fn get(&self, criterion: Criterion) -> Option<&CriterionRecommendation> {
        self.recommended_criteria
            .iter()
            .find(|recommendation| recommendation.criterion == criterion)
    }

    pub fn score_for(&self, criterion: Criterion) -> u8 {
        self.get(criterion).map_or(0, |recommendation| recommendation.score)
    }

    pub fn is_recommended(&self, criterion: Criterion) -> bool {
        self.get(criterion)
            .is_some_and(CriterionRecommendation::is_recommended)
    }

    /// Split into (recommended, other) keeping rank order.
    pub fn partition(&self) -> (Vec<&CriterionRecommendation>, Vec<&CriterionRecommendation>) {
        self.recommended_criteria
            .iter()
            .partition(|recommendation| recommendation.is_recommended())
    }
}

/// Score the intake, stamping the result with the current time.
pub fn generate_recommendations(intake: &IntakeData) -> RecommendationResult {
    generate_recommendations_at(intake, Utc::now())
}

/// Deterministic scoring: identical intake always yields identical criteria and strengths.
pub fn generate_recommendations_at(
    intake: &IntakeData,
    generated_at: DateTime<Utc>,
) -> RecommendationResult {
    let mut board = ScoreBoard::default();
    score_employment(&mut board, &intake.employment_history);
    score_education(&mut board, &intake.education_history);
    score_connections(&mut board, &intake.professional_connections);

    let mut recommended_criteria: Vec<CriterionRecommendation> = board
        .into_ordered()
        .into_iter()
        .map(|(criterion, accumulator)| {
            let score = accumulator.score.min(u32::from(MAX_SCORE)) as u8;
            let reasoning = if accumulator.reasons.is_empty() {
                NO_SIGNAL_REASONING.to_string()
            } else {
                accumulator.reasons.join(". ")
            };
            CriterionRecommendation {
                criterion,
                score,
                reasoning,
                suggested_evidence: accumulator.evidence,
            }
        })
        .collect();

    // stable: ties keep declaration order
    recommended_criteria.sort_by(|left, right| right.score.cmp(&left.score));

    RecommendationResult {
        recommended_criteria,
        primary_strengths: primary_strengths(intake),
        generated_at,
    }
}
