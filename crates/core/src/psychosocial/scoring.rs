use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::slice;

use super::psychosocial_model::{
    is_valid_likert, AggregateAnalysis, CopsoqDimension, DimensionDefinition, DimensionScore,
    IndividualReport, OverallRisk, QuestionResponse, ResponseSubmission, RiskLevel,
};

/// Scores one dimension over a set of responses.
///
/// Sums every answer a response gives to a question of `dimension` and divides
/// by the number of answers actually present, across all responses. Questions
/// a respondent skipped are excluded, not imputed. With no answers at all the
/// average is 0.
///
/// Scores outside 0..=4 are summed as given and logged.
pub fn score_dimension(
    responses: &[QuestionResponse],
    dimension: &DimensionDefinition,
) -> DimensionScore {
    let mut total: i64 = 0;
    let mut count: u64 = 0;

    for response in responses {
        for question_id in dimension.question_ids() {
            if let Some(score) = response.get(question_id) {
                if !is_valid_likert(score) {
                    warn!(
                        "Score {} for question {} is outside the 0-4 scale; included as given",
                        score, question_id
                    );
                }
                total += i64::from(score);
                count += 1;
            }
        }
    }

    let average_score = if count > 0 {
        Decimal::from(total) / Decimal::from(count)
    } else {
        Decimal::ZERO
    };

    DimensionScore {
        dimension: dimension.dimension,
        average_score,
        risk_level: RiskLevel::from_score(average_score),
        answered_count: count,
    }
}

/// Scores every dimension over a set of responses.
fn score_dimensions(
    responses: &[QuestionResponse],
    dimensions: &[DimensionDefinition],
) -> BTreeMap<CopsoqDimension, DimensionScore> {
    dimensions
        .iter()
        .map(|definition| {
            (
                definition.dimension,
                score_dimension(responses, definition),
            )
        })
        .collect()
}

/// Aggregates a cohort of responses into dimension scores and an overall risk.
///
/// `overall_score` is the unweighted mean of the dimension averages, so each
/// dimension carries equal weight regardless of its question count. With no
/// responses the result is [`AggregateAnalysis::no_data`].
pub fn aggregate(
    responses: &[QuestionResponse],
    dimensions: &[DimensionDefinition],
) -> AggregateAnalysis {
    if responses.is_empty() {
        debug!("No responses to aggregate");
        return AggregateAnalysis::no_data();
    }

    let dimension_scores = score_dimensions(responses, dimensions);

    let overall_score = if dimension_scores.is_empty() {
        Decimal::ZERO
    } else {
        let sum: Decimal = dimension_scores.values().map(|s| s.average_score).sum();
        sum / Decimal::from(dimension_scores.len())
    };
    let overall_risk = OverallRisk::from(RiskLevel::from_score(overall_score));

    debug!(
        "Aggregated {} responses over {} dimensions: overall_score={} overall_risk={}",
        responses.len(),
        dimension_scores.len(),
        overall_score,
        overall_risk
    );

    AggregateAnalysis {
        total_responses: responses.len(),
        dimension_scores,
        overall_score,
        overall_risk,
    }
}

/// Aggregates only the submissions that belong to `questionnaire_id`.
pub fn aggregate_for_questionnaire(
    submissions: &[ResponseSubmission],
    questionnaire_id: &str,
    dimensions: &[DimensionDefinition],
) -> AggregateAnalysis {
    let responses: Vec<QuestionResponse> = submissions
        .iter()
        .filter(|s| s.questionnaire_id == questionnaire_id)
        .map(|s| s.responses.clone())
        .collect();

    debug!(
        "Questionnaire {}: {} of {} submissions selected",
        questionnaire_id,
        responses.len(),
        submissions.len()
    );

    aggregate(&responses, dimensions)
}

/// Scores each dimension for a single respondent.
pub fn score_individual(
    response: &QuestionResponse,
    dimensions: &[DimensionDefinition],
) -> BTreeMap<CopsoqDimension, DimensionScore> {
    score_dimensions(slice::from_ref(response), dimensions)
}

/// Builds the per-respondent report: dimension scores plus the raw answers.
pub fn build_individual_report(
    response: &QuestionResponse,
    dimensions: &[DimensionDefinition],
) -> IndividualReport {
    IndividualReport {
        dimensions: score_individual(response, dimensions),
        responses: response.clone(),
    }
}
