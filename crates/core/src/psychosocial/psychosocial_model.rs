//! Psychosocial questionnaire domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{HIGH_RISK_THRESHOLD, LIKERT_MAX, LIKERT_MIN, MEDIUM_RISK_THRESHOLD};

// =============================================================================
// Dimensions
// =============================================================================

/// The seven COPSOQ II psychosocial dimensions.
///
/// Declaration order is the report order; `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopsoqDimension {
    /// Exigências no Trabalho
    Demands,
    /// Organização do Trabalho
    Organization,
    /// Relações Sociais e Liderança
    SocialRelations,
    /// Interface Trabalho-Indivíduo
    WorkIndividual,
    /// Valores no Local de Trabalho
    Values,
    /// Saúde e Bem-estar
    Health,
    /// Comportamentos Ofensivos
    OffensiveBehaviors,
}

impl CopsoqDimension {
    pub const ALL: [CopsoqDimension; 7] = [
        CopsoqDimension::Demands,
        CopsoqDimension::Organization,
        CopsoqDimension::SocialRelations,
        CopsoqDimension::WorkIndividual,
        CopsoqDimension::Values,
        CopsoqDimension::Health,
        CopsoqDimension::OffensiveBehaviors,
    ];

    /// Returns the wire name of this dimension.
    pub fn as_str(&self) -> &'static str {
        match self {
            CopsoqDimension::Demands => "demands",
            CopsoqDimension::Organization => "organization",
            CopsoqDimension::SocialRelations => "social_relations",
            CopsoqDimension::WorkIndividual => "work_individual",
            CopsoqDimension::Values => "values",
            CopsoqDimension::Health => "health",
            CopsoqDimension::OffensiveBehaviors => "offensive_behaviors",
        }
    }
}

impl std::fmt::Display for CopsoqDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Questions that make up one dimension.
///
/// `question_ids` is an ordered set: every constructor, deserialization
/// included, drops repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "DimensionDefinitionInput")]
pub struct DimensionDefinition {
    pub dimension: CopsoqDimension,
    question_ids: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DimensionDefinitionInput {
    dimension: CopsoqDimension,
    question_ids: Vec<String>,
}

impl From<DimensionDefinitionInput> for DimensionDefinition {
    fn from(input: DimensionDefinitionInput) -> Self {
        Self::new(input.dimension, input.question_ids)
    }
}

impl DimensionDefinition {
    /// Builds a definition, dropping repeated question ids (first occurrence wins).
    pub fn new<I, S>(dimension: CopsoqDimension, question_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids: Vec<String> = Vec::new();
        for id in question_ids {
            let id = id.into();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self {
            dimension,
            question_ids: ids,
        }
    }

    pub fn question_ids(&self) -> &[String] {
        &self.question_ids
    }
}

// =============================================================================
// Responses
// =============================================================================

/// One respondent's answers: question id to Likert score.
///
/// Scores are expected in 0..=4 but are stored as given; range checks belong
/// to the submission boundary. Iteration and serialization follow question id
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionResponse(BTreeMap<String, i32>);

impl QuestionResponse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, question_id: impl Into<String>, score: i32) -> Option<i32> {
        self.0.insert(question_id.into(), score)
    }

    pub fn get(&self, question_id: &str) -> Option<i32> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(id, score)| (id.as_str(), *score))
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for QuestionResponse {
    fn from_iter<T: IntoIterator<Item = (S, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, score)| (id.into(), score)).collect())
    }
}

/// Returns true when a score lies on the 0..=4 Likert scale.
pub fn is_valid_likert(score: i32) -> bool {
    (LIKERT_MIN..=LIKERT_MAX).contains(&score)
}

/// A submitted questionnaire answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseSubmission {
    pub questionnaire_id: String,
    pub responses: QuestionResponse,
}

// =============================================================================
// Risk classification
// =============================================================================

/// Risk band of an average Likert score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Classifies an average score. Lower bounds are inclusive:
    /// `>= 3` is high, `>= 2` is medium, anything else is low.
    pub fn from_score(score: Decimal) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall questionnaire risk; `NoData` when nobody has answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallRisk {
    Low,
    Medium,
    High,
    NoData,
}

impl From<RiskLevel> for OverallRisk {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => OverallRisk::Low,
            RiskLevel::Medium => OverallRisk::Medium,
            RiskLevel::High => OverallRisk::High,
        }
    }
}

impl OverallRisk {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallRisk::Low => "low",
            OverallRisk::Medium => "medium",
            OverallRisk::High => "high",
            OverallRisk::NoData => "no_data",
        }
    }
}

impl std::fmt::Display for OverallRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Results
// =============================================================================

/// Average score and risk band of one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub dimension: CopsoqDimension,
    /// Mean over the answers actually present; 0 when there are none.
    pub average_score: Decimal,
    #[serde(rename = "risk")]
    pub risk_level: RiskLevel,
    /// Number of question answers the average was taken over.
    pub answered_count: u64,
}

/// Cohort-level result of a questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateAnalysis {
    pub total_responses: usize,
    #[serde(rename = "dimensions")]
    pub dimension_scores: BTreeMap<CopsoqDimension, DimensionScore>,
    /// Unweighted mean of the dimension averages.
    pub overall_score: Decimal,
    pub overall_risk: OverallRisk,
}

impl AggregateAnalysis {
    pub fn no_data() -> Self {
        Self {
            total_responses: 0,
            dimension_scores: BTreeMap::new(),
            overall_score: Decimal::ZERO,
            overall_risk: OverallRisk::NoData,
        }
    }
}

/// Per-dimension scores of a single respondent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualReport {
    pub dimensions: BTreeMap<CopsoqDimension, DimensionScore>,
    pub responses: QuestionResponse,
}
