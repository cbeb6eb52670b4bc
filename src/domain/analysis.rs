use serde::{Deserialize, Serialize};

/// Structured analysis returned by the model for `/analyze`.
///
/// The model is instructed to emit exactly these three keys; anything else
/// fails deserialization rather than producing a partial result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisReport {
    pub summary: String,
    pub risks_benefits: Vec<RiskBenefit>,
    pub key_clauses: Vec<KeyClause>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskBenefit {
    #[serde(rename = "type")]
    pub kind: RiskBenefitKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBenefitKind {
    Risk,
    Benefit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyClause {
    pub term: String,
    pub definition: String,
}
