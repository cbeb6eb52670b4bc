mod analysis;
mod document;

pub use analysis::{AnalysisReport, KeyClause, RiskBenefit, RiskBenefitKind};
pub use document::{Document, DocumentId};
