//! Business account onboarding: readiness scoring and risk screening.
//!
//! The engine is pure over its explicit inputs; all persistence, auth, and
//! document handling belong to surrounding collaborators.

pub mod domain;
pub mod risk;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Address, BusinessProfile, BusinessType, CategoryScores, ContactInformation, ContactPerson,
    Document, DocumentKind, DocumentStatus, OnboardingApplication, PaymentMethod,
    PaymentMethodKind, ReadinessScore, RiskFactor, RiskFactorKind, RiskSeverity, ScoreBand,
};
pub use risk::{RiskEvaluator, RiskRules};
pub use router::{scoring_router, ScoreRequest};
pub use scoring::{
    BusinessProfileRule, CategoryWeights, ContactInfoRule, PaymentMethodRule, ReadinessEngine,
    RecommendationStyle, RecommendationThresholds, RiskFactorRule, ScoringConfig, ScoringPreset,
    UnknownPresetError,
};
pub use service::ReadinessService;
