use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::workflows::onboarding::domain::CategoryScores;
use crate::workflows::onboarding::validation::FREE_EMAIL_RISK_DOMAINS;

/// Named scoring rubrics shipped with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringPreset {
    Full,
    Simplified,
}

impl ScoringPreset {
    pub const fn label(self) -> &'static str {
        match self {
            ScoringPreset::Full => "full",
            ScoringPreset::Simplified => "simplified",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown scoring preset '{0}', expected 'full' or 'simplified'")]
pub struct UnknownPresetError(pub String);

impl FromStr for ScoringPreset {
    type Err = UnknownPresetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(ScoringPreset::Full),
            "simplified" => Ok(ScoringPreset::Simplified),
            other => Err(UnknownPresetError(other.to_string())),
        }
    }
}

/// Per-category aggregation weights. Each preset's weights sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWeights {
    pub business_profile: f64,
    pub documentation: f64,
    pub payment_method: f64,
    pub contact_info: f64,
    pub risk_factors: f64,
}

impl CategoryWeights {
    pub const fn full() -> Self {
        Self {
            business_profile: 0.25,
            documentation: 0.25,
            payment_method: 0.20,
            contact_info: 0.15,
            risk_factors: 0.15,
        }
    }

    pub const fn simplified() -> Self {
        Self {
            business_profile: 0.25,
            documentation: 0.20,
            payment_method: 0.25,
            contact_info: 0.20,
            risk_factors: 0.10,
        }
    }

    pub fn total(&self) -> f64 {
        self.business_profile
            + self.documentation
            + self.payment_method
            + self.contact_info
            + self.risk_factors
    }

    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() < 1e-9
    }

    pub fn weighted_total(&self, scores: &CategoryScores) -> f64 {
        scores.business_profile * self.business_profile
            + scores.documentation * self.documentation
            + scores.payment_method * self.payment_method
            + scores.contact_info * self.contact_info
            + scores.risk_factors * self.risk_factors
    }
}

/// A category emits recommendations only while its raw score sits strictly
/// below its threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    pub business_profile: f64,
    pub contact_info: f64,
    pub payment_method: f64,
    pub documentation: f64,
    pub risk_factors: f64,
}

impl RecommendationThresholds {
    pub const fn full() -> Self {
        Self {
            business_profile: 0.8,
            contact_info: 0.9,
            payment_method: 0.7,
            documentation: 0.8,
            risk_factors: 0.8,
        }
    }

    pub const fn simplified() -> Self {
        Self {
            business_profile: 0.9,
            contact_info: 0.9,
            payment_method: 0.8,
            documentation: 0.8,
            risk_factors: 0.8,
        }
    }
}

/// How the business-profile category is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessProfileRule {
    /// Points out of ten with gated description, founding-year, and headcount checks.
    WeightedFields,
    /// Fraction of the six core intake fields present.
    PresenceOnly,
}

/// How the payment-method category is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodRule {
    /// Type base plus verification and inverted issuer-risk adjustments, clamped.
    RiskAdjusted,
    /// Direct instrument-type-to-score tiers, no adjustments.
    TypeTier,
}

/// How the contact-information category is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactInfoRule {
    /// Fraction of eight contact fields present.
    FieldCoverage,
    /// Email presence plus business-domain bonus plus phone presence.
    EmailQuality,
}

/// How the risk-factors category is scored.
///
/// `Constant` reproduces the simplified rubric exactly: the category is a
/// fixed placeholder never derived from findings. Swapping the default to
/// `Evaluated` would silently change every simplified score, so operators opt
/// in through a custom config instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorRule {
    /// Penalize the caller-supplied findings by severity.
    FindingPenalty,
    /// Fixed placeholder of 1.0.
    Constant,
    /// Run the risk screen over the raw inputs and penalize its findings.
    Evaluated,
}

/// Message style used by the recommendation generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationStyle {
    /// One fixed message per firing category.
    Generic,
    /// Targeted missing-field messages plus positive reinforcement.
    Detailed,
}

/// Complete rubric injected into the engine. Preset constructors cover the
/// two shipped rubrics; custom configs are fair game for operators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: CategoryWeights,
    pub thresholds: RecommendationThresholds,
    pub business_profile_rule: BusinessProfileRule,
    pub payment_method_rule: PaymentMethodRule,
    pub contact_info_rule: ContactInfoRule,
    pub risk_factor_rule: RiskFactorRule,
    pub recommendation_style: RecommendationStyle,
    /// Domains treated as free providers by the contact rubric and detailed
    /// recommendations. Independent of the validation module's wider list.
    pub free_email_providers: Vec<String>,
}

fn default_free_email_providers() -> Vec<String> {
    FREE_EMAIL_RISK_DOMAINS
        .iter()
        .map(|domain| domain.to_string())
        .collect()
}

impl ScoringConfig {
    pub fn full() -> Self {
        Self {
            weights: CategoryWeights::full(),
            thresholds: RecommendationThresholds::full(),
            business_profile_rule: BusinessProfileRule::WeightedFields,
            payment_method_rule: PaymentMethodRule::RiskAdjusted,
            contact_info_rule: ContactInfoRule::FieldCoverage,
            risk_factor_rule: RiskFactorRule::FindingPenalty,
            recommendation_style: RecommendationStyle::Generic,
            free_email_providers: default_free_email_providers(),
        }
    }

    pub fn simplified() -> Self {
        Self {
            weights: CategoryWeights::simplified(),
            thresholds: RecommendationThresholds::simplified(),
            business_profile_rule: BusinessProfileRule::PresenceOnly,
            payment_method_rule: PaymentMethodRule::TypeTier,
            contact_info_rule: ContactInfoRule::EmailQuality,
            risk_factor_rule: RiskFactorRule::Constant,
            recommendation_style: RecommendationStyle::Detailed,
            free_email_providers: default_free_email_providers(),
        }
    }

    pub fn for_preset(preset: ScoringPreset) -> Self {
        match preset {
            ScoringPreset::Full => Self::full(),
            ScoringPreset::Simplified => Self::simplified(),
        }
    }
}
