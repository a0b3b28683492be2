//! Readiness scoring engine: category scorers, weighted aggregation, and
//! recommendation generation behind an injected rubric configuration.

pub(crate) mod categories;
mod config;
pub(crate) mod recommend;

pub use config::{
    BusinessProfileRule, CategoryWeights, ContactInfoRule, PaymentMethodRule, RecommendationStyle,
    RecommendationThresholds, RiskFactorRule, ScoringConfig, ScoringPreset, UnknownPresetError,
};

use chrono::NaiveDate;

use super::domain::{CategoryScores, OnboardingApplication, ReadinessScore};
use super::risk::{RiskEvaluator, RiskRules};

/// Stateless engine applying one rubric configuration to applications.
///
/// The as-of date passed to [`score`](Self::score) anchors the founding-year
/// check so identical inputs always produce identical output.
pub struct ReadinessEngine {
    config: ScoringConfig,
    risk_evaluator: RiskEvaluator,
}

impl ReadinessEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_risk_rules(config, RiskRules::default())
    }

    /// Build an engine whose `Evaluated` risk rule runs with the given rules.
    pub fn with_risk_rules(config: ScoringConfig, rules: RiskRules) -> Self {
        debug_assert!(
            config.weights.is_normalized(),
            "category weights must sum to 1.0"
        );

        Self {
            config,
            risk_evaluator: RiskEvaluator::new(rules),
        }
    }

    pub fn for_preset(preset: ScoringPreset) -> Self {
        Self::new(ScoringConfig::for_preset(preset))
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, application: &OnboardingApplication, as_of: NaiveDate) -> ReadinessScore {
        let raw = CategoryScores {
            business_profile: categories::business_profile_score(
                &application.business_profile,
                self.config.business_profile_rule,
                as_of,
            ),
            documentation: categories::documentation_score(&application.documents),
            payment_method: categories::payment_method_score(
                &application.payment_method,
                self.config.payment_method_rule,
            ),
            contact_info: categories::contact_info_score(
                &application.contact_info,
                self.config.contact_info_rule,
                &self.config.free_email_providers,
            ),
            risk_factors: match self.config.risk_factor_rule {
                RiskFactorRule::FindingPenalty => {
                    categories::risk_factor_score(&application.risk_factors)
                }
                RiskFactorRule::Constant => 1.0,
                RiskFactorRule::Evaluated => {
                    categories::risk_factor_score(&self.risk_evaluator.evaluate(application))
                }
            },
        };

        let overall = self.config.weights.weighted_total(&raw);

        // Thresholds compare against raw values; rounding happens only on the
        // way out.
        let recommendations = recommend::generate(application, &raw, overall, &self.config);

        ReadinessScore {
            overall: round2(overall),
            categories: CategoryScores {
                business_profile: round2(raw.business_profile),
                documentation: round2(raw.documentation),
                payment_method: round2(raw.payment_method),
                contact_info: round2(raw.contact_info),
                risk_factors: round2(raw.risk_factors),
            },
            recommendations,
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
