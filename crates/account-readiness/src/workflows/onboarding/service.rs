use chrono::NaiveDate;

use super::domain::{OnboardingApplication, ReadinessScore, RiskFactor};
use super::risk::{RiskEvaluator, RiskRules};
use super::scoring::{ReadinessEngine, ScoringConfig, ScoringPreset};

/// Transport-facing facade: one engine per preset sharing the risk rules,
/// plus the standalone risk screen. Immutable after construction, so a single
/// instance serves concurrent requests without locking.
pub struct ReadinessService {
    default_preset: ScoringPreset,
    full: ReadinessEngine,
    simplified: ReadinessEngine,
    risk_evaluator: RiskEvaluator,
}

impl ReadinessService {
    pub fn new(default_preset: ScoringPreset) -> Self {
        Self::with_risk_rules(default_preset, RiskRules::default())
    }

    pub fn with_risk_rules(default_preset: ScoringPreset, rules: RiskRules) -> Self {
        Self {
            default_preset,
            full: ReadinessEngine::with_risk_rules(ScoringConfig::full(), rules.clone()),
            simplified: ReadinessEngine::with_risk_rules(
                ScoringConfig::simplified(),
                rules.clone(),
            ),
            risk_evaluator: RiskEvaluator::new(rules),
        }
    }

    pub fn default_preset(&self) -> ScoringPreset {
        self.default_preset
    }

    pub fn engine(&self, preset: ScoringPreset) -> &ReadinessEngine {
        match preset {
            ScoringPreset::Full => &self.full,
            ScoringPreset::Simplified => &self.simplified,
        }
    }

    /// Score an application, falling back to the configured default preset.
    pub fn score(
        &self,
        application: &OnboardingApplication,
        preset: Option<ScoringPreset>,
        as_of: NaiveDate,
    ) -> ReadinessScore {
        self.engine(preset.unwrap_or(self.default_preset))
            .score(application, as_of)
    }

    /// Run the risk screen over the raw inputs.
    pub fn risk_factors(&self, application: &OnboardingApplication) -> Vec<RiskFactor> {
        self.risk_evaluator.evaluate(application)
    }
}
