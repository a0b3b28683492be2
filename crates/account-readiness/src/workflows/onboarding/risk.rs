//! Risk screening over raw application inputs. Findings come out in a fixed
//! order (email, payment, profile completeness); absence of an optional field
//! is the condition under test, never an error.

use super::domain::{
    OnboardingApplication, PaymentMethodKind, RiskFactor, RiskFactorKind, RiskSeverity,
};
use super::validation::{email_domain, is_free_email_domain, FREE_EMAIL_RISK_DOMAINS};

/// Policy dials backing the risk screen.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskRules {
    /// Email domains that trigger the free-email finding. Deliberately
    /// narrower than the validation module's business-email list.
    pub free_email_providers: Vec<String>,
}

impl Default for RiskRules {
    fn default() -> Self {
        Self {
            free_email_providers: FREE_EMAIL_RISK_DOMAINS
                .iter()
                .map(|domain| domain.to_string())
                .collect(),
        }
    }
}

/// Stateless evaluator emitting structured risk findings.
#[derive(Debug, Clone, Default)]
pub struct RiskEvaluator {
    rules: RiskRules,
}

impl RiskEvaluator {
    pub fn new(rules: RiskRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RiskRules {
        &self.rules
    }

    pub fn evaluate(&self, application: &OnboardingApplication) -> Vec<RiskFactor> {
        let mut findings = Vec::new();

        if let Some(email) = application
            .contact_info
            .primary_email
            .as_deref()
            .filter(|e| !e.is_empty())
        {
            if let Some(domain) = email_domain(email) {
                if is_free_email_domain(&domain, &self.rules.free_email_providers) {
                    findings.push(RiskFactor {
                        kind: RiskFactorKind::FreeEmail,
                        severity: RiskSeverity::Medium,
                        description: "Using free email provider for business account".to_string(),
                        recommendation: "Use a professional email address with your business domain"
                            .to_string(),
                    });
                }
            }
        }

        if application.payment_method.kind == Some(PaymentMethodKind::Prepaid) {
            findings.push(RiskFactor {
                kind: RiskFactorKind::WeakPayment,
                severity: RiskSeverity::High,
                description: "Using prepaid card for business account".to_string(),
                recommendation: "Use a business credit or debit card instead".to_string(),
            });
        }

        let missing = application.business_profile.missing_required_fields();
        if !missing.is_empty() {
            findings.push(RiskFactor {
                kind: RiskFactorKind::IncompleteProfile,
                severity: RiskSeverity::Medium,
                description: format!(
                    "Missing required business information: {}",
                    missing.join(", ")
                ),
                recommendation: "Complete all required business profile fields".to_string(),
            });
        }

        findings
    }
}
