use super::common::*;
use crate::workflows::onboarding::domain::{
    OnboardingApplication, PaymentMethodKind, RiskFactorKind, RiskSeverity,
};
use crate::workflows::onboarding::risk::{RiskEvaluator, RiskRules};

fn risky_application() -> OnboardingApplication {
    let mut application = OnboardingApplication::default();
    application.contact_info.primary_email = Some("a@gmail.com".to_string());
    application.payment_method.kind = Some(PaymentMethodKind::Prepaid);
    application
}

#[test]
fn emits_three_ordered_findings_for_risky_application() {
    let findings = RiskEvaluator::default().evaluate(&risky_application());

    assert_eq!(findings.len(), 3);

    assert_eq!(findings[0].kind, RiskFactorKind::FreeEmail);
    assert_eq!(findings[0].severity, RiskSeverity::Medium);
    assert_eq!(
        findings[0].description,
        "Using free email provider for business account"
    );
    assert_eq!(
        findings[0].recommendation,
        "Use a professional email address with your business domain"
    );

    assert_eq!(findings[1].kind, RiskFactorKind::WeakPayment);
    assert_eq!(findings[1].severity, RiskSeverity::High);
    assert_eq!(
        findings[1].description,
        "Using prepaid card for business account"
    );
    assert_eq!(
        findings[1].recommendation,
        "Use a business credit or debit card instead"
    );

    assert_eq!(findings[2].kind, RiskFactorKind::IncompleteProfile);
    assert_eq!(findings[2].severity, RiskSeverity::Medium);
    assert_eq!(
        findings[2].description,
        "Missing required business information: companyName, businessType, taxId, website"
    );
    assert_eq!(
        findings[2].recommendation,
        "Complete all required business profile fields"
    );
}

#[test]
fn matches_free_provider_domains_case_insensitively() {
    let mut application = risky_application();
    application.contact_info.primary_email = Some("A@GMAIL.COM".to_string());

    let findings = RiskEvaluator::default().evaluate(&application);

    assert_eq!(findings[0].kind, RiskFactorKind::FreeEmail);
}

#[test]
fn skips_email_finding_without_parseable_domain() {
    let mut application = OnboardingApplication::default();
    application.contact_info.primary_email = Some("not-an-email".to_string());
    application.business_profile = strong_profile();
    application.payment_method = business_credit_payment();

    let findings = RiskEvaluator::default().evaluate(&application);

    assert!(findings.is_empty());
}

#[test]
fn names_only_the_missing_required_fields() {
    let mut application = OnboardingApplication::default();
    application.business_profile.company_name = Some("Test Company LLC".to_string());
    application.business_profile.tax_id = Some("12-3456789".to_string());

    let findings = RiskEvaluator::default().evaluate(&application);

    assert_eq!(findings.len(), 1);
    assert_eq!(
        findings[0].description,
        "Missing required business information: businessType, website"
    );
}

#[test]
fn clean_application_yields_no_findings() {
    let findings = RiskEvaluator::default().evaluate(&strong_application());
    assert!(findings.is_empty());
}

#[test]
fn custom_rules_replace_the_provider_list() {
    let rules = RiskRules {
        free_email_providers: vec!["example.net".to_string()],
    };
    let evaluator = RiskEvaluator::new(rules);

    let mut application = strong_application();
    application.contact_info.primary_email = Some("ops@example.net".to_string());
    let findings = evaluator.evaluate(&application);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].kind, RiskFactorKind::FreeEmail);

    // gmail is no longer on the custom list.
    application.contact_info.primary_email = Some("ops@gmail.com".to_string());
    assert!(evaluator.evaluate(&application).is_empty());
}
