use chrono::Datelike;

use super::common::*;
use crate::workflows::onboarding::domain::{
    BusinessProfile, BusinessType, ContactInformation, DocumentKind, DocumentStatus,
    OnboardingApplication, PaymentMethod, PaymentMethodKind, RiskFactor, RiskFactorKind,
    RiskSeverity,
};
use crate::workflows::onboarding::scoring::categories::{
    business_profile_score, contact_info_score, documentation_score, payment_method_score,
    risk_factor_score,
};
use crate::workflows::onboarding::scoring::{
    BusinessProfileRule, ContactInfoRule, PaymentMethodRule, ScoringConfig,
};

fn free_providers() -> Vec<String> {
    ScoringConfig::simplified().free_email_providers
}

fn finding(severity: RiskSeverity) -> RiskFactor {
    RiskFactor {
        kind: RiskFactorKind::VpnUsage,
        severity,
        description: "signal".to_string(),
        recommendation: "remediate".to_string(),
    }
}

#[test]
fn weighted_profile_awards_full_points_for_complete_profile() {
    let score = business_profile_score(
        &strong_profile(),
        BusinessProfileRule::WeightedFields,
        as_of(),
    );
    assert_eq!(score, 1.0);
}

#[test]
fn weighted_profile_gates_short_descriptions() {
    let mut profile = strong_profile();
    profile.description = Some("Short blurb".to_string());

    let score = business_profile_score(&profile, BusinessProfileRule::WeightedFields, as_of());
    assert_eq!(score, 0.9);
}

#[test]
fn weighted_profile_requires_founding_strictly_before_as_of_year() {
    let mut profile = strong_profile();
    profile.founded_year = Some(as_of().year());

    let score = business_profile_score(&profile, BusinessProfileRule::WeightedFields, as_of());
    assert_eq!(score, 0.9);
}

#[test]
fn weighted_profile_ignores_zero_headcount() {
    let mut profile = strong_profile();
    profile.employee_count = Some(0);

    let score = business_profile_score(&profile, BusinessProfileRule::WeightedFields, as_of());
    assert_eq!(score, 0.9);
}

#[test]
fn weighted_profile_counts_tax_id_double() {
    let mut profile = BusinessProfile::default();
    profile.tax_id = Some("12-3456789".to_string());

    let score = business_profile_score(&profile, BusinessProfileRule::WeightedFields, as_of());
    assert_eq!(score, 0.2);
}

#[test]
fn presence_only_profile_counts_core_fields() {
    let mut profile = strong_profile();
    profile.industry = None;
    profile.description = None;
    // Non-core fields do not move the presence score.
    profile.registration_number = None;
    profile.founded_year = None;

    let score = business_profile_score(&profile, BusinessProfileRule::PresenceOnly, as_of());
    assert!((score - 4.0 / 6.0).abs() < 1e-12);
}

#[test]
fn presence_only_counts_unknown_business_types() {
    let mut profile = BusinessProfile::default();
    profile.business_type = Some(BusinessType::Other("cooperative".to_string()));

    let score = business_profile_score(&profile, BusinessProfileRule::PresenceOnly, as_of());
    assert!((score - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn documentation_scores_quarter_per_verified_kind() {
    assert_eq!(documentation_score(&verified_documents()), 0.5);
}

#[test]
fn documentation_ignores_unverified_and_duplicate_documents() {
    let mut documents = verified_documents();
    // Duplicate of an already-verified kind counts once.
    documents.push(verified_document("doc_3", DocumentKind::BusinessLicense));
    // Pending and rejected uploads never count.
    let mut pending = verified_document("doc_4", DocumentKind::Registration);
    pending.status = DocumentStatus::Pending;
    documents.push(pending);
    let mut rejected = verified_document("doc_5", DocumentKind::Identity);
    rejected.status = DocumentStatus::Rejected;
    rejected.rejection_reason = Some("illegible scan".to_string());
    documents.push(rejected);

    assert_eq!(documentation_score(&documents), 0.5);
}

#[test]
fn documentation_ignores_non_required_kinds() {
    let documents = vec![verified_document("doc_1", DocumentKind::UtilityBill)];
    assert_eq!(documentation_score(&documents), 0.0);
}

#[test]
fn risk_adjusted_payment_maxes_out_for_clean_verified_business_credit() {
    let mut payment = business_credit_payment();
    payment.risk_score = Some(0.0);

    let score = payment_method_score(&payment, PaymentMethodRule::RiskAdjusted);
    assert_eq!(score, 1.0);
}

#[test]
fn risk_adjusted_payment_floors_at_zero_for_risky_prepaid() {
    let payment = PaymentMethod {
        kind: Some(PaymentMethodKind::Prepaid),
        is_verified: false,
        risk_score: Some(100.0),
        ..PaymentMethod::default()
    };

    let score = payment_method_score(&payment, PaymentMethodRule::RiskAdjusted);
    assert_eq!(score, 0.0);
}

#[test]
fn risk_adjusted_payment_treats_missing_risk_score_as_zero_contribution() {
    let mut payment = business_credit_payment();
    payment.risk_score = None;

    let score = payment_method_score(&payment, PaymentMethodRule::RiskAdjusted);
    assert!((score - 0.8).abs() < 1e-12);
}

#[test]
fn type_tier_payment_maps_each_instrument() {
    let cases = [
        (Some(PaymentMethodKind::BusinessCredit), 1.0),
        (Some(PaymentMethodKind::BusinessDebit), 0.8),
        (Some(PaymentMethodKind::Personal), 0.5),
        (Some(PaymentMethodKind::Prepaid), 0.2),
        (Some(PaymentMethodKind::Other("crypto".to_string())), 0.3),
        (None, 0.3),
    ];

    for (kind, expected) in cases {
        let payment = PaymentMethod {
            kind: kind.clone(),
            ..PaymentMethod::default()
        };
        assert_eq!(
            payment_method_score(&payment, PaymentMethodRule::TypeTier),
            expected,
            "kind {:?}",
            kind
        );
    }
}

#[test]
fn field_coverage_counts_eight_contact_checks() {
    assert_eq!(
        contact_info_score(
            &strong_contact(),
            ContactInfoRule::FieldCoverage,
            &free_providers()
        ),
        1.0
    );

    let mut contact = strong_contact();
    contact.billing_address.street = None;
    contact.contact_person.phone = None;
    assert_eq!(
        contact_info_score(&contact, ContactInfoRule::FieldCoverage, &free_providers()),
        0.75
    );
}

#[test]
fn email_quality_rewards_business_domains() {
    let contact = strong_contact();
    assert_eq!(
        contact_info_score(&contact, ContactInfoRule::EmailQuality, &free_providers()),
        1.0
    );
}

#[test]
fn email_quality_withholds_bonus_for_free_providers() {
    let mut contact = strong_contact();
    contact.primary_email = Some("owner@gmail.com".to_string());

    let score = contact_info_score(&contact, ContactInfoRule::EmailQuality, &free_providers());
    assert!((score - 0.7).abs() < 1e-12);
}

#[test]
fn email_quality_still_grants_bonus_without_parseable_domain() {
    let mut contact = ContactInformation::default();
    contact.primary_email = Some("not-an-email".to_string());

    let score = contact_info_score(&contact, ContactInfoRule::EmailQuality, &free_providers());
    assert!((score - 0.7).abs() < 1e-12);
}

#[test]
fn email_quality_scores_phone_only_contact() {
    let mut contact = ContactInformation::default();
    contact.business_phone = Some("+1-555-000-1111".to_string());

    let score = contact_info_score(&contact, ContactInfoRule::EmailQuality, &free_providers());
    assert!((score - 0.3).abs() < 1e-12);
}

#[test]
fn risk_factor_score_is_perfect_without_findings() {
    assert_eq!(risk_factor_score(&[]), 1.0);
}

#[test]
fn risk_factor_score_penalizes_by_severity() {
    let findings = vec![finding(RiskSeverity::High), finding(RiskSeverity::Medium)];
    assert!((risk_factor_score(&findings) - 0.5).abs() < 1e-12);

    let findings = vec![finding(RiskSeverity::Low)];
    assert!((risk_factor_score(&findings) - 0.9).abs() < 1e-12);
}

#[test]
fn risk_factor_score_floors_at_zero() {
    let findings = vec![
        finding(RiskSeverity::High),
        finding(RiskSeverity::High),
        finding(RiskSeverity::High),
        finding(RiskSeverity::High),
    ];
    assert_eq!(risk_factor_score(&findings), 0.0);
}

#[test]
fn every_scorer_stays_in_unit_interval_for_empty_input() {
    let empty = OnboardingApplication::default();

    let scores = [
        business_profile_score(
            &empty.business_profile,
            BusinessProfileRule::WeightedFields,
            as_of(),
        ),
        business_profile_score(
            &empty.business_profile,
            BusinessProfileRule::PresenceOnly,
            as_of(),
        ),
        documentation_score(&empty.documents),
        payment_method_score(&empty.payment_method, PaymentMethodRule::RiskAdjusted),
        payment_method_score(&empty.payment_method, PaymentMethodRule::TypeTier),
        contact_info_score(
            &empty.contact_info,
            ContactInfoRule::FieldCoverage,
            &free_providers(),
        ),
        contact_info_score(
            &empty.contact_info,
            ContactInfoRule::EmailQuality,
            &free_providers(),
        ),
        risk_factor_score(&empty.risk_factors),
    ];

    for score in scores {
        assert!((0.0..=1.0).contains(&score), "score {score} out of range");
    }
}
