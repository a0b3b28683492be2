//! The five pure category scorers. Each maps one slice of the application to
//! a value in [0, 1]; absent fields contribute zero, never an error.

use chrono::{Datelike, NaiveDate};

use super::config::{BusinessProfileRule, ContactInfoRule, PaymentMethodRule};
use crate::workflows::onboarding::domain::{
    present, BusinessProfile, ContactInformation, Document, DocumentKind, DocumentStatus,
    PaymentMethod, PaymentMethodKind, RiskFactor,
};
use crate::workflows::onboarding::validation::{email_domain, is_free_email_domain};

/// Document kinds that must each have at least one verified upload for a
/// perfect documentation score.
pub(crate) const REQUIRED_DOCUMENT_KINDS: [DocumentKind; 4] = [
    DocumentKind::BusinessLicense,
    DocumentKind::TaxDocument,
    DocumentKind::Registration,
    DocumentKind::Identity,
];

pub(crate) fn business_profile_score(
    profile: &BusinessProfile,
    rule: BusinessProfileRule,
    as_of: NaiveDate,
) -> f64 {
    match rule {
        BusinessProfileRule::WeightedFields => weighted_profile_score(profile, as_of),
        BusinessProfileRule::PresenceOnly => profile.present_core_fields() as f64 / 6.0,
    }
}

fn weighted_profile_score(profile: &BusinessProfile, as_of: NaiveDate) -> f64 {
    let mut points = 0u32;
    let max_points = 10u32;

    if present(&profile.company_name) {
        points += 1;
    }
    if profile.has_business_type() {
        points += 1;
    }
    if present(&profile.tax_id) {
        points += 2;
    }
    if present(&profile.registration_number) {
        points += 1;
    }
    if present(&profile.industry) {
        points += 1;
    }
    if present(&profile.website) {
        points += 1;
    }
    // Descriptions only count once they carry real detail.
    if profile
        .description
        .as_deref()
        .map_or(false, |text| text.chars().count() > 50)
    {
        points += 1;
    }
    // Founding in the as-of year or later does not count as history.
    if matches!(profile.founded_year, Some(year) if year < as_of.year()) {
        points += 1;
    }
    if matches!(profile.employee_count, Some(count) if count > 0) {
        points += 1;
    }

    f64::from(points) / f64::from(max_points)
}

/// 0.25 per required kind with at least one verified upload. Duplicates of a
/// kind count once; unverified or extra kinds contribute nothing.
pub(crate) fn documentation_score(documents: &[Document]) -> f64 {
    let verified_kinds = REQUIRED_DOCUMENT_KINDS
        .iter()
        .filter(|kind| {
            documents
                .iter()
                .any(|doc| doc.status == DocumentStatus::Verified && doc.kind == **kind)
        })
        .count();

    verified_kinds as f64 * 0.25
}

pub(crate) fn payment_method_score(payment: &PaymentMethod, rule: PaymentMethodRule) -> f64 {
    match rule {
        PaymentMethodRule::RiskAdjusted => risk_adjusted_payment_score(payment),
        PaymentMethodRule::TypeTier => type_tier_payment_score(payment),
    }
}

fn risk_adjusted_payment_score(payment: &PaymentMethod) -> f64 {
    let mut score = match payment.kind {
        Some(PaymentMethodKind::BusinessCredit) => 0.5,
        Some(PaymentMethodKind::BusinessDebit) => 0.3,
        Some(PaymentMethodKind::Prepaid) => -0.2,
        _ => 0.0,
    };

    if payment.is_verified {
        score += 0.3;
    }

    // Issuer risk, inverted: 0 is best. An unreported score contributes nothing.
    if let Some(risk_score) = payment.risk_score {
        score += (100.0 - risk_score) / 100.0 * 0.2;
    }

    score.clamp(0.0, 1.0)
}

fn type_tier_payment_score(payment: &PaymentMethod) -> f64 {
    match payment.kind {
        Some(PaymentMethodKind::BusinessCredit) => 1.0,
        Some(PaymentMethodKind::BusinessDebit) => 0.8,
        Some(PaymentMethodKind::Personal) => 0.5,
        Some(PaymentMethodKind::Prepaid) => 0.2,
        Some(PaymentMethodKind::Other(_)) | None => 0.3,
    }
}

pub(crate) fn contact_info_score(
    contact: &ContactInformation,
    rule: ContactInfoRule,
    free_email_providers: &[String],
) -> f64 {
    match rule {
        ContactInfoRule::FieldCoverage => field_coverage_score(contact),
        ContactInfoRule::EmailQuality => email_quality_score(contact, free_email_providers),
    }
}

fn field_coverage_score(contact: &ContactInformation) -> f64 {
    let checks = [
        present(&contact.primary_email),
        present(&contact.business_phone),
        present(&contact.business_address.street),
        present(&contact.billing_address.street),
        present(&contact.contact_person.first_name),
        present(&contact.contact_person.last_name),
        present(&contact.contact_person.email),
        present(&contact.contact_person.phone),
    ];

    let passing = checks.iter().filter(|check| **check).count();
    passing as f64 / checks.len() as f64
}

fn email_quality_score(contact: &ContactInformation, free_email_providers: &[String]) -> f64 {
    let mut points: f64 = 0.0;

    if let Some(email) = contact.primary_email.as_deref().filter(|e| !e.is_empty()) {
        points += 0.4;
        // Only a recognizable free-provider domain forfeits the bonus; an
        // address with no parseable domain still earns it.
        let on_free_provider = email_domain(email)
            .map_or(false, |domain| is_free_email_domain(&domain, free_email_providers));
        if !on_free_provider {
            points += 0.3;
        }
    }

    if present(&contact.business_phone) {
        points += 0.3;
    }

    points.min(1.0)
}

/// 1.0 with no findings, else 1.0 minus the summed severity penalties,
/// floored at zero.
pub(crate) fn risk_factor_score(findings: &[RiskFactor]) -> f64 {
    if findings.is_empty() {
        return 1.0;
    }

    let penalty: f64 = findings
        .iter()
        .map(|finding| finding.severity.penalty())
        .sum();

    (1.0 - penalty).max(0.0)
}
