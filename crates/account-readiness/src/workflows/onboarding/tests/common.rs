use std::sync::Arc;

use axum::response::Response;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::onboarding::domain::{
    Address, BusinessProfile, BusinessType, ContactInformation, ContactPerson, Document,
    DocumentKind, DocumentStatus, OnboardingApplication, PaymentMethod, PaymentMethodKind,
};
use crate::workflows::onboarding::router::scoring_router;
use crate::workflows::onboarding::scoring::ScoringPreset;
use crate::workflows::onboarding::service::ReadinessService;

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
}

pub(super) fn strong_profile() -> BusinessProfile {
    BusinessProfile {
        company_name: Some("Test Company LLC".to_string()),
        business_type: Some(BusinessType::Llc),
        tax_id: Some("12-3456789".to_string()),
        registration_number: Some("LLC123456".to_string()),
        industry: Some("Technology".to_string()),
        website: Some("https://testcompany.com".to_string()),
        description: Some(
            "Cloud consultancy helping regional retailers migrate and operate their storefronts"
                .to_string(),
        ),
        founded_year: Some(2020),
        employee_count: Some(25),
        annual_revenue: Some(500_000.0),
    }
}

pub(super) fn strong_contact() -> ContactInformation {
    let address = Address {
        street: Some("123 Business St".to_string()),
        city: Some("San Francisco".to_string()),
        state: Some("CA".to_string()),
        zip_code: Some("94105".to_string()),
        country: Some("US".to_string()),
    };

    ContactInformation {
        primary_email: Some("admin@testcompany.com".to_string()),
        business_phone: Some("+1-555-123-4567".to_string()),
        business_address: address.clone(),
        billing_address: address,
        contact_person: ContactPerson {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            title: Some("CEO".to_string()),
            email: Some("john@testcompany.com".to_string()),
            phone: Some("+1-555-123-4567".to_string()),
        },
    }
}

pub(super) fn business_credit_payment() -> PaymentMethod {
    PaymentMethod {
        id: Some("pm_123".to_string()),
        kind: Some(PaymentMethodKind::BusinessCredit),
        last4: Some("4242".to_string()),
        brand: Some("visa".to_string()),
        is_verified: true,
        risk_score: Some(15.0),
        issuer_country: Some("US".to_string()),
    }
}

pub(super) fn verified_document(id: &str, kind: DocumentKind) -> Document {
    Document {
        id: Some(id.to_string()),
        kind,
        file_name: Some(format!("{}.pdf", kind.as_str())),
        upload_date: Some(Utc.with_ymd_and_hms(2025, 5, 20, 9, 0, 0).unwrap()),
        status: DocumentStatus::Verified,
        rejection_reason: None,
    }
}

pub(super) fn verified_documents() -> Vec<Document> {
    vec![
        verified_document("doc_1", DocumentKind::BusinessLicense),
        verified_document("doc_2", DocumentKind::TaxDocument),
    ]
}

/// The reference scenario: full profile, complete contact block on a business
/// domain, verified business credit card, two of four document kinds
/// verified, no risk findings.
pub(super) fn strong_application() -> OnboardingApplication {
    OnboardingApplication {
        business_profile: strong_profile(),
        contact_info: strong_contact(),
        payment_method: business_credit_payment(),
        documents: verified_documents(),
        risk_factors: Vec::new(),
    }
}

pub(super) fn service_with_default(preset: ScoringPreset) -> Arc<ReadinessService> {
    Arc::new(ReadinessService::new(preset))
}

pub(super) fn default_router() -> axum::Router {
    scoring_router(service_with_default(ScoringPreset::Full))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
