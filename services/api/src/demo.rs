use account_readiness::error::AppError;
use account_readiness::workflows::onboarding::{
    OnboardingApplication, ReadinessScore, ReadinessService, RiskFactor, ScoreBand, ScoringPreset,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Path to an onboarding application JSON file
    #[arg(long)]
    pub(crate) application: PathBuf,
    /// Scoring preset to apply (full or simplified)
    #[arg(long)]
    pub(crate) preset: Option<ScoringPreset>,
    /// As-of date for the founding-year check (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Also run the risk screen and print its findings
    #[arg(long)]
    pub(crate) risks: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the as-of date used for scoring (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        application,
        preset,
        as_of,
        risks,
    } = args;

    let raw = std::fs::read_to_string(&application)?;
    let application: OnboardingApplication = serde_json::from_str(&raw)?;

    // The service's default preset is the single fallback for a missing flag.
    let service = ReadinessService::new(ScoringPreset::Full);
    let as_of = as_of.unwrap_or_else(|| Local::now().date_naive());

    let score = service.score(&application, preset, as_of);
    render_readiness_score(&score);

    if risks {
        render_risk_findings(&service.risk_factors(&application));
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let as_of = args.as_of.unwrap_or_else(|| Local::now().date_naive());
    let application = sample_application();
    let service = ReadinessService::new(ScoringPreset::Full);

    println!("Account readiness demo (evaluated {as_of})");

    for preset in [ScoringPreset::Full, ScoringPreset::Simplified] {
        println!("\nPreset: {}", preset.label());
        let score = service.score(&application, Some(preset), as_of);
        render_readiness_score(&score);
    }

    println!("\nRisk screen");
    render_risk_findings(&service.risk_factors(&application));

    Ok(())
}

fn render_readiness_score(score: &ReadinessScore) {
    println!(
        "Overall readiness: {:.0}% ({})",
        score.overall * 100.0,
        ScoreBand::for_score(score.overall).label()
    );

    println!("Category breakdown:");
    for (name, value) in score.categories.entries() {
        println!(
            "  - {}: {:.0}% ({})",
            name,
            value * 100.0,
            ScoreBand::for_score(value).label()
        );
    }

    if score.recommendations.is_empty() {
        println!("Recommendations: none");
    } else {
        println!("Recommendations:");
        for recommendation in &score.recommendations {
            println!("  - {recommendation}");
        }
    }
}

fn render_risk_findings(findings: &[RiskFactor]) {
    if findings.is_empty() {
        println!("No risk factors identified");
        return;
    }

    for finding in findings {
        println!(
            "- [{}] {}: {} -> {}",
            finding.severity.label(),
            finding.kind.as_str(),
            finding.description,
            finding.recommendation
        );
    }
}

/// A representative mid-strength application: complete profile and contact
/// block, verified business credit card, two of four document kinds verified.
fn sample_application() -> OnboardingApplication {
    serde_json::from_value(serde_json::json!({
        "businessProfile": {
            "companyName": "Test Company LLC",
            "businessType": "llc",
            "taxId": "12-3456789",
            "registrationNumber": "LLC123456",
            "industry": "Technology",
            "website": "https://testcompany.com",
            "description": "Cloud consultancy helping regional retailers migrate and operate their storefronts",
            "foundedYear": 2020,
            "employeeCount": 25,
            "annualRevenue": 500000
        },
        "contactInfo": {
            "primaryEmail": "admin@testcompany.com",
            "businessPhone": "+1-555-123-4567",
            "businessAddress": {
                "street": "123 Business St",
                "city": "San Francisco",
                "state": "CA",
                "zipCode": "94105",
                "country": "US"
            },
            "billingAddress": {
                "street": "123 Business St",
                "city": "San Francisco",
                "state": "CA",
                "zipCode": "94105",
                "country": "US"
            },
            "contactPerson": {
                "firstName": "John",
                "lastName": "Doe",
                "title": "CEO",
                "email": "john@testcompany.com",
                "phone": "+1-555-123-4567"
            }
        },
        "paymentMethod": {
            "id": "pm_123",
            "type": "business_credit",
            "last4": "4242",
            "brand": "visa",
            "isVerified": true,
            "riskScore": 15,
            "issuerCountry": "US"
        },
        "documents": [
            {
                "id": "doc_1",
                "type": "business_license",
                "fileName": "business_license.pdf",
                "uploadDate": "2025-05-20T09:00:00Z",
                "status": "verified"
            },
            {
                "id": "doc_2",
                "type": "tax_document",
                "fileName": "tax_document.pdf",
                "uploadDate": "2025-05-21T09:00:00Z",
                "status": "verified"
            }
        ]
    }))
    .expect("bundled sample application is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn sample_application_scores_like_the_reference_scenario() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let service = ReadinessService::new(ScoringPreset::Full);
        let application = sample_application();

        let full = service.score(&application, Some(ScoringPreset::Full), as_of);
        assert_eq!(full.overall, 0.87);

        let simplified = service.score(&application, Some(ScoringPreset::Simplified), as_of);
        assert_eq!(simplified.overall, 0.9);

        assert!(service.risk_factors(&application).is_empty());
    }

    #[test]
    fn missing_preset_flag_falls_back_to_the_service_default() {
        let as_of = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let service = ReadinessService::new(ScoringPreset::Full);
        let application = sample_application();

        let defaulted = service.score(&application, None, as_of);
        let explicit = service.score(&application, Some(ScoringPreset::Full), as_of);
        assert_eq!(defaulted, explicit);
        assert_eq!(defaulted.overall, 0.87);
    }
}
