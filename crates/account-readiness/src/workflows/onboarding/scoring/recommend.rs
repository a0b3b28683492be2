//! Deterministic recommendation generation. Categories are visited in a
//! fixed order and compared against their thresholds on raw, unrounded
//! scores; messages are appended in visit order and never deduplicated.

use super::config::{RecommendationStyle, ScoringConfig};
use crate::workflows::onboarding::domain::{
    present, CategoryScores, OnboardingApplication, PaymentMethodKind,
};
use crate::workflows::onboarding::validation::{email_domain, is_free_email_domain};

pub(crate) fn generate(
    application: &OnboardingApplication,
    scores: &CategoryScores,
    overall: f64,
    config: &ScoringConfig,
) -> Vec<String> {
    let mut recommendations = Vec::new();
    let style = config.recommendation_style;
    let thresholds = &config.thresholds;

    if scores.business_profile < thresholds.business_profile {
        match style {
            RecommendationStyle::Generic => recommendations
                .push("Complete your business profile with all required information".to_string()),
            RecommendationStyle::Detailed => {
                business_profile_details(application, &mut recommendations)
            }
        }
    }

    if scores.contact_info < thresholds.contact_info {
        match style {
            RecommendationStyle::Generic => recommendations
                .push("Ensure all contact information is complete and accurate".to_string()),
            RecommendationStyle::Detailed => {
                contact_info_details(application, config, &mut recommendations)
            }
        }
    }

    if scores.payment_method < thresholds.payment_method {
        match style {
            RecommendationStyle::Generic => recommendations
                .push("Use a business credit card for better verification success".to_string()),
            RecommendationStyle::Detailed => {
                payment_method_details(application, &mut recommendations)
            }
        }
    }

    if scores.documentation < thresholds.documentation {
        let message = match style {
            RecommendationStyle::Generic => "Upload and verify all required business documents",
            RecommendationStyle::Detailed => {
                "Upload and verify required business documents (license, tax documents, registration)"
            }
        };
        recommendations.push(message.to_string());
    }

    if scores.risk_factors < thresholds.risk_factors {
        // No targeted wording exists for risk findings; both styles share the
        // generic remediation message.
        recommendations
            .push("Address identified risk factors before account creation".to_string());
    }

    if style == RecommendationStyle::Detailed && overall >= 0.8 && recommendations.is_empty() {
        recommendations.push(
            "Your profile looks strong! Consider uploading additional verification documents \
             to maximize approval chances"
                .to_string(),
        );
        if scores.business_profile < 1.0 {
            recommendations.push(
                "Add business description and industry details for a complete profile".to_string(),
            );
        }
    }

    recommendations
}

fn business_profile_details(application: &OnboardingApplication, out: &mut Vec<String>) {
    let missing = application.business_profile.missing_core_fields();

    if missing.contains(&"industry") {
        out.push("Add your business industry classification for better verification".to_string());
    }
    if missing.contains(&"description") {
        out.push("Provide a detailed business description (minimum 50 words)".to_string());
    }
    if missing.len() > 2 {
        out.push(format!(
            "Complete missing business fields: {}",
            missing.join(", ")
        ));
    }
}

fn contact_info_details(
    application: &OnboardingApplication,
    config: &ScoringConfig,
    out: &mut Vec<String>,
) {
    let contact = &application.contact_info;

    match contact.primary_email.as_deref().filter(|e| !e.is_empty()) {
        Some(email) => {
            let on_free_provider = email_domain(email).map_or(false, |domain| {
                is_free_email_domain(&domain, &config.free_email_providers)
            });
            if on_free_provider {
                out.push(
                    "Use a professional business email address with your own domain".to_string(),
                );
            }
        }
        None => out.push("Add a primary business email address".to_string()),
    }

    if !present(&contact.business_phone) {
        out.push("Add a dedicated business phone number".to_string());
    }
}

fn payment_method_details(application: &OnboardingApplication, out: &mut Vec<String>) {
    match application.payment_method.kind {
        Some(PaymentMethodKind::Prepaid) => {
            out.push("Replace prepaid card with a business credit or debit card".to_string())
        }
        Some(PaymentMethodKind::Personal) => {
            out.push("Use a business credit card for higher approval rates".to_string())
        }
        None => out.push("Add a business credit card as your payment method".to_string()),
        Some(_) => {}
    }
}
