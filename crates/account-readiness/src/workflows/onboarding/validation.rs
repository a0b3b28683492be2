//! Field validation predicates backing the scorers and the risk screen.
//!
//! Two free-provider lists exist on purpose: the short one feeds risk
//! flagging and the simplified contact rubric, the wider one only backs
//! `validate_business_email`. They drift independently.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Domains flagged by the risk screen and the simplified contact rubric.
pub const FREE_EMAIL_RISK_DOMAINS: [&str; 4] =
    ["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

/// Wider list consulted only when validating a business email address.
pub const FREE_EMAIL_VALIDATION_DOMAINS: [&str; 7] = [
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "aol.com",
    "icloud.com",
    "protonmail.com",
];

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[\d\s\-()]{10,}$").expect("phone regex compiles"));

// US EIN shape: XX-XXXXXXX
static EIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}-\d{7}$").expect("EIN regex compiles"));

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// A valid email whose domain is not a known free provider.
pub fn validate_business_email(email: &str) -> bool {
    if !validate_email(email) {
        return false;
    }

    match email_domain(email) {
        Some(domain) => !FREE_EMAIL_VALIDATION_DOMAINS
            .iter()
            .any(|provider| provider.eq_ignore_ascii_case(&domain)),
        None => false,
    }
}

pub fn validate_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// US tax ids must match the EIN shape; other countries accept any non-empty value.
pub fn validate_tax_id(tax_id: &str, country: &str) -> bool {
    if country == "US" {
        EIN_RE.is_match(tax_id)
    } else {
        !tax_id.is_empty()
    }
}

pub fn validate_website(website: &str) -> bool {
    match Url::parse(website) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// The lowercased segment after the first '@', or `None` when the address has
/// no '@' at all. Addresses without a parseable domain are never an error.
pub fn email_domain(email: &str) -> Option<String> {
    email
        .split_once('@')
        .map(|(_, domain)| domain.to_ascii_lowercase())
}

/// Case-insensitive membership test against a configured provider list.
pub fn is_free_email_domain(domain: &str, providers: &[String]) -> bool {
    providers
        .iter()
        .any(|provider| provider.eq_ignore_ascii_case(domain))
}
