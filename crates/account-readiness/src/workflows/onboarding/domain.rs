use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A wire field counts as present when it carries a non-empty string.
pub(crate) fn present(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |text| !text.is_empty())
}

/// Self-reported company profile collected during intake. Every field is
/// optional on the wire; absence contributes nothing to scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessProfile {
    pub company_name: Option<String>,
    pub business_type: Option<BusinessType>,
    pub tax_id: Option<String>,
    pub registration_number: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub founded_year: Option<i32>,
    pub employee_count: Option<u32>,
    pub annual_revenue: Option<f64>,
}

impl BusinessProfile {
    pub fn has_business_type(&self) -> bool {
        self.business_type
            .as_ref()
            .map_or(false, |kind| !kind.as_str().is_empty())
    }

    /// The six intake fields checked by presence-only profile scoring, in
    /// declared order. Adding a field here updates scoring and the
    /// missing-field recommendations together.
    fn core_fields(&self) -> [(&'static str, bool); 6] {
        [
            ("companyName", present(&self.company_name)),
            ("businessType", self.has_business_type()),
            ("taxId", present(&self.tax_id)),
            ("website", present(&self.website)),
            ("industry", present(&self.industry)),
            ("description", present(&self.description)),
        ]
    }

    pub fn present_core_fields(&self) -> usize {
        self.core_fields()
            .iter()
            .filter(|(_, is_present)| *is_present)
            .count()
    }

    pub fn missing_core_fields(&self) -> Vec<&'static str> {
        self.core_fields()
            .iter()
            .filter(|(_, is_present)| !is_present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// Fields the risk screen requires before a profile counts as complete.
    fn required_fields(&self) -> [(&'static str, bool); 4] {
        [
            ("companyName", present(&self.company_name)),
            ("businessType", self.has_business_type()),
            ("taxId", present(&self.tax_id)),
            ("website", present(&self.website)),
        ]
    }

    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        self.required_fields()
            .iter()
            .filter(|(_, is_present)| !is_present)
            .map(|(name, _)| *name)
            .collect()
    }
}

/// Legal structure of the business. Unknown wire strings are carried through
/// as `Other` instead of failing the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusinessType {
    Corporation,
    Llc,
    Partnership,
    SoleProprietorship,
    Other(String),
}

impl BusinessType {
    pub fn as_str(&self) -> &str {
        match self {
            BusinessType::Corporation => "corporation",
            BusinessType::Llc => "llc",
            BusinessType::Partnership => "partnership",
            BusinessType::SoleProprietorship => "sole_proprietorship",
            BusinessType::Other(raw) => raw,
        }
    }

    fn from_wire(raw: String) -> Self {
        match raw.as_str() {
            "corporation" => BusinessType::Corporation,
            "llc" => BusinessType::Llc,
            "partnership" => BusinessType::Partnership,
            "sole_proprietorship" => BusinessType::SoleProprietorship,
            _ => BusinessType::Other(raw),
        }
    }
}

impl Serialize for BusinessType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BusinessType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(BusinessType::from_wire(String::deserialize(deserializer)?))
    }
}

/// Postal address block used for both business and billing addresses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPerson {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Contact block for the applying business. Missing nested records default to
/// empty so sub-field reads never fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInformation {
    pub primary_email: Option<String>,
    pub business_phone: Option<String>,
    pub business_address: Address,
    pub billing_address: Address,
    pub contact_person: ContactPerson,
}

/// Payment instrument on file for the account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaymentMethod {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<PaymentMethodKind>,
    pub last4: Option<String>,
    pub brand: Option<String>,
    pub is_verified: bool,
    /// Issuer risk score, 0 best to 100 worst. Inverted during scoring.
    pub risk_score: Option<f64>,
    pub issuer_country: Option<String>,
}

/// Instrument category. Unknown wire strings become `Other` and take the
/// unspecified scoring branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethodKind {
    BusinessCredit,
    BusinessDebit,
    Prepaid,
    Personal,
    Other(String),
}

impl PaymentMethodKind {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethodKind::BusinessCredit => "business_credit",
            PaymentMethodKind::BusinessDebit => "business_debit",
            PaymentMethodKind::Prepaid => "prepaid",
            PaymentMethodKind::Personal => "personal",
            PaymentMethodKind::Other(raw) => raw,
        }
    }

    fn from_wire(raw: String) -> Self {
        match raw.as_str() {
            "business_credit" => PaymentMethodKind::BusinessCredit,
            "business_debit" => PaymentMethodKind::BusinessDebit,
            "prepaid" => PaymentMethodKind::Prepaid,
            "personal" => PaymentMethodKind::Personal,
            _ => PaymentMethodKind::Other(raw),
        }
    }
}

impl Serialize for PaymentMethodKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PaymentMethodKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(PaymentMethodKind::from_wire(String::deserialize(
            deserializer,
        )?))
    }
}

/// Metadata for an uploaded verification document. The engine never sees the
/// file itself, only its review state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub upload_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub rejection_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    BusinessLicense,
    TaxDocument,
    Registration,
    Identity,
    UtilityBill,
}

impl DocumentKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            DocumentKind::BusinessLicense => "business_license",
            DocumentKind::TaxDocument => "tax_document",
            DocumentKind::Registration => "registration",
            DocumentKind::Identity => "identity",
            DocumentKind::UtilityBill => "utility_bill",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

/// A discrete negative signal discovered by the risk screen, or supplied by
/// the caller from an upstream screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    #[serde(rename = "type")]
    pub kind: RiskFactorKind,
    pub severity: RiskSeverity,
    pub description: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactorKind {
    VpnUsage,
    GeographicMismatch,
    WeakPayment,
    IncompleteProfile,
    FreeEmail,
}

impl RiskFactorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            RiskFactorKind::VpnUsage => "vpn_usage",
            RiskFactorKind::GeographicMismatch => "geographic_mismatch",
            RiskFactorKind::WeakPayment => "weak_payment",
            RiskFactorKind::IncompleteProfile => "incomplete_profile",
            RiskFactorKind::FreeEmail => "free_email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            RiskSeverity::Low => "low",
            RiskSeverity::Medium => "medium",
            RiskSeverity::High => "high",
        }
    }

    /// Deduction applied per finding when penalizing the risk category.
    pub const fn penalty(self) -> f64 {
        match self {
            RiskSeverity::Low => 0.1,
            RiskSeverity::Medium => 0.2,
            RiskSeverity::High => 0.3,
        }
    }
}

/// The full input bundle for one scoring or risk-screening call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingApplication {
    pub business_profile: BusinessProfile,
    pub contact_info: ContactInformation,
    pub payment_method: PaymentMethod,
    pub documents: Vec<Document>,
    pub risk_factors: Vec<RiskFactor>,
}

/// Composite readiness result returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessScore {
    pub overall: f64,
    pub categories: CategoryScores,
    pub recommendations: Vec<String>,
}

/// The five fixed scoring categories.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub business_profile: f64,
    pub documentation: f64,
    pub payment_method: f64,
    pub contact_info: f64,
    pub risk_factors: f64,
}

impl CategoryScores {
    /// Category values paired with their wire names, in evaluation order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("businessProfile", self.business_profile),
            ("contactInfo", self.contact_info),
            ("paymentMethod", self.payment_method),
            ("documentation", self.documentation),
            ("riskFactors", self.risk_factors),
        ]
    }
}

/// Qualitative band used when presenting a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
}

impl ScoreBand {
    pub fn for_score(score: f64) -> Self {
        if score >= 0.9 {
            ScoreBand::Excellent
        } else if score >= 0.8 {
            ScoreBand::Good
        } else if score >= 0.6 {
            ScoreBand::Fair
        } else {
            ScoreBand::NeedsImprovement
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent",
            ScoreBand::Good => "Good",
            ScoreBand::Fair => "Fair",
            ScoreBand::NeedsImprovement => "Needs Improvement",
        }
    }
}
