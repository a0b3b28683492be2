//! Readiness scoring and risk screening for business account onboarding.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
