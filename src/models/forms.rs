use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// ContactRequest
///
/// Public contact form, forwarded to the transactional email provider.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, PartialEq)]
#[ts(export)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// InvestorRegistration
///
/// Investor sign-up form for government securities. Accepted and logged; not
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvestorRegistration {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// "particulier" or "institutionnel".
    pub investor_type: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// LoginRequest
///
/// Admin credentials, passed through to the auth service and never stored or
/// logged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
