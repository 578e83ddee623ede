use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use thiserror::Error;
use ts_rs::TS;
use utoipa::ToSchema;
use uuid::Uuid;

/// PersonnelRole
///
/// The two leadership positions presented on the institution page. Each role
/// holds at most one `Personnel` record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PersonnelRole {
    /// Directeur général.
    Dg,
    /// Directeur général adjoint.
    Dga,
}

#[derive(Debug, Error)]
#[error("unknown personnel role: {0}")]
pub struct UnknownRole(pub String);

impl PersonnelRole {
    pub const ALL: [PersonnelRole; 2] = [PersonnelRole::Dg, PersonnelRole::Dga];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonnelRole::Dg => "dg",
            PersonnelRole::Dga => "dga",
        }
    }
}

impl fmt::Display for PersonnelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonnelRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dg" => Ok(PersonnelRole::Dg),
            "dga" => Ok(PersonnelRole::Dga),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl TryFrom<String> for PersonnelRole {
    type Error = UnknownRole;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Personnel
///
/// The leadership record for one role (`personnel` table, keyed by `role`).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Personnel {
    #[sqlx(try_from = "String")]
    pub role: PersonnelRole,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub image_url: Option<String>,
}

/// PersonnelInput
///
/// Payload for `PUT /api/institution/personnel/update?role=`. The role comes
/// from the query string; every field here is required because the call
/// replaces the record (or creates it the first time).
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonnelInput {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl PersonnelInput {
    pub fn into_personnel(self, role: PersonnelRole) -> Personnel {
        Personnel {
            role,
            name: self.name,
            title: self.title,
            bio: self.bio,
            image_url: self.image_url,
        }
    }
}

/// Organigramme
///
/// An org-chart image (`organigrammes` table). Only one row is active at a time.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, PartialEq)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Organigramme {
    pub id: Uuid,
    pub image_url: String,
    pub active: bool,
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NewOrganigramme {
    pub image_url: String,
}
