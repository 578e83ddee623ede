//! JSON API handlers, one module per content type.
//!
//! Privileged handlers take `AdminSession` as their first extractor, so a
//! request without a valid session is rejected before its body is read.
//! Every successful write drops the page cache.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{error::ApiError, models::PersonnelRole};

pub mod articles;
pub mod auctions;
pub mod auth;
pub mod directorates;
pub mod forms;
pub mod hero_slides;
pub mod institution;
pub mod market_stats;
pub mod reports;
pub mod uploads;

/// CategoryFilter
///
/// Optional `?category=` filter of the article and report listings.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct CategoryFilter {
    /// Category slug. Absent or blank means every category.
    pub category: Option<String>,
}

#[derive(Deserialize)]
struct IdParam {
    id: Option<String>,
}

#[derive(Deserialize)]
struct RoleParam {
    role: Option<String>,
}

/// EntityId
///
/// The `?id=<uuid>` query parameter of the update and delete routes. A missing
/// or malformed id is a 400.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub Uuid);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(param) = Query::<IdParam>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        let raw = param
            .id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ApiError::validation("Le paramètre 'id' est obligatoire"))?;

        Uuid::parse_str(raw.trim())
            .map(EntityId)
            .map_err(|_| ApiError::validation(format!("Identifiant invalide: '{}'", raw)))
    }
}

/// RoleQuery
///
/// The `?role=dg|dga` query parameter of the personnel routes.
#[derive(Debug, Clone, Copy)]
pub struct RoleQuery(pub PersonnelRole);

impl<S> FromRequestParts<S> for RoleQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(param) = Query::<RoleParam>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

        let raw = param
            .role
            .ok_or_else(|| ApiError::validation("Le paramètre 'role' est obligatoire"))?;

        parse_role(&raw).map(RoleQuery)
    }
}

pub(crate) fn parse_role(raw: &str) -> Result<PersonnelRole, ApiError> {
    raw.parse::<PersonnelRole>().map_err(|_| {
        ApiError::validation(format!("Rôle inconnu: '{}' (attendu: dg ou dga)", raw))
    })
}
