use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    models::{
        ArticleUpdate, AuctionResultUpdate, ContactRequest, DirectorateUpdate, HeroSlideUpdate,
        InvestorRegistration, LoginRequest, MarketStatUpdate, NewArticle, NewAuctionResult,
        NewDirectorate, NewHeroSlide, NewMarketStat, NewOrganigramme, NewReport,
        NewUpcomingAuction, PersonnelInput, ReportUpdate, UpcomingAuctionUpdate,
    },
};

/// Validate
///
/// Boundary check run on every typed input before it reaches the store.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// ValidatedJson
///
/// A JSON body extractor that deserializes into `T` and then runs
/// `T::validate`. Malformed JSON and failed checks both reject with a 400
/// `ApiError::Validation`, so handlers only ever see well-formed input.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// QueryParams
///
/// `Query<T>` whose rejection is a 400 `ApiError::Validation`, so a malformed
/// query string gets the same JSON error body as every other failure.
pub struct QueryParams<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(QueryParams(value))
    }
}

// --- Field Rules ---

pub fn require(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!(
            "Le champ '{}' est obligatoire",
            field
        )));
    }
    Ok(())
}

fn require_opt(field: &str, value: Option<&String>) -> Result<(), ApiError> {
    match value {
        Some(v) => require(field, v),
        None => Ok(()),
    }
}

/// Slugs are lowercase ASCII alphanumerics joined by single hyphens
/// (`resultat-bta-2025-09-17`).
pub fn validate_slug(slug: &str) -> Result<(), ApiError> {
    let well_formed = !slug.is_empty()
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        });

    if !well_formed {
        return Err(ApiError::validation(format!(
            "Slug invalide: '{}'. Utilisez des minuscules, chiffres et tirets",
            slug
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ApiError> {
    let mut parts = email.trim().split('@');
    let valid = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(local), Some(domain), None)
            if !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
    );

    if !valid {
        return Err(ApiError::validation("Adresse e-mail invalide"));
    }
    Ok(())
}

pub fn validate_amount(field: &str, value: f64) -> Result<(), ApiError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ApiError::validation(format!(
            "Le champ '{}' doit être un nombre positif",
            field
        )));
    }
    Ok(())
}

fn non_empty_update(is_empty: bool) -> Result<(), ApiError> {
    if is_empty {
        return Err(ApiError::validation("Aucun champ à mettre à jour"));
    }
    Ok(())
}

// --- Entity Inputs ---

impl Validate for NewArticle {
    fn validate(&self) -> Result<(), ApiError> {
        validate_slug(&self.slug)?;
        require("title", &self.title)?;
        require("excerpt", &self.excerpt)?;
        require("content", &self.content)?;
        require("category", &self.category)
    }
}

impl Validate for ArticleUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        non_empty_update(self.is_empty())?;
        if let Some(slug) = &self.slug {
            validate_slug(slug)?;
        }
        require_opt("title", self.title.as_ref())?;
        require_opt("excerpt", self.excerpt.as_ref())?;
        require_opt("content", self.content.as_ref())?;
        require_opt("category", self.category.as_ref())
    }
}

impl Validate for NewDirectorate {
    fn validate(&self) -> Result<(), ApiError> {
        validate_slug(&self.slug)?;
        require("name", &self.name)?;
        require("directorName", &self.director_name)?;
        require("missionExcerpt", &self.mission_excerpt)?;
        for service in &self.services {
            require("services", service)?;
        }
        Ok(())
    }
}

impl Validate for DirectorateUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        non_empty_update(self.is_empty())?;
        if let Some(slug) = &self.slug {
            validate_slug(slug)?;
        }
        require_opt("name", self.name.as_ref())?;
        require_opt("directorName", self.director_name.as_ref())?;
        require_opt("missionExcerpt", self.mission_excerpt.as_ref())?;
        if let Some(services) = &self.services {
            for service in services {
                require("services", service)?;
            }
        }
        Ok(())
    }
}

impl Validate for NewHeroSlide {
    fn validate(&self) -> Result<(), ApiError> {
        require("title", &self.title)?;
        require("imageUrl", &self.image_url)
    }
}

impl Validate for HeroSlideUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        non_empty_update(self.is_empty())?;
        require_opt("title", self.title.as_ref())?;
        require_opt("imageUrl", self.image_url.as_ref())
    }
}

impl Validate for NewReport {
    fn validate(&self) -> Result<(), ApiError> {
        require("title", &self.title)?;
        require("category", &self.category)?;
        require("fileUrl", &self.file_url)
    }
}

impl Validate for ReportUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        non_empty_update(self.is_empty())?;
        require_opt("title", self.title.as_ref())?;
        require_opt("category", self.category.as_ref())?;
        require_opt("fileUrl", self.file_url.as_ref())
    }
}

impl Validate for NewUpcomingAuction {
    fn validate(&self) -> Result<(), ApiError> {
        require("type", &self.security_type)?;
        require("status", &self.status)?;
        validate_amount("amountmillions", self.amount_millions)
    }
}

impl Validate for UpcomingAuctionUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        non_empty_update(self.is_empty())?;
        require_opt("type", self.security_type.as_ref())?;
        require_opt("status", self.status.as_ref())?;
        if let Some(amount) = self.amount_millions {
            validate_amount("amountmillions", amount)?;
        }
        Ok(())
    }
}

impl Validate for NewAuctionResult {
    fn validate(&self) -> Result<(), ApiError> {
        validate_slug(&self.slug)?;
        require("type", &self.security_type)?;
        require("interestrate", &self.interest_rate)?;
        validate_amount("amountawarded", self.amount_awarded)
    }
}

impl Validate for AuctionResultUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        non_empty_update(self.is_empty())?;
        if let Some(slug) = &self.slug {
            validate_slug(slug)?;
        }
        require_opt("type", self.security_type.as_ref())?;
        require_opt("interestrate", self.interest_rate.as_ref())?;
        if let Some(amount) = self.amount_awarded {
            validate_amount("amountawarded", amount)?;
        }
        Ok(())
    }
}

impl Validate for NewMarketStat {
    fn validate(&self) -> Result<(), ApiError> {
        require("nom_statistique", &self.name)?;
        require("libelle_statistique", &self.label)?;
        require("valeur_statistique", &self.value)
    }
}

impl Validate for MarketStatUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        non_empty_update(self.is_empty())?;
        require_opt("nom_statistique", self.name.as_ref())?;
        require_opt("libelle_statistique", self.label.as_ref())?;
        require_opt("valeur_statistique", self.value.as_ref())
    }
}

impl Validate for PersonnelInput {
    fn validate(&self) -> Result<(), ApiError> {
        require("name", &self.name)?;
        require("title", &self.title)
    }
}

impl Validate for NewOrganigramme {
    fn validate(&self) -> Result<(), ApiError> {
        require("imageUrl", &self.image_url)
    }
}

// --- Public Forms ---

impl Validate for ContactRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require("name", &self.name)?;
        validate_email(&self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)
    }
}

impl Validate for InvestorRegistration {
    fn validate(&self) -> Result<(), ApiError> {
        require("fullName", &self.full_name)?;
        validate_email(&self.email)?;
        match self.investor_type.as_str() {
            "particulier" | "institutionnel" => Ok(()),
            other => Err(ApiError::validation(format!(
                "Type d'investisseur inconnu: '{}'",
                other
            ))),
        }
    }
}

impl Validate for LoginRequest {
    fn validate(&self) -> Result<(), ApiError> {
        validate_email(&self.email)?;
        require("password", &self.password)
    }
}
