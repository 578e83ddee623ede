use axum::{Json, extract::State};

use crate::{
    AppState,
    error::{ApiError, ApiMessage},
    models::{ContactRequest, InvestorRegistration},
    validation::ValidatedJson,
};

/// submit_contact
///
/// [Public Route] Forwards the contact form to the directorate's mailbox.
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactRequest,
    responses(
        (status = 200, description = "Sent", body = ApiMessage),
        (status = 400, description = "Invalid form", body = ApiMessage),
        (status = 502, description = "Email provider unavailable", body = ApiMessage)
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ContactRequest>,
) -> Result<Json<ApiMessage>, ApiError> {
    state
        .mailer
        .send_contact(&request)
        .await
        .map_err(|e| ApiError::upstream("messagerie", e))?;

    tracing::info!(subject = %request.subject, "contact message forwarded");
    Ok(Json(ApiMessage::ok("Votre message a bien été envoyé")))
}

/// register_investor
///
/// [Public Route] Investor sign-up. The registration is acknowledged and logged
/// for follow-up by the securities desk; nothing is stored.
#[utoipa::path(
    post,
    path = "/api/investisseurs/inscription",
    request_body = InvestorRegistration,
    responses(
        (status = 200, description = "Received", body = ApiMessage),
        (status = 400, description = "Invalid form", body = ApiMessage)
    )
)]
pub async fn register_investor(
    ValidatedJson(registration): ValidatedJson<InvestorRegistration>,
) -> Json<ApiMessage> {
    tracing::info!(
        full_name = %registration.full_name,
        email = %registration.email,
        investor_type = %registration.investor_type,
        organization = registration.organization.as_deref().unwrap_or("-"),
        "investor registration received"
    );
    Json(ApiMessage::ok("Votre inscription a bien été reçue"))
}
