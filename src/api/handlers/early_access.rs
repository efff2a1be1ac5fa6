use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::api::dtos::{
    requests::EarlyAccessRequest,
    responses::{LeadRow, SubmittedResponse},
};
use crate::api::extractors::auth::AuthUser;
use crate::domain::models::early_access::EarlyAccessLead;
use crate::domain::services::access::require_main_admin;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

fn trimmed(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Public capture endpoint for the landing-page early-access form.
pub async fn submit_lead(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EarlyAccessRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (Some(name), Some(email)) = (trimmed(payload.name), trimmed(payload.email)) else {
        return Err(AppError::Validation("Name and email are required".into()));
    };

    let lead = EarlyAccessLead::new(
        name,
        email,
        trimmed(payload.event_type),
        trimmed(payload.plan),
        trimmed(payload.city),
    );
    let created = state.early_access_repo.create(&lead).await?;

    info!("Captured early-access lead {}", created.id);

    Ok((
        StatusCode::CREATED,
        Json(SubmittedResponse { success: true, id: created.id }),
    ))
}

pub async fn list_leads(
    State(state): State<Arc<AppState>>,
    AuthUser(actor): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    require_main_admin(&actor)?;

    let leads = state.early_access_repo.list().await?;
    let out: Vec<LeadRow> = leads.into_iter().map(LeadRow::from).collect();
    Ok(Json(out))
}
