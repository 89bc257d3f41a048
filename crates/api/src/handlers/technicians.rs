//! Handlers for the `/technicians` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use helpdesk_core::error::CoreError;
use helpdesk_core::types::DbId;
use helpdesk_core::validation::{
    normalize_email, require_trimmed, validate_email, validate_national_id, validate_phone,
};
use helpdesk_db::models::technician::{CreateTechnician, Technician, UpdateTechnician};
use helpdesk_db::repositories::TechnicianRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthAccount;
use crate::state::AppState;

/// POST /api/technicians
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Json(mut input): Json<CreateTechnician>,
) -> AppResult<(StatusCode, Json<Technician>)> {
    input.name = require_trimmed("name", &input.name)?;
    input.surname = require_trimmed("surname", &input.surname)?;
    validate_national_id(&input.national_id)?;
    if let Some(email) = &input.email {
        let email = normalize_email(email);
        validate_email(&email)?;
        input.email = Some(email);
    }
    if let Some(phone) = &input.phone {
        validate_phone(phone)?;
    }

    let technician = TechnicianRepo::create(&state.pool, &input).await?;
    tracing::info!(technician_id = technician.id, "Technician created");
    Ok((StatusCode::CREATED, Json(technician)))
}

/// GET /api/technicians
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthAccount,
) -> AppResult<Json<Vec<Technician>>> {
    let technicians = TechnicianRepo::list(&state.pool).await?;
    Ok(Json(technicians))
}

/// GET /api/technicians/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
) -> AppResult<Json<Technician>> {
    let technician = TechnicianRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Technician",
            id,
        })?;
    Ok(Json(technician))
}

/// PUT /api/technicians/{id}
///
/// Partial update. `national_id` is immutable and not accepted here.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateTechnician>,
) -> AppResult<Json<Technician>> {
    if let Some(name) = &input.name {
        input.name = Some(require_trimmed("name", name)?);
    }
    if let Some(surname) = &input.surname {
        input.surname = Some(require_trimmed("surname", surname)?);
    }
    if let Some(email) = &input.email {
        let email = normalize_email(email);
        validate_email(&email)?;
        input.email = Some(email);
    }
    if let Some(phone) = &input.phone {
        validate_phone(phone)?;
    }

    let technician = TechnicianRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Technician",
            id,
        })?;
    tracing::info!(technician_id = technician.id, "Technician updated");
    Ok(Json(technician))
}

/// DELETE /api/technicians/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TechnicianRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Technician",
            id,
        }
        .into());
    }
    tracing::info!(technician_id = id, "Technician deleted");
    Ok(StatusCode::NO_CONTENT)
}
