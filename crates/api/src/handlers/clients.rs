//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use helpdesk_core::error::CoreError;
use helpdesk_core::types::DbId;
use helpdesk_core::validation::{
    normalize_email, require_trimmed, validate_email, validate_national_id, validate_phone,
};
use helpdesk_db::models::client::{Client, CreateClient, UpdateClient};
use helpdesk_db::repositories::ClientRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthAccount;
use crate::state::AppState;

/// POST /api/clients
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Json(mut input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    input.name = require_trimmed("name", &input.name)?;
    validate_national_id(&input.national_id)?;
    input.email = normalize_email(&input.email);
    validate_email(&input.email)?;
    input.address = require_trimmed("address", &input.address)?;
    validate_phone(&input.phone)?;
    input.department = require_trimmed("department", &input.department)?;

    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = client.id, "Client created");
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/clients
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthAccount,
) -> AppResult<Json<Vec<Client>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(clients))
}

/// GET /api/clients/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Client",
            id,
        })?;
    Ok(Json(client))
}

/// PUT /api/clients/{id}
///
/// Partial update. `national_id` is immutable and not accepted here.
pub async fn update(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    if let Some(name) = &input.name {
        input.name = Some(require_trimmed("name", name)?);
    }
    if let Some(email) = &input.email {
        let email = normalize_email(email);
        validate_email(&email)?;
        input.email = Some(email);
    }
    if let Some(phone) = &input.phone {
        validate_phone(phone)?;
    }
    if let Some(address) = &input.address {
        input.address = Some(require_trimmed("address", address)?);
    }
    if let Some(department) = &input.department {
        input.department = Some(require_trimmed("department", department)?);
    }

    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Client",
            id,
        })?;
    tracing::info!(client_id = client.id, "Client updated");
    Ok(Json(client))
}

/// DELETE /api/clients/{id}
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthAccount,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Client",
            id,
        }
        .into());
    }
    tracing::info!(client_id = id, "Client deleted");
    Ok(StatusCode::NO_CONTENT)
}
