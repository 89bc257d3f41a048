//! Handlers for the `/auth` resource: the account lifecycle.
//!
//! Covers registration with email verification, idempotent confirmation,
//! login with JWT issuance, and the forgot/reset password flow. Login,
//! confirm, forgot, and reset all use fixed generic messages so responses
//! never reveal whether an email or token exists.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use helpdesk_core::error::CoreError;
use helpdesk_core::validation::{
    normalize_email, require_trimmed, validate_email, validate_password,
};
use helpdesk_db::models::account::{Account, AccountResponse, CreateAccount};
use helpdesk_db::repositories::AccountRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{hash_password, verify_password};
use crate::auth::token::generate_opaque_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAccount;
use crate::state::AppState;

/// Lifetime of a password-reset token.
const RESET_TOKEN_TTL_MINS: i64 = 60;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/forgot`.
#[derive(Debug, Deserialize)]
pub struct ForgotRequest {
    pub email: String,
}

/// Request body for `POST /auth/reset`.
#[derive(Debug, Deserialize)]
pub struct ResetRequest {
    pub token: String,
    pub password: String,
}

/// Generic `{message}` response used by register/confirm/forgot/reset.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub account: AccountResponse,
}

/// Response for `GET /auth/me`: the public projection plus account status.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    #[serde(flatten)]
    pub account: AccountResponse,
    pub verified: bool,
    pub created_at: helpdesk_core::types::Timestamp,
    pub updated_at: helpdesk_core::types::Timestamp,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create a new unverified account and send the verification email.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let name = require_trimmed("name", &input.name)?;
    let surname = require_trimmed("surname", &input.surname)?;
    let email = normalize_email(&input.email);
    validate_email(&email)?;
    validate_password(&input.password)?;

    if AccountRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(CoreError::Conflict("An account with this email already exists".into()).into());
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    let verification_token = generate_opaque_token();

    let account = AccountRepo::create(
        &state.pool,
        &CreateAccount {
            name,
            surname,
            email,
            password_hash,
            verification_token: verification_token.clone(),
        },
    )
    .await?;

    tracing::info!(account_id = account.id, "Account registered (unverified)");

    // Persist-then-send is not atomic: if the send fails the unverified row
    // stays behind and a retried registration collides on the email index.
    send_or_skip(&state, &account.email, |mailer, email| async move {
        mailer.send_verification(&email, &verification_token).await
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Registered. Check your email to confirm your account.".into(),
        }),
    ))
}

/// GET /api/auth/confirm/{token}
///
/// Verify the account holding this token. Idempotent: replayed or unknown
/// tokens return 200 with a generic message and change nothing.
pub async fn confirm(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    match AccountRepo::find_by_verification_token(&state.pool, &token).await? {
        Some(account) => {
            if !account.verified {
                AccountRepo::mark_verified(&state.pool, account.id).await?;
                tracing::info!(account_id = account.id, "Account verified");
            }
            Ok(Json(MessageResponse {
                message: "Account verified successfully".into(),
            }))
        }
        // Unknown or already-cleared token: do not reveal which.
        None => Ok(Json(MessageResponse {
            message: "This link was already used or the account is already confirmed.".into(),
        })),
    }
}

/// POST /api/auth/login
///
/// Authenticate with email + password. Returns a bearer token and the
/// public account projection.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = normalize_email(&input.email);
    if email.is_empty() || input.password.is_empty() {
        return Err(CoreError::Validation("Email and password are required".into()).into());
    }

    // Same message for unknown email and wrong password.
    let invalid = || CoreError::Unauthorized("Invalid email or password".into());

    let account = AccountRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid().into());
    }

    // Once the password matched, the email's existence is no secret; say why.
    if !account.verified {
        return Err(CoreError::Forbidden(
            "You must confirm your email before logging in".into(),
        )
        .into());
    }

    let token = generate_token(account.id, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        account: AccountResponse::from(&account),
    }))
}

/// GET /api/auth/me
///
/// Return the authenticated caller's account.
pub async fn me(
    State(state): State<AppState>,
    auth: AuthAccount,
) -> AppResult<Json<MeResponse>> {
    let account = AccountRepo::find_by_id(&state.pool, auth.account_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Account",
            id: auth.account_id,
        })?;

    Ok(Json(me_response(&account)))
}

/// POST /api/auth/forgot
///
/// Request a password reset. Always returns the same generic message; only
/// an existing account gains a reset token and expiry.
pub async fn forgot(
    State(state): State<AppState>,
    Json(input): Json<ForgotRequest>,
) -> AppResult<Json<MessageResponse>> {
    let email = normalize_email(&input.email);
    if email.is_empty() {
        return Err(CoreError::Validation("email is required".into()).into());
    }

    if let Some(account) = AccountRepo::find_by_email(&state.pool, &email).await? {
        let reset_token = generate_opaque_token();
        let expires = Utc::now() + chrono::Duration::minutes(RESET_TOKEN_TTL_MINS);
        AccountRepo::set_reset_token(&state.pool, account.id, &reset_token, expires).await?;

        tracing::info!(account_id = account.id, "Password reset requested");

        send_or_skip(&state, &account.email, |mailer, email| async move {
            mailer.send_password_reset(&email, &reset_token).await
        })
        .await?;
    }

    Ok(Json(MessageResponse {
        message: "If the email exists, we will send instructions.".into(),
    }))
}

/// POST /api/auth/reset
///
/// Consume a reset token and set a new password. Expired, consumed, and
/// never-issued tokens are indistinguishable.
pub async fn reset(
    State(state): State<AppState>,
    Json(input): Json<ResetRequest>,
) -> AppResult<Json<MessageResponse>> {
    if input.token.trim().is_empty() {
        return Err(CoreError::Validation("Token and password are required".into()).into());
    }
    validate_password(&input.password)?;

    let account = AccountRepo::find_by_valid_reset_token(&state.pool, &input.token)
        .await?
        .ok_or_else(|| AppError::BadRequest("Invalid or expired token".into()))?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;
    AccountRepo::update_password_and_clear_reset(&state.pool, account.id, &password_hash).await?;

    tracing::info!(account_id = account.id, "Password reset completed");

    Ok(Json(MessageResponse {
        message: "Password updated".into(),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn me_response(account: &Account) -> MeResponse {
    MeResponse {
        account: AccountResponse::from(account),
        verified: account.verified,
        created_at: account.created_at,
        updated_at: account.updated_at,
    }
}

/// Run a mail send through the configured mailer, or log and skip when SMTP
/// is not configured. A send failure fails the whole request.
async fn send_or_skip<F, Fut>(state: &AppState, email: &str, send: F) -> AppResult<()>
where
    F: FnOnce(std::sync::Arc<helpdesk_mailer::Mailer>, String) -> Fut,
    Fut: std::future::Future<Output = Result<(), helpdesk_mailer::MailError>>,
{
    match &state.mailer {
        Some(mailer) => {
            send(std::sync::Arc::clone(mailer), email.to_string()).await?;
            Ok(())
        }
        None => {
            tracing::warn!(to = email, "SMTP not configured, skipping email delivery");
            Ok(())
        }
    }
}
