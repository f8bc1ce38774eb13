use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::password;
use crate::db;
use crate::error::AppError;
use crate::models::NewUser;
use crate::state::SharedState;

// Absent JSON fields deserialize to empty strings and fail the same
// emptiness check as explicit empty values, keeping both at 400.
#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn register(
    State(state): State<SharedState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    if req.first_name.is_empty()
        || req.last_name.is_empty()
        || req.email.is_empty()
        || req.phone_number.is_empty()
        || req.password.is_empty()
    {
        return Err(AppError::Validation("All fields are required".to_string()));
    }

    // Fast path; the unique constraints below are the real guarantee
    if db::users::find_by_email_or_phone(&state.pool, &req.email, &req.phone_number)
        .await?
        .is_some()
    {
        return Err(AppError::Duplicate(
            "A user with this email or phone number already exists".to_string(),
        ));
    }

    let pw_hash = password::hash(&req.password).map_err(AppError::Internal)?;

    let new_user = NewUser {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone_number: req.phone_number,
    };

    let user = match db::users::create(&state.pool, &new_user, &pw_hash).await {
        Ok(user) => user,
        // Concurrent duplicate that slipped past the fast path
        Err(e) if db::users::is_unique_violation(&e) => {
            return Err(AppError::Duplicate(
                "A user with this email or phone number already exists".to_string(),
            ));
        }
        Err(e) => return Err(AppError::Database(e)),
    };

    tracing::info!("Registered user {} ({})", user.id, user.email);

    // Best-effort from here on: the row is committed and stays either way
    if let Some(mailer) = &state.mailer {
        if let Err(e) = mailer.send_welcome(&user).await {
            tracing::error!("Failed to send welcome email to {}: {e}", user.email);
            return Err(AppError::Notification(
                "Registration successful, but email could not be sent.".to_string(),
            ));
        }
    } else {
        tracing::warn!("SMTP not configured, skipping welcome email for {}", user.email);
    }

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!(
                "Welcome, {}! You have successfully registered.",
                user.first_name
            ),
        }),
    ))
}

pub async fn login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "Email and password are required".to_string(),
        ));
    }

    let user = db::users::find_by_email(&state.pool, &req.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    let valid = password::verify(&req.password, &user.password_hash).map_err(AppError::Internal)?;

    if !valid {
        return Err(AppError::InvalidCredentials(
            "Invalid credentials".to_string(),
        ));
    }

    Ok(Json(MessageResponse {
        message: format!("Welcome back, {}!", user.first_name),
    }))
}
