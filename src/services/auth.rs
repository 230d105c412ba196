//! Auth services - Registrazione, login ed emissione del bearer token

use crate::core::error::errors_to_json;
use crate::core::{AppError, AppState, encode_jwt};
use crate::dtos::{CreateUserDTO, RegisterUserDTO, UserDTO};
use crate::entities::User;
use crate::repositories::Create;
use axum::{
    Extension,
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_macros::debug_handler;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::{Validate, ValidationError, ValidationErrors};

/// DTO per il login (solo email e password)
#[derive(serde::Deserialize, Validate)]
pub struct LoginDTO {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "The email field is required"),
        email(message = "The email must be a valid email address")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "The password field is required"))]
    pub password: String,
}

#[debug_handler]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterUserDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // 1. Validare nome, email e password in un'unica passata
    // 2. Aggiungere l'eventuale violazione di unicità dell'email agli stessi errori
    // 3. Solo a validazione pulita: hash della password e insert dell'utente
    // 4. Emettere il token e rispondere 201 con {status, message, token}

    let mut errors = match body.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(e) => e,
    };

    // l'unicità dell'email fa parte della stessa passata di validazione,
    // così il client riceve tutti i campi errati insieme
    if !body.email.is_empty() && state.user.find_by_email(&body.email).await?.is_some() {
        let mut taken = ValidationError::new("unique");
        taken.message = Some("The email has already been taken".into());
        errors.add("email", taken);
    }

    if !errors.is_empty() {
        warn!("Registration rejected: invalid fields");
        return Err(
            AppError::unauthorized("Existen campos vacios").with_errors(errors_to_json(&errors))
        );
    }

    let password_hash = User::hash_password(&body.password)
        .map_err(|_| AppError::internal_server_error("Failed to hash password"))?;

    let new_user = CreateUserDTO {
        name: body.name,
        email: body.email,
        password: password_hash,
    };

    let created_user = state.user.create(&new_user).await?;

    let token = encode_jwt(
        created_user.email.clone(),
        created_user.user_id,
        &state.jwt_secret,
    )?;

    info!("User {} registered", created_user.user_id);
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": true,
            "message": "User Created Successfully",
            "token": token,
        })),
    ))
}

pub async fn login_user(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // validazione formale prima di toccare il database
    if let Err(e) = body.validate() {
        return Err(AppError::unauthorized("validation error").with_errors(errors_to_json(&e)));
    }

    // email sconosciuta e password errata producono lo stesso identico
    // messaggio: non va rivelato quale dei due controlli è fallito
    let user = match state.user.find_by_email(&body.email).await? {
        Some(user) if user.verify_password(&body.password) => user,
        _ => {
            warn!("Login failed");
            return Err(AppError::unauthorized(
                "Email & Password does not match with our record.",
            ));
        }
    };

    let token = encode_jwt(user.email, user.user_id, &state.jwt_secret)?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": true,
            "message": "User Logged In Successfully",
            "token": token,
        })),
    ))
}

/// Profilo dell'utente autenticato (richiede bearer token)
#[instrument(skip(current_user), fields(user_id = %current_user.user_id))]
pub async fn get_current_user(
    Extension(current_user): Extension<User>, // ottenuto dall'autenticazione tramite token jwt
) -> Result<Json<UserDTO>, AppError> {
    info!("Returning profile for authenticated user");
    Ok(Json(UserDTO::from(current_user)))
}
