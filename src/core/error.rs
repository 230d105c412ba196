use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// Corpo JSON degli errori: flag booleano + messaggio, con gli errori di
/// campo enumerati quando presenti
#[derive(Serialize)]
struct ErrorResponse {
    status: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<serde_json::Value>,
}

pub struct AppError {
    status: StatusCode,
    message: String,
    errors: Option<serde_json::Value>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    /// Aggiunge la mappa campo -> messaggi alla risposta di errore
    pub fn with_errors(mut self, errors: serde_json::Value) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unprocessable_entity(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::not_found("Resource not found"),

            // il messaggio del guasto sottostante arriva fino al client
            other => Self::internal_server_error(other.to_string()),
        }
    }
}

impl From<axum::Error> for AppError {
    fn from(err: axum::Error) -> Self {
        Self::internal_server_error(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::unprocessable_entity("validation error").with_errors(errors_to_json(&err))
    }
}

/// Serializza gli errori di validazione come mappa campo -> lista di
/// messaggi, un elemento per ogni regola violata
pub fn errors_to_json(errors: &validator::ValidationErrors) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let messages: Vec<serde_json::Value> = field_errors
                .iter()
                .map(|e| {
                    let text = match &e.message {
                        Some(message) => message.to_string(),
                        None => e.code.to_string(),
                    };
                    serde_json::Value::String(text)
                })
                .collect();
            (field.to_string(), serde_json::Value::Array(messages))
        })
        .collect();

    serde_json::Value::Object(map)
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(ErrorResponse {
            status: false,
            message: self.message,
            errors: self.errors,
        });
        (self.status, body).into_response()
    }
}
