//! Services module - Coordinatore per tutti i service handler HTTP
//!
//! Questo modulo organizza i service handlers in sotto-moduli separati per una migliore manutenibilità.
//! Ogni modulo gestisce gli endpoint HTTP per una specifica funzionalità.

pub mod auth;
pub mod candidato;
pub mod voto;

// Re-exports per facilitare l'import
pub use auth::{get_current_user, login_user, register_user};
pub use candidato::{actualizar_candidato, eliminar_candidato, lista_candidatos, lista_votos};
pub use voto::ingresar_voto;

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
