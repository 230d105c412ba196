//! Voto services - Ingreso dei voti

use crate::core::{AppError, AppState};
use crate::dtos::CreateVotoDTO;
use crate::repositories::Create;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument};

#[instrument(skip(state), fields(candidato_id = %body.candidato_id))]
pub async fn ingresar_voto(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateVotoDTO>, // JSON body
) -> Result<impl IntoResponse, AppError> {
    // nessuna verifica referenziale su candidato_id: il totale entra così com'è
    let voto = state.voto.create(&body).await?;

    info!(
        "Voto {} registrado para candidato {}",
        voto.voto_id, voto.candidato_id
    );
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "Voto ingresado correctamente" })),
    ))
}
