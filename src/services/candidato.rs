//! Candidato services - Listados, aggiornamento ed eliminazione logica

use crate::core::{AppError, AppState};
use crate::dtos::UpdateCandidatoDTO;
use crate::repositories::{Delete, Read, Update};
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[instrument(skip(state))]
pub async fn lista_candidatos(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    // join con listas; nessun filtro su estado, anche i disattivati compaiono
    let candidatos = state.candidato.find_con_lista().await?;
    info!("Listado de candidatos: {} filas", candidatos.len());
    Ok(Json(json!({ "Listado": candidatos })))
}

#[instrument(skip(state))]
pub async fn lista_votos(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    // inner join con votos: i candidati senza voti non compaiono nel listado
    let totales = state.candidato.find_con_votos().await?;
    info!("Listado de totales: {} filas", totales.len());
    Ok(Json(json!({ "Listado": totales })))
}

pub async fn actualizar_candidato(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>, // parametro dalla URL /candidatos/{id}
    Json(body): Json<UpdateCandidatoDTO>,
) -> Result<Response, AppError> {
    // 1. Validare descripcion e candidato_id prima della lookup
    // 2. Lookup esplicita: se il candidato non esiste si risponde 404
    // 3. Sovrascrivere candidato e tipocandidato_id e persistere
    body.validate()?;

    if state.candidato.read(&id).await?.is_none() {
        warn!("Candidato {} no encontrado", id);
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "message": "Candidato no encontrado" })),
        )
            .into_response());
    }

    state.candidato.update(&id, &body).await?;

    info!("Candidato {} actualizado", id);
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "actualizado correctamente" })),
    )
        .into_response())
}

pub async fn eliminar_candidato(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>, // parametro dalla URL /candidatos/{id}
) -> Result<Response, AppError> {
    // candidato assente o già disattivato: 404 in entrambi i casi, quindi
    // una seconda eliminazione consecutiva non ha effetti collaterali
    let candidato = match state.candidato.read(&id).await? {
        Some(c) if c.estado => c,
        _ => {
            warn!("Candidato {} no encontrado", id);
            return Ok((
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Candidato no encontrado" })),
            )
                .into_response());
        }
    };

    // cascata logica: tipi dipendenti + candidato, in una sola transazione
    state.candidato.delete(&candidato.candidato_id).await?;

    info!("Candidato {} eliminado", id);
    Ok((
        StatusCode::OK,
        Json(json!({ "message": "candidato eliminado correctamente" })),
    )
        .into_response())
}
