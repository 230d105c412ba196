//! Candidato DTOs - Data Transfer Objects per candidati

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Riga del listado candidato + nome della lista di appartenenza
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct CandidatoConListaDTO {
    pub nombre: String,
    pub lista: String,
    pub tipo: String,
}

/// Riga del listado candidato + totale voti aggregato
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct CandidatoVotosDTO {
    pub nombre: String,
    pub total_votos: i64,
}

/// DTO per l'aggiornamento di un candidato: descripcion e candidato_id sono
/// obbligatori e vengono validati prima della lookup; candidato e
/// tipocandidato_id sono i campi effettivamente sovrascritti.
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct UpdateCandidatoDTO {
    #[serde(default)]
    #[validate(length(min = 1, message = "The descripcion field is required"))]
    pub descripcion: String,

    #[validate(required(message = "The candidato_id field is required"))]
    pub candidato_id: Option<i32>,

    pub candidato: Option<String>,
    pub tipocandidato_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_sin_obligatorios_enumera_ambos() {
        let dto: UpdateCandidatoDTO = serde_json::from_str("{}").expect("deserializza");
        let errors = dto.validate().expect_err("deve fallire");
        let fields = errors.field_errors();

        assert!(fields.contains_key("descripcion"));
        assert!(fields.contains_key("candidato_id"));
    }

    #[test]
    fn update_valido_pasa() {
        let dto = UpdateCandidatoDTO {
            descripcion: "Nuevo texto".to_string(),
            candidato_id: Some(1),
            candidato: Some("Maria P.".to_string()),
            tipocandidato_id: Some(2),
        };

        assert!(dto.validate().is_ok());
    }
}
