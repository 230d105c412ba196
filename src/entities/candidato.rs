//! Candidato entity - Entità candidato con eliminazione logica

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// `estado = false` rappresenta l'eliminazione logica: la riga non viene mai
/// rimossa fisicamente.
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Candidato {
    pub candidato_id: i32,
    pub nombre: String,
    pub tipo: String,
    pub descripcion: Option<String>,
    pub candidato: Option<String>,
    pub lista_id: i32,
    pub tipocandidato_id: Option<i32>,
    pub estado: bool,
}
