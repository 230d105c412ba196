//! TipoCandidato entity - Tipo dipendente di un candidato
//!
//! Ogni riga appartiene a un candidato e viene disattivata in blocco
//! insieme al candidato durante l'eliminazione logica.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct TipoCandidato {
    pub tipocandidato_id: i32,
    pub candidato_id: i32,
    pub nombre: String,
    pub estado: bool,
}
