//! Voto DTOs - Data Transfer Objects per l'ingreso dei voti

use serde::{Deserialize, Serialize};

/// DTO per registrare un voto (senza voto_id)
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateVotoDTO {
    pub candidato_id: i32,
    pub total: i32,
}
