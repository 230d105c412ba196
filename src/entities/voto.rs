//! Voto entity - Registrazione di voti per candidato

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Una riga per ogni ingresso: `total` è il conteggio portato in quel
/// momento, mai aggiornato dopo l'insert.
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Voto {
    pub voto_id: i32,
    pub candidato_id: i32,
    pub total: i32,
}
