//! VotoRepository - Repository per la registrazione dei voti

use super::Create;
use crate::dtos::CreateVotoDTO;
use crate::entities::Voto;
use sqlx::{Error, MySqlPool};

// VOTO REPO
pub struct VotoRepository {
    connection_pool: MySqlPool,
}

impl VotoRepository {
    pub fn new(connection_pool: MySqlPool) -> VotoRepository {
        Self { connection_pool }
    }

    /// Somma dei voti registrati per un candidato (0 se non ne ha)
    pub async fn sum_by_candidato(&self, candidato_id: &i32) -> Result<i64, Error> {
        let (total,): (i64,) = sqlx::query_as(
            "SELECT CAST(COALESCE(SUM(total), 0) AS SIGNED) FROM votos WHERE candidato_id = ?",
        )
        .bind(candidato_id)
        .fetch_one(&self.connection_pool)
        .await?;

        Ok(total)
    }
}

impl Create<Voto, CreateVotoDTO> for VotoRepository {
    async fn create(&self, data: &CreateVotoDTO) -> Result<Voto, Error> {
        // candidato_id non ha vincolo referenziale: qualsiasi intero entra
        let result = sqlx::query("INSERT INTO votos (candidato_id, total) VALUES (?, ?)")
            .bind(data.candidato_id)
            .bind(data.total)
            .execute(&self.connection_pool)
            .await?;

        // Get the last inserted ID
        let new_id = result.last_insert_id() as i32;

        Ok(Voto {
            voto_id: new_id,
            candidato_id: data.candidato_id,
            total: data.total,
        })
    }
}
