//! CandidatoRepository - Repository per candidati e tipi dipendenti

use super::{Delete, Read, Update};
use crate::dtos::{CandidatoConListaDTO, CandidatoVotosDTO, UpdateCandidatoDTO};
use crate::entities::{Candidato, TipoCandidato};
use sqlx::{Error, MySqlPool};

// CANDIDATO REPO
pub struct CandidatoRepository {
    connection_pool: MySqlPool,
}

impl CandidatoRepository {
    pub fn new(connection_pool: MySqlPool) -> CandidatoRepository {
        Self { connection_pool }
    }

    /// Listado candidato + nome della lista (inner join con listas).
    /// Nessun filtro su estado: anche i candidati disattivati compaiono.
    /// L'ORDER BY rende il risultato stabile tra una chiamata e l'altra.
    pub async fn find_con_lista(&self) -> Result<Vec<CandidatoConListaDTO>, Error> {
        let filas = sqlx::query_as::<_, CandidatoConListaDTO>(
            r#"
            SELECT
                c.nombre,
                l.nombre AS lista,
                c.tipo
            FROM candidatos c
            INNER JOIN listas l ON c.lista_id = l.lista_id
            ORDER BY c.candidato_id ASC
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(filas)
    }

    /// Totale voti per candidato, raggruppato per identità del candidato.
    /// Inner join: i candidati senza voti registrati non compaiono.
    pub async fn find_con_votos(&self) -> Result<Vec<CandidatoVotosDTO>, Error> {
        // SUM su INT in MySQL produce DECIMAL: il CAST riporta a BIGINT
        let filas = sqlx::query_as::<_, CandidatoVotosDTO>(
            r#"
            SELECT
                c.nombre,
                CAST(SUM(v.total) AS SIGNED) AS total_votos
            FROM candidatos c
            INNER JOIN votos v ON c.candidato_id = v.candidato_id
            GROUP BY c.candidato_id, c.nombre
            ORDER BY c.candidato_id ASC
            "#,
        )
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(filas)
    }

    /// Tipi dipendenti di un candidato, attivi e non
    pub async fn find_tipos_by_candidato(
        &self,
        candidato_id: &i32,
    ) -> Result<Vec<TipoCandidato>, Error> {
        let tipos = sqlx::query_as::<_, TipoCandidato>(
            r#"
            SELECT tipocandidato_id, candidato_id, nombre, estado
            FROM tipocandidatos
            WHERE candidato_id = ?
            ORDER BY tipocandidato_id ASC
            "#,
        )
        .bind(candidato_id)
        .fetch_all(&self.connection_pool)
        .await?;

        Ok(tipos)
    }
}

impl Read<Candidato, i32> for CandidatoRepository {
    async fn read(&self, id: &i32) -> Result<Option<Candidato>, Error> {
        let candidato = sqlx::query_as::<_, Candidato>(
            r#"
            SELECT candidato_id, nombre, tipo, descripcion, candidato,
                   lista_id, tipocandidato_id, estado
            FROM candidatos
            WHERE candidato_id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.connection_pool)
        .await?;

        Ok(candidato)
    }
}

impl Update<Candidato, UpdateCandidatoDTO, i32> for CandidatoRepository {
    async fn update(&self, id: &i32, data: &UpdateCandidatoDTO) -> Result<Candidato, Error> {
        // First, get the current candidato to ensure it exists
        self.read(id).await?.ok_or(Error::RowNotFound)?;

        // Vengono sovrascritti solo il riferimento al tipo e il campo candidato
        sqlx::query(
            "UPDATE candidatos SET candidato = ?, tipocandidato_id = ? WHERE candidato_id = ?",
        )
        .bind(&data.candidato)
        .bind(data.tipocandidato_id)
        .bind(id)
        .execute(&self.connection_pool)
        .await?;

        // Fetch and return the updated candidato
        self.read(id).await?.ok_or(Error::RowNotFound)
    }
}

impl Delete<i32> for CandidatoRepository {
    /// Eliminazione logica: disattiva i tipi dipendenti e il candidato
    /// stesso in un'unica transazione, o tutto o niente. Nessuna riga viene
    /// rimossa fisicamente.
    async fn delete(&self, candidato_id: &i32) -> Result<(), Error> {
        let mut tx = self.connection_pool.begin().await?;

        sqlx::query("UPDATE tipocandidatos SET estado = FALSE WHERE candidato_id = ?")
            .bind(candidato_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE candidatos SET estado = FALSE WHERE candidato_id = ?")
            .bind(candidato_id)
            .execute(&mut *tx)
            .await?;

        // Commit the transaction
        tx.commit().await?;

        Ok(())
    }
}
