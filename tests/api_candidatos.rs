//! Integration tests per gli endpoints dei candidati
//!
//! Test per:
//! - GET /candidatos
//! - GET /candidatos/votos
//! - PUT /candidatos/{id}
//! - DELETE /candidatos/{id}

mod common;

#[cfg(test)]
mod candidato_tests {
    use super::common::*;
    use serde_json::json;
    use sqlx::MySqlPool;
    use votaciones_server::repositories::Read;

    // ============================================================
    // Test per GET /candidatos - lista_candidatos
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("listas", "candidatos")))]
    async fn test_lista_candidatos(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server.get("/candidatos").await;

        response.assert_status_ok();
        let json_body: serde_json::Value = response.json();

        let listado = json_body["Listado"].as_array().expect("Listado presente");
        assert_eq!(listado.len(), 4);

        assert_eq!(listado[0]["nombre"], "Maria Perez");
        assert_eq!(listado[0]["lista"], "Lista Azul");
        assert_eq!(listado[0]["tipo"], "presidencial");

        // il listado non filtra su estado: anche il candidato disattivato compare
        assert!(
            listado.iter().any(|c| c["nombre"] == "Pedro Ruiz"),
            "Inactive candidates still appear in the listing"
        );

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("listas", "candidatos")))]
    async fn test_lista_candidatos_idempotente(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let first = server.get("/candidatos").await;
        first.assert_status_ok();
        let first_json: serde_json::Value = first.json();

        let second = server.get("/candidatos").await;
        second.assert_status_ok();
        let second_json: serde_json::Value = second.json();

        // due chiamate senza mutazioni intermedie: stesso contenuto, stesso ordine
        assert_eq!(first_json, second_json);

        Ok(())
    }

    // ============================================================
    // Test per GET /candidatos/votos - lista_votos
    // ============================================================

    #[sqlx::test(fixtures(path = "../fixtures", scripts("listas", "candidatos", "votos")))]
    async fn test_lista_votos(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server.get("/candidatos/votos").await;

        response.assert_status_ok();
        let json_body: serde_json::Value = response.json();

        let listado = json_body["Listado"].as_array().expect("Listado presente");

        // inner join: Ana Gomez non ha voti e non compare
        assert_eq!(listado.len(), 2);

        assert_eq!(listado[0]["nombre"], "Maria Perez");
        assert_eq!(listado[0]["total_votos"], 15);
        assert_eq!(listado[1]["nombre"], "Juan Lopez");
        assert_eq!(listado[1]["total_votos"], 7);

        assert!(
            !listado.iter().any(|c| c["nombre"] == "Ana Gomez"),
            "Candidates with zero votes are absent from the totals"
        );

        Ok(())
    }

    // ============================================================
    // Test per PUT /candidatos/{id} - actualizar_candidato
    // ============================================================

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("listas", "candidatos", "tipocandidatos")
    ))]
    async fn test_actualizar_candidato(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "descripcion": "Texto actualizado",
            "candidato_id": 1,
            "candidato": "Maria P.",
            "tipocandidato_id": 2
        });

        let response = server.put("/candidatos/1").json(&body).await;

        response.assert_status_ok();
        let json_body: serde_json::Value = response.json();
        assert_eq!(json_body["message"], "actualizado correctamente");

        // vengono sovrascritti il campo candidato e il riferimento al tipo
        let candidato = state
            .candidato
            .read(&1)
            .await?
            .expect("candidato presente");
        assert_eq!(candidato.candidato.as_deref(), Some("Maria P."));
        assert_eq!(candidato.tipocandidato_id, Some(2));

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("listas", "candidatos")))]
    async fn test_actualizar_candidato_no_existente(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let body = json!({
            "descripcion": "Texto actualizado",
            "candidato_id": 999
        });

        let response = server.put("/candidatos/999").json(&body).await;

        response.assert_status_not_found();
        let json_body: serde_json::Value = response.json();
        assert_eq!(json_body["message"], "Candidato no encontrado");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("listas", "candidatos")))]
    async fn test_actualizar_candidato_sin_campos_obligatorios(
        pool: MySqlPool,
    ) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server.put("/candidatos/1").json(&json!({})).await;

        response.assert_status_unprocessable_entity();
        let json_body: serde_json::Value = response.json();

        assert_eq!(json_body["status"], false);
        // entrambi i campi obbligatori vengono enumerati
        assert!(json_body["errors"].get("descripcion").is_some());
        assert!(json_body["errors"].get("candidato_id").is_some());

        Ok(())
    }

    // ============================================================
    // Test per DELETE /candidatos/{id} - eliminar_candidato
    // ============================================================

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("listas", "candidatos", "tipocandidatos")
    ))]
    async fn test_eliminar_candidato(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server.delete("/candidatos/1").await;

        response.assert_status_ok();
        let json_body: serde_json::Value = response.json();
        assert_eq!(json_body["message"], "candidato eliminado correctamente");

        // eliminazione logica: la riga resta, estado passa a false
        let candidato = state
            .candidato
            .read(&1)
            .await?
            .expect("la riga non viene rimossa fisicamente");
        assert!(!candidato.estado);

        // la cascata disattiva tutti i tipi dipendenti
        let tipos = state.candidato.find_tipos_by_candidato(&1).await?;
        assert_eq!(tipos.len(), 2);
        assert!(tipos.iter().all(|t| !t.estado));

        Ok(())
    }

    #[sqlx::test(fixtures(
        path = "../fixtures",
        scripts("listas", "candidatos", "tipocandidatos")
    ))]
    async fn test_eliminar_candidato_dos_veces(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let first = server.delete("/candidatos/1").await;
        first.assert_status_ok();

        // la seconda chiamata trova il candidato già disattivato: 404,
        // nessun effetto collaterale
        let second = server.delete("/candidatos/1").await;
        second.assert_status_not_found();
        let second_json: serde_json::Value = second.json();
        assert_eq!(second_json["message"], "Candidato no encontrado");

        let third = server.delete("/candidatos/1").await;
        third.assert_status_not_found();

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("listas", "candidatos")))]
    async fn test_eliminar_candidato_inexistente(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        let response = server.delete("/candidatos/999").await;

        response.assert_status_not_found();
        let json_body: serde_json::Value = response.json();
        assert_eq!(json_body["message"], "Candidato no encontrado");

        Ok(())
    }

    #[sqlx::test(fixtures(path = "../fixtures", scripts("listas", "candidatos")))]
    async fn test_eliminar_candidato_ya_desactivado(pool: MySqlPool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state.clone());

        // il candidato 4 è nei fixtures con estado = false
        let response = server.delete("/candidatos/4").await;

        response.assert_status_not_found();
        let json_body: serde_json::Value = response.json();
        assert_eq!(json_body["message"], "Candidato no encontrado");

        Ok(())
    }
}
