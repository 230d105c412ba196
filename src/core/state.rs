//! Application State - Stato globale dell'applicazione
//!
//! Contiene i repository e la configurazione condivisa necessaria
//! per gestire le richieste.

use crate::repositories::{CandidatoRepository, UserRepository, VotoRepository};
use sqlx::MySqlPool;

/// Stato globale dell'applicazione condiviso tra tutte le route e middleware
pub struct AppState {
    /// Repository per la gestione degli utenti registrati
    pub user: UserRepository,

    /// Repository per la gestione dei candidati e dei tipi dipendenti
    pub candidato: CandidatoRepository,

    /// Repository per la registrazione dei voti
    pub voto: VotoRepository,

    /// Secret key per JWT token
    pub jwt_secret: String,
}

impl AppState {
    /// Crea una nuova istanza di AppState inizializzando tutti i repository
    /// con il pool di connessioni fornito e la JWT secret.
    pub fn new(pool: MySqlPool, jwt_secret: String) -> Self {
        Self {
            user: UserRepository::new(pool.clone()),
            candidato: CandidatoRepository::new(pool.clone()),
            voto: VotoRepository::new(pool),
            jwt_secret,
        }
    }
}
