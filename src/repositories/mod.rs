//! Repositories module - Coordinatore per tutti i repository del progetto
//!
//! Questo modulo organizza i repository in sotto-moduli separati per una migliore manutenibilità.
//! Ogni repository gestisce le operazioni di database per una specifica entità.

// Nota su sqlx: le query qui sotto usano sqlx::query / sqlx::query_as nella
// variante runtime, con FromRow derivato sulle struct di riga, invece delle
// macro query! con verifica statica: il check a compile time richiede lo
// schema del database raggiungibile durante la build. Stessa sintassi con i
// placeholder `?`, stesso pool di connessioni, e l'errore si propaga con
// `await?` fino al service che lo traduce nel codice HTTP adeguato.

// Dichiarazione dei sotto-moduli
pub mod candidato;
pub mod traits;
pub mod user;
pub mod voto;

// Re-esportazione dei trait per facilitare l'import
pub use traits::{Create, Delete, Read, Update};

// Re-esportazione delle struct dei repository per facilitare l'import
pub use candidato::CandidatoRepository;
pub use user::UserRepository;
pub use voto::VotoRepository;
