//! Entities module - Entità del dominio applicativo
//!
//! Questo modulo contiene tutte le entità (models) che rappresentano i dati persistiti nel database.
//! Ogni entity corrisponde a una tabella nel database.

pub mod candidato;
pub mod tipo_candidato;
pub mod user;
pub mod voto;

// Re-exports per facilitare l'import
pub use candidato::Candidato;
pub use tipo_candidato::TipoCandidato;
pub use user::User;
pub use voto::Voto;
