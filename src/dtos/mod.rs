//! DTOs module - Data Transfer Objects
//!
//! Questo modulo contiene tutti i DTOs usati per la comunicazione client-server.
//! I DTOs separano la rappresentazione esterna (API) dalla rappresentazione interna (entities).

pub mod candidato;
pub mod user;
pub mod voto;

// Re-exports per mantenere gli import compatti nei services
pub use candidato::{CandidatoConListaDTO, CandidatoVotosDTO, UpdateCandidatoDTO};
pub use user::{CreateUserDTO, RegisterUserDTO, UserDTO};
pub use voto::CreateVotoDTO;
