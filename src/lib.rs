//! Server library - espone i moduli principali per i test

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

// Re-export dei tipi principali per facilitare l'import
pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;

/// Crea il router principale dell'applicazione
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/auth", configure_auth_routes(state.clone()))
        .nest("/candidatos", configure_candidato_routes())
        .nest("/votos", configure_voto_routes())
        .with_state(state)
}

/// Configura le routes di autenticazione: login e register pubbliche,
/// il profilo richiede il bearer token
fn configure_auth_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use services::*;

    let protected = Router::new()
        .route("/me", get(get_current_user))
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    Router::new()
        .route("/login", post(login_user))
        .route("/register", post(register_user))
        .merge(protected)
}

/// Configura le routes per listado, aggiornamento ed eliminazione dei candidati
fn configure_candidato_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new()
        .route("/", get(lista_candidatos))
        .route("/votos", get(lista_votos))
        .route("/{id}", put(actualizar_candidato).delete(eliminar_candidato))
}

/// Configura le routes per l'ingreso dei voti
fn configure_voto_routes() -> Router<Arc<AppState>> {
    use services::*;

    Router::new().route("/", post(ingresar_voto))
}
