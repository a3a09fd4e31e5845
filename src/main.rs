use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::handle;
use crate::simulation::Simulation;
use crate::state::AppState;
use crate::store::ListingStore;
use astra::Server;
use std::sync::Arc;

mod config;
mod db;
mod domain;
mod engine;
mod errors;
mod favorites;
mod map;
mod notifications;
mod responses;
mod router;
mod seed;
mod simulation;
mod state;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            std::process::exit(1);
        }
    };
    config.logging.init();

    // 1️⃣ Database handle + schema (favorites live here)
    let db = Database::new(config.database.path.clone());
    if let Err(e) = init_db(&db, &config.database.schema_path) {
        tracing::error!(error = %e, "database initialization failed");
        std::process::exit(1);
    }

    // 2️⃣ Listing store from the seed set
    let store = match ListingStore::new(seed::seed_listings()) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "invalid seed listings");
            std::process::exit(1);
        }
    };

    let state = match AppState::new(&config, db, store) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };
    tracing::info!(map_backend = state.map.name(), "map backend selected");

    // 3️⃣ Background simulation
    let simulation = config
        .simulation
        .enabled
        .then(|| Simulation::start(Arc::clone(&state), &config.simulation));

    // 4️⃣ Serve requests
    let addr = match config.socket_addr() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!(error = %e, "invalid listen address");
            std::process::exit(1);
        }
    };
    tracing::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(config.server.max_workers);

    let handler_state = Arc::clone(&state);
    let result = server.serve(move |req, _info| match handle(req, &handler_state) {
        Ok(resp) => resp,
        Err(err) => templates::html_error_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    if let Some(simulation) = simulation {
        simulation.stop();
    }
    tracing::info!("Server shut down cleanly.");
}
