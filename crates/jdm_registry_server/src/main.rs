//! Registry server entry point.
//!
//! Startup order: config, logging, database open + schema, seeding, serve.
//! Any failure before serving is fatal.

use jdm_registry_core::{default_log_level, init_logging, SeedReport, SharedPartRepository};
use jdm_registry_server::{build_router, AppState, ServerConfig};
use log::{error, info};
use std::fmt::Display;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env().unwrap_or_else(|err| fatal("config_load", err));

    let level = config.log_level.as_deref().unwrap_or(default_log_level());
    if let Err(err) = init_logging(level, config.log_dir.as_deref()) {
        fatal("logging_init", err);
    }

    let conn = config
        .database
        .open()
        .unwrap_or_else(|err| fatal("db_open", err));
    info!(
        "event=db_ready module=server status=ok location={}",
        config.database
    );

    let state = AppState::new(SharedPartRepository::new(conn));
    match state.service().seed_starter_inventory() {
        Ok(SeedReport::Seeded { inserted, failed }) => info!(
            "event=db_seed module=server status=ok inserted={inserted} failed={failed}"
        ),
        Ok(SeedReport::Skipped { .. }) => {}
        Err(err) => error!("event=db_seed module=server status=error error={err}"),
    }

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|err| fatal("server_bind", err));
    info!("event=server_start module=server status=ok addr={addr}");

    if let Err(err) = axum::serve(listener, build_router(state)).await {
        fatal("server_run", err);
    }
}

fn fatal(event: &str, err: impl Display) -> ! {
    error!("event={event} module=server status=error error={err}");
    eprintln!("jdm-registry: {event} failed: {err}");
    std::process::exit(1);
}
