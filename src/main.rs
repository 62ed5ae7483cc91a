mod api;
mod ledger;
mod peers;
mod transaction;

use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

use api::AppState;
use ledger::{DEFAULT_DIFFICULTY, DEFAULT_PEER_TIMEOUT_SECS};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000);
    let difficulty: usize = env::var("DIFFICULTY")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DIFFICULTY);
    let peer_timeout_secs: u64 = env::var("PEER_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_PEER_TIMEOUT_SECS);

    let state = web::Data::new(AppState::new(
        difficulty,
        Duration::from_secs(peer_timeout_secs),
    ));

    println!(
        "⛓️ Starting ledger node {} at http://{host}:{port} (difficulty {difficulty})",
        state.node_id
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
