use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use civic_admin::config::AppConfig;
use civic_admin::handlers;
use civic_admin::reports::ReportsClient;
use civic_admin::session::{SessionStore, lifecycle};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    let client = match ReportsClient::new(&config) {
        Ok(client) => web::Data::new(client),
        Err(e) => {
            log::error!("Cannot start: {e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };
    let store = web::Data::new(SessionStore::with_capacity(config.max_sessions));

    lifecycle::spawn_sweeper(store.clone(), config.sweep_interval, config.session_idle);

    // Cookie signing key: load from SESSION_KEY for sessions that survive restarts
    let secret_key = match config.session_key.as_deref() {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!(
        "Starting server at http://{} (reports from {})",
        config.bind_addr,
        client.url()
    );

    HttpServer::new(move || {
        let session_mw = SessionMiddleware::builder(
            CookieSessionStore::default(),
            secret_key.clone(),
        )
        .cookie_secure(false)
        .cookie_http_only(true)
        .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(client.clone())
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
