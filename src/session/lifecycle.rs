use actix_session::Session;
use actix_web::web;
use std::time::Duration;

use super::store::SessionStore;
use crate::errors::AppError;
use crate::reports::ReportsClient;

/// Cookie key holding the dashboard session id.
pub const SESSION_ID_KEY: &str = "dashboard_id";

pub fn get_dashboard_id(session: &Session) -> Option<String> {
    session.get::<String>(SESSION_ID_KEY).unwrap_or(None)
}

/// Return the caller's live dashboard session id, starting a new session
/// (and its reports load) when the cookie is missing or stale.
pub fn resolve(
    session: &Session,
    store: &web::Data<SessionStore>,
    client: &web::Data<ReportsClient>,
) -> Result<String, AppError> {
    if let Some(id) = get_dashboard_id(session) {
        if store.contains(&id) {
            return Ok(id);
        }
        log::info!("Dashboard session expired, starting a new one");
    }

    let id = store.start();
    session
        .insert(SESSION_ID_KEY, &id)
        .map_err(|e| AppError::Session(format!("Failed to store session id: {e}")))?;
    log::info!("Dashboard session started ({} live)", store.len());

    spawn_reports_load(store.clone(), client.clone(), id.clone());
    Ok(id)
}

/// Fire-and-forget load of the reports pool for one session.
/// Failures are logged and leave the pool empty; nothing is retried.
pub fn spawn_reports_load(store: web::Data<SessionStore>, client: web::Data<ReportsClient>, id: String) {
    actix_web::rt::spawn(async move {
        let result = match client.fetch().await {
            Ok(reports) => {
                log::info!("Loaded {} reports from {}", reports.len(), client.url());
                Some(reports)
            }
            Err(e) => {
                log::error!("Error fetching reports from {}: {e}", client.url());
                None
            }
        };
        if !store.deliver_load(&id, result) {
            log::debug!("Session ended before reports arrived, discarding");
        }
    });
}

/// End the caller's dashboard session, if any. Returns whether one was live.
pub fn end(session: &Session, store: &SessionStore) -> bool {
    let ended = get_dashboard_id(session)
        .map(|id| store.end(&id))
        .unwrap_or(false);
    session.remove(SESSION_ID_KEY);
    if ended {
        log::info!("Dashboard session ended ({} live)", store.len());
    }
    ended
}

/// Periodically drop sessions idle for longer than `max_idle`.
pub fn spawn_sweeper(store: web::Data<SessionStore>, interval: Duration, max_idle: Duration) {
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let evicted = store.evict_idle(max_idle);
            if evicted > 0 {
                log::info!("Session sweeper evicted {evicted} idle session(s), {} live", store.len());
            }
        }
    });
}
