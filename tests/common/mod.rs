//! Shared test infrastructure for the HTTP-level tests.
//!
//! # Fixtures
//! - `spawn_reports_stub()` - throwaway reports service on an ephemeral port
//! - `unreachable_reports_url()` - a URL nothing listens on
//! - `test_app!` - the full `/api` app with cookie sessions
//! - `session_cookie()` / `wait_for_load!` - drive a dashboard session
//!
//! Test files pull the macros in with `#[macro_use] mod common;`.

#![allow(dead_code, unused_macros)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::time::Duration;

use civic_admin::config::AppConfig;
use civic_admin::reports::ReportsClient;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Cookie name actix-session uses by default.
pub const SESSION_COOKIE: &str = "id";

pub fn sample_reports() -> Value {
    json!([
        {
            "_id": "r-1",
            "title": "Overflowing garbage bin",
            "description": "Bin near the bus stop has not been emptied",
            "category": "Garbage",
            "status": "pending",
            "images": ["https://cdn.example/r-1.jpg"]
        },
        {
            "_id": "r-2",
            "title": "Street light flickering",
            "description": "Main road, opposite the school",
            "category": "Street Light",
            "status": "solved"
        },
        {
            "_id": "r-3",
            "title": "Pipe burst",
            "description": "Water flooding the STREET corner",
            "category": "Water Supply",
            "status": "solved"
        },
        {
            "_id": "r-4",
            "title": "Pothole",
            "category": "Road Damage",
            "status": "in-progress"
        }
    ])
}

// ============================================================================
// REPORTS SERVICE STUB
// ============================================================================

/// Start a reports service answering `GET /api/reports` with `status` and `body`.
/// Returns the full endpoint URL and a handle to stop the server.
pub fn spawn_reports_stub(status: u16, body: Value) -> (String, ServerHandle) {
    let body = web::Data::new(body);
    let status = StatusCode::from_u16(status).expect("valid status code");

    let server = HttpServer::new(move || {
        App::new().app_data(body.clone()).route(
            "/api/reports",
            web::get().to(move |body: web::Data<Value>| async move {
                HttpResponse::build(status).json(body.get_ref())
            }),
        )
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .expect("bind stub reports server");

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (format!("http://{addr}/api/reports"), handle)
}

/// A URL on a port that was free a moment ago; connections are refused.
pub fn unreachable_reports_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind probe port");
    let port = listener.local_addr().expect("probe addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api/reports")
}

pub fn client_for(url: &str) -> ReportsClient {
    let config = AppConfig {
        reports_api_url: url.to_string(),
        reports_timeout: Duration::from_secs(5),
        ..AppConfig::default()
    };
    ReportsClient::new(&config).expect("build reports client")
}

// ============================================================================
// APP SETUP
// ============================================================================

/// Build the `/api` app under test with cookie sessions.
///
/// Usage: `let app = test_app!(store, client);` where both are `web::Data`.
macro_rules! test_app {
    ($store:expr, $client:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::generate(),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data($store.clone())
                .app_data($client.clone())
                .configure(civic_admin::handlers::configure)
                .default_service(actix_web::web::to(civic_admin::handlers::not_found)),
        )
        .await
    };
}

/// Pull the session cookie out of a response.
pub fn session_cookie<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
}

/// Poll `GET /api/issues` until the reports load has finished; evaluates to the view JSON.
///
/// Usage: `let view = wait_for_load!(app, cookie);`
macro_rules! wait_for_load {
    ($app:expr, $cookie:expr) => {{
        let mut finished: Option<serde_json::Value> = None;
        for _ in 0..100 {
            let req = actix_web::test::TestRequest::get()
                .uri("/api/issues")
                .cookie($cookie.clone())
                .to_request();
            let view: serde_json::Value = actix_web::test::call_and_read_body_json(&$app, req).await;
            if view["load_state"] != "loading" {
                finished = Some(view);
                break;
            }
            actix_web::rt::time::sleep(std::time::Duration::from_millis(20)).await;
        }
        finished.expect("reports load did not finish")
    }};
}
