pub mod dashboard;
pub mod department_handlers;
pub mod issue_handlers;
pub mod session_handlers;

use actix_web::{
    web, Error, HttpRequest, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::JsonPayloadError,
    middleware::Next,
};

use crate::errors::{ApiErrorResponse, AppError};

/// Rejects POST requests that carry a non-JSON body or Content-Type.
///
/// Bodyless POSTs (mark solved, end session) pass through. Browsers cannot
/// send cross-origin JSON with cookies via a simple form POST, so the
/// Content-Type check doubles as a CSRF guard.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    if req.method() == actix_web::http::Method::POST {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok());
        let has_body = req
            .headers()
            .get("content-length")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok())
            .is_some_and(|len| len > 0);

        let is_json = content_type.is_some_and(|ct| ct.starts_with("application/json"));
        if !is_json && (has_body || content_type.is_some()) {
            let body = ApiErrorResponse {
                error: "Content-Type must be application/json for mutation requests".to_string(),
                details: None,
            };
            let response = HttpResponse::UnsupportedMediaType().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Malformed or mistyped JSON bodies answer with the usual 422 error body.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    log::warn!("Rejected JSON body: {err}");
    AppError::Validation(vec![format!("Invalid JSON body: {err}")]).into()
}

/// Register every `/api` route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .route("/dashboard", web::get().to(dashboard::index))
            .route("/scoreboard", web::get().to(dashboard::scoreboard))
            .route("/issues", web::get().to(issue_handlers::list))
            .route("/issues/filter", web::post().to(issue_handlers::filter))
            .route("/issues/{id}/solve", web::post().to(issue_handlers::solve))
            .route("/departments", web::get().to(department_handlers::list))
            .route("/departments/selection", web::post().to(department_handlers::select))
            .route("/departments/assign", web::post().to(department_handlers::assign))
            .route("/session/end", web::post().to(session_handlers::end)),
    );
    cfg.route(
        "/",
        web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/api/dashboard"))
                .finish()
        }),
    );
}

/// JSON 404 for anything outside the registered routes.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiErrorResponse {
        error: "Not found".to_string(),
        details: None,
    })
}
