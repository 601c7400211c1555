use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::session::{lifecycle, SessionStore};

/// POST /api/session/end - drop the caller's dashboard state.
/// Any reports load still in flight for it is discarded.
pub async fn end(store: web::Data<SessionStore>, session: Session) -> HttpResponse {
    let ended = lifecycle::end(&session, &store);
    HttpResponse::Ok().json(serde_json::json!({ "ended": ended }))
}
