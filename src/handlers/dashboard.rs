use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::reports::ReportsClient;
use crate::session::{self, SessionStore};

/// GET /api/dashboard - headline totals, category breakdown and department overview.
pub async fn index(
    store: web::Data<SessionStore>,
    client: web::Data<ReportsClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let id = session::resolve(&session, &store, &client)?;
    let summary = store
        .with_session(&id, |s| s.summary())
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(summary))
}

/// GET /api/scoreboard - departments ranked by solved issues.
pub async fn scoreboard(
    store: web::Data<SessionStore>,
    client: web::Data<ReportsClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let id = session::resolve(&session, &store, &client)?;
    let board = store
        .with_session(&id, |s| s.scoreboard())
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(board))
}
