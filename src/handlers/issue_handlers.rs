use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::issue::{Report, SolveOutcome};
use crate::reports::ReportsClient;
use crate::session::{self, IssueView, SessionStore};

#[derive(Deserialize, Debug, Default)]
pub struct FilterRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct SolveResponse {
    pub changed: bool,
    pub issue: Report,
    #[serde(flatten)]
    pub view: IssueView,
}

/// GET /api/issues - the filtered view under the session's current filter.
pub async fn list(
    store: web::Data<SessionStore>,
    client: web::Data<ReportsClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let id = session::resolve(&session, &store, &client)?;
    let view = store
        .with_session(&id, |s| s.issue_view())
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/issues/filter - change status and/or search, return the recomputed view.
/// Body: `{ "status": "all" | "<status>", "search": "<text>" }`, both optional.
pub async fn filter(
    store: web::Data<SessionStore>,
    client: web::Data<ReportsClient>,
    session: Session,
    body: web::Json<FilterRequest>,
) -> Result<HttpResponse, AppError> {
    let id = session::resolve(&session, &store, &client)?;
    let FilterRequest { status, search } = body.into_inner();

    let view = store
        .with_session(&id, |s| {
            s.set_filter(status.as_deref(), search)
                .map(|()| s.issue_view())
        })
        .ok_or(AppError::NotFound)?
        .map_err(|e| AppError::Validation(vec![e]))?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/issues/{id}/solve - mark a fetched report solved. Repeating it is harmless.
pub async fn solve(
    store: web::Data<SessionStore>,
    client: web::Data<ReportsClient>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = session::resolve(&session, &store, &client)?;
    let report_id = path.into_inner();

    let response = store
        .with_session(&id, |s| {
            let outcome = s.mark_solved(&report_id)?;
            let issue = s.reports.find(&report_id)?.clone();
            Some(SolveResponse {
                changed: outcome == SolveOutcome::Solved,
                issue,
                view: s.issue_view(),
            })
        })
        .flatten()
        .ok_or(AppError::NotFound)?;

    if response.changed {
        log::info!("Report {report_id} marked solved");
    }
    Ok(HttpResponse::Ok().json(response))
}
