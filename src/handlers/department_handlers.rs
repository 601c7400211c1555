use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::assignment::{Assignment, AssignmentSelection};
use crate::reports::ReportsClient;
use crate::session::{self, DepartmentsView, SessionStore};

#[derive(Serialize, Debug)]
pub struct AssignResponse {
    pub assigned: Assignment,
    #[serde(flatten)]
    pub view: DepartmentsView,
}

/// GET /api/departments - departments with efficiency, unassigned issues and the current selection.
pub async fn list(
    store: web::Data<SessionStore>,
    client: web::Data<ReportsClient>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let id = session::resolve(&session, &store, &client)?;
    let view = store
        .with_session(&id, |s| s.departments_view())
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/departments/selection - set the issue and/or department to assign.
pub async fn select(
    store: web::Data<SessionStore>,
    client: web::Data<ReportsClient>,
    session: Session,
    body: web::Json<AssignmentSelection>,
) -> Result<HttpResponse, AppError> {
    let id = session::resolve(&session, &store, &client)?;
    let update = body.into_inner();
    let view = store
        .with_session(&id, |s| {
            s.select(update);
            s.departments_view()
        })
        .ok_or(AppError::NotFound)?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/departments/assign - commit the selection, optionally overridden by the body.
///
/// Fails with 422 and changes nothing unless both the issue and the
/// department resolve. An empty body commits the stored selection as is;
/// a malformed one is rejected before anything is committed.
pub async fn assign(
    store: web::Data<SessionStore>,
    client: web::Data<ReportsClient>,
    session: Session,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let overrides = parse_overrides(&body)?;
    let id = session::resolve(&session, &store, &client)?;

    let result = store
        .with_session(&id, |s| {
            s.commit_assignment(overrides)
                .map(|assigned| AssignResponse {
                    assigned,
                    view: s.departments_view(),
                })
        })
        .ok_or(AppError::NotFound)?;

    match result {
        Ok(response) => {
            log::info!(
                "Assigned {} to {}",
                response.assigned.issue.id,
                response.assigned.department
            );
            Ok(HttpResponse::Ok().json(response))
        }
        Err(errors) => {
            log::warn!(
                "Rejected assignment: {}",
                errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
            );
            Err(errors.into())
        }
    }
}

fn parse_overrides(body: &[u8]) -> Result<AssignmentSelection, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(AssignmentSelection::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(vec![format!("Invalid JSON body: {e}")]))
}
