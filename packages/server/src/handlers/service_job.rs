use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::documents::DocumentService;
use crate::entity::service_job;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::service_job::*;
use crate::models::shared::NextNumberResponse;
use crate::state::AppState;
use crate::utils::document::load_service_job;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_service_job))
        .routes(routes!(next_service_job_number))
        .routes(routes!(get_service_job, delete_service_job))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Service Jobs",
    operation_id = "createServiceJob",
    summary = "Open a new service job",
    description = "Creates a service job with its defects and recommendations in one transaction. The job number (`SJ-YYMMDDNNN`) is assigned by the server from the station's current date.",
    request_body = CreateServiceJobRequest,
    responses(
        (status = 201, description = "Service job created", body = ServiceJobResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure, nothing was written (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(vehicle_number = %payload.vehicle_number))]
pub async fn create_service_job(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateServiceJobRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_service_job(&payload)?;

    let (_, job) = DocumentService::from_state(&state).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    get,
    path = "/next-number",
    tag = "Service Jobs",
    operation_id = "nextServiceJobNumber",
    summary = "Preview the next job number",
    description = "Returns the number the next service job would receive if created now. The number is not reserved.",
    responses(
        (status = 200, description = "Next job number", body = NextNumberResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn next_service_job_number(
    State(state): State<AppState>,
) -> Result<Json<NextNumberResponse>, AppError> {
    let number = DocumentService::from_state(&state)
        .preview::<service_job::Entity>()
        .await?;
    Ok(Json(number.into()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Service Jobs",
    operation_id = "getServiceJob",
    summary = "Get a service job by ID",
    params(("id" = i32, Path, description = "Service job ID")),
    responses(
        (status = 200, description = "Service job details", body = ServiceJobResponse),
        (status = 404, description = "Service job not found or deleted (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_service_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ServiceJobResponse>, AppError> {
    Ok(Json(load_service_job(&state.db, id).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Service Jobs",
    operation_id = "deleteServiceJob",
    summary = "Soft-delete a service job",
    description = "Marks the job deleted. Its number stays on the row but no longer counts toward the day's sequence.",
    params(("id" = i32, Path, description = "Service job ID")),
    responses(
        (status = 204, description = "Service job deleted"),
        (status = 404, description = "Service job not found or already deleted (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_service_job(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = DocumentService::from_state(&state)
        .soft_delete::<service_job::Entity>(id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound("Service job not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
