use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::documents::DocumentService;
use crate::entity::quotation;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::quotation::*;
use crate::models::shared::NextNumberResponse;
use crate::state::AppState;
use crate::utils::document::load_quotation;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_quotation))
        .routes(routes!(next_quotation_number))
        .routes(routes!(get_quotation, delete_quotation))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Quotations",
    operation_id = "createQuotation",
    summary = "Record a new quotation",
    description = "Creates a quotation with its items in one transaction. The total is computed from the items and the quotation number (`QT-YYMMDDNNN`) is assigned by the server from the station's current date.",
    request_body = CreateQuotationRequest,
    responses(
        (status = 201, description = "Quotation created", body = QuotationResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure, nothing was written (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(customer_name = %payload.customer_name))]
pub async fn create_quotation(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateQuotationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let today = state.clock.now().date_naive();
    validate_create_quotation(&payload, today)?;

    let (_, quote) = DocumentService::from_state(&state).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(quote)))
}

#[utoipa::path(
    get,
    path = "/next-number",
    tag = "Quotations",
    operation_id = "nextQuotationNumber",
    summary = "Preview the next quotation number",
    description = "Returns the number the next quotation would receive if created now. The number is not reserved.",
    responses(
        (status = 200, description = "Next quotation number", body = NextNumberResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn next_quotation_number(
    State(state): State<AppState>,
) -> Result<Json<NextNumberResponse>, AppError> {
    let number = DocumentService::from_state(&state)
        .preview::<quotation::Entity>()
        .await?;
    Ok(Json(number.into()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Quotations",
    operation_id = "getQuotation",
    summary = "Get a quotation by ID",
    params(("id" = i32, Path, description = "Quotation ID")),
    responses(
        (status = 200, description = "Quotation details", body = QuotationResponse),
        (status = 404, description = "Quotation not found or deleted (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_quotation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<QuotationResponse>, AppError> {
    Ok(Json(load_quotation(&state.db, id).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Quotations",
    operation_id = "deleteQuotation",
    summary = "Soft-delete a quotation",
    description = "Marks the quotation deleted. Its number stays on the row but no longer counts toward the day's sequence.",
    params(("id" = i32, Path, description = "Quotation ID")),
    responses(
        (status = 204, description = "Quotation deleted"),
        (status = 404, description = "Quotation not found or already deleted (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_quotation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = DocumentService::from_state(&state)
        .soft_delete::<quotation::Entity>(id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound("Quotation not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
