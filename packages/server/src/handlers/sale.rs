use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::documents::DocumentService;
use crate::entity::sale;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::sale::*;
use crate::models::shared::NextNumberResponse;
use crate::state::AppState;
use crate::utils::document::load_sale;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_sale))
        .routes(routes!(next_sale_number))
        .routes(routes!(get_sale, delete_sale))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Sales",
    operation_id = "createSale",
    summary = "Record a new sale bill",
    description = "Creates a sale bill with its items in one transaction. The total is computed from the items and the bill number (`SB-YYMMDDNNN`) is assigned by the server from the station's current date.",
    request_body = CreateSaleRequest,
    responses(
        (status = 201, description = "Sale bill created", body = SaleResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure, nothing was written (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(customer_name = %payload.customer_name))]
pub async fn create_sale(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateSaleRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_sale(&payload)?;

    let (_, bill) = DocumentService::from_state(&state).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(bill)))
}

#[utoipa::path(
    get,
    path = "/next-number",
    tag = "Sales",
    operation_id = "nextSaleNumber",
    summary = "Preview the next bill number",
    description = "Returns the number the next sale bill would receive if created now. The number is not reserved.",
    responses(
        (status = 200, description = "Next bill number", body = NextNumberResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn next_sale_number(
    State(state): State<AppState>,
) -> Result<Json<NextNumberResponse>, AppError> {
    let number = DocumentService::from_state(&state)
        .preview::<sale::Entity>()
        .await?;
    Ok(Json(number.into()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Sales",
    operation_id = "getSale",
    summary = "Get a sale bill by ID",
    params(("id" = i32, Path, description = "Sale bill ID")),
    responses(
        (status = 200, description = "Sale bill details", body = SaleResponse),
        (status = 404, description = "Sale bill not found or deleted (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<SaleResponse>, AppError> {
    Ok(Json(load_sale(&state.db, id).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Sales",
    operation_id = "deleteSale",
    summary = "Soft-delete a sale bill",
    description = "Marks the sale bill deleted. Its number stays on the row but no longer counts toward the day's sequence.",
    params(("id" = i32, Path, description = "Sale bill ID")),
    responses(
        (status = 204, description = "Sale bill deleted"),
        (status = 404, description = "Sale bill not found or already deleted (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = DocumentService::from_state(&state)
        .soft_delete::<sale::Entity>(id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound("Sale bill not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
