use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::documents::DocumentService;
use crate::entity::purchase;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::purchase::*;
use crate::models::shared::NextNumberResponse;
use crate::state::AppState;
use crate::utils::document::load_purchase;

pub fn routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_purchase))
        .routes(routes!(next_purchase_number))
        .routes(routes!(get_purchase, delete_purchase))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Purchases",
    operation_id = "createPurchase",
    summary = "Record a new purchase bill",
    description = "Creates a purchase bill with its items in one transaction. The total is computed from the items and the bill number (`PB-YYMMDDNNN`) is assigned by the server from the station's current date.",
    request_body = CreatePurchaseRequest,
    responses(
        (status = 201, description = "Purchase bill created", body = PurchaseResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage failure, nothing was written (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(supplier_name = %payload.supplier_name))]
pub async fn create_purchase(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePurchaseRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_purchase(&payload)?;

    let (_, bill) = DocumentService::from_state(&state).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(bill)))
}

#[utoipa::path(
    get,
    path = "/next-number",
    tag = "Purchases",
    operation_id = "nextPurchaseNumber",
    summary = "Preview the next bill number",
    description = "Returns the number the next purchase bill would receive if created now. The number is not reserved.",
    responses(
        (status = 200, description = "Next bill number", body = NextNumberResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn next_purchase_number(
    State(state): State<AppState>,
) -> Result<Json<NextNumberResponse>, AppError> {
    let number = DocumentService::from_state(&state)
        .preview::<purchase::Entity>()
        .await?;
    Ok(Json(number.into()))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Purchases",
    operation_id = "getPurchase",
    summary = "Get a purchase bill by ID",
    params(("id" = i32, Path, description = "Purchase bill ID")),
    responses(
        (status = 200, description = "Purchase bill details", body = PurchaseResponse),
        (status = 404, description = "Purchase bill not found or deleted (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn get_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PurchaseResponse>, AppError> {
    Ok(Json(load_purchase(&state.db, id).await?))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Purchases",
    operation_id = "deletePurchase",
    summary = "Soft-delete a purchase bill",
    description = "Marks the purchase bill deleted. Its number stays on the row but no longer counts toward the day's sequence.",
    params(("id" = i32, Path, description = "Purchase bill ID")),
    responses(
        (status = 204, description = "Purchase bill deleted"),
        (status = 404, description = "Purchase bill not found or already deleted (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id))]
pub async fn delete_purchase(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let deleted = DocumentService::from_state(&state)
        .soft_delete::<purchase::Entity>(id)
        .await?;
    if !deleted {
        return Err(AppError::NotFound("Purchase bill not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
