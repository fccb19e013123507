use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::{
    job_defect, job_recommendation, purchase, purchase_item, quotation, quotation_item, sale,
    sale_item, service_job,
};
use crate::error::AppError;
use crate::models::purchase::PurchaseResponse;
use crate::models::quotation::QuotationResponse;
use crate::models::sale::SaleResponse;
use crate::models::service_job::ServiceJobResponse;

/// Load a live service job with its defects and recommendations, 404 if missing or deleted.
pub async fn load_service_job<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<ServiceJobResponse, AppError> {
    let job = service_job::Entity::find_by_id(id)
        .filter(service_job::Column::IsDeleted.eq(false))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Service job not found".into()))?;

    let defects = job_defect::Entity::find()
        .filter(job_defect::Column::ServiceJobId.eq(id))
        .order_by_asc(job_defect::Column::Position)
        .all(db)
        .await?;

    let recommendations = job_recommendation::Entity::find()
        .filter(job_recommendation::Column::ServiceJobId.eq(id))
        .order_by_asc(job_recommendation::Column::Position)
        .all(db)
        .await?;

    Ok(ServiceJobResponse::from_parts(job, defects, recommendations))
}

/// Load a live purchase bill with its items, 404 if missing or deleted.
pub async fn load_purchase<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<PurchaseResponse, AppError> {
    let bill = purchase::Entity::find_by_id(id)
        .filter(purchase::Column::IsDeleted.eq(false))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Purchase bill not found".into()))?;

    let items = purchase_item::Entity::find()
        .filter(purchase_item::Column::PurchaseId.eq(id))
        .order_by_asc(purchase_item::Column::Position)
        .all(db)
        .await?;

    Ok(PurchaseResponse::from_parts(bill, items))
}

/// Load a live sale bill with its items, 404 if missing or deleted.
pub async fn load_sale<C: ConnectionTrait>(db: &C, id: i32) -> Result<SaleResponse, AppError> {
    let bill = sale::Entity::find_by_id(id)
        .filter(sale::Column::IsDeleted.eq(false))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Sale bill not found".into()))?;

    let items = sale_item::Entity::find()
        .filter(sale_item::Column::SaleId.eq(id))
        .order_by_asc(sale_item::Column::Position)
        .all(db)
        .await?;

    Ok(SaleResponse::from_parts(bill, items))
}

/// Load a live quotation with its items, 404 if missing or deleted.
pub async fn load_quotation<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<QuotationResponse, AppError> {
    let quote = quotation::Entity::find_by_id(id)
        .filter(quotation::Column::IsDeleted.eq(false))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Quotation not found".into()))?;

    let items = quotation_item::Entity::find()
        .filter(quotation_item::Column::QuotationId.eq(id))
        .order_by_asc(quotation_item::Column::Position)
        .all(db)
        .await?;

    Ok(QuotationResponse::from_parts(quote, items))
}
