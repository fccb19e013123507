//! Row writes for each document kind. Run inside the transaction opened by
//! [`DocumentService::create`](super::DocumentService::create).

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseTransaction, DbErr, Set};

use super::NewDocument;
use crate::entity::{
    job_defect, job_recommendation, purchase, purchase_item, quotation, quotation_item, sale,
    sale_item, service_job,
};
use crate::models::purchase::{CreatePurchaseRequest, PurchaseResponse};
use crate::models::quotation::{CreateQuotationRequest, QuotationResponse};
use crate::models::sale::{CreateSaleRequest, SaleResponse};
use crate::models::service_job::{CreateServiceJobRequest, ServiceJobResponse};
use crate::models::shared::items_total;

fn trimmed(s: &str) -> String {
    s.trim().to_string()
}

impl NewDocument for CreateServiceJobRequest {
    type Entity = service_job::Entity;
    type Output = ServiceJobResponse;

    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        number: &str,
        now: DateTime<Utc>,
    ) -> Result<ServiceJobResponse, DbErr> {
        let job = service_job::ActiveModel {
            job_number: Set(number.to_string()),
            vehicle_number: Set(trimmed(&self.vehicle_number)),
            customer_name: Set(trimmed(&self.customer_name)),
            mileage: Set(self.mileage),
            notes: Set(self
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from)),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        let mut defects = Vec::with_capacity(self.defects.len());
        for (position, description) in self.defects.iter().enumerate() {
            let defect = job_defect::ActiveModel {
                service_job_id: Set(job.id),
                description: Set(trimmed(description)),
                position: Set(position as i32),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            defects.push(defect);
        }

        let mut recommendations = Vec::with_capacity(self.recommendations.len());
        for (position, description) in self.recommendations.iter().enumerate() {
            let recommendation = job_recommendation::ActiveModel {
                service_job_id: Set(job.id),
                description: Set(trimmed(description)),
                position: Set(position as i32),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            recommendations.push(recommendation);
        }

        Ok(ServiceJobResponse::from_parts(job, defects, recommendations))
    }
}

impl NewDocument for CreatePurchaseRequest {
    type Entity = purchase::Entity;
    type Output = PurchaseResponse;

    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        number: &str,
        now: DateTime<Utc>,
    ) -> Result<PurchaseResponse, DbErr> {
        let bill = purchase::ActiveModel {
            bill_number: Set(number.to_string()),
            supplier_name: Set(trimmed(&self.supplier_name)),
            total: Set(items_total(&self.items)),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        let mut items = Vec::with_capacity(self.items.len());
        for (position, item) in self.items.iter().enumerate() {
            let row = purchase_item::ActiveModel {
                purchase_id: Set(bill.id),
                item_name: Set(trimmed(&item.item_name)),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                line_total: Set(item.line_total()),
                position: Set(position as i32),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            items.push(row);
        }

        Ok(PurchaseResponse::from_parts(bill, items))
    }
}

impl NewDocument for CreateSaleRequest {
    type Entity = sale::Entity;
    type Output = SaleResponse;

    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        number: &str,
        now: DateTime<Utc>,
    ) -> Result<SaleResponse, DbErr> {
        let bill = sale::ActiveModel {
            bill_number: Set(number.to_string()),
            customer_name: Set(trimmed(&self.customer_name)),
            total: Set(items_total(&self.items)),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        let mut items = Vec::with_capacity(self.items.len());
        for (position, item) in self.items.iter().enumerate() {
            let row = sale_item::ActiveModel {
                sale_id: Set(bill.id),
                item_name: Set(trimmed(&item.item_name)),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                line_total: Set(item.line_total()),
                position: Set(position as i32),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            items.push(row);
        }

        Ok(SaleResponse::from_parts(bill, items))
    }
}

impl NewDocument for CreateQuotationRequest {
    type Entity = quotation::Entity;
    type Output = QuotationResponse;

    async fn insert(
        &self,
        txn: &DatabaseTransaction,
        number: &str,
        now: DateTime<Utc>,
    ) -> Result<QuotationResponse, DbErr> {
        let quote = quotation::ActiveModel {
            quotation_number: Set(number.to_string()),
            customer_name: Set(trimmed(&self.customer_name)),
            total: Set(items_total(&self.items)),
            valid_until: Set(self.valid_until),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        let mut items = Vec::with_capacity(self.items.len());
        for (position, item) in self.items.iter().enumerate() {
            let row = quotation_item::ActiveModel {
                quotation_id: Set(quote.id),
                item_name: Set(trimmed(&item.item_name)),
                quantity: Set(item.quantity),
                unit_price: Set(item.unit_price),
                line_total: Set(item.line_total()),
                position: Set(position as i32),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            items.push(row);
        }

        Ok(QuotationResponse::from_parts(quote, items))
    }
}
