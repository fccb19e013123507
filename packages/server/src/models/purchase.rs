use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::{LineItemRequest, LineItemResponse, validate_line_items, validate_name};
use crate::entity::{purchase, purchase_item};
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreatePurchaseRequest {
    #[schema(example = "Lanka Auto Parts")]
    pub supplier_name: String,
    pub items: Vec<LineItemRequest>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct PurchaseResponse {
    pub id: i32,
    #[schema(example = "PB-250114001")]
    pub bill_number: String,
    pub supplier_name: String,
    /// Sum of line totals in minor currency units.
    pub total: i64,
    pub items: Vec<LineItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<purchase_item::Model> for LineItemResponse {
    fn from(m: purchase_item::Model) -> Self {
        Self {
            item_name: m.item_name,
            quantity: m.quantity,
            unit_price: m.unit_price,
            line_total: m.line_total,
        }
    }
}

impl PurchaseResponse {
    pub fn from_parts(bill: purchase::Model, items: Vec<purchase_item::Model>) -> Self {
        Self {
            id: bill.id,
            bill_number: bill.bill_number,
            supplier_name: bill.supplier_name,
            total: bill.total,
            items: items.into_iter().map(Into::into).collect(),
            created_at: bill.created_at,
            updated_at: bill.updated_at,
        }
    }
}

pub fn validate_create_purchase(req: &CreatePurchaseRequest) -> Result<(), AppError> {
    validate_name(&req.supplier_name, "Supplier name")?;
    validate_line_items(&req.items)
}
