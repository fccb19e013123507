use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::{LineItemRequest, LineItemResponse, validate_line_items, validate_name};
use crate::entity::{sale, sale_item};
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSaleRequest {
    #[schema(example = "Nimal Perera")]
    pub customer_name: String,
    pub items: Vec<LineItemRequest>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SaleResponse {
    pub id: i32,
    #[schema(example = "SB-250114001")]
    pub bill_number: String,
    pub customer_name: String,
    pub total: i64,
    pub items: Vec<LineItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<sale_item::Model> for LineItemResponse {
    fn from(m: sale_item::Model) -> Self {
        Self {
            item_name: m.item_name,
            quantity: m.quantity,
            unit_price: m.unit_price,
            line_total: m.line_total,
        }
    }
}

impl SaleResponse {
    pub fn from_parts(bill: sale::Model, items: Vec<sale_item::Model>) -> Self {
        Self {
            id: bill.id,
            bill_number: bill.bill_number,
            customer_name: bill.customer_name,
            total: bill.total,
            items: items.into_iter().map(Into::into).collect(),
            created_at: bill.created_at,
            updated_at: bill.updated_at,
        }
    }
}

pub fn validate_create_sale(req: &CreateSaleRequest) -> Result<(), AppError> {
    validate_name(&req.customer_name, "Customer name")?;
    validate_line_items(&req.items)
}
