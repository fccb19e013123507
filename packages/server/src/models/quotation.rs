use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::shared::{LineItemRequest, LineItemResponse, validate_line_items, validate_name};
use crate::entity::{quotation, quotation_item};
use crate::error::AppError;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateQuotationRequest {
    #[schema(example = "Nimal Perera")]
    pub customer_name: String,
    /// Last day the quoted prices hold. Open-ended when absent.
    pub valid_until: Option<NaiveDate>,
    pub items: Vec<LineItemRequest>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct QuotationResponse {
    pub id: i32,
    #[schema(example = "QT-250114001")]
    pub quotation_number: String,
    pub customer_name: String,
    pub total: i64,
    pub valid_until: Option<NaiveDate>,
    pub items: Vec<LineItemResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<quotation_item::Model> for LineItemResponse {
    fn from(m: quotation_item::Model) -> Self {
        Self {
            item_name: m.item_name,
            quantity: m.quantity,
            unit_price: m.unit_price,
            line_total: m.line_total,
        }
    }
}

impl QuotationResponse {
    pub fn from_parts(quote: quotation::Model, items: Vec<quotation_item::Model>) -> Self {
        Self {
            id: quote.id,
            quotation_number: quote.quotation_number,
            customer_name: quote.customer_name,
            total: quote.total,
            valid_until: quote.valid_until,
            items: items.into_iter().map(Into::into).collect(),
            created_at: quote.created_at,
            updated_at: quote.updated_at,
        }
    }
}

/// `today` is the station's local date.
pub fn validate_create_quotation(
    req: &CreateQuotationRequest,
    today: NaiveDate,
) -> Result<(), AppError> {
    validate_name(&req.customer_name, "Customer name")?;
    if let Some(valid_until) = req.valid_until
        && valid_until < today
    {
        return Err(AppError::Validation(
            "valid_until must not be in the past".into(),
        ));
    }
    validate_line_items(&req.items)
}
