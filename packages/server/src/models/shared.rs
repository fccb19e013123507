use chrono::NaiveDate;
use common::{DocumentKind, DocumentNumber};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Most line items accepted on one bill or quotation.
pub const MAX_LINE_ITEMS: usize = 500;
pub const MAX_QUANTITY: i32 = 100_000;
/// Largest unit price in minor currency units.
pub const MAX_UNIT_PRICE: i64 = 10_000_000_000;

/// A purchased, sold or quoted item.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct LineItemRequest {
    #[schema(example = "Oil filter")]
    pub item_name: String,
    #[schema(example = 2)]
    pub quantity: i32,
    /// Price per unit in minor currency units.
    #[schema(example = 1250)]
    pub unit_price: i64,
}

impl LineItemRequest {
    /// Bounded by the validation limits, so this cannot overflow.
    pub fn line_total(&self) -> i64 {
        i64::from(self.quantity) * self.unit_price
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LineItemResponse {
    pub item_name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub line_total: i64,
}

/// Sum of line totals for a validated item list.
pub fn items_total(items: &[LineItemRequest]) -> i64 {
    items.iter().map(LineItemRequest::line_total).sum()
}

/// Advisory next number for a document kind.
#[derive(Serialize, utoipa::ToSchema)]
pub struct NextNumberResponse {
    pub kind: DocumentKind,
    /// Number the next created document would receive if created now.
    #[schema(example = "SJ-250114007")]
    pub number: String,
    /// Station-local date encoded in `number`.
    pub date: NaiveDate,
    /// True when today's sequence is exhausted and the tail is timestamp-derived.
    pub fallback: bool,
}

impl From<DocumentNumber> for NextNumberResponse {
    fn from(n: DocumentNumber) -> Self {
        Self {
            kind: n.kind(),
            number: n.to_string(),
            date: n.date(),
            fallback: n.is_fallback(),
        }
    }
}

/// Validate a trimmed name-like field (1-256 Unicode characters).
pub fn validate_name(value: &str, field: &str) -> Result<(), AppError> {
    let value = value.trim();
    if value.is_empty() || value.chars().count() > 256 {
        return Err(AppError::Validation(format!(
            "{field} must be 1-256 characters"
        )));
    }
    Ok(())
}

/// Validate a list of free-text entries (defects, recommendations).
pub fn validate_descriptions(entries: &[String], field: &str, max: usize) -> Result<(), AppError> {
    if entries.len() > max {
        return Err(AppError::Validation(format!("Too many {field}: max {max}")));
    }
    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() || entry.chars().count() > 2000 {
            return Err(AppError::Validation(format!(
                "Each of {field} must be 1-2000 characters"
            )));
        }
    }
    Ok(())
}

/// Validate the items of a bill or quotation (non-empty, bounded).
pub fn validate_line_items(items: &[LineItemRequest]) -> Result<(), AppError> {
    if items.is_empty() {
        return Err(AppError::Validation("items must not be empty".into()));
    }
    if items.len() > MAX_LINE_ITEMS {
        return Err(AppError::Validation(format!(
            "Too many items: max {MAX_LINE_ITEMS}"
        )));
    }
    for item in items {
        validate_name(&item.item_name, "Item name")?;
        if item.quantity < 1 || item.quantity > MAX_QUANTITY {
            return Err(AppError::Validation(format!(
                "Quantity must be between 1 and {MAX_QUANTITY}"
            )));
        }
        if item.unit_price < 0 || item.unit_price > MAX_UNIT_PRICE {
            return Err(AppError::Validation(format!(
                "Unit price must be between 0 and {MAX_UNIT_PRICE}"
            )));
        }
    }
    Ok(())
}
