use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Bill received from a supplier.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub bill_number: String,

    pub supplier_name: String,
    /// Sum of item line totals, in minor currency units.
    pub total: i64,

    #[sea_orm(has_many)]
    pub items: HasMany<super::purchase_item::Entity>,

    #[sea_orm(default_value = false, indexed)]
    pub is_deleted: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
