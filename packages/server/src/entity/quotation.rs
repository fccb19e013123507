use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Price estimate issued to a customer. Carries no stock movement.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "quotation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub quotation_number: String,

    pub customer_name: String,
    pub total: i64,
    pub valid_until: Option<Date>,

    #[sea_orm(has_many)]
    pub items: HasMany<super::quotation_item::Entity>,

    #[sea_orm(default_value = false, indexed)]
    pub is_deleted: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
