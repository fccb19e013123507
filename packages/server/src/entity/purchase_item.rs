use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub purchase_id: i32,
    #[sea_orm(belongs_to, from = "purchase_id", to = "id")]
    pub purchase: HasOne<super::purchase::Entity>,

    pub item_name: String,
    pub quantity: i32,
    pub unit_price: i64,
    pub line_total: i64,

    #[sea_orm(default_value = 0)]
    pub position: i32,
}

impl ActiveModelBehavior for ActiveModel {}
