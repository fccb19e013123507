use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Workshop repair order.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// `SJ-YYMMDDNNN`.
    #[sea_orm(indexed)]
    pub job_number: String,

    pub vehicle_number: String,
    pub customer_name: String,
    pub mileage: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    #[sea_orm(has_many)]
    pub defects: HasMany<super::job_defect::Entity>,

    #[sea_orm(has_many)]
    pub recommendations: HasMany<super::job_recommendation::Entity>,

    #[sea_orm(default_value = false, indexed)]
    pub is_deleted: bool,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
