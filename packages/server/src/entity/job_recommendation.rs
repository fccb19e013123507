use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Follow-up work recommended to the customer.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "job_recommendation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub service_job_id: i32,
    #[sea_orm(belongs_to, from = "service_job_id", to = "id")]
    pub service_job: HasOne<super::service_job::Entity>,

    #[sea_orm(default_value = 0)]
    pub position: i32,
}

impl ActiveModelBehavior for ActiveModel {}
