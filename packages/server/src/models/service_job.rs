use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::{validate_descriptions, validate_name};
use crate::entity::{job_defect, job_recommendation, service_job};
use crate::error::AppError;

const MAX_JOB_ENTRIES: usize = 100;

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateServiceJobRequest {
    #[schema(example = "CAB-4521")]
    pub vehicle_number: String,
    #[schema(example = "Nimal Perera")]
    pub customer_name: String,
    /// Odometer reading at check-in.
    pub mileage: Option<i32>,
    pub notes: Option<String>,
    /// Faults reported or found, in display order.
    #[serde(default)]
    pub defects: Vec<String>,
    /// Follow-up work suggested to the customer, in display order.
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct ServiceJobResponse {
    pub id: i32,
    #[schema(example = "SJ-250114001")]
    pub job_number: String,
    pub vehicle_number: String,
    pub customer_name: String,
    pub mileage: Option<i32>,
    pub notes: Option<String>,
    pub defects: Vec<String>,
    pub recommendations: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ServiceJobResponse {
    /// Children are expected in `position` order.
    pub fn from_parts(
        job: service_job::Model,
        defects: Vec<job_defect::Model>,
        recommendations: Vec<job_recommendation::Model>,
    ) -> Self {
        Self {
            id: job.id,
            job_number: job.job_number,
            vehicle_number: job.vehicle_number,
            customer_name: job.customer_name,
            mileage: job.mileage,
            notes: job.notes,
            defects: defects.into_iter().map(|d| d.description).collect(),
            recommendations: recommendations
                .into_iter()
                .map(|r| r.description)
                .collect(),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

pub fn validate_create_service_job(req: &CreateServiceJobRequest) -> Result<(), AppError> {
    validate_name(&req.vehicle_number, "Vehicle number")?;
    validate_name(&req.customer_name, "Customer name")?;
    if let Some(mileage) = req.mileage
        && mileage < 0
    {
        return Err(AppError::Validation("Mileage must be >= 0".into()));
    }
    if let Some(ref notes) = req.notes
        && notes.len() > 10_000
    {
        return Err(AppError::Validation(
            "Notes must be at most 10000 bytes".into(),
        ));
    }
    validate_descriptions(&req.defects, "defects", MAX_JOB_ENTRIES)?;
    validate_descriptions(&req.recommendations, "recommendations", MAX_JOB_ENTRIES)?;
    Ok(())
}
