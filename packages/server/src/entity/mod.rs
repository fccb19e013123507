pub mod job_defect;
pub mod job_recommendation;
pub mod purchase;
pub mod purchase_item;
pub mod quotation;
pub mod quotation_item;
pub mod sale;
pub mod sale_item;
pub mod service_job;
