pub mod purchase;
pub mod quotation;
pub mod sale;
pub mod service_job;
