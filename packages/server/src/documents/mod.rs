//! Numbered business documents: creation, preview and soft delete.

pub mod insert;
pub mod service;

pub use service::{DocumentService, NewDocument};
