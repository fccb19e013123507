use serde::{Deserialize, Serialize};
use std::fmt;

/// Business document types that carry a date-scoped sequential number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Workshop repair order.
    ServiceJob,
    /// Bill received from a supplier.
    Purchase,
    /// Bill issued to a customer.
    Sale,
    /// Price estimate issued to a customer.
    Quotation,
}

impl DocumentKind {
    pub const ALL: &'static [DocumentKind] =
        &[Self::ServiceJob, Self::Purchase, Self::Sale, Self::Quotation];

    /// Tag written in front of every number of this kind.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::ServiceJob => "SJ-",
            Self::Purchase => "PB-",
            Self::Sale => "SB-",
            Self::Quotation => "QT-",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ServiceJob => "service_job",
            Self::Purchase => "purchase",
            Self::Sale => "sale",
            Self::Quotation => "quotation",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
