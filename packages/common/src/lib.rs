pub mod clock;
pub mod document_kind;
pub mod document_number;

pub use clock::{Clock, FixedClock, SystemClock};
pub use document_kind::DocumentKind;
pub use document_number::{DocumentNumber, Suffix, next_number};
