//! tally-intake
//!
//! Boundary adapter for backend JSON payloads. Rows arrive loosely typed
//! (numbers or strings, optional fields, mixed key casing) and leave as
//! validated domain records, so the services never re-check shapes.

pub mod documents;
pub mod error;
pub mod payroll;
pub mod raw;

pub use documents::parse_documents;
pub use error::IntakeError;
pub use payroll::parse_payroll_rows;
pub use raw::{AmountUnits, IntakeOptions};
