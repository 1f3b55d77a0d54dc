//! tally-domain
//!
//! Pure value types for counterparty statements, aging, payroll and invoices.
//! No I/O, no logging, no validation policy. Only data types and core enums.

pub mod aging;
pub mod common;
pub mod currency;
pub mod document;
pub mod invoice;
pub mod payroll;
pub mod statement;

pub use aging::*;
pub use common::*;
pub use currency::*;
pub use document::*;
pub use invoice::*;
pub use payroll::*;
pub use statement::*;
