//! tally-core
//!
//! Derived financial computations: statements, aging, payroll and invoice totals.
//! Depends on tally-domain. No I/O, no global state, no ambient clock.

pub mod aging_service;
pub mod error;
pub mod format;
pub mod invoice_service;
pub mod payroll_service;
pub mod statement_service;
pub mod time;
pub mod validation;

pub use aging_service::*;
pub use error::CoreError;
pub use format::*;
pub use invoice_service::*;
pub use payroll_service::*;
pub use statement_service::*;
pub use time::Clock;
