//! Statement output records.

use serde::{Deserialize, Serialize};

use crate::{common::MinorUnits, document::FinancialDocument};

/// A document plus the running balance after applying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    #[serde(flatten)]
    pub document: FinancialDocument,
    pub balance: MinorUnits,
}

/// Headline figures for a counterparty statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementSummary {
    /// Sum of invoices and bills.
    pub total_charges: MinorUnits,
    /// Sum of payments and credit notes.
    pub total_credits: MinorUnits,
    pub closing_balance: MinorUnits,
    /// Unpaid invoice and bill amounts.
    pub outstanding: MinorUnits,
    pub overdue_count: usize,
}
