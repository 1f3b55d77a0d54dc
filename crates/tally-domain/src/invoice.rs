//! Invoice line items and their computed totals.

use serde::{Deserialize, Serialize};

use crate::common::MinorUnits;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: MinorUnits,
    #[serde(default)]
    pub discount: MinorUnits,
    /// Tax rate in basis points (750 = 7.5%).
    #[serde(default)]
    pub tax_rate_bps: u32,
}

impl InvoiceLineItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: MinorUnits) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            discount: 0,
            tax_rate_bps: 0,
        }
    }

    pub fn with_discount(mut self, discount: MinorUnits) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_tax_rate_bps(mut self, tax_rate_bps: u32) -> Self {
        self.tax_rate_bps = tax_rate_bps;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: MinorUnits,
    pub discount: MinorUnits,
    pub tax: MinorUnits,
    pub total: MinorUnits,
}
