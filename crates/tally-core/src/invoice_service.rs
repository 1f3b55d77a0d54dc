//! Invoice and bill totals from line items.

use tally_domain::{InvoiceLineItem, InvoiceTotals};

use crate::CoreError;

const BASIS_POINTS: i128 = 10_000;

pub struct InvoiceService;

impl InvoiceService {
    /// Subtotal, discount, tax and grand total for a set of line items.
    ///
    /// Tax is computed per line on the discounted amount and rounded half-up.
    pub fn totals(items: &[InvoiceLineItem]) -> Result<InvoiceTotals, CoreError> {
        let mut totals = InvoiceTotals::default();
        for item in items {
            let line = Self::line_totals(item)?;
            totals.subtotal = checked_sum(totals.subtotal, line.subtotal)?;
            totals.discount = checked_sum(totals.discount, line.discount)?;
            totals.tax = checked_sum(totals.tax, line.tax)?;
            totals.total = checked_sum(totals.total, line.total)?;
        }
        Ok(totals)
    }

    pub fn line_totals(item: &InvoiceLineItem) -> Result<InvoiceTotals, CoreError> {
        if item.unit_price < 0 || item.discount < 0 {
            return Err(CoreError::invalid(format!(
                "line `{}` has a negative price or discount",
                item.description
            )));
        }
        let gross = i128::from(item.quantity) * i128::from(item.unit_price);
        let discount = i128::from(item.discount);
        if discount > gross {
            return Err(CoreError::invalid(format!(
                "line `{}` discount {} exceeds its amount {}",
                item.description, discount, gross
            )));
        }
        let net = gross - discount;
        let tax = (net * i128::from(item.tax_rate_bps) + BASIS_POINTS / 2) / BASIS_POINTS;

        Ok(InvoiceTotals {
            subtotal: narrow(gross)?,
            discount: item.discount,
            tax: narrow(tax)?,
            total: narrow(net + tax)?,
        })
    }
}

fn narrow(value: i128) -> Result<i64, CoreError> {
    i64::try_from(value).map_err(|_| CoreError::invalid("invoice amount overflowed"))
}

fn checked_sum(left: i64, right: i64) -> Result<i64, CoreError> {
    left.checked_add(right)
        .ok_or_else(|| CoreError::invalid("invoice amount overflowed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tax_rounds_half_up() {
        // 333 * 7.5% = 24.975 -> 25
        let item = InvoiceLineItem::new("widget", 1, 333).with_tax_rate_bps(750);
        let totals = InvoiceService::line_totals(&item).unwrap();
        assert_eq!(totals.tax, 25);
        assert_eq!(totals.total, 358);
    }

    #[test]
    fn totals_sum_lines_after_discount() {
        let items = vec![
            InvoiceLineItem::new("consulting", 3, 10_000)
                .with_discount(5_000)
                .with_tax_rate_bps(1_000),
            InvoiceLineItem::new("travel", 1, 2_500),
        ];
        let totals = InvoiceService::totals(&items).unwrap();
        assert_eq!(totals.subtotal, 32_500);
        assert_eq!(totals.discount, 5_000);
        assert_eq!(totals.tax, 2_500);
        assert_eq!(totals.total, 30_000);
    }

    #[test]
    fn discount_larger_than_line_is_invalid() {
        let item = InvoiceLineItem::new("free", 1, 100).with_discount(101);
        assert!(InvoiceService::line_totals(&item).is_err());
    }

    #[test]
    fn empty_invoice_totals_zero() {
        assert_eq!(InvoiceService::totals(&[]).unwrap(), InvoiceTotals::default());
    }
}
