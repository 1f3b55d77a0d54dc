//! Read-only views for the presentation layer.
//!
//! Each view pairs the raw minor-unit figures with their formatted strings so
//! a renderer never has to touch money arithmetic.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use tally_config::Config;
use tally_core::{
    effective_status, AgingService, Clock, CoreError, CurrencyFormatter, DateFormatter,
    InvoiceService, IsoDateFormatter, PayrollService, StandardCurrencyFormatter,
    StatementService,
};
use tally_domain::{
    CurrencyCode, DocumentStatus, FinancialDocument, InvoiceLineItem, InvoiceTotals, MinorUnits,
    PayrollBatchTotals, PayrollRow, PayrollSelection, StatementSummary,
};

use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRowView {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub reference: String,
    pub status: DocumentStatus,
    pub amount: String,
    pub balance: String,
    pub balance_minor: MinorUnits,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementView {
    pub currency: String,
    pub reference_date: String,
    pub rows: Vec<StatementRowView>,
    pub summary: StatementSummary,
    pub closing_balance: String,
    pub outstanding: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgingBucketView {
    pub label: &'static str,
    pub amount_minor: MinorUnits,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgingView {
    pub currency: String,
    pub reference_date: String,
    pub buckets: Vec<AgingBucketView>,
    pub document_count: usize,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollRowView {
    pub employee_id: String,
    pub selected: bool,
    pub gross_pay: String,
    pub deductions: String,
    pub net_pay: String,
    pub net_pay_minor: MinorUnits,
    /// Deductions exceed earnings; shown, never clamped.
    pub negative: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollView {
    pub currency: String,
    pub rows: Vec<PayrollRowView>,
    pub totals: PayrollBatchTotals,
    pub total_net_pay: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceView {
    pub currency: String,
    pub totals: InvoiceTotals,
    pub subtotal: String,
    pub discount: String,
    pub tax: String,
    pub total: String,
}

/// Builds presentation views in one currency with one formatter.
pub struct Reporter {
    currency: CurrencyCode,
    money: Box<dyn CurrencyFormatter>,
    dates: Box<dyn DateFormatter>,
}

impl Reporter {
    pub fn new(currency: CurrencyCode, money: impl CurrencyFormatter + 'static) -> Self {
        Self {
            currency,
            money: Box::new(money),
            dates: Box::new(IsoDateFormatter),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.currency_code(),
            StandardCurrencyFormatter::new(config.locale_config(), config.format_options()),
        )
    }

    pub fn with_date_formatter(mut self, dates: impl DateFormatter + 'static) -> Self {
        self.dates = Box::new(dates);
        self
    }

    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    fn money(&self, amount: MinorUnits) -> String {
        self.money.format_amount(amount, self.currency.as_str())
    }

    /// Running-balance statement with statuses resolved as of `reference`.
    pub fn statement(
        &self,
        documents: &[FinancialDocument],
        reference: NaiveDate,
    ) -> Result<StatementView> {
        let lines = StatementService::build(documents)?;
        let summary = StatementService::summarize(&lines, reference)?;
        let rows = lines
            .iter()
            .map(|line| StatementRowView {
                id: line.document.id.clone(),
                date: self.dates.format_date(line.document.date),
                kind: line.document.kind.to_string(),
                reference: line.document.reference.clone(),
                status: effective_status(&line.document, reference),
                amount: self.money(line.document.amount),
                balance: self.money(line.balance),
                balance_minor: line.balance,
            })
            .collect();
        info!(rows = lines.len(), currency = self.currency.as_str(), "statement view built");
        Ok(StatementView {
            currency: self.currency.as_str().to_string(),
            reference_date: self.dates.format_date(reference),
            rows,
            summary,
            closing_balance: self.money(summary.closing_balance),
            outstanding: self.money(summary.outstanding),
        })
    }

    pub fn aging(&self, documents: &[FinancialDocument], reference: NaiveDate) -> Result<AgingView> {
        let report = AgingService::bucket(documents, reference)?;
        let buckets = report
            .iter()
            .map(|(bucket, amount)| AgingBucketView {
                label: bucket.label(),
                amount_minor: amount,
                amount: self.money(amount),
            })
            .collect();
        Ok(AgingView {
            currency: self.currency.as_str().to_string(),
            reference_date: self.dates.format_date(reference),
            buckets,
            document_count: report.document_count,
            total: self.money(report.total()),
        })
    }

    /// Aging as of the clock's current date. The date is read once, here.
    pub fn aging_today(
        &self,
        documents: &[FinancialDocument],
        clock: &dyn Clock,
    ) -> Result<AgingView> {
        self.aging(documents, clock.today())
    }

    pub fn payroll(&self, rows: &[PayrollRow], selection: &PayrollSelection) -> Result<PayrollView> {
        let totals = PayrollService::aggregate(rows, selection)?;
        let row_views = rows
            .iter()
            .map(|row| self.payroll_row(row, selection))
            .collect::<Result<Vec<_>>>()?;
        Ok(PayrollView {
            currency: self.currency.as_str().to_string(),
            rows: row_views,
            totals,
            total_net_pay: self.money(totals.net_pay),
        })
    }

    fn payroll_row(
        &self,
        row: &PayrollRow,
        selection: &PayrollSelection,
    ) -> Result<PayrollRowView> {
        let out_of_range = |what: &str| {
            CoreError::invalid(format!(
                "{what} for employee `{}` overflowed",
                row.employee_id
            ))
        };
        let gross_pay = row.checked_gross_pay().ok_or_else(|| out_of_range("gross pay"))?;
        let deductions = row
            .checked_total_deductions()
            .ok_or_else(|| out_of_range("deductions"))?;
        let net_pay = PayrollService::net_pay(row)?;
        Ok(PayrollRowView {
            employee_id: row.employee_id.clone(),
            selected: selection.contains(&row.employee_id),
            gross_pay: self.money(gross_pay),
            deductions: self.money(deductions),
            net_pay: self.money(net_pay),
            net_pay_minor: net_pay,
            negative: net_pay < 0,
        })
    }

    pub fn invoice(&self, items: &[InvoiceLineItem]) -> Result<InvoiceView> {
        let totals = InvoiceService::totals(items)?;
        Ok(InvoiceView {
            currency: self.currency.as_str().to_string(),
            totals,
            subtotal: self.money(totals.subtotal),
            discount: self.money(totals.discount),
            tax: self.money(totals.tax),
            total: self.money(totals.total),
        })
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
