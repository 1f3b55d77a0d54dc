//! Builds counterparty statements with a running balance.

use chrono::NaiveDate;
use tracing::{debug, warn};

use tally_domain::{DocumentStatus, FinancialDocument, StatementLine, StatementSummary};

use crate::{validation::validate_documents, CoreError};

pub struct StatementService;

impl StatementService {
    /// Orders documents by date and attaches the running balance to each.
    ///
    /// Ties on date keep their input order. Invoices and bills raise the balance,
    /// payments and credit notes lower it, unknown kinds leave it unchanged but
    /// are still emitted.
    pub fn build(documents: &[FinancialDocument]) -> Result<Vec<StatementLine>, CoreError> {
        validate_documents(documents)?;

        let mut ordered: Vec<&FinancialDocument> = documents.iter().collect();
        ordered.sort_by_key(|document| document.date);

        let mut balance: i64 = 0;
        let mut lines = Vec::with_capacity(ordered.len());
        for document in ordered {
            match document.kind.balance_effect() {
                Some(sign) => {
                    balance = balance
                        .checked_add(sign * document.amount)
                        .ok_or_else(|| CoreError::invalid("statement balance overflowed"))?;
                }
                None => warn!(
                    document_id = %document.id,
                    kind = %document.kind,
                    "unknown document kind; balance left unchanged"
                ),
            }
            lines.push(StatementLine {
                document: document.clone(),
                balance,
            });
        }

        debug!(lines = lines.len(), closing_balance = balance, "statement built");
        Ok(lines)
    }

    /// Headline totals for a built statement, with overdue status resolved at `reference`.
    pub fn summarize(
        lines: &[StatementLine],
        reference: NaiveDate,
    ) -> Result<StatementSummary, CoreError> {
        let mut summary = StatementSummary::default();
        for line in lines {
            let document = &line.document;
            match document.kind.balance_effect() {
                Some(1) => add_amount(&mut summary.total_charges, document.amount)?,
                Some(_) => add_amount(&mut summary.total_credits, document.amount)?,
                None => {}
            }
            if document.kind.is_charge() && document.status.is_outstanding() {
                add_amount(&mut summary.outstanding, document.amount)?;
                if effective_status(document, reference) == DocumentStatus::Overdue {
                    summary.overdue_count += 1;
                }
            }
        }
        summary.closing_balance = lines.last().map(|line| line.balance).unwrap_or(0);
        Ok(summary)
    }
}

fn add_amount(total: &mut i64, amount: i64) -> Result<(), CoreError> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| CoreError::invalid("statement summary overflowed"))?;
    Ok(())
}

/// Status as of `reference`: a pending document past its due date is overdue.
pub fn effective_status(document: &FinancialDocument, reference: NaiveDate) -> DocumentStatus {
    match (document.status, document.due_date) {
        (DocumentStatus::Pending, Some(due)) if due < reference => DocumentStatus::Overdue,
        (status, _) => status,
    }
}
