//! Input invariants shared by the services.

use tally_domain::{FinancialDocument, PayrollField, PayrollRow};

use crate::CoreError;

/// Rejects documents with a negative amount or a due date before the issue date.
pub fn validate_document(document: &FinancialDocument) -> Result<(), CoreError> {
    if document.amount < 0 {
        return Err(CoreError::invalid(format!(
            "document `{}` has negative amount {}",
            document.id, document.amount
        )));
    }
    if let Some(due) = document.due_date {
        if due < document.date {
            return Err(CoreError::invalid(format!(
                "document `{}` is due {} before its issue date {}",
                document.id, due, document.date
            )));
        }
    }
    Ok(())
}

pub fn validate_documents(documents: &[FinancialDocument]) -> Result<(), CoreError> {
    documents.iter().try_for_each(validate_document)
}

/// Rejects rows carrying a negative value in any monetary field.
pub fn validate_payroll_row(row: &PayrollRow) -> Result<(), CoreError> {
    for field in PayrollField::ALL {
        validate_payroll_amount(&row.employee_id, field, row.get(field))?;
    }
    Ok(())
}

pub fn validate_payroll_amount(
    employee_id: &str,
    field: PayrollField,
    amount: i64,
) -> Result<(), CoreError> {
    if amount < 0 {
        return Err(CoreError::invalid(format!(
            "{field} for employee `{employee_id}` must not be negative (got {amount})"
        )));
    }
    Ok(())
}
