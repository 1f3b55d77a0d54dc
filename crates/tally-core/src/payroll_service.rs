//! Payroll net pay, edits and batch aggregation.

use std::collections::HashSet;

use tracing::debug;

use tally_domain::{PayrollBatchTotals, PayrollField, PayrollRow, PayrollSelection};

use crate::{
    validation::{validate_payroll_amount, validate_payroll_row},
    CoreError,
};

pub struct PayrollService;

impl PayrollService {
    /// Net pay per row; `InvalidArgument` when it does not fit in `i64`.
    pub fn net_pay(row: &PayrollRow) -> Result<i64, CoreError> {
        row.checked_net_pay().ok_or_else(|| {
            CoreError::invalid(format!(
                "net pay for employee `{}` overflowed",
                row.employee_id
            ))
        })
    }

    /// Sums rows whose parallel flag is set. Flags must line up with rows one to one.
    pub fn aggregate_selected(
        rows: &[PayrollRow],
        selected: &[bool],
    ) -> Result<PayrollBatchTotals, CoreError> {
        if rows.len() != selected.len() {
            return Err(CoreError::invalid(format!(
                "selection has {} flags for {} payroll rows",
                selected.len(),
                rows.len()
            )));
        }
        let mut totals = PayrollBatchTotals::default();
        for (row, _) in rows.iter().zip(selected).filter(|(_, flag)| **flag) {
            add_to_totals(&mut totals, row)?;
        }
        Ok(totals)
    }

    /// Sums rows whose employee id is in `selection`.
    ///
    /// Every selected id must name a row; a dangling id is a caller error.
    pub fn aggregate(
        rows: &[PayrollRow],
        selection: &PayrollSelection,
    ) -> Result<PayrollBatchTotals, CoreError> {
        let known: HashSet<&str> = rows.iter().map(|row| row.employee_id.as_str()).collect();
        if let Some(missing) = selection.iter().find(|id| !known.contains(id)) {
            return Err(CoreError::invalid(format!(
                "selected employee `{missing}` is not in the payroll"
            )));
        }

        let mut totals = PayrollBatchTotals::default();
        for row in rows.iter().filter(|row| selection.contains(&row.employee_id)) {
            add_to_totals(&mut totals, row)?;
        }
        debug!(
            rows = totals.row_count,
            net_pay = totals.net_pay,
            "payroll batch aggregated"
        );
        Ok(totals)
    }

    /// Returns a new row list with one field of one employee replaced.
    ///
    /// The input rows are left untouched, so an in-flight aggregation never sees a
    /// half-applied edit.
    pub fn apply_edit(
        rows: &[PayrollRow],
        employee_id: &str,
        field: PayrollField,
        amount: i64,
    ) -> Result<Vec<PayrollRow>, CoreError> {
        validate_payroll_amount(employee_id, field, amount)?;
        let position = rows
            .iter()
            .position(|row| row.employee_id == employee_id)
            .ok_or_else(|| {
                CoreError::invalid(format!("employee `{employee_id}` is not in the payroll"))
            })?;

        let mut next = rows.to_vec();
        next[position] = rows[position].with_field(field, amount);
        Ok(next)
    }
}

fn add_to_totals(totals: &mut PayrollBatchTotals, row: &PayrollRow) -> Result<(), CoreError> {
    validate_payroll_row(row)?;
    totals.add_row(row).ok_or_else(|| {
        CoreError::invalid(format!(
            "payroll totals overflowed at employee `{}`",
            row.employee_id
        ))
    })
}
