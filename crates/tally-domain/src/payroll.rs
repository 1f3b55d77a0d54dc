//! Payroll rows, editable fields, selections and batch totals.

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use crate::common::MinorUnits;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    pub employee_id: String,
    pub basic_salary: MinorUnits,
    pub allowances: MinorUnits,
    pub bonus: MinorUnits,
    pub overtime: MinorUnits,
    pub deductions_statutory: MinorUnits,
    pub deductions_other: MinorUnits,
}

impl PayrollRow {
    pub fn new(employee_id: impl Into<String>, basic_salary: MinorUnits) -> Self {
        Self {
            employee_id: employee_id.into(),
            basic_salary,
            ..Self::default()
        }
    }

    /// Earnings before deductions, or `None` when the sum leaves the `i64` range.
    pub fn checked_gross_pay(&self) -> Option<MinorUnits> {
        narrow(self.wide_gross())
    }

    pub fn checked_total_deductions(&self) -> Option<MinorUnits> {
        narrow(self.wide_deductions())
    }

    /// Gross pay less all deductions. Negative when deductions exceed earnings.
    ///
    /// Summed in `i128`, so a row whose gross alone overflows still yields its
    /// net pay when that fits. `None` only when the net itself is out of range.
    pub fn checked_net_pay(&self) -> Option<MinorUnits> {
        narrow(self.wide_gross() - self.wide_deductions())
    }

    fn wide_gross(&self) -> i128 {
        i128::from(self.basic_salary)
            + i128::from(self.allowances)
            + i128::from(self.bonus)
            + i128::from(self.overtime)
    }

    fn wide_deductions(&self) -> i128 {
        i128::from(self.deductions_statutory) + i128::from(self.deductions_other)
    }

    pub fn get(&self, field: PayrollField) -> MinorUnits {
        match field {
            PayrollField::BasicSalary => self.basic_salary,
            PayrollField::Allowances => self.allowances,
            PayrollField::Bonus => self.bonus,
            PayrollField::Overtime => self.overtime,
            PayrollField::DeductionsStatutory => self.deductions_statutory,
            PayrollField::DeductionsOther => self.deductions_other,
        }
    }

    /// Returns a copy with one monetary field replaced.
    pub fn with_field(&self, field: PayrollField, amount: MinorUnits) -> Self {
        let mut next = self.clone();
        let slot = match field {
            PayrollField::BasicSalary => &mut next.basic_salary,
            PayrollField::Allowances => &mut next.allowances,
            PayrollField::Bonus => &mut next.bonus,
            PayrollField::Overtime => &mut next.overtime,
            PayrollField::DeductionsStatutory => &mut next.deductions_statutory,
            PayrollField::DeductionsOther => &mut next.deductions_other,
        };
        *slot = amount;
        next
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// The editable monetary columns of a payroll row.
pub enum PayrollField {
    BasicSalary,
    Allowances,
    Bonus,
    Overtime,
    DeductionsStatutory,
    DeductionsOther,
}

impl PayrollField {
    pub const ALL: [PayrollField; 6] = [
        PayrollField::BasicSalary,
        PayrollField::Allowances,
        PayrollField::Bonus,
        PayrollField::Overtime,
        PayrollField::DeductionsStatutory,
        PayrollField::DeductionsOther,
    ];
}

impl fmt::Display for PayrollField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PayrollField::BasicSalary => "basic salary",
            PayrollField::Allowances => "allowances",
            PayrollField::Bonus => "bonus",
            PayrollField::Overtime => "overtime",
            PayrollField::DeductionsStatutory => "statutory deductions",
            PayrollField::DeductionsOther => "other deductions",
        };
        f.write_str(label)
    }
}

/// The set of employees included in a payroll batch.
///
/// Keyed by employee id so it cannot drift out of alignment with the row list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSelection {
    employee_ids: BTreeSet<String>,
}

impl PayrollSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(rows: &[PayrollRow]) -> Self {
        Self {
            employee_ids: rows.iter().map(|row| row.employee_id.clone()).collect(),
        }
    }

    pub fn select(&mut self, employee_id: impl Into<String>) {
        self.employee_ids.insert(employee_id.into());
    }

    pub fn deselect(&mut self, employee_id: &str) {
        self.employee_ids.remove(employee_id);
    }

    /// Flips membership, returning whether the employee is now selected.
    pub fn toggle(&mut self, employee_id: &str) -> bool {
        if self.employee_ids.remove(employee_id) {
            false
        } else {
            self.employee_ids.insert(employee_id.to_string());
            true
        }
    }

    pub fn contains(&self, employee_id: &str) -> bool {
        self.employee_ids.contains(employee_id)
    }

    pub fn len(&self) -> usize {
        self.employee_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employee_ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.employee_ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PayrollSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            employee_ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Field-wise sums over the selected payroll rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBatchTotals {
    pub row_count: usize,
    pub basic_salary: MinorUnits,
    pub allowances: MinorUnits,
    pub bonus: MinorUnits,
    pub overtime: MinorUnits,
    pub deductions_statutory: MinorUnits,
    pub deductions_other: MinorUnits,
    pub net_pay: MinorUnits,
}

impl PayrollBatchTotals {
    /// Folds one row into the totals.
    ///
    /// Returns `None` and leaves the totals untouched when any sum would overflow.
    pub fn add_row(&mut self, row: &PayrollRow) -> Option<()> {
        let next = Self {
            row_count: self.row_count + 1,
            basic_salary: self.basic_salary.checked_add(row.basic_salary)?,
            allowances: self.allowances.checked_add(row.allowances)?,
            bonus: self.bonus.checked_add(row.bonus)?,
            overtime: self.overtime.checked_add(row.overtime)?,
            deductions_statutory: self
                .deductions_statutory
                .checked_add(row.deductions_statutory)?,
            deductions_other: self.deductions_other.checked_add(row.deductions_other)?,
            net_pay: self.net_pay.checked_add(row.checked_net_pay()?)?,
        };
        *self = next;
        Some(())
    }

    pub fn get(&self, field: PayrollField) -> MinorUnits {
        match field {
            PayrollField::BasicSalary => self.basic_salary,
            PayrollField::Allowances => self.allowances,
            PayrollField::Bonus => self.bonus,
            PayrollField::Overtime => self.overtime,
            PayrollField::DeductionsStatutory => self.deductions_statutory,
            PayrollField::DeductionsOther => self.deductions_other,
        }
    }
}

fn narrow(value: i128) -> Option<MinorUnits> {
    MinorUnits::try_from(value).ok()
}
