//! Payroll rows from the backend.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use tally_core::validation::validate_payroll_row;
use tally_domain::PayrollRow;

use crate::{
    raw::{rows, RawAmount, RawId},
    IntakeError, IntakeOptions,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayrollRow {
    #[serde(default, alias = "employee_id", alias = "employee")]
    employee_id: Option<RawId>,
    #[serde(default, alias = "basic_salary", alias = "basic")]
    basic_salary: Option<RawAmount>,
    #[serde(default)]
    allowances: Option<RawAmount>,
    #[serde(default)]
    bonus: Option<RawAmount>,
    #[serde(default)]
    overtime: Option<RawAmount>,
    #[serde(default, alias = "deductions_statutory", alias = "statutoryDeductions")]
    deductions_statutory: Option<RawAmount>,
    #[serde(default, alias = "deductions_other", alias = "otherDeductions")]
    deductions_other: Option<RawAmount>,
}

/// Parses payroll rows. Missing monetary fields count as zero; employee ids must be unique.
pub fn parse_payroll_rows(
    json: &str,
    options: &IntakeOptions,
) -> Result<Vec<PayrollRow>, IntakeError> {
    let mut seen = HashSet::new();
    let mut parsed = Vec::new();
    for (index, value) in rows(json)?.into_iter().enumerate() {
        let raw: RawPayrollRow =
            serde_json::from_value(value).map_err(|source| IntakeError::Row { index, source })?;
        let row = convert(index, raw, options)?;
        if !seen.insert(row.employee_id.clone()) {
            return Err(IntakeError::InvalidField {
                index,
                field: "employeeId",
                reason: format!("duplicate employee `{}`", row.employee_id),
            });
        }
        parsed.push(row);
    }
    debug!(rows = parsed.len(), "payroll rows parsed");
    Ok(parsed)
}

fn convert(
    index: usize,
    raw: RawPayrollRow,
    options: &IntakeOptions,
) -> Result<PayrollRow, IntakeError> {
    let amount = |field: &'static str, value: Option<RawAmount>| -> Result<i64, IntakeError> {
        value
            .map(|raw| raw.to_minor_units(options))
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|reason| IntakeError::InvalidField {
                index,
                field,
                reason,
            })
    };

    let employee_id = raw
        .employee_id
        .map(RawId::into_string)
        .filter(|id| !id.is_empty())
        .ok_or(IntakeError::InvalidField {
            index,
            field: "employeeId",
            reason: "missing".into(),
        })?;
    let row = PayrollRow {
        employee_id,
        basic_salary: amount("basicSalary", raw.basic_salary)?,
        allowances: amount("allowances", raw.allowances)?,
        bonus: amount("bonus", raw.bonus)?,
        overtime: amount("overtime", raw.overtime)?,
        deductions_statutory: amount("deductionsStatutory", raw.deductions_statutory)?,
        deductions_other: amount("deductionsOther", raw.deductions_other)?,
    };
    validate_payroll_row(&row)?;
    Ok(row)
}
