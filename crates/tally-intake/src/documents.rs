//! Invoice, bill and payment rows from the backend.

use serde::Deserialize;
use tracing::debug;

use tally_core::validation::validate_document;
use tally_domain::{DocumentKind, DocumentStatus, FinancialDocument};

use crate::{
    raw::{parse_date, rows, RawAmount, RawId},
    IntakeError, IntakeOptions,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDocument {
    #[serde(default, alias = "_id")]
    id: Option<RawId>,
    #[serde(default, alias = "issueDate", alias = "issue_date")]
    date: Option<String>,
    #[serde(default, alias = "type")]
    kind: Option<String>,
    #[serde(default, alias = "number", alias = "documentNumber")]
    reference: Option<String>,
    #[serde(default, alias = "total")]
    amount: Option<RawAmount>,
    #[serde(default, alias = "due_date")]
    due_date: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Parses and validates a document list (bare array or `{ "data": [...] }`).
pub fn parse_documents(
    json: &str,
    options: &IntakeOptions,
) -> Result<Vec<FinancialDocument>, IntakeError> {
    let documents = rows(json)?
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let raw: RawDocument =
                serde_json::from_value(value).map_err(|source| IntakeError::Row { index, source })?;
            convert(index, raw, options)
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = documents.len(), "documents parsed");
    Ok(documents)
}

fn convert(
    index: usize,
    raw: RawDocument,
    options: &IntakeOptions,
) -> Result<FinancialDocument, IntakeError> {
    let invalid = |field: &'static str, reason: String| IntakeError::InvalidField {
        index,
        field,
        reason,
    };

    let id = raw
        .id
        .map(RawId::into_string)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| invalid("id", "missing".into()))?;
    let date = raw
        .date
        .as_deref()
        .ok_or_else(|| invalid("date", "missing".into()))
        .and_then(|text| parse_date(text).map_err(|reason| invalid("date", reason)))?;
    let kind = match (raw.kind.as_deref(), &options.default_kind) {
        (Some(label), _) => DocumentKind::from_label(label),
        (None, Some(kind)) => kind.clone(),
        (None, None) => return Err(invalid("kind", "missing".into())),
    };
    let amount = raw
        .amount
        .ok_or_else(|| invalid("amount", "missing".into()))?
        .to_minor_units(options)
        .map_err(|reason| invalid("amount", reason))?;
    if amount < 0 {
        return Err(invalid("amount", format!("{amount} must not be negative")));
    }
    let due_date = raw
        .due_date
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(|text| parse_date(text).map_err(|reason| invalid("dueDate", reason)))
        .transpose()?;
    let status = match raw.status.as_deref() {
        None => DocumentStatus::default(),
        Some(label) => DocumentStatus::from_label(label)
            .ok_or_else(|| invalid("status", format!("unknown status `{label}`")))?,
    };
    let reference = raw
        .reference
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| id.clone());

    let mut document = FinancialDocument::new(id, date, kind, reference, amount).with_status(status);
    document.due_date = due_date;
    validate_document(&document)?;
    Ok(document)
}
