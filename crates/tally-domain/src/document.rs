//! Financial documents tracked against a counterparty.

use std::fmt;

use chrono::NaiveDate;
use serde::{de::Deserializer, Deserialize, Serialize, Serializer};

use crate::common::{normalize_label, MinorUnits};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Enumerates the document types that move a counterparty balance.
pub enum DocumentKind {
    Invoice,
    Payment,
    CreditNote,
    Bill,
    /// A kind the backend sent that this crate does not recognise.
    Other(String),
}

impl DocumentKind {
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "invoice" => DocumentKind::Invoice,
            "payment" | "paymentreceived" | "paymentmade" => DocumentKind::Payment,
            "creditnote" | "credit" => DocumentKind::CreditNote,
            "bill" => DocumentKind::Bill,
            _ => DocumentKind::Other(label.trim().to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DocumentKind::Invoice => "Invoice",
            DocumentKind::Payment => "Payment",
            DocumentKind::CreditNote => "CreditNote",
            DocumentKind::Bill => "Bill",
            DocumentKind::Other(raw) => raw,
        }
    }

    /// Sign applied to the document amount in a running balance.
    ///
    /// `None` marks a kind with no known effect; callers leave the balance unchanged.
    pub fn balance_effect(&self) -> Option<i64> {
        match self {
            DocumentKind::Invoice | DocumentKind::Bill => Some(1),
            DocumentKind::Payment | DocumentKind::CreditNote => Some(-1),
            DocumentKind::Other(_) => None,
        }
    }

    /// Invoices and bills are the documents that can fall due.
    pub fn is_charge(&self) -> bool {
        matches!(self, DocumentKind::Invoice | DocumentKind::Bill)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for DocumentKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for DocumentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(DocumentKind::from_label(&value))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
/// Lifecycle state of a document as reported by the backend.
pub enum DocumentStatus {
    Draft,
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl DocumentStatus {
    /// Maps backend status labels onto the closed status set.
    ///
    /// Returns `None` for labels outside the known vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "draft" => Some(DocumentStatus::Draft),
            "pending" | "unpaid" | "open" | "sent" | "partial" | "partiallypaid" => {
                Some(DocumentStatus::Pending)
            }
            "paid" => Some(DocumentStatus::Paid),
            "overdue" => Some(DocumentStatus::Overdue),
            _ => None,
        }
    }

    pub fn is_outstanding(self) -> bool {
        !matches!(self, DocumentStatus::Paid)
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Pending => "Pending",
            DocumentStatus::Paid => "Paid",
            DocumentStatus::Overdue => "Overdue",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialDocument {
    pub id: String,
    pub date: NaiveDate,
    pub kind: DocumentKind,
    pub reference: String,
    pub amount: MinorUnits,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl FinancialDocument {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        kind: DocumentKind,
        reference: impl Into<String>,
        amount: MinorUnits,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            kind,
            reference: reference.into(),
            amount,
            due_date: None,
            status: DocumentStatus::Pending,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    /// Date the document is aged from: the due date when present, else the issue date.
    pub fn aging_anchor(&self) -> NaiveDate {
        self.due_date.unwrap_or(self.date)
    }
}
