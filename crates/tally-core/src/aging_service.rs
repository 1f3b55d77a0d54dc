//! Receivables and payables aging.

use chrono::NaiveDate;
use tracing::{debug, warn};

use tally_domain::{AgingBucket, AgingReport, FinancialDocument};

use crate::{validation::validate_documents, CoreError};

pub struct AgingService;

impl AgingService {
    /// Sums outstanding document amounts into age buckets as of `reference`.
    ///
    /// Paid and zero-amount documents are skipped. Age is measured from the due
    /// date, or from the issue date when no due date is set.
    pub fn bucket(
        documents: &[FinancialDocument],
        reference: NaiveDate,
    ) -> Result<AgingReport, CoreError> {
        validate_documents(documents)?;

        let mut report = AgingReport::new();
        for document in documents {
            if !document.status.is_outstanding() || document.amount <= 0 {
                continue;
            }
            if document.due_date.is_none() && document.kind.is_charge() {
                warn!(
                    document_id = %document.id,
                    kind = %document.kind,
                    "missing due date; aging from issue date"
                );
            }
            let bucket = Self::bucket_for_age(age_in_days(document, reference));
            report.add(bucket, document.amount).ok_or_else(|| {
                CoreError::invalid(format!(
                    "aging total overflowed at document `{}`",
                    document.id
                ))
            })?;
        }

        debug!(
            documents = report.document_count,
            total = report.total(),
            %reference,
            "aging computed"
        );
        Ok(report)
    }

    pub fn bucket_for_age(days: i64) -> AgingBucket {
        AgingBucket::for_age(days)
    }
}

/// Whole days between the document's aging anchor and `reference`; negative when not yet due.
pub fn age_in_days(document: &FinancialDocument, reference: NaiveDate) -> i64 {
    (reference - document.aging_anchor()).num_days()
}
