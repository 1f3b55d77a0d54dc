//! Aging buckets for receivables and payables.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::common::MinorUnits;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Age ranges in days, closed on both ends except the open-ended top bucket.
pub enum AgingBucket {
    #[serde(rename = "0-30")]
    Current,
    #[serde(rename = "31-60")]
    Days31To60,
    #[serde(rename = "61-90")]
    Days61To90,
    #[serde(rename = "90+")]
    Over90,
}

impl AgingBucket {
    pub const ALL: [AgingBucket; 4] = [
        AgingBucket::Current,
        AgingBucket::Days31To60,
        AgingBucket::Days61To90,
        AgingBucket::Over90,
    ];

    /// Classifies an age in whole days. Negative ages (not yet due) count as current.
    pub fn for_age(days: i64) -> Self {
        match days {
            i64::MIN..=30 => AgingBucket::Current,
            31..=60 => AgingBucket::Days31To60,
            61..=90 => AgingBucket::Days61To90,
            _ => AgingBucket::Over90,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgingBucket::Current => "0-30",
            AgingBucket::Days31To60 => "31-60",
            AgingBucket::Days61To90 => "61-90",
            AgingBucket::Over90 => "90+",
        }
    }
}

impl fmt::Display for AgingBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outstanding amounts per aging bucket. Every bucket is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgingReport {
    buckets: BTreeMap<AgingBucket, MinorUnits>,
    total: MinorUnits,
    pub document_count: usize,
}

impl AgingReport {
    pub fn new() -> Self {
        Self {
            buckets: AgingBucket::ALL.iter().map(|bucket| (*bucket, 0)).collect(),
            total: 0,
            document_count: 0,
        }
    }

    /// Adds one document's amount to `bucket`.
    ///
    /// Returns `None` and leaves the report untouched when the bucket or the
    /// report total would overflow.
    pub fn add(&mut self, bucket: AgingBucket, amount: MinorUnits) -> Option<()> {
        let total = self.total.checked_add(amount)?;
        let slot = self.buckets.entry(bucket).or_insert(0);
        *slot = slot.checked_add(amount)?;
        self.total = total;
        self.document_count += 1;
        Some(())
    }

    pub fn get(&self, bucket: AgingBucket) -> MinorUnits {
        self.buckets.get(&bucket).copied().unwrap_or(0)
    }

    pub fn total(&self) -> MinorUnits {
        self.total
    }

    /// Buckets in ascending age order.
    pub fn iter(&self) -> impl Iterator<Item = (AgingBucket, MinorUnits)> + '_ {
        self.buckets.iter().map(|(bucket, amount)| (*bucket, *amount))
    }
}

impl Default for AgingReport {
    fn default() -> Self {
        Self::new()
    }
}
