use std::collections::HashSet;

use crate::domain::request::{DuplicatePolicy, SendRequest};
use crate::domain::response::BatchError;
use crate::domain::value::validate_msisdn;

/// Outcome of validating and de-duplicating a bulk send, before any dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchPlan {
    /// Entries to send, in input order.
    pub dispatch: Vec<SendRequest>,
    /// Later occurrences of an already seen valid recipient, in input order.
    pub duplicates: Vec<SendRequest>,
    /// Entries rejected by number validation (or the empty-batch marker).
    pub rejected: Vec<BatchError>,
}

/// Validate and classify bulk entries.
///
/// - Invalid entries go to `rejected` and take no further part: they are never
///   sent and never counted as duplicates.
/// - Among valid entries, the first occurrence of a recipient is the original;
///   every later occurrence is a duplicate under both policies.
/// - With [`DuplicatePolicy::Skip`] only originals are dispatched; with
///   [`DuplicatePolicy::Keep`] every valid entry is.
///
/// An empty input yields a single `N/A` / `No data provided` rejection.
pub fn plan_batch(entries: Vec<SendRequest>, policy: DuplicatePolicy) -> BatchPlan {
    let mut plan = BatchPlan::default();
    if entries.is_empty() {
        plan.rejected.push(BatchError::no_data());
        return plan;
    }

    let mut seen = HashSet::<String>::with_capacity(entries.len());
    for entry in entries {
        if let Err(err) = validate_msisdn(&entry.recipient) {
            plan.rejected
                .push(BatchError::new(entry.recipient, err.to_string()));
            continue;
        }

        if seen.insert(entry.recipient.clone()) {
            plan.dispatch.push(entry);
            continue;
        }

        match policy {
            DuplicatePolicy::Skip => plan.duplicates.push(entry),
            DuplicatePolicy::Keep => {
                plan.duplicates.push(entry.clone());
                plan.dispatch.push(entry);
            }
        }
    }

    plan
}
