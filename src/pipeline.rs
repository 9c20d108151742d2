//! Batch filtering and aggregate statistics.
//!
//! [`filter_job_postings`] applies the [`JobClassifier`] over a whole
//! batch, keeping order and dropping nothing but noise. The filtered
//! output is always an order-preserving subsequence of the input: nothing
//! is reordered, duplicated, or rewritten.
//!
//! # Examples
//!
//! ```
//! use jobsift::{JobClassifier, JobRecord, batch_statistics, filter_job_postings};
//!
//! let records = vec![
//!     JobRecord::new().with_email("hr@acme.com"),
//!     JobRecord::new().with_description("Left the group"),
//! ];
//!
//! let classifier = JobClassifier::new();
//! let filtered = filter_job_postings(&records, &classifier);
//! assert_eq!(filtered.len(), 1);
//!
//! let stats = batch_statistics(records.len(), filtered.len());
//! assert_eq!(stats.filtered_out, 1);
//! assert_eq!(stats.filter_percentage, "50.0");
//! ```

use serde::{Deserialize, Serialize};

use crate::classifier::JobClassifier;
use crate::record::JobRecord;

/// Aggregate counts for one filtering pass.
///
/// `filter_percentage` is pre-formatted to one decimal for the display
/// layer, `"0.0"` for an empty batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchStatistics {
    /// Records in the original batch.
    pub total_rows: usize,
    /// Records classified as job postings.
    pub job_rows: usize,
    /// Records dropped as noise (`total_rows - job_rows`).
    pub filtered_out: usize,
    /// Share of the batch dropped, as a 1-decimal percentage string.
    pub filter_percentage: String,
}

/// Keeps only the records the classifier marks as job postings.
///
/// Order-preserving, side-effect free; one malformed record cannot abort
/// the rest of the batch because classification is total.
#[must_use]
pub fn filter_job_postings(records: &[JobRecord], classifier: &JobClassifier) -> Vec<JobRecord> {
    records
        .iter()
        .filter(|record| classifier.classify(record))
        .cloned()
        .collect()
}

/// Computes batch statistics from the original and filtered sizes.
#[must_use]
pub fn batch_statistics(total_rows: usize, job_rows: usize) -> BatchStatistics {
    let filtered_out = total_rows.saturating_sub(job_rows);
    let percentage = if total_rows == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        {
            filtered_out as f64 / total_rows as f64 * 100.0
        }
    };

    BatchStatistics {
        total_rows,
        job_rows,
        filtered_out,
        filter_percentage: format!("{percentage:.1}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_keeps_order() {
        let records = vec![
            JobRecord::new().with_email("a@acme.com"),
            JobRecord::new().with_description("Left the group"),
            JobRecord::new().with_email("b@acme.com"),
        ];
        let filtered = filter_job_postings(&records, &JobClassifier::new());
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].email(), "a@acme.com");
        assert_eq!(filtered[1].email(), "b@acme.com");
    }

    #[test]
    fn test_filter_empty_batch() {
        let filtered = filter_job_postings(&[], &JobClassifier::new());
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_statistics_consistency() {
        let stats = batch_statistics(8, 5);
        assert_eq!(stats.total_rows, 8);
        assert_eq!(stats.job_rows, 5);
        assert_eq!(stats.filtered_out, 3);
        assert_eq!(stats.filter_percentage, "37.5");
        assert_eq!(stats.filtered_out + stats.job_rows, stats.total_rows);
    }

    #[test]
    fn test_statistics_empty_batch() {
        let stats = batch_statistics(0, 0);
        assert_eq!(stats.filtered_out, 0);
        assert_eq!(stats.filter_percentage, "0.0");
    }

    #[test]
    fn test_statistics_nothing_filtered() {
        let stats = batch_statistics(4, 4);
        assert_eq!(stats.filtered_out, 0);
        assert_eq!(stats.filter_percentage, "0.0");
    }

    #[test]
    fn test_statistics_rounding() {
        let stats = batch_statistics(3, 2);
        // 1/3 rounds to one decimal
        assert_eq!(stats.filter_percentage, "33.3");
    }

    #[test]
    fn test_statistics_serialization_shape() {
        let stats = batch_statistics(2, 1);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["total_rows"], 2);
        assert_eq!(json["filter_percentage"], "50.0");
    }
}
