//! # Jobsift
//!
//! A Rust library for sifting genuine job postings out of loosely
//! structured chat exports, and mining the contacts buried in them.
//!
//! ## Overview
//!
//! Export groups mix real job postings with joins/leaves, stickers,
//! pinned-message notices, and motivational filler. Jobsift takes the
//! already-parsed record batch an export parser produces and provides:
//!
//! - **Classification** — a rule-based job-posting vs. noise verdict per
//!   record ([`JobClassifier`])
//! - **Filtering** — order-preserving batch filtering with aggregate
//!   statistics ([`filter_job_postings`], [`BatchStatistics`])
//! - **Field extraction** — company/role/location recovered from
//!   `Label: value` description segments ([`FieldExtractor`])
//! - **Normalization** — removal of known description artifacts
//!   ([`clean_description`])
//! - **Contact mining** — emails (plain and obfuscated) and names,
//!   deduplicated and attributed to source records ([`ContactExtractor`])
//! - **Export shaping** — flat spreadsheet rows for external serializers
//!   ([`export_rows`])
//!
//! The engine is pure: no I/O, no network, no persistence. Parsing the
//! raw export document and encoding the output files belong to external
//! collaborators.
//!
//! ## Quick Start
//!
//! ```rust
//! use jobsift::prelude::*;
//!
//! let records = vec![
//!     JobRecord::new()
//!         .with_description("Company: Acme Role: Backend Engineer Location: Remote, apply at hr@acme.com"),
//!     JobRecord::new().with_description("Left the group"),
//! ];
//!
//! // Classify and filter
//! let classifier = JobClassifier::new();
//! let filtered = filter_job_postings(&records, &classifier);
//! let stats = batch_statistics(records.len(), filtered.len());
//! assert_eq!(stats.job_rows, 1);
//! assert_eq!(stats.filter_percentage, "50.0");
//!
//! // Mine contacts from the same batch, independently
//! let extractor = ContactExtractor::new();
//! let contacts = extractor.extract_contact_info(&records);
//! assert_eq!(contacts[0].email, "hr@acme.com");
//! ```
//!
//! ## Determinism
//!
//! All pattern sets are frozen ([`patterns`]) and every transform is a
//! pure function of its input, so identical batches always produce
//! identical output — sequentially or in parallel.

pub mod classifier;
pub mod clean;
pub mod contacts;
pub mod error;
pub mod export;
pub mod fields;
pub mod patterns;
pub mod pipeline;
pub mod record;

pub use classifier::JobClassifier;
pub use clean::{CleanRules, clean_description};
pub use contacts::{CONTACT_SOURCE, ContactAnalysis, ContactExtractor, ContactRecord};
pub use error::{Result, SiftError};
pub use export::{ExportRow, export_rows};
pub use fields::{FieldExtractor, NOT_AVAILABLE};
pub use patterns::PatternLibrary;
pub use pipeline::{BatchStatistics, batch_statistics, filter_job_postings};
pub use record::JobRecord;

/// Convenience re-exports for the common workflow.
///
/// ```rust
/// use jobsift::prelude::*;
///
/// let classifier = JobClassifier::new();
/// let records: Vec<JobRecord> = vec![];
/// let filtered = filter_job_postings(&records, &classifier);
/// assert!(filtered.is_empty());
/// ```
pub mod prelude {
    pub use crate::classifier::JobClassifier;
    pub use crate::clean::clean_description;
    pub use crate::contacts::{ContactAnalysis, ContactExtractor, ContactRecord};
    pub use crate::error::{Result, SiftError};
    pub use crate::export::{ExportRow, export_rows};
    pub use crate::fields::FieldExtractor;
    pub use crate::pipeline::{BatchStatistics, batch_statistics, filter_job_postings};
    pub use crate::record::JobRecord;
}
