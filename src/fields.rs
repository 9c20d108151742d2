//! Best-effort company/role/location derivation.
//!
//! Chat exports rarely fill the structured fields; the useful data sits in
//! the free-text description as `Label: value` segments. This module
//! prefers the structured field when it is non-blank, and otherwise pulls
//! the labeled segment out of the description:
//!
//! | Field | Label | Captures until |
//! |-------|-------|----------------|
//! | company | `Company:` | `Role:` or end |
//! | role | `Role:` | `Batch:`, `Location:`, `Company:` or end |
//! | location | `Location:` | `Send`, `Apply`, `Batch:` or end |
//!
//! Matching is case-insensitive, first occurrence only, captures trimmed.
//! Nothing here ever fails; "no match" is simply `None`, and the
//! `*_display` helpers substitute the placeholder the UI shows.
//!
//! # Example
//!
//! ```
//! use jobsift::{FieldExtractor, JobRecord};
//!
//! let extractor = FieldExtractor::new();
//! let record = JobRecord::new()
//!     .with_description("Company: Acme Role: Backend Engineer Location: Remote");
//!
//! assert_eq!(extractor.company(&record).as_deref(), Some("Acme"));
//! assert_eq!(extractor.role(&record).as_deref(), Some("Backend Engineer"));
//! assert_eq!(extractor.location(&record).as_deref(), Some("Remote"));
//! ```

use regex::Regex;

use crate::record::JobRecord;

/// Placeholder shown by the display layer when nothing could be derived.
pub const NOT_AVAILABLE: &str = "not available";

/// Derives company, role, and location for display.
///
/// Compiles its three fallback patterns once; construct and reuse.
#[derive(Debug)]
pub struct FieldExtractor {
    company: Regex,
    role: Regex,
    location: Regex,
}

impl FieldExtractor {
    /// Creates an extractor with the fixed label patterns.
    ///
    /// # Panics
    ///
    /// Panics if a fixed pattern fails to compile (a bug, not a runtime
    /// condition).
    #[must_use]
    pub fn new() -> Self {
        Self {
            company: Regex::new(r"(?i)Company:\s*([^:]+?)(?:Role:|$)").unwrap(),
            role: Regex::new(r"(?i)Role:\s*([^:]+?)(?:Batch:|Location:|Company:|$)").unwrap(),
            location: Regex::new(r"(?i)Location:\s*([^:]+?)(?:Send|Apply|Batch:|$)").unwrap(),
        }
    }

    /// The company: structured field first, labeled segment fallback.
    #[must_use]
    pub fn company(&self, record: &JobRecord) -> Option<String> {
        structured_or(record.company(), || {
            capture_first(&self.company, record.description())
        })
    }

    /// The role: structured `job_title` first, labeled segment fallback.
    #[must_use]
    pub fn role(&self, record: &JobRecord) -> Option<String> {
        structured_or(record.job_title(), || {
            capture_first(&self.role, record.description())
        })
    }

    /// The location: structured field first, labeled segment fallback.
    #[must_use]
    pub fn location(&self, record: &JobRecord) -> Option<String> {
        structured_or(record.location(), || {
            capture_first(&self.location, record.description())
        })
    }

    /// [`company`](Self::company) with the display placeholder.
    #[must_use]
    pub fn company_display(&self, record: &JobRecord) -> String {
        self.company(record)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// [`role`](Self::role) with the display placeholder.
    #[must_use]
    pub fn role_display(&self, record: &JobRecord) -> String {
        self.role(record)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }

    /// [`location`](Self::location) with the display placeholder.
    #[must_use]
    pub fn location_display(&self, record: &JobRecord) -> String {
        self.location(record)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// The structured field verbatim (trimmed) when non-blank, else the fallback.
fn structured_or(field: &str, fallback: impl FnOnce() -> Option<String>) -> Option<String> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        fallback()
    } else {
        Some(trimmed.to_string())
    }
}

/// First capture of `pattern` in `text`, trimmed; `None` on no match.
fn capture_first(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new()
    }

    #[test]
    fn test_structured_fields_win() {
        let record = JobRecord::new()
            .with_company("  Acme  ")
            .with_job_title("Analyst")
            .with_location("Pune")
            .with_description("Company: Other Role: Other Location: Other");

        let e = extractor();
        assert_eq!(e.company(&record).as_deref(), Some("Acme"));
        assert_eq!(e.role(&record).as_deref(), Some("Analyst"));
        assert_eq!(e.location(&record).as_deref(), Some("Pune"));
    }

    #[test]
    fn test_blank_structured_field_falls_back() {
        let record = JobRecord::new()
            .with_company("   ")
            .with_description("Company: Acme Role: Backend Engineer Location: Remote");

        assert_eq!(extractor().company(&record).as_deref(), Some("Acme"));
    }

    #[test]
    fn test_fallback_extraction_full_template() {
        let record = JobRecord::new()
            .with_description("Company: Acme Role: Backend Engineer Location: Remote");

        let e = extractor();
        assert_eq!(e.company(&record).as_deref(), Some("Acme"));
        assert_eq!(e.role(&record).as_deref(), Some("Backend Engineer"));
        assert_eq!(e.location(&record).as_deref(), Some("Remote"));
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let record = JobRecord::new().with_description("COMPANY: Acme ROLE: Analyst");
        let e = extractor();
        assert_eq!(e.company(&record).as_deref(), Some("Acme"));
        assert_eq!(e.role(&record).as_deref(), Some("Analyst"));
    }

    #[test]
    fn test_role_stops_at_batch_label() {
        let record = JobRecord::new().with_description("Role: SDE Intern Batch: 2024");
        assert_eq!(extractor().role(&record).as_deref(), Some("SDE Intern"));
    }

    #[test]
    fn test_location_stops_at_send() {
        let record =
            JobRecord::new().with_description("Location: Bangalore Send resume to hr@acme.com");
        assert_eq!(extractor().location(&record).as_deref(), Some("Bangalore"));
    }

    #[test]
    fn test_label_runs_to_end_of_string() {
        let record = JobRecord::new().with_description("Company: Acme Systems");
        assert_eq!(
            extractor().company(&record).as_deref(),
            Some("Acme Systems")
        );
    }

    #[test]
    fn test_no_match_is_none() {
        let record = JobRecord::new().with_description("no labels here");
        let e = extractor();
        assert_eq!(e.company(&record), None);
        assert_eq!(e.role(&record), None);
        assert_eq!(e.location(&record), None);
    }

    #[test]
    fn test_display_placeholder() {
        let record = JobRecord::new();
        assert_eq!(extractor().company_display(&record), NOT_AVAILABLE);
    }

    #[test]
    fn test_first_occurrence_only() {
        let record =
            JobRecord::new().with_description("Company: First Role: A Company: Second Role: B");
        assert_eq!(extractor().company(&record).as_deref(), Some("First"));
    }
}
