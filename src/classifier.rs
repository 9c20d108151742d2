//! Job-posting vs. noise classification.
//!
//! One exported message at a time, [`JobClassifier::classify`] decides
//! whether a record is a genuine job posting or incidental chat noise
//! (joins/leaves, stickers, pinned-message notices, filler).
//!
//! # Decision order
//!
//! The rules run top to bottom and the first hit wins. The ordering is
//! load-bearing: structured-field rules are stronger signals than the
//! text heuristics that follow them.
//!
//! 1. `email` contains `@` → job posting
//! 2. `company` longer than 2 characters → job posting
//! 3. `job_title` longer than 3 characters → job posting
//! 4. `link` starts with `http` or contains `forms.google` → job posting
//! 5. Otherwise inspect the description:
//!    - any noise pattern match → noise
//!    - 2 or more job indicators → job posting
//!    - length over 50 and at least 1 indicator → job posting
//!    - anything else → noise
//!
//! # Examples
//!
//! ```
//! use jobsift::{JobClassifier, JobRecord};
//!
//! let classifier = JobClassifier::new();
//!
//! let posting = JobRecord::new().with_email("hr@acme.com");
//! assert!(classifier.classify(&posting));
//!
//! let noise = JobRecord::new().with_description("Left the group");
//! assert!(!classifier.classify(&noise));
//! ```

use crate::patterns::PatternLibrary;
use crate::record::JobRecord;

/// Rule-based job-posting classifier.
///
/// Holds a compiled [`PatternLibrary`]; construct once and reuse across
/// batches. Classification is a pure predicate: no side effects, and the
/// same record always yields the same verdict.
#[derive(Debug, Default)]
pub struct JobClassifier {
    patterns: PatternLibrary,
}

impl JobClassifier {
    /// Creates a classifier with the frozen pattern library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: PatternLibrary::new(),
        }
    }

    /// Creates a classifier around an already-compiled library.
    ///
    /// Useful when the same library also drives contact extraction.
    #[must_use]
    pub fn with_patterns(patterns: PatternLibrary) -> Self {
        Self { patterns }
    }

    /// Decides whether the record is a job posting.
    #[must_use]
    pub fn classify(&self, record: &JobRecord) -> bool {
        // Structured fields first: an email is the strongest signal.
        if record.email().contains('@') {
            return true;
        }

        if record.company().chars().count() > 2 {
            return true;
        }

        if record.job_title().chars().count() > 3 {
            return true;
        }

        let link = record.link();
        if !link.is_empty() && (link.starts_with("http") || link.contains("forms.google")) {
            return true;
        }

        // Fall back to mining the description text.
        let description = record.description();

        if self.patterns.matches_noise(description) {
            return false;
        }

        let indicators = self.indicator_count(record);
        if indicators >= 2 {
            return true;
        }

        description.chars().count() > 50 && indicators >= 1
    }

    /// How many job-indicator patterns match the record's description.
    ///
    /// Exposed for diagnostics; [`classify`](Self::classify) is the
    /// authoritative verdict.
    #[must_use]
    pub fn indicator_count(&self, record: &JobRecord) -> usize {
        self.patterns.indicator_count(record.description())
    }
}
