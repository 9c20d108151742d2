//! Contact mining: emails and names, attributed back to source records.
//!
//! Runs independently of the job classifier over the same batch. For each
//! record the extractor concatenates description, company, and job title,
//! pulls out email addresses (including `(at)`-obfuscated and space-padded
//! forms) and capitalized names near trigger words, and emits one
//! [`ContactRecord`] per finding.
//!
//! The name heuristic deliberately trades recall for precision: a
//! candidate must be short, capitalized, and free of job-jargon
//! substrings. Missing a name is cheaper than polluting the contact sheet.
//!
//! # Examples
//!
//! ```
//! use jobsift::ContactExtractor;
//!
//! let extractor = ContactExtractor::new();
//! let emails = extractor.extract_emails("reach hr (at) acme.com or jobs@acme.com");
//! // Plain addresses surface before obfuscated ones: patterns run in table order
//! assert_eq!(emails, vec!["jobs@acme.com", "hr@acme.com"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::patterns::PatternLibrary;
use crate::record::JobRecord;

/// Provenance tag carried by every extracted contact.
pub const CONTACT_SOURCE: &str = "Extracted from job posting";

/// Placeholder for contacts whose record had no company or title.
const UNKNOWN: &str = "Unknown";

/// One attributed contact finding.
///
/// Created fresh on each extraction run and never mutated. `job_index` is
/// the 1-based position of the source record within the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// 1-based position of the source record in the batch.
    pub job_index: usize,
    /// Source record's company, or `"Unknown"`.
    pub company: String,
    /// Source record's job title, or `"Unknown"`.
    pub role: String,
    /// Extracted email; empty for name-only contacts.
    pub email: String,
    /// Extracted name; empty when only an email was found.
    pub name: String,
    /// Fixed provenance tag ([`CONTACT_SOURCE`]).
    pub source: String,
}

/// Aggregate summary over one extraction run.
///
/// `contact_extraction_rate` is contacts found per source record,
/// pre-formatted as a percentage string for the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAnalysis {
    /// Contacts with a non-empty email or name.
    pub total_contacts_found: usize,
    /// Contacts with a non-empty email.
    pub total_emails: usize,
    /// Contacts with a non-empty name.
    pub total_names: usize,
    /// `total_contacts_found / source records`, formatted like `"42.9%"`.
    pub contact_extraction_rate: String,
}

/// Email and name extraction over records and raw text.
///
/// Holds a compiled [`PatternLibrary`]; construct once and reuse.
#[derive(Debug, Default)]
pub struct ContactExtractor {
    patterns: PatternLibrary,
}

impl ContactExtractor {
    /// Creates an extractor with the frozen pattern library.
    #[must_use]
    pub fn new() -> Self {
        Self {
            patterns: PatternLibrary::new(),
        }
    }

    /// Creates an extractor around an already-compiled library.
    #[must_use]
    pub fn with_patterns(patterns: PatternLibrary) -> Self {
        Self { patterns }
    }

    /// Extracts normalized email addresses from free text.
    ///
    /// Every pattern match is normalized: internal whitespace stripped,
    /// lowercased, `(at)` rewritten to `@`. A candidate is kept only if it
    /// still contains both `@` and `.` afterwards. Results are
    /// deduplicated preserving first-seen order.
    #[must_use]
    pub fn extract_emails(&self, text: &str) -> Vec<String> {
        let mut emails: Vec<String> = Vec::new();
        for pattern in self.patterns.emails() {
            for matched in pattern.find_iter(text) {
                let normalized = normalize_email(matched.as_str());
                if normalized.contains('@')
                    && normalized.contains('.')
                    && !emails.contains(&normalized)
                {
                    emails.push(normalized);
                }
            }
        }
        emails
    }

    /// Extracts candidate contact names from free text.
    ///
    /// A candidate is accepted only if it is longer than 2 characters,
    /// splits into at most 4 whitespace tokens, and contains none of the
    /// jargon substrings `job`, `work`, `position`, `role`
    /// (case-insensitive). Deduplicated preserving first-seen order.
    #[must_use]
    pub fn extract_names(&self, text: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for pattern in self.patterns.names() {
            for caps in pattern.captures_iter(text) {
                let Some(candidate) = caps.get(1) else {
                    continue;
                };
                let name = candidate.as_str().trim().to_string();
                if is_plausible_name(&name) && !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Mines a whole batch, attributing findings to their source records.
    ///
    /// Per record (1-based index), the searched text is the description,
    /// company, and job title joined with spaces. Emission rules:
    ///
    /// - any emails found: one [`ContactRecord`] per email, each carrying
    ///   the first extracted name (further names are dropped);
    /// - names but no emails: one record per name, email left empty;
    /// - neither: nothing for that record.
    #[must_use]
    pub fn extract_contact_info(&self, records: &[JobRecord]) -> Vec<ContactRecord> {
        let mut contacts = Vec::new();

        for (index, record) in records.iter().enumerate() {
            let text = format!(
                "{} {} {}",
                record.description(),
                record.company(),
                record.job_title()
            );
            let emails = self.extract_emails(&text);
            let names = self.extract_names(&text);

            let company = non_blank_or(record.company(), UNKNOWN);
            let role = non_blank_or(record.job_title(), UNKNOWN);
            let first_name = names.first().cloned().unwrap_or_default();

            for email in &emails {
                contacts.push(ContactRecord {
                    job_index: index + 1,
                    company: company.clone(),
                    role: role.clone(),
                    email: email.clone(),
                    name: first_name.clone(),
                    source: CONTACT_SOURCE.to_string(),
                });
            }

            if emails.is_empty() {
                for name in names {
                    contacts.push(ContactRecord {
                        job_index: index + 1,
                        company: company.clone(),
                        role: role.clone(),
                        email: String::new(),
                        name,
                        source: CONTACT_SOURCE.to_string(),
                    });
                }
            }
        }

        contacts
    }

    /// Runs extraction and summarizes it for the display layer.
    #[must_use]
    pub fn analyze_contacts(&self, records: &[JobRecord]) -> ContactAnalysis {
        let contacts = self.extract_contact_info(records);
        summarize(&contacts, records.len())
    }
}

/// Builds the analysis summary from already-extracted contacts.
#[must_use]
pub fn summarize(contacts: &[ContactRecord], total_records: usize) -> ContactAnalysis {
    let total_contacts_found = contacts
        .iter()
        .filter(|c| !c.email.is_empty() || !c.name.is_empty())
        .count();
    let total_emails = contacts.iter().filter(|c| !c.email.is_empty()).count();
    let total_names = contacts.iter().filter(|c| !c.name.is_empty()).count();

    let rate = if total_records == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        {
            total_contacts_found as f64 / total_records as f64 * 100.0
        }
    };

    ContactAnalysis {
        total_contacts_found,
        total_emails,
        total_names,
        contact_extraction_rate: format!("{rate:.1}%"),
    }
}

fn normalize_email(raw: &str) -> String {
    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.to_lowercase().replace("(at)", "@")
}

fn is_plausible_name(name: &str) -> bool {
    if name.len() <= 2 || name.split_whitespace().count() > 4 {
        return false;
    }
    let lower = name.to_lowercase();
    !["job", "work", "position", "role"]
        .iter()
        .any(|banned| lower.contains(banned))
}

fn non_blank_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ContactExtractor {
        ContactExtractor::new()
    }

    // =========================================================================
    // Email extraction
    // =========================================================================

    #[test]
    fn test_plain_email() {
        let emails = extractor().extract_emails("send cv to hr@acme.com today");
        assert_eq!(emails, vec!["hr@acme.com"]);
    }

    #[test]
    fn test_space_padded_email() {
        let emails = extractor().extract_emails("write to hr @ acme . com");
        assert_eq!(emails, vec!["hr@acme.com"]);
    }

    #[test]
    fn test_at_obfuscated_email() {
        let emails = extractor().extract_emails("hr(at)acme.com");
        assert_eq!(emails, vec!["hr@acme.com"]);
    }

    #[test]
    fn test_obfuscated_mixed_case_normalizes() {
        let emails = extractor().extract_emails("John.Doe (AT) Example.com");
        assert_eq!(emails, vec!["john.doe@example.com"]);
    }

    #[test]
    fn test_emails_deduplicated() {
        let emails = extractor().extract_emails("hr@acme.com and again HR@ACME.COM");
        assert_eq!(emails, vec!["hr@acme.com"]);
    }

    #[test]
    fn test_multiple_emails_keep_order() {
        let emails = extractor().extract_emails("first@acme.com then second@acme.com");
        assert_eq!(emails, vec!["first@acme.com", "second@acme.com"]);
    }

    #[test]
    fn test_no_emails_in_plain_text() {
        assert!(extractor().extract_emails("no contact here").is_empty());
        assert!(extractor().extract_emails("").is_empty());
    }

    // =========================================================================
    // Name extraction
    // =========================================================================

    #[test]
    fn test_name_after_contact_trigger() {
        let names = extractor().extract_names("Contact: Priya Sharma for details");
        assert_eq!(names, vec!["Priya Sharma"]);
    }

    #[test]
    fn test_name_before_hr_suffix() {
        let names = extractor().extract_names("Rahul Verma - HR");
        assert_eq!(names, vec!["Rahul Verma"]);
    }

    #[test]
    fn test_lowercase_candidate_rejected() {
        let names = extractor().extract_names("contact priya sharma for details");
        assert!(names.is_empty());
    }

    #[test]
    fn test_jargon_candidates_rejected() {
        // "Job Openings" sits after a trigger but contains banned jargon
        let names = extractor().extract_names("Contact: Job Openings Team");
        assert!(names.iter().all(|n| !n.to_lowercase().contains("job")));
    }

    #[test]
    fn test_overlong_candidate_rejected() {
        assert!(!is_plausible_name("One Two Three Four Five"));
        assert!(is_plausible_name("One Two Three Four"));
    }

    #[test]
    fn test_short_candidate_rejected() {
        assert!(!is_plausible_name("Al"));
    }

    // =========================================================================
    // Attribution
    // =========================================================================

    #[test]
    fn test_email_contact_carries_record_fields() {
        let records = vec![
            JobRecord::new()
                .with_company("Acme")
                .with_job_title("Analyst")
                .with_description("apply at hr@acme.com"),
        ];
        let contacts = extractor().extract_contact_info(&records);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].job_index, 1);
        assert_eq!(contacts[0].company, "Acme");
        assert_eq!(contacts[0].role, "Analyst");
        assert_eq!(contacts[0].email, "hr@acme.com");
        assert_eq!(contacts[0].source, CONTACT_SOURCE);
    }

    #[test]
    fn test_missing_company_becomes_unknown() {
        let records = vec![JobRecord::new().with_description("hr@acme.com")];
        let contacts = extractor().extract_contact_info(&records);
        assert_eq!(contacts[0].company, "Unknown");
        assert_eq!(contacts[0].role, "Unknown");
    }

    #[test]
    fn test_two_emails_share_first_name() {
        let records = vec![JobRecord::new().with_description(
            "Contact: Priya Sharma or Rahul Verma - HR, a@acme.com b@acme.com",
        )];
        let contacts = extractor().extract_contact_info(&records);
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].email, "a@acme.com");
        assert_eq!(contacts[1].email, "b@acme.com");
        // Both carry only the first extracted name
        assert_eq!(contacts[0].name, contacts[1].name);
        assert!(!contacts[0].name.is_empty());
    }

    #[test]
    fn test_names_only_record() {
        let records = vec![JobRecord::new().with_description("Contact: Priya Sharma")];
        let contacts = extractor().extract_contact_info(&records);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].email, "");
        assert_eq!(contacts[0].name, "Priya Sharma");
    }

    #[test]
    fn test_silent_record_emits_nothing() {
        let records = vec![JobRecord::new().with_description("nothing useful")];
        assert!(extractor().extract_contact_info(&records).is_empty());
    }

    #[test]
    fn test_company_field_is_searched_too() {
        let records = vec![JobRecord::new().with_company("Acme hr@acme.com")];
        let contacts = extractor().extract_contact_info(&records);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].email, "hr@acme.com");
    }

    #[test]
    fn test_indices_are_one_based_per_record() {
        let records = vec![
            JobRecord::new().with_description("nothing"),
            JobRecord::new().with_description("hr@acme.com"),
        ];
        let contacts = extractor().extract_contact_info(&records);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].job_index, 2);
    }

    // =========================================================================
    // Analysis summary
    // =========================================================================

    #[test]
    fn test_analysis_counts() {
        let records = vec![
            JobRecord::new().with_description("hr@acme.com"),
            JobRecord::new().with_description("Contact: Priya Sharma"),
            JobRecord::new().with_description("nothing"),
        ];
        let analysis = extractor().analyze_contacts(&records);
        assert_eq!(analysis.total_contacts_found, 2);
        assert_eq!(analysis.total_emails, 1);
        assert_eq!(analysis.total_names, 1);
        assert_eq!(analysis.contact_extraction_rate, "66.7%");
    }

    #[test]
    fn test_analysis_empty_batch() {
        let analysis = extractor().analyze_contacts(&[]);
        assert_eq!(analysis.total_contacts_found, 0);
        assert_eq!(analysis.contact_extraction_rate, "0.0%");
    }
}
