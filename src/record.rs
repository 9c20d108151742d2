//! The job record data model.
//!
//! This module provides [`JobRecord`], the normalized representation of one
//! exported chat message after the external export parser has run. Every
//! field is optional free text: the parser fills in whatever it could find,
//! and the sifting engine treats anything missing as empty.
//!
//! # Overview
//!
//! A record consists of nine optional fields:
//!
//! | Field | Description |
//! |-------|-------------|
//! | `name` | Contact name, if the parser isolated one |
//! | `email` | Contact email |
//! | `phone` | Contact phone number |
//! | `company` | Company name |
//! | `job_title` | Advertised role |
//! | `location` | Job location |
//! | `job_description` | Full message text; the primary mining target |
//! | `date_of_posting` | Timestamp text from the export |
//! | `link` | Application link |
//!
//! # Examples
//!
//! ```
//! use jobsift::JobRecord;
//!
//! let record = JobRecord::new()
//!     .with_company("Acme")
//!     .with_job_title("Backend Engineer")
//!     .with_description("We are hiring, apply with resume");
//!
//! assert_eq!(record.company(), "Acme");
//! assert_eq!(record.email(), "");
//! ```
//!
//! ## Serialization
//!
//! `None` fields are omitted from JSON, matching the upstream parser's
//! habit of leaving unknown fields out entirely:
//!
//! ```
//! use jobsift::JobRecord;
//!
//! let record = JobRecord::new().with_company("Acme");
//! let json = serde_json::to_string(&record)?;
//! assert_eq!(json, r#"{"company":"Acme"}"#);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiftError};

/// One exported chat message, as delivered by the external export parser.
///
/// All fields are optional free text. The engine never mutates a record;
/// it only computes derived views (classification verdicts, extracted
/// fields, contact records). Records carry no identity of their own —
/// they are addressed by position within a batch.
///
/// # Construction
///
/// Use [`JobRecord::new`] plus the builder methods:
///
/// ```
/// use jobsift::JobRecord;
///
/// let record = JobRecord::new()
///     .with_email("hr@acme.com")
///     .with_description("Company: Acme Role: Analyst");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobRecord {
    /// Contact name, if present in the export.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact email.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    /// Advertised role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Job location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Full message text. This is what the classifier and extractors mine
    /// when the structured fields above are blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,

    /// Posting timestamp, kept as the free text the export produced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_posting: Option<String>,

    /// Application link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl JobRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to set the contact name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style method to set the contact email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builder-style method to set the contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Builder-style method to set the company.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    /// Builder-style method to set the job title.
    #[must_use]
    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    /// Builder-style method to set the location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder-style method to set the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.job_description = Some(description.into());
        self
    }

    /// Builder-style method to set the posting timestamp text.
    #[must_use]
    pub fn with_date_of_posting(mut self, date: impl Into<String>) -> Self {
        self.date_of_posting = Some(date.into());
        self
    }

    /// Builder-style method to set the application link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    // Accessors below expose missing fields as "" so callers never have
    // to distinguish None from empty. The engine is total over records.

    /// Contact name, or `""` when absent.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Contact email, or `""` when absent.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// Contact phone number, or `""` when absent.
    #[must_use]
    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    /// Company name, or `""` when absent.
    #[must_use]
    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    /// Job title, or `""` when absent.
    #[must_use]
    pub fn job_title(&self) -> &str {
        self.job_title.as_deref().unwrap_or("")
    }

    /// Location, or `""` when absent.
    #[must_use]
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or("")
    }

    /// Description text, or `""` when absent.
    #[must_use]
    pub fn description(&self) -> &str {
        self.job_description.as_deref().unwrap_or("")
    }

    /// Posting timestamp text, or `""` when absent.
    #[must_use]
    pub fn date_of_posting(&self) -> &str {
        self.date_of_posting.as_deref().unwrap_or("")
    }

    /// Application link, or `""` when absent.
    #[must_use]
    pub fn link(&self) -> &str {
        self.link.as_deref().unwrap_or("")
    }
}

/// Deserializes a batch of records from the upstream parser's JSON output.
///
/// The upload collaborator hands the core an already-parsed record array;
/// this is the boundary where that array enters the engine. The input must
/// be a JSON array of record objects. Unknown object fields are ignored,
/// missing fields become `None`.
///
/// # Errors
///
/// Returns [`SiftError::InvalidInput`] when the top-level value is not an
/// array, and [`SiftError::Json`] when the text is not valid JSON at all.
///
/// # Examples
///
/// ```
/// use jobsift::record::batch_from_json;
///
/// let records = batch_from_json(r#"[{"company": "Acme"}, {}]"#)?;
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].company(), "Acme");
/// # Ok::<(), jobsift::SiftError>(())
/// ```
pub fn batch_from_json(input: &str) -> Result<Vec<JobRecord>> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(SiftError::from))
            .collect(),
        other => Err(SiftError::invalid_input(format!(
            "expected a JSON array of records, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_accessors() {
        let record = JobRecord::new();
        assert_eq!(record.name(), "");
        assert_eq!(record.email(), "");
        assert_eq!(record.phone(), "");
        assert_eq!(record.company(), "");
        assert_eq!(record.job_title(), "");
        assert_eq!(record.location(), "");
        assert_eq!(record.description(), "");
        assert_eq!(record.date_of_posting(), "");
        assert_eq!(record.link(), "");
    }

    #[test]
    fn test_builder_sets_fields() {
        let record = JobRecord::new()
            .with_name("Priya Sharma")
            .with_email("hr@acme.com")
            .with_phone("+91 98765 43210")
            .with_company("Acme")
            .with_job_title("Backend Engineer")
            .with_location("Remote")
            .with_description("We are hiring")
            .with_date_of_posting("2024-03-01")
            .with_link("https://acme.com/jobs");

        assert_eq!(record.name(), "Priya Sharma");
        assert_eq!(record.email(), "hr@acme.com");
        assert_eq!(record.company(), "Acme");
        assert_eq!(record.link(), "https://acme.com/jobs");
    }

    #[test]
    fn test_serialization_omits_none() {
        let record = JobRecord::new().with_company("Acme");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"company":"Acme"}"#);
    }

    #[test]
    fn test_roundtrip() {
        let record = JobRecord::new()
            .with_email("hr@acme.com")
            .with_description("Company: Acme");
        let json = serde_json::to_string(&record).unwrap();
        let parsed: JobRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_batch_from_json_array() {
        let records = batch_from_json(r#"[{"company": "Acme"}, {}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].company(), "Acme");
        assert_eq!(records[1], JobRecord::new());
    }

    #[test]
    fn test_batch_from_json_empty_array() {
        let records = batch_from_json("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_batch_from_json_ignores_unknown_fields() {
        let records = batch_from_json(r#"[{"company": "Acme", "notes": "ignore me"}]"#).unwrap();
        assert_eq!(records[0].company(), "Acme");
    }

    #[test]
    fn test_batch_from_json_rejects_non_array() {
        let err = batch_from_json(r#"{"company": "Acme"}"#).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_batch_from_json_rejects_garbage() {
        let err = batch_from_json("not json").unwrap_err();
        assert!(!err.is_invalid_input());
    }
}
