//! Flat export rows for spreadsheet-style serialization.
//!
//! [`export_rows`] re-projects a batch into one flat row per record, with
//! contact findings mined from the description and joined into single
//! cells. The serde field names double as the spreadsheet column headers,
//! so an external CSV/Excel serializer can encode rows as-is — no file
//! encoding happens here.
//!
//! # Example
//!
//! ```
//! use jobsift::{ContactExtractor, JobRecord, export_rows};
//!
//! let records = vec![JobRecord::new()
//!     .with_company("Acme")
//!     .with_description("apply at hr@acme.com")];
//!
//! let rows = export_rows(&records, &ContactExtractor::new());
//! assert_eq!(rows[0].s_no, 1);
//! assert_eq!(rows[0].emails, "hr@acme.com");
//! assert_eq!(rows[0].has_contact_info, "Yes");
//! ```

use serde::{Deserialize, Serialize};

use crate::contacts::ContactExtractor;
use crate::record::JobRecord;

/// One spreadsheet row, ready for an external serializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    /// 1-based sequence number within the batch.
    #[serde(rename = "S_No")]
    pub s_no: usize,
    /// Company field, empty when absent.
    #[serde(rename = "Company")]
    pub company: String,
    /// Job title field, empty when absent.
    #[serde(rename = "Job_Role")]
    pub role: String,
    /// Location field, empty when absent.
    #[serde(rename = "Location")]
    pub location: String,
    /// Full description text.
    #[serde(rename = "Description")]
    pub description: String,
    /// Posting timestamp text.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    /// Emails mined from the description, comma-joined.
    #[serde(rename = "Extracted_Emails")]
    pub emails: String,
    /// Names mined from the description, comma-joined.
    #[serde(rename = "Extracted_Names")]
    pub contact_names: String,
    /// Emails plus names found for this row.
    #[serde(rename = "Contact_Count")]
    pub contact_count: usize,
    /// `"Yes"` when any email or name was found, else `"No"`.
    #[serde(rename = "Has_Contact_Info")]
    pub has_contact_info: String,
}

/// Re-projects a batch into flat export rows.
///
/// Contacts are mined from the description only; the structured fields
/// pass through verbatim (empty when absent).
#[must_use]
pub fn export_rows(records: &[JobRecord], extractor: &ContactExtractor) -> Vec<ExportRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let emails = extractor.extract_emails(record.description());
            let names = extractor.extract_names(record.description());
            let contact_count = emails.len() + names.len();

            ExportRow {
                s_no: index + 1,
                company: record.company().to_string(),
                role: record.job_title().to_string(),
                location: record.location().to_string(),
                description: record.description().to_string(),
                timestamp: record.date_of_posting().to_string(),
                emails: emails.join(", "),
                contact_names: names.join(", "),
                contact_count,
                has_contact_info: if contact_count > 0 { "Yes" } else { "No" }.to_string(),
            }
        })
        .collect()
}
