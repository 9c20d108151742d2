//! The frozen pattern sets driving classification and extraction.
//!
//! Four pattern groups, kept as `&'static str` regex sources and compiled
//! once into a [`PatternLibrary`]:
//!
//! | Group | Used by | Purpose |
//! |-------|---------|---------|
//! | [`NOISE_PATTERNS`] | classifier | group/system events and filler |
//! | [`JOB_INDICATORS`] | classifier | keywords suggesting a job posting |
//! | [`EMAIL_PATTERNS`] | contacts | plain and obfuscated email shapes |
//! | [`NAME_PATTERNS`] | contacts | capitalized names near trigger words |
//!
//! The sets are frozen: classification output must stay stable across
//! runs, so additions belong in a new library revision, not ad-hoc edits.

use regex::{Regex, RegexBuilder};

/// Text patterns marking a message as a group/system event or filler,
/// not a job posting. Matched case-insensitively against the description.
pub const NOISE_PATTERNS: &[&str] = &[
    r"joined group by link from Group",
    r"left the group",
    r"removed .+ from",
    r"invited .+",
    r"converted a basic group",
    r"changed group",
    r"pinned a message",
    r"unpinned a message",
    r"changed the group photo",
    r"deleted a message",
    r"forwarded .+ messages",
    // Bare date lines like "15 January"
    r"^[0-9]+\s+(January|February|March|April|May|June|July|August|September|October|November|December)",
    r"^Photo$",
    r"^Video$",
    r"^Document$",
    r"^Not included, change data exporting settings",
    r"^In reply to",
    // Bare timestamps
    r"^\d+:\d+$",
    r"^~+$",
    // Motivational/admin boilerplate seen in the exports
    r"^Read all steps",
    r"^Hello Everyone",
    r"^Warning ⚠️",
    r"^Don't waste your precious time",
    r"^Most students are telling us",
    r"^if you have not received any call",
    r"^we can not do anything",
    r"^No useless msg",
    r"^Send msg Format",
    r"^Everyone do it asap",
];

/// Keywords and shapes whose presence suggests job-posting content.
/// Matched case-insensitively anywhere in the description; the classifier
/// counts how many distinct patterns hit.
pub const JOB_INDICATORS: &[&str] = &[
    r"company",
    r"role",
    r"position",
    r"hiring",
    r"job",
    r"intern",
    r"developer",
    r"engineer",
    r"analyst",
    r"salary",
    r"ctc",
    r"stipend",
    r"location",
    r"apply",
    r"resume",
    r"experience",
    r"fresher",
    r"batch",
    // Embedded email addresses
    r"@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}",
    // URLs
    r"https?://[^\s]+",
];

/// Email shapes: standard, space-padded around `@`/`.`, `(at)`-obfuscated,
/// and space-padded `(at)`-obfuscated. Matches are normalized afterwards
/// (whitespace stripped, `(at)` rewritten, lowercased).
pub const EMAIL_PATTERNS: &[&str] = &[
    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    r"\b[A-Za-z0-9._%+-]+\s*@\s*[A-Za-z0-9.-]+\s*\.\s*[A-Za-z]{2,}\b",
    r"\b[A-Za-z0-9._%+-]+\(at\)[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    r"\b[A-Za-z0-9._%+-]+\s*\(at\)\s*[A-Za-z0-9.-]+\s*\.\s*[A-Za-z]{2,}\b",
];

/// Contextual name patterns: a capitalized multi-word sequence next to a
/// trigger word. Only the triggers are case-insensitive; the capture stays
/// capitalized, which is what keeps the false-positive rate down.
pub const NAME_PATTERNS: &[&str] = &[
    r"(?i:contact|reach out|email|send cv|apply to|hr|recruiter|hiring manager)[\s:]*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)",
    r"(?i:contact person|contact|coordinator|manager)[\s:]*([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
    r"([A-Z][a-z]+(?:\s+[A-Z][a-z]+)+)\s*-\s*(?i:hr|recruiter|hiring|manager|coordinator)",
    r"(?i:for more details|contact|reach)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)",
];

/// The compiled pattern sets.
///
/// Compile once and share: the library is immutable after construction,
/// so a single instance can serve any number of batches (and threads).
///
/// # Example
///
/// ```
/// use jobsift::PatternLibrary;
///
/// let library = PatternLibrary::new();
/// assert!(library.matches_noise("Left the group"));
/// assert_eq!(library.indicator_count("hiring a developer, apply now"), 3);
/// ```
#[derive(Debug)]
pub struct PatternLibrary {
    noise: Vec<Regex>,
    indicators: Vec<Regex>,
    emails: Vec<Regex>,
    names: Vec<Regex>,
}

impl PatternLibrary {
    /// Compiles the frozen pattern sets.
    ///
    /// # Panics
    ///
    /// Panics if a frozen pattern source fails to compile, which would be
    /// a bug in the pattern tables themselves.
    #[must_use]
    pub fn new() -> Self {
        Self {
            noise: compile_all(NOISE_PATTERNS, true),
            indicators: compile_all(JOB_INDICATORS, true),
            emails: compile_all(EMAIL_PATTERNS, true),
            // Name patterns control their own case-sensitivity inline
            names: compile_all(NAME_PATTERNS, false),
        }
    }

    /// Returns `true` if the text matches any noise pattern.
    #[must_use]
    pub fn matches_noise(&self, text: &str) -> bool {
        self.noise.iter().any(|pattern| pattern.is_match(text))
    }

    /// Counts how many distinct job-indicator patterns match the text.
    ///
    /// Each pattern contributes at most 1 regardless of how often it hits.
    #[must_use]
    pub fn indicator_count(&self, text: &str) -> usize {
        self.indicators
            .iter()
            .filter(|pattern| pattern.is_match(text))
            .count()
    }

    /// The compiled email patterns, in table order.
    #[must_use]
    pub fn emails(&self) -> &[Regex] {
        &self.emails
    }

    /// The compiled name patterns, in table order.
    #[must_use]
    pub fn names(&self) -> &[Regex] {
        &self.names
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

fn compile_all(sources: &[&str], case_insensitive: bool) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| {
            RegexBuilder::new(source)
                .case_insensitive(case_insensitive)
                .build()
                .unwrap()
        })
        .collect()
}
