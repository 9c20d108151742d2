//! Description normalization.
//!
//! Exported descriptions carry predictable artifacts: a timestamp +
//! channel-boilerplate prefix, a doubled `Company:` header, a doubled
//! "Send resume on mention email" clause, and ragged whitespace.
//! [`clean_description`] strips them in a fixed order:
//!
//! 1. leading `CO HH:MM ... Crack Off Campus` prefix
//! 2. `Company: X Company: X` collapsed to `Company: X`
//! 3. duplicated "Send resume on mention email" clause, keeping the later
//! 4. whitespace runs collapsed to single spaces, ends trimmed
//!
//! Whitespace collapsing runs last so the removals above never leave
//! irregular spacing behind. The rewrites are applied until the text
//! stops changing, which makes cleaning idempotent:
//! `clean(clean(x)) == clean(x)` for every input.
//!
//! # Example
//!
//! ```
//! use jobsift::clean_description;
//!
//! let raw = "Company: Acme Company: Acme   Role:  Analyst ";
//! assert_eq!(clean_description(raw), "Company: Acme Role: Analyst");
//! ```

use regex::Regex;

/// Normalizes one description string.
///
/// Pure rewrite, never fails; empty input stays empty.
#[must_use]
pub fn clean_description(description: &str) -> String {
    let rules = CleanRules::new();
    rules.clean(description)
}

/// The compiled rewrite rules.
///
/// Prefer this over [`clean_description`] when normalizing a whole batch,
/// so the patterns compile once.
#[derive(Debug)]
pub struct CleanRules {
    boilerplate_prefix: Regex,
    duplicate_company: Regex,
    duplicate_send_resume: Regex,
    whitespace_runs: Regex,
}

impl CleanRules {
    /// Compiles the rewrite rules.
    ///
    /// # Panics
    ///
    /// Panics if a fixed pattern fails to compile (a bug in the rule
    /// table).
    #[must_use]
    pub fn new() -> Self {
        Self {
            // "CO14:20⚠Crack Off Campus" style prefixes. Only non-letter
            // filler may sit between the time and the channel name.
            boilerplate_prefix: Regex::new(r"(?i)^CO\d{2}:\d{2}[^A-Za-z]*Crack Off Campus")
                .unwrap(),
            // First half of "Company: X Company: X"; the repetition check
            // happens in code since the regex crate has no backreferences.
            duplicate_company: Regex::new(r"(?i)^Company:\s*([^:]+?)\s*Company:\s*").unwrap(),
            duplicate_send_resume: Regex::new(
                r"(?i)Send resume on mention email[^,]*,([^,]*Send resume on mention email[^,]*)",
            )
            .unwrap(),
            whitespace_runs: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Normalizes one description string.
    #[must_use]
    pub fn clean(&self, description: &str) -> String {
        let mut current = description.to_string();
        loop {
            let next = self.clean_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn clean_once(&self, description: &str) -> String {
        let mut cleaned = self
            .boilerplate_prefix
            .replace(description, "")
            .into_owned();
        cleaned = self.collapse_duplicate_company(&cleaned);
        cleaned = self
            .duplicate_send_resume
            .replace(&cleaned, "$1")
            .into_owned();
        self.whitespace_runs
            .replace_all(&cleaned, " ")
            .trim()
            .to_string()
    }

    /// Rewrites a leading "Company: X Company: X" into "Company: X".
    ///
    /// The lazy capture stops at the second `Company:` label; the rewrite
    /// only fires when the text after that label actually repeats the
    /// captured value (ASCII case-insensitively).
    fn collapse_duplicate_company(&self, text: &str) -> String {
        let Some(caps) = self.duplicate_company.captures(text) else {
            return text.to_string();
        };
        let first = caps.get(1).map_or("", |m| m.as_str());
        let rest = &text[caps.get(0).map_or(0, |m| m.end())..];

        match rest.get(..first.len()) {
            Some(repeat) if repeat.eq_ignore_ascii_case(first) => {
                format!("Company: {}{}", first, &rest[first.len()..])
            }
            _ => text.to_string(),
        }
    }
}

impl Default for CleanRules {
    fn default() -> Self {
        Self::new()
    }
}
