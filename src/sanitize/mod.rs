//! Case description intake
//!
//! Validation and sanitization of free-text case descriptions. A
//! [`CaseDescription`] can only be obtained through [`CaseDescription::parse`],
//! so holding one means the text is in bounds, free of markup characters and
//! free of recognized SSN, phone and email spans.

mod redactor;
mod validator;

pub use redactor::{sanitize, sanitize_with_report, RedactionPlaceholder, RedactionReport};
pub use validator::{validate, MAX_CASE_CHARS, MIN_CASE_CHARS};

use std::fmt;

use crate::error::ValidationError;

/// Validated, sanitized case description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDescription {
    text: String,
    report: RedactionReport,
}

impl CaseDescription {
    /// Validate the trimmed input, then sanitize it.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = validate(raw)?;
        let (text, report) = sanitize_with_report(trimmed);
        Ok(Self { text, report })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// What sanitization changed, without the content itself
    pub fn report(&self) -> &RedactionReport {
        &self.report
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn into_inner(self) -> String {
        self.text
    }
}

impl AsRef<str> for CaseDescription {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for CaseDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Validation followed by sanitization, as a plain string
pub fn sanitize_case_description(raw: &str) -> Result<String, ValidationError> {
    CaseDescription::parse(raw).map(CaseDescription::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_then_sanitizes() {
        let case = CaseDescription::parse("  <b>Client</b> reachable at 555-123-4567  ").unwrap();
        assert_eq!(case.as_str(), "bClient/b reachable at [PHONE REDACTED]");
        assert_eq!(case.report().phone, 1);
        assert_eq!(case.report().markup_removed, 4);
    }

    #[test]
    fn test_parse_rejects_before_sanitizing() {
        assert_eq!(CaseDescription::parse("hi"), Err(ValidationError::TooShort { length: 2 }));
        assert_eq!(CaseDescription::parse("  \n "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_bounds_checked_on_raw_trimmed_text() {
        // Ten markup characters pass validation and sanitize to nothing
        let case = CaseDescription::parse("<<<<<>>>>>").unwrap();
        assert_eq!(case.as_str(), "");
        assert_eq!(case.char_count(), 0);
    }

    #[test]
    fn test_sanitize_case_description() {
        let clean = sanitize_case_description("My SSN is 123-45-6789, please help").unwrap();
        assert_eq!(clean, "My SSN is [SSN REDACTED], please help");
        assert!(sanitize_case_description("").is_err());
    }
}
