//! Markup stripping and PII redaction
//!
//! Every case description passes through here before it reaches a prompt or
//! a log line. The stages run in a fixed order, each exactly once over the
//! output of the previous stage:
//!
//! 1. delete `<`, `>`, `"` and `'`
//! 2. SSNs (`123-45-6789`, `123456789`)
//! 3. phone numbers (`555-123-4567`, `555.123.4567`, `5551234567`)
//! 4. email addresses
//!
//! A ten-digit run can never be an SSN (no word boundary after nine digits),
//! so it falls through to the phone stage.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// =============================================================================
// REDACTION PATTERNS
// =============================================================================

/// Characters removed outright, never replaced
const MARKUP_CHARS: [char; 4] = ['<', '>', '"', '\''];

/// SSN, separators optional independently
static SSN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}-?\d{2}-?\d{4}\b").unwrap());

/// North American phone number, hyphen or period separators
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b").unwrap());

/// Email pattern
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

// =============================================================================
// PLACEHOLDERS
// =============================================================================

/// Fixed token substituted for a redacted span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RedactionPlaceholder {
    Ssn,
    Phone,
    Email,
}

impl RedactionPlaceholder {
    /// All placeholders, in the order their stages run
    pub const ALL: [RedactionPlaceholder; 3] = [
        RedactionPlaceholder::Ssn,
        RedactionPlaceholder::Phone,
        RedactionPlaceholder::Email,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            RedactionPlaceholder::Ssn => "[SSN REDACTED]",
            RedactionPlaceholder::Phone => "[PHONE REDACTED]",
            RedactionPlaceholder::Email => "[EMAIL REDACTED]",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            RedactionPlaceholder::Ssn => &SSN_RE,
            RedactionPlaceholder::Phone => &PHONE_RE,
            RedactionPlaceholder::Email => &EMAIL_RE,
        }
    }
}

impl fmt::Display for RedactionPlaceholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Content-free summary of what sanitization changed, safe to log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedactionReport {
    pub markup_removed: usize,
    pub ssn: usize,
    pub phone: usize,
    pub email: usize,
}

impl RedactionReport {
    pub fn count(&self, placeholder: RedactionPlaceholder) -> usize {
        match placeholder {
            RedactionPlaceholder::Ssn => self.ssn,
            RedactionPlaceholder::Phone => self.phone,
            RedactionPlaceholder::Email => self.email,
        }
    }

    pub fn total_redactions(&self) -> usize {
        self.ssn + self.phone + self.email
    }

    pub fn is_clean(&self) -> bool {
        self.markup_removed == 0 && self.total_redactions() == 0
    }

    fn record(&mut self, placeholder: RedactionPlaceholder, n: usize) {
        match placeholder {
            RedactionPlaceholder::Ssn => self.ssn += n,
            RedactionPlaceholder::Phone => self.phone += n,
            RedactionPlaceholder::Email => self.email += n,
        }
    }
}

// =============================================================================
// SANITIZER
// =============================================================================

/// Strip markup and redact PII. Total: every string has a sanitized form.
pub fn sanitize(text: &str) -> String {
    sanitize_with_report(text).0
}

/// Same as [`sanitize`], also reporting how many spans each stage touched
pub fn sanitize_with_report(text: &str) -> (String, RedactionReport) {
    let mut report = RedactionReport::default();

    let mut result: String = text.chars().filter(|c| !MARKUP_CHARS.contains(c)).collect();
    report.markup_removed = text.chars().count() - result.chars().count();

    for placeholder in RedactionPlaceholder::ALL {
        let re = placeholder.pattern();
        let hits = re.find_iter(&result).count();
        if hits > 0 {
            result = re.replace_all(&result, placeholder.token()).into_owned();
            report.record(placeholder, hits);
        }
    }

    (result, report)
}

// =============================================================================
// TESTS
// =============================================================================
