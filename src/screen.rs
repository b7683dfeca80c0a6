//! Crisis-keyword risk screening
//!
//! Keyword-only by design: false negatives are expected, and there is no
//! false-positive suppression. When in doubt the banner is shown. Screening
//! never blocks a command from completing its storage step.

use once_cell::sync::Lazy;
use regex::RegexSet;

/// Fixed risk phrase patterns (self-harm, suicide ideation, harm-to-others).
const RISK_PATTERNS: &[&str] = &[
    r"(?i)\bsuicide\b",
    r"(?i)\bkill myself\b",
    r"(?i)\bself[- ]?harm\b",
    r"(?i)\bhurt (myself|someone)\b",
    r"(?i)\bno reason to live\b",
];

static RISK_SET: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new(RISK_PATTERNS).expect("risk patterns must compile"));

/// Static crisis resources banner, shown whenever screening matches.
pub const CRISIS_RESOURCES: &str = "\
⚠️  CRISIS PROTOCOL
I'm not equipped for emergencies.
• US: Call 911 or text/call 988 (Suicide & Crisis Lifeline)
• Outside the US: find local resources at https://findahelpline.com/
• Contact a trusted person now.";

/// Placeholder stored in place of risk-flagged text.
pub const REDACTED_PLACEHOLDER: &str = "[redacted]";

/// Returns true if `text` matches any risk phrase pattern.
pub fn screen(text: &str) -> bool {
    RISK_SET.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_phrase_always_matches() {
        assert!(screen("kill myself"));
        assert!(screen("I want to KILL MYSELF right now"));
        assert!(screen("some text before kill myself and after"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(screen("SUICIDE"));
        assert!(screen("Self-Harm"));
        assert!(screen("self harm"));
        assert!(screen("selfharm"));
    }

    #[test]
    fn test_harm_to_others_phrasing() {
        assert!(screen("i might hurt someone"));
        assert!(screen("I could hurt myself"));
        assert!(screen("no reason to live anymore"));
    }

    #[test]
    fn test_benign_text_passes() {
        assert!(!screen("today was rough but I managed"));
        assert!(!screen("my harmonica practice hurts my ears"));
        // Word boundaries: embedded substrings don't count.
        assert!(!screen("suicidexyz"));
    }

    #[test]
    fn test_empty_text_passes() {
        assert!(!screen(""));
    }
}
