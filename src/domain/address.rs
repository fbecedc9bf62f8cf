//! Candidate token addresses extracted from chat text.

use std::fmt;

/// Default minimum length for text to be treated as a token address.
pub const DEFAULT_MIN_ADDRESS_LEN: usize = 30;

/// User-supplied text that looks enough like a mint address to look up.
///
/// The length check is a cheap filter against casual chatter, not real
/// address validation. The chain client does the strict decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateAddress(String);

impl CandidateAddress {
    /// Extract a candidate from raw message text.
    ///
    /// Returns `None` when the text is absent, blank, or shorter than
    /// `min_len` characters after trimming.
    #[must_use]
    pub fn from_text(text: Option<&str>, min_len: usize) -> Option<Self> {
        let trimmed = text?.trim();
        if trimmed.is_empty() || trimmed.chars().count() < min_len {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Wrap an address without applying the length heuristic.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

    #[test]
    fn test_from_text_trims_whitespace() {
        let text = format!("  {MINT}\n");
        let address = CandidateAddress::from_text(Some(&text), DEFAULT_MIN_ADDRESS_LEN).unwrap();
        assert_eq!(address.as_str(), MINT);
    }

    #[test]
    fn test_from_text_rejects_missing_and_blank() {
        assert!(CandidateAddress::from_text(None, DEFAULT_MIN_ADDRESS_LEN).is_none());
        assert!(CandidateAddress::from_text(Some(""), DEFAULT_MIN_ADDRESS_LEN).is_none());
        assert!(CandidateAddress::from_text(Some("   \t "), DEFAULT_MIN_ADDRESS_LEN).is_none());
    }

    #[test]
    fn test_from_text_rejects_short_text() {
        assert!(CandidateAddress::from_text(Some("gm frens"), DEFAULT_MIN_ADDRESS_LEN).is_none());
        let just_short = "a".repeat(DEFAULT_MIN_ADDRESS_LEN - 1);
        assert!(CandidateAddress::from_text(Some(&just_short), DEFAULT_MIN_ADDRESS_LEN).is_none());
    }

    #[test]
    fn test_from_text_accepts_threshold_length() {
        let exact = "a".repeat(DEFAULT_MIN_ADDRESS_LEN);
        assert!(CandidateAddress::from_text(Some(&exact), DEFAULT_MIN_ADDRESS_LEN).is_some());
    }

    #[test]
    fn test_from_text_does_not_validate_encoding() {
        // Long chatter passes the heuristic; decoding is the chain client's job.
        let chatter = "this is definitely not an address at all";
        assert!(CandidateAddress::from_text(Some(chatter), DEFAULT_MIN_ADDRESS_LEN).is_some());
    }
}
