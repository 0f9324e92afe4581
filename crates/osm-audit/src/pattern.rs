//! Token extraction patterns.

use std::fmt;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Match, Regex};
use serde::{Deserialize, Serialize};

/// Maximal runs of ASCII digits; the digit patterns pick the first run of the right width.
static DIGIT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digit run regex"));

/// Last whitespace-delimited word at the end of the value. A single final
/// newline may follow the word and is not part of the token.
static TRAILING_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\S+\.?)\n?$").expect("Invalid trailing word regex"));

/// How a token is pulled out of a tag value. Matching is a search: the first
/// match anywhere in the value wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractPattern {
    /// Exactly four digits with no digit on either side.
    PostalCode,
    /// Exactly three digits with no digit on either side.
    StateDigits,
    /// The trailing word, including a trailing period.
    TrailingWord,
}

/// A token and the byte span it occupies in the value it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

impl<'a> From<Match<'a>> for Token<'a> {
    fn from(m: Match<'a>) -> Self {
        Self {
            text: m.as_str(),
            span: m.range(),
        }
    }
}

impl ExtractPattern {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PostalCode => "postal-code",
            Self::StateDigits => "state-digits",
            Self::TrailingWord => "trailing-word",
        }
    }

    /// Extract the token, or `None` when the value does not match.
    pub fn extract(self, value: &str) -> Option<Token<'_>> {
        match self {
            Self::PostalCode => digit_run(value, 4),
            Self::StateDigits => digit_run(value, 3),
            Self::TrailingWord => TRAILING_WORD_REGEX
                .captures(value)
                .and_then(|captures| captures.get(1))
                .map(Token::from),
        }
    }
}

impl fmt::Display for ExtractPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn digit_run(value: &str, width: usize) -> Option<Token<'_>> {
    DIGIT_RUN_REGEX
        .find_iter(value)
        .find(|m| m.len() == width)
        .map(Token::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(pattern: ExtractPattern, value: &str) -> Option<&str> {
        pattern.extract(value).map(|token| token.text)
    }

    #[test]
    fn postal_code_matches_whole_value() {
        let token = ExtractPattern::PostalCode.extract("2000").expect("token");
        assert_eq!(token.text, "2000");
        assert_eq!(token.span, 0..4);
    }

    #[test]
    fn postal_code_rejects_longer_runs() {
        assert_eq!(text(ExtractPattern::PostalCode, "12345"), None);
        assert_eq!(text(ExtractPattern::PostalCode, "123"), None);
    }

    #[test]
    fn postal_code_skips_to_first_exact_run() {
        assert_eq!(text(ExtractPattern::PostalCode, "NSW 12345 2010"), Some("2010"));
        assert_eq!(text(ExtractPattern::PostalCode, "Sydney NSW 2000"), Some("2000"));
        assert_eq!(text(ExtractPattern::PostalCode, "2000-2010"), Some("2000"));
    }

    #[test]
    fn state_digits_need_exactly_three() {
        assert_eq!(text(ExtractPattern::StateDigits, "200"), Some("200"));
        assert_eq!(text(ExtractPattern::StateDigits, "2000"), None);
        assert_eq!(text(ExtractPattern::StateDigits, "NSW"), None);
        assert_eq!(text(ExtractPattern::StateDigits, "12 345"), Some("345"));
    }

    #[test]
    fn trailing_word_keeps_period() {
        let token = ExtractPattern::TrailingWord
            .extract("West Lexington St.")
            .expect("token");
        assert_eq!(token.text, "St.");
        assert_eq!(token.span, 15..18);
    }

    #[test]
    fn trailing_word_of_single_word() {
        assert_eq!(text(ExtractPattern::TrailingWord, "NSW"), Some("NSW"));
        assert_eq!(text(ExtractPattern::TrailingWord, "Denmanstreet"), Some("Denmanstreet"));
    }

    #[test]
    fn trailing_word_before_final_newline() {
        let token = ExtractPattern::TrailingWord
            .extract("Main St\n")
            .expect("token");
        assert_eq!(token.text, "St");
        assert_eq!(token.span, 5..7);
        assert_eq!(text(ExtractPattern::TrailingWord, "Baldwin Rd.\n"), Some("Rd."));
        assert_eq!(text(ExtractPattern::TrailingWord, "Main St\n\n"), None);
    }

    #[test]
    fn trailing_whitespace_has_no_token() {
        assert_eq!(text(ExtractPattern::TrailingWord, "Main St "), None);
        assert_eq!(text(ExtractPattern::TrailingWord, ""), None);
        assert_eq!(text(ExtractPattern::TrailingWord, "   "), None);
    }

    #[test]
    fn patterns_round_trip_through_names() {
        for pattern in [
            ExtractPattern::PostalCode,
            ExtractPattern::StateDigits,
            ExtractPattern::TrailingWord,
        ] {
            let parsed: ExtractPattern =
                parse_pattern_name(pattern.as_str()).expect("parse pattern name");
            assert_eq!(parsed, pattern);
        }
    }

    fn parse_pattern_name(name: &str) -> Option<ExtractPattern> {
        #[derive(Deserialize)]
        struct Wrapper {
            pattern: ExtractPattern,
        }
        toml::from_str::<Wrapper>(&format!("pattern = \"{name}\""))
            .ok()
            .map(|wrapper| wrapper.pattern)
    }
}
