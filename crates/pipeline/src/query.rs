//! Per-request search constraints.

use crate::curate::CurateError;
use serde::Deserialize;

/// Raw search constraints as they arrive on the query string.
///
/// All three are optional. An empty value counts as absent, so
/// `?genre=&country=` carries no constraint at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    pub genre: Option<String>,
    pub country: Option<String>,
    pub avg_vote: Option<String>,
}

impl SearchQuery {
    pub fn genre(&self) -> Option<&str> {
        non_empty(&self.genre)
    }

    pub fn country(&self) -> Option<&str> {
        non_empty(&self.country)
    }

    pub fn avg_vote(&self) -> Option<&str> {
        non_empty(&self.avg_vote)
    }

    /// True when no constraint is present.
    pub fn is_empty(&self) -> bool {
        self.genre().is_none() && self.country().is_none() && self.avg_vote().is_none()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn with_avg_vote(mut self, avg_vote: impl Into<String>) -> Self {
        self.avg_vote = Some(avg_vote.into());
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse a vote threshold leniently.
///
/// Leading whitespace and one `+`/`-` sign are accepted, then the longest
/// run of ASCII digits is read and anything after it ignored, so `"7.5"`
/// reads as 7 and `"8abc"` as 8. Input without a leading digit run is
/// rejected. Values too large for `i64` saturate.
pub fn parse_vote_threshold(raw: &str) -> Result<i64, CurateError> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    if seen_digit {
        Ok(value)
    } else {
        Err(CurateError::InvalidVote)
    }
}
