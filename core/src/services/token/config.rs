//! Configuration for the token service

use chrono::Duration;

use sg_shared::config::{AuthConfig, DEFAULT_SESSION_DURATION};

use crate::errors::{DomainError, TokenError};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Lifetime of login session tokens as a duration string ("8h", "1h30m", "1.5h")
    pub session_duration: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            session_duration: DEFAULT_SESSION_DURATION.to_string(),
        }
    }
}

impl TokenServiceConfig {
    /// Creates a configuration with the given session duration string
    pub fn new(session_duration: impl Into<String>) -> Self {
        Self {
            session_duration: session_duration.into(),
        }
    }

    /// Parses the configured session duration
    ///
    /// # Returns
    ///
    /// * `Ok(Duration)` - The parsed duration
    /// * `Err(DomainError)` - The string is not a valid duration
    pub fn parse_session_duration(&self) -> Result<Duration, DomainError> {
        parse_duration(&self.session_duration)
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self::new(config.session.duration.clone())
    }
}

/// Nanoseconds per duration unit suffix
const UNITS: [(&str, u64); 8] = [
    ("ns", 1),
    ("us", 1_000),
    ("\u{b5}s", 1_000),
    ("\u{3bc}s", 1_000),
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 60 * 60 * 1_000_000_000),
];

/// Parses a duration string such as "24h", "1h30m", "1.5h" or "-90s"
///
/// The grammar is an optional sign followed by one or more decimal numbers,
/// each with a unit among `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. A bare
/// "0" is the zero duration. Durations beyond `i64::MAX` nanoseconds (about
/// 292 years) are rejected.
pub fn parse_duration(value: &str) -> Result<Duration, DomainError> {
    let nanos = parse_nanos(value).ok_or_else(|| {
        DomainError::Token(TokenError::InvalidSessionDuration {
            value: value.to_string(),
        })
    })?;
    Ok(Duration::nanoseconds(nanos))
}

fn parse_nanos(value: &str) -> Option<i64> {
    let (negative, mut rest) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    if rest == "0" {
        return Some(0);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_number) = match after_whole.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }

        let unit_len = after_number
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_number.len());
        let (unit, remainder) = after_number.split_at(unit_len);
        let scale = UNITS
            .iter()
            .find(|(suffix, _)| *suffix == unit)
            .map(|(_, scale)| *scale)?;

        let mut component = parse_whole(whole)?.checked_mul(scale)?;
        component = component.checked_add(fraction_nanos(fraction, scale))?;
        total = total.checked_add(component)?;
        rest = remainder;
    }

    if negative {
        if total > i64::MAX as u64 + 1 {
            return None;
        }
        Some((total as i128).wrapping_neg() as i64)
    } else {
        i64::try_from(total).ok()
    }
}

fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn parse_whole(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse().ok()
}

/// Fractional part of a component, truncated to whole nanoseconds
///
/// Digits past the precision of a `u64` accumulator are dropped.
fn fraction_nanos(digits: &str, scale: u64) -> u64 {
    let mut numerator: u64 = 0;
    let mut denominator: f64 = 1.0;
    for digit in digits.bytes() {
        match numerator
            .checked_mul(10)
            .and_then(|n| n.checked_add(u64::from(digit - b'0')))
        {
            Some(next) => {
                numerator = next;
                denominator *= 10.0;
            }
            None => break,
        }
    }
    (numerator as f64 * (scale as f64 / denominator)) as u64
}

/// Parses an optional token lifetime where "0" or an empty string means "never expires"
pub fn parse_optional_lifetime(value: &str) -> Result<Option<Duration>, DomainError> {
    match value {
        "" | "0" => Ok(None),
        other => parse_duration(other).map(Some),
    }
}
