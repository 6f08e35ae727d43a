//! Duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default button debounce window (2 seconds)
pub const DEFAULT_DEBOUNCE_MS: u64 = 2000;

/// Default gate request timeout (2 seconds)
pub const DEFAULT_GATE_TIMEOUT_MS: u64 = 2000;

/// Value object representing a time duration.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    /// Create a Duration from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create a Duration from seconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs * 1000,
        }
    }

    /// Default debounce window for the button
    pub const fn default_debounce() -> Self {
        Self::from_millis(DEFAULT_DEBOUNCE_MS)
    }

    /// Default timeout for the gate HTTP call
    pub const fn default_gate_timeout() -> Self {
        Self::from_millis(DEFAULT_GATE_TIMEOUT_MS)
    }

    /// Get duration in whole seconds
    pub const fn as_secs(&self) -> u64 {
        self.milliseconds / 1000
    }

    /// Get duration in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl From<Duration> for StdDuration {
    fn from(d: Duration) -> Self {
        d.as_std()
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Parse a duration string into a Duration value object.
    /// Supported formats: "500ms", "2s", "1m", "1m30s", "1s500ms"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let err = || DurationParseError {
            input: s.to_string(),
        };

        let mut total_ms: u64 = 0;
        let mut current_num = String::new();
        let mut current_unit = String::new();

        let mut flush = |num: &mut String, unit: &mut String| -> Result<(), DurationParseError> {
            let value: u64 = num.parse().map_err(|_| err())?;
            let factor = match unit.as_str() {
                "ms" => 1,
                "s" => 1000,
                "m" => 60_000,
                _ => return Err(err()),
            };
            total_ms = value
                .checked_mul(factor)
                .and_then(|v| total_ms.checked_add(v))
                .ok_or_else(err)?;
            num.clear();
            unit.clear();
            Ok(())
        };

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                if !current_unit.is_empty() {
                    flush(&mut current_num, &mut current_unit)?;
                }
                current_num.push(ch);
            } else if ch.is_ascii_alphabetic() && !current_num.is_empty() {
                current_unit.push(ch);
            } else {
                return Err(err());
            }
        }

        // A trailing number needs its unit
        if current_unit.is_empty() {
            return Err(err());
        }
        flush(&mut current_num, &mut current_unit)?;

        if total_ms == 0 {
            return Err(err());
        }

        Ok(Self {
            milliseconds: total_ms,
        })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.milliseconds % 1000 != 0 {
            return write!(f, "{}ms", self.milliseconds);
        }

        let total_secs = self.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;

        if minutes == 0 {
            write!(f, "{}s", seconds)
        } else if seconds == 0 {
            write!(f, "{}m", minutes)
        } else {
            write!(f, "{}m{}s", minutes, seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_millis() {
        let d: Duration = "500ms".parse().unwrap();
        assert_eq!(d.as_millis(), 500);
    }

    #[test]
    fn parse_seconds_only() {
        let d: Duration = "2s".parse().unwrap();
        assert_eq!(d.as_secs(), 2);
        assert_eq!(d.as_millis(), 2000);
    }

    #[test]
    fn parse_minutes_and_seconds() {
        let d: Duration = "1m30s".parse().unwrap();
        assert_eq!(d.as_secs(), 90);
    }

    #[test]
    fn parse_seconds_and_millis() {
        let d: Duration = "1s250ms".parse().unwrap();
        assert_eq!(d.as_millis(), 1250);
    }

    #[test]
    fn parse_case_insensitive_and_trimmed() {
        let d: Duration = "  2S ".parse().unwrap();
        assert_eq!(d.as_millis(), 2000);
    }

    #[test]
    fn parse_invalid() {
        assert!("".parse::<Duration>().is_err());
        assert!("2000".parse::<Duration>().is_err());
        assert!("0s".parse::<Duration>().is_err());
        assert!("2h".parse::<Duration>().is_err());
        assert!("ms".parse::<Duration>().is_err());
        assert!("2 s".parse::<Duration>().is_err());
    }

    #[test]
    fn display_picks_coarsest_unit() {
        assert_eq!(Duration::from_millis(2000).to_string(), "2s");
        assert_eq!(Duration::from_millis(1500).to_string(), "1500ms");
        assert_eq!(Duration::from_secs(120).to_string(), "2m");
        assert_eq!(Duration::from_secs(150).to_string(), "2m30s");
    }

    #[test]
    fn display_output_parses_back() {
        for ms in [250, 2000, 90_000] {
            let d = Duration::from_millis(ms);
            assert_eq!(d.to_string().parse::<Duration>().unwrap(), d);
        }
    }

    #[test]
    fn defaults_match_reference_deployment() {
        assert_eq!(Duration::default_debounce().as_millis(), 2000);
        assert_eq!(Duration::default_gate_timeout().as_std(), StdDuration::from_secs(2));
    }
}
