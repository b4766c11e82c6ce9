use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Bounds on how far a route may travel in one direction.
///
/// A route must cover at least `min_run` cells in its current direction
/// before it may turn (or stop), and may never cover more than `max_run`
/// cells without turning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLimits"))]
pub struct RunLimits {
    min_run: u32,
    max_run: u32,
}

impl RunLimits {
    /// Ordinary crucible: turn whenever, at most three cells straight.
    pub const CRUCIBLE: Self = Self {
        min_run: 1,
        max_run: 3,
    };

    /// Ultra crucible: at least four and at most ten cells straight.
    pub const ULTRA: Self = Self {
        min_run: 4,
        max_run: 10,
    };

    /// Validate and build a pair of limits. Requires `1 <= min_run <= max_run`.
    pub fn new(min_run: u32, max_run: u32) -> Result<Self, SearchError> {
        if min_run == 0 || min_run > max_run {
            return Err(SearchError::InvalidLimits { min_run, max_run });
        }
        Ok(Self { min_run, max_run })
    }

    #[inline]
    pub const fn min_run(self) -> u32 {
        self.min_run
    }

    #[inline]
    pub const fn max_run(self) -> u32 {
        self.max_run
    }
}

impl fmt::Display for RunLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.min_run, self.max_run)
    }
}

/// Error returned when parsing [`RunLimits`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseLimitsError {
    /// The text is not of the form `MIN:MAX` or `MIN-MAX`.
    Syntax(String),
    /// The numbers parsed but do not form valid limits.
    Invalid(SearchError),
}

impl fmt::Display for ParseLimitsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax(s) => write!(f, "expected MIN:MAX, got \u{201c}{s}\u{201d}"),
            Self::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseLimitsError {}

impl FromStr for RunLimits {
    type Err = ParseLimitsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = || ParseLimitsError::Syntax(s.to_string());
        let (lo, hi) = s
            .split_once(':')
            .or_else(|| s.split_once('-'))
            .ok_or_else(syntax)?;
        let min_run = lo.trim().parse().map_err(|_| syntax())?;
        let max_run = hi.trim().parse().map_err(|_| syntax())?;
        RunLimits::new(min_run, max_run).map_err(ParseLimitsError::Invalid)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLimits {
    min_run: u32,
    max_run: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLimits> for RunLimits {
    type Error = SearchError;

    fn try_from(raw: RawLimits) -> Result<Self, Self::Error> {
        RunLimits::new(raw.min_run, raw.max_run)
    }
}
