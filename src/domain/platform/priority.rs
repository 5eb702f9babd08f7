//! Priority value object

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A notification priority, either numeric or named.
///
/// Range membership is decided on the string form, so `Int(1)` and
/// `Text("1")` are interchangeable for matching purposes while the
/// original variant is what ends up on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PriorityValue {
    Int(i64),
    Text(String),
}

impl PriorityValue {
    /// Check whether this value matches any entry of `range` by string form
    pub fn is_in(&self, range: &[PriorityValue]) -> bool {
        let needle = self.to_string();
        range.iter().any(|allowed| allowed.to_string() == needle)
    }
}

impl fmt::Display for PriorityValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for PriorityValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only canonical integers become Int; "01", "+2" and "-0" stay verbatim
        Ok(match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Self::Int(n),
            _ => Self::Text(s.to_string()),
        })
    }
}

impl From<i64> for PriorityValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<&str> for PriorityValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for PriorityValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
