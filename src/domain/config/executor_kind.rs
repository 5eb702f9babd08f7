//! Executor selection value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidExecutorError;

/// How the notifier command line is executed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutorKind {
    /// Spawn the binary with each token as a separate argument
    #[default]
    Direct,
    /// Hand the space-joined command line to `sh -c`
    Shell,
}

impl ExecutorKind {
    /// Get the string identifier for this executor
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Shell => "shell",
        }
    }
}

impl fmt::Display for ExecutorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExecutorKind {
    type Err = InvalidExecutorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "direct" => Ok(Self::Direct),
            "shell" => Ok(Self::Shell),
            _ => Err(InvalidExecutorError {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_executors() {
        assert_eq!("direct".parse::<ExecutorKind>().unwrap(), ExecutorKind::Direct);
        assert_eq!("SHELL".parse::<ExecutorKind>().unwrap(), ExecutorKind::Shell);
    }

    #[test]
    fn rejects_unknown_executor() {
        let err = "bash".parse::<ExecutorKind>().unwrap_err();
        assert_eq!(err.input, "bash");
    }

    #[test]
    fn default_is_direct() {
        assert_eq!(ExecutorKind::default(), ExecutorKind::Direct);
    }
}
