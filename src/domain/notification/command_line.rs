//! Command line value object

use std::fmt;

/// An ordered list of argument tokens, the first being the program.
///
/// Tokens are kept verbatim, including embedded quotes and empty tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// Start a command line with the program name
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            tokens: vec![program.into()],
        }
    }

    /// Append one token
    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    /// The program to run
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Arguments after the program
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }
}

/// Joins all tokens with single spaces
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
