//! Split a command line into arguments.
//!
//! Two incompatible sets of quoting rules are supported:
//!
//! - [`posix`]: POSIX shell word splitting with single quotes, double quotes,
//!   backslash escapes and line continuations.
//! - [`windows`]: the Microsoft C runtime rules used by most Windows programs,
//!   where backslashes only matter in front of a double quote.
//!
//! [`split`] picks the rules of the platform the crate was built for. Use the
//! dialect modules, or pass a [`Dialect`] explicitly, to choose regardless of
//! the host.
//!
//! Splitting never fails: unbalanced quotes are closed at the end of the input
//! and stray backslashes are kept.

use std::fmt;
use std::str::FromStr;

mod args;
pub mod command;
pub mod posix;
pub mod windows;

pub use command::{split_command, split_literal_command};

/// A set of quoting and escaping rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// POSIX shell rules.
    Posix,
    /// Microsoft C runtime rules.
    Windows,
}

impl Dialect {
    /// The dialect native to the platform this crate was compiled for.
    pub fn host() -> Self {
        if cfg!(windows) {
            Dialect::Windows
        } else {
            Dialect::Posix
        }
    }

    /// Splits `line` into arguments using this dialect.
    pub fn split(self, line: &str) -> Vec<String> {
        match self {
            Dialect::Posix => posix::split(line),
            Dialect::Windows => windows::split(line),
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::host()
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Posix => f.write_str("posix"),
            Dialect::Windows => f.write_str("windows"),
        }
    }
}

/// Returned when a dialect name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dialect `{0}`, expected `posix` or `windows`")]
pub struct ParseDialectError(String);

impl FromStr for Dialect {
    type Err = ParseDialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "posix" | "unix" | "sh" => Ok(Dialect::Posix),
            "windows" | "win" | "msvc" => Ok(Dialect::Windows),
            _ => Err(ParseDialectError(s.to_string())),
        }
    }
}

/// Splits a command line into arguments using the host platform's rules.
///
/// # Example
/// ```
/// let args = cmdline::split("a b c");
/// assert_eq!(args, vec!["a", "b", "c"]);
/// ```
pub fn split(line: &str) -> Vec<String> {
    Dialect::host().split(line)
}
