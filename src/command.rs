use crate::{Dialect, windows};

/// Separates the program name from the rest of the arguments.
///
/// An empty list yields an empty name and no arguments.
pub(crate) fn name_and_args(args: Vec<String>) -> (String, Vec<String>) {
    let mut args = args.into_iter();
    let name = args.next().unwrap_or_default();
    (name, args.collect())
}

/// Splits a command line into a program name and its arguments using the
/// rules of `dialect`.
///
/// # Example
/// ```
/// use cmdline::{Dialect, split_command};
///
/// let (name, args) = split_command("a b c", Dialect::Posix);
/// assert_eq!(name, "a");
/// assert_eq!(args, vec!["b", "c"]);
/// ```
pub fn split_command(line: &str, dialect: Dialect) -> (String, Vec<String>) {
    name_and_args(dialect.split(line))
}

/// Splits a command line into a program name and its arguments using Windows
/// rules, keeping quotes and backslashes intact.
pub fn split_literal_command(line: &str) -> (String, Vec<String>) {
    windows::split_literal_command(line)
}
