//! POSIX shell word splitting.
//!
//! For an introduction to quoting in unix shells see
//! <http://www.grymoire.com/Unix/Quote.html>, and for the shell command
//! language itself
//! <http://pubs.opengroup.org/onlinepubs/9699919799/utilities/V3_chap02.html>.

use crate::args::Args;
use crate::command;

/// Quoting and escaping mode of the scanner.
///
/// A pending escape is only possible outside of single quotes, so it is
/// folded into the two modes where it can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Bare,
    BareEscape,
    Single,
    Double,
    DoubleEscape,
}

impl Mode {
    fn is_escape(self) -> bool {
        matches!(self, Mode::BareEscape | Mode::DoubleEscape)
    }

    /// The mode left behind once a pending escape has been consumed.
    fn unescaped(self) -> Mode {
        match self {
            Mode::BareEscape => Mode::Bare,
            Mode::DoubleEscape => Mode::Double,
            other => other,
        }
    }
}

struct Splitter {
    args: Args,
    mode: Mode,
}

impl Splitter {
    fn new() -> Self {
        Self {
            args: Args::new(),
            mode: Mode::Bare,
        }
    }

    fn process_char(&mut self, c: char) {
        match c {
            '\\' => self.handle_backslash(),
            '\'' => self.handle_single_quote(),
            '"' => self.handle_double_quote(),
            ' ' | '\t' => self.handle_blank(c),
            '\n' => self.handle_newline(),
            _ => self.handle_regular_char(c),
        }
    }

    fn handle_backslash(&mut self) {
        self.args.start();
        match self.mode {
            Mode::BareEscape | Mode::DoubleEscape => {
                self.args.push('\\');
                self.mode = self.mode.unescaped();
            }
            Mode::Single => self.args.push('\\'),
            Mode::Bare => self.mode = Mode::BareEscape,
            Mode::Double => self.mode = Mode::DoubleEscape,
        }
    }

    fn handle_single_quote(&mut self) {
        self.args.start();
        match self.mode {
            Mode::DoubleEscape => {
                // Not an escapable character inside double quotes
                self.args.push('\\');
                self.args.push('\'');
                self.mode = Mode::Double;
            }
            Mode::BareEscape => {
                self.args.push('\'');
                self.mode = Mode::Bare;
            }
            Mode::Double => self.args.push('\''),
            Mode::Single => self.mode = Mode::Bare,
            Mode::Bare => self.mode = Mode::Single,
        }
    }

    fn handle_double_quote(&mut self) {
        self.args.start();
        match self.mode {
            Mode::BareEscape | Mode::DoubleEscape => {
                self.args.push('"');
                self.mode = self.mode.unescaped();
            }
            Mode::Single => self.args.push('"'),
            Mode::Double => self.mode = Mode::Bare,
            Mode::Bare => self.mode = Mode::Double,
        }
    }

    fn handle_blank(&mut self, c: char) {
        // Blanks never start an argument on their own
        match self.mode {
            Mode::BareEscape | Mode::DoubleEscape => {
                self.args.append(c);
                self.mode = self.mode.unescaped();
            }
            Mode::Single | Mode::Double => self.args.append(c),
            Mode::Bare => self.args.flush(),
        }
    }

    fn handle_newline(&mut self) {
        if self.mode.is_escape() {
            // Line continuation: the backslash and the newline both vanish
            self.mode = self.mode.unescaped();
        } else {
            // Quote state survives the break
            self.args.flush();
        }
    }

    fn handle_regular_char(&mut self, c: char) {
        if self.mode.is_escape() {
            self.mode = self.mode.unescaped();
            // `$` and backticks keep their backslash swallowed
            if c != '$' && c != '`' {
                self.args.push('\\');
            }
        }
        self.args.push(c);
    }

    fn finish(mut self) -> Vec<String> {
        if self.mode.is_escape() {
            self.args.push('\\');
        }
        self.args.finish()
    }
}

/// Splits a command line into arguments using POSIX shell quoting rules.
///
/// Single quotes suppress all escaping, double quotes keep backslash escapes
/// active, and a backslash before a newline joins the two lines. Unbalanced
/// quotes are closed implicitly at the end of the input and a trailing
/// backslash is kept verbatim, so this never fails.
///
/// # Example
/// ```
/// use cmdline::posix;
///
/// let args = posix::split(r#"echo 'hello world' a"b"c"#);
/// assert_eq!(args, vec!["echo", "hello world", "abc"]);
/// ```
pub fn split(line: &str) -> Vec<String> {
    let mut splitter = Splitter::new();
    for c in line.chars() {
        splitter.process_char(c);
    }
    splitter.finish()
}

/// Splits a command line into a program name and its arguments using POSIX
/// shell quoting rules.
pub fn split_command(line: &str) -> (String, Vec<String>) {
    command::name_and_args(split(line))
}
