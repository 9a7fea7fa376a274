//! Windows command line splitting, as done by the Microsoft C runtime.
//!
//! See "Parsing C command-line arguments" at
//! <https://docs.microsoft.com/en-us/cpp/c-language/parsing-c-command-line-arguments>.
//!
//! Backslashes are literal unless they directly precede a double quote. A run
//! of `2n` backslashes before a quote becomes `n` backslashes and the quote
//! toggles quoting; a run of `2n + 1` becomes `n` backslashes and a literal
//! quote. Single quotes have no special meaning.

use crate::args::Args;
use crate::command;

/// What happens to the characters consumed by escaping and quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    /// Quotes are removed and backslash runs before quotes are collapsed.
    Unescaped,
    /// Quotes and backslashes are kept exactly as written.
    Literal,
}

struct Splitter {
    output: Output,
    args: Args,
    in_quote: bool,
    /// Backslashes read since the last other character.
    slashes: usize,
}

impl Splitter {
    fn new(output: Output) -> Self {
        Self {
            output,
            args: Args::new(),
            in_quote: false,
            slashes: 0,
        }
    }

    fn process_char(&mut self, c: char) {
        match c {
            '\\' => self.handle_backslash(),
            '"' => self.handle_quote(),
            ' ' | '\t' => self.handle_blank(c),
            _ => {
                self.resolve_slashes();
                self.args.push(c);
            }
        }
    }

    fn handle_backslash(&mut self) {
        self.args.start();
        self.slashes += 1;
        if self.output == Output::Literal {
            self.args.push('\\');
        }
    }

    fn handle_quote(&mut self) {
        self.args.start();
        let escaped = self.slashes % 2 == 1;
        match self.output {
            Output::Unescaped => {
                self.args.push_n('\\', self.slashes / 2);
                if escaped {
                    self.args.push('"');
                }
            }
            Output::Literal => self.args.push('"'),
        }
        if !escaped {
            self.in_quote = !self.in_quote;
        }
        self.slashes = 0;
    }

    fn handle_blank(&mut self, c: char) {
        self.resolve_slashes();
        if self.in_quote {
            self.args.push(c);
        } else {
            self.args.flush();
        }
    }

    /// Writes out a backslash run that turned out not to precede a quote.
    fn resolve_slashes(&mut self) {
        if self.output == Output::Unescaped {
            self.args.push_n('\\', self.slashes);
        }
        self.slashes = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.resolve_slashes();
        self.args.finish()
    }

    fn split(mut self, line: &str) -> Vec<String> {
        for c in line.chars() {
            self.process_char(c);
        }
        self.finish()
    }
}

/// Splits a command line into arguments following the Microsoft C runtime
/// rules.
///
/// Unbalanced quotes are closed implicitly at the end of the input, so this
/// never fails.
///
/// # Example
/// ```
/// use cmdline::windows;
///
/// let args = windows::split(r#""C:\Program Files\app.exe" a\\\"b c"#);
/// assert_eq!(args, vec![r"C:\Program Files\app.exe", r#"a\"b"#, "c"]);
/// ```
pub fn split(line: &str) -> Vec<String> {
    Splitter::new(Output::Unescaped).split(line)
}

/// Splits a command line at the same boundaries as [`split`], but keeps every
/// quote and backslash in the returned arguments.
///
/// Each argument is a verbatim substring of `line`, which is useful when the
/// arguments are going to be handed to another Windows program as-is.
///
/// # Example
/// ```
/// use cmdline::windows;
///
/// let args = windows::split_literal(r#""a b c" d\\"e f" g"#);
/// assert_eq!(args, vec![r#""a b c""#, r#"d\\"e f""#, "g"]);
/// ```
pub fn split_literal(line: &str) -> Vec<String> {
    Splitter::new(Output::Literal).split(line)
}

/// Splits a command line into a program name and its arguments following the
/// Microsoft C runtime rules.
pub fn split_command(line: &str) -> (String, Vec<String>) {
    command::name_and_args(split(line))
}

/// Like [`split_command`], but quotes and backslashes are preserved.
pub fn split_literal_command(line: &str) -> (String, Vec<String>) {
    command::name_and_args(split_literal(line))
}

#[cfg(test)]
mod tests {
    fn chk(line: &str, expected: &[&str]) {
        let calculated = super::split(line);
        assert_eq!(
            calculated, expected,
            "  input: `{}`, calculated: `{:?}`, expected: `{:?}`\n",
            line, calculated, expected
        );
    }

    fn chk_literal(line: &str, expected: &[&str]) {
        let calculated = super::split_literal(line);
        assert_eq!(
            calculated, expected,
            "  input: `{}`, calculated: `{:?}`, expected: `{:?}`\n",
            line, calculated, expected
        );
    }

    #[test]
    fn single_words() {
        chk("", &[]);
        chk("EXE one_word", &["EXE", "one_word"]);
        chk("EXE 😅🤦", &["EXE", "😅🤦"]);
        chk("cmd /C echo test", &["cmd", "/C", "echo", "test"]);
        chk("test  test2 \t", &["test", "test2"]);
        chk("it's", &["it's"]);
    }

    #[test]
    fn official_examples() {
        chk(r#""a b c" d e"#, &["a b c", "d", "e"]);
        chk(r#""ab\"c" "\\" d"#, &[r#"ab"c"#, r"\", "d"]);
        chk(r#"a\\\b d"e f"g h"#, &[r"a\\\b", "de fg", "h"]);
        chk(r#"a\\\"b c d"#, &[r#"a\"b"#, "c", "d"]);
        chk(r#"a\\\\"b c" d e"#, &[r"a\\b c", "d", "e"]);
    }

    #[test]
    fn backslash_runs_before_quotes() {
        for n in 0..5 {
            let even = format!("{}\"a b\"", "\\".repeat(2 * n));
            assert_eq!(super::split(&even), vec![format!("{}a b", "\\".repeat(n))]);

            let odd = format!("{}\"a b", "\\".repeat(2 * n + 1));
            assert_eq!(
                super::split(&odd),
                vec![format!("{}\"a", "\\".repeat(n)), "b".to_string()]
            );
        }
    }

    #[test]
    fn backslashes_without_quotes_are_literal() {
        chk(r"\", &[r"\"]);
        chk(r"a\\ b\", &[r"a\\", r"b\"]);
        chk(r#""C:\TEST A\\""#, &[r"C:\TEST A\"]);
    }

    #[test]
    fn empty_arguments() {
        chk(r#"a "" c"#, &["a", "", "c"]);
        chk(r#"a "" c """#, &["a", "", "c", ""]);
        chk(r#"a b "" """#, &["a", "b", "", ""]);
    }

    #[test]
    fn uneven_quotes() {
        chk(r#"a"bc"#, &["abc"]);
        chk(r#"a"b c d"#, &["ab c d"]);
        chk(r#"ab c d""#, &["ab", "c", "d"]);
        chk(r#"a "b c d"#, &["a", "b c d"]);
    }

    #[test]
    fn literal() {
        chk_literal("", &[]);
        chk_literal(r#""a b c" d e"#, &[r#""a b c""#, "d", "e"]);
        chk_literal(r#""ab\"c" "\\" d"#, &[r#""ab\"c""#, r#""\\""#, "d"]);
        chk_literal(r#"a\\\b d"e f"g h"#, &[r"a\\\b", r#"d"e f"g"#, "h"]);
        chk_literal(r#"a\\\"b c d"#, &[r#"a\\\"b"#, "c", "d"]);
        chk_literal(r#"a\\\\"b c" d e"#, &[r#"a\\\\"b c""#, "d", "e"]);
        chk_literal("cmd /C echo test", &["cmd", "/C", "echo", "test"]);
    }

    #[test]
    fn literal_empty_arguments() {
        chk_literal(r#"a "" c"#, &["a", r#""""#, "c"]);
        chk_literal(r#"a "" c """#, &["a", r#""""#, "c", r#""""#]);
        chk_literal(r#"a b "" """#, &["a", "b", r#""""#, r#""""#]);
    }

    #[test]
    fn literal_uneven_quotes() {
        chk_literal(r#"a"bc"#, &[r#"a"bc"#]);
        chk_literal(r#"a"b c d"#, &[r#"a"b c d"#]);
        chk_literal(r#"ab c d""#, &["ab", "c", r#"d""#]);
        chk_literal(r#"a "b c d"#, &["a", r#""b c d"#]);
    }

    #[test]
    fn literal_arguments_rebuild_the_line() {
        let line = r#""a b c" d\\\"e "f\\" g"#;
        let literal = super::split_literal(line);
        assert_eq!(literal.len(), super::split(line).len());
        assert_eq!(literal.join(" "), line);
    }

    #[test]
    fn split_command() {
        assert_eq!(super::split_command(""), (String::new(), vec![]));
        assert_eq!(
            super::split_command(r#""a b c" d"#),
            ("a b c".to_string(), vec!["d".to_string()])
        );
        assert_eq!(
            super::split_command(r#""a b c" "d e" "f""#),
            ("a b c".to_string(), vec!["d e".to_string(), "f".to_string()])
        );
    }

    #[test]
    fn split_literal_command() {
        assert_eq!(super::split_literal_command(""), (String::new(), vec![]));
        assert_eq!(
            super::split_literal_command(r#""a b c" d"#),
            (r#""a b c""#.to_string(), vec!["d".to_string()])
        );
        assert_eq!(
            super::split_literal_command(r#""a b c" "d e" "f""#),
            (
                r#""a b c""#.to_string(),
                vec![r#""d e""#.to_string(), r#""f""#.to_string()]
            )
        );
    }
}
