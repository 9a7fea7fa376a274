use anyhow::{Result, bail};
use clap::Parser;
use cmdline::{Dialect, split_command, split_literal_command, windows};
use std::io::{self, BufRead, Write};
#[cfg(unix)]
use termion::{event::Key, input::TermRead, raw::IntoRawMode};

/// Split command lines into arguments and print them, one per line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Quoting rules to apply. Defaults to the rules of the host platform.
    #[arg(short, long, default_value_t = Dialect::host())]
    dialect: Dialect,

    /// Keep quotes and backslashes in the output (windows dialect only).
    #[arg(short, long)]
    literal: bool,

    /// Print the program name apart from its arguments.
    #[arg(short, long)]
    command: bool,

    /// Command line to split. Lines are read from stdin when omitted.
    line: Option<String>,
}

impl Args {
    fn split(&self, line: &str) -> Vec<String> {
        if self.literal {
            windows::split_literal(line)
        } else {
            self.dialect.split(line)
        }
    }

    fn split_command(&self, line: &str) -> (String, Vec<String>) {
        if self.literal {
            split_literal_command(line)
        } else {
            split_command(line, self.dialect)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.literal && args.dialect != Dialect::Windows {
        bail!("--literal is only supported by the windows dialect");
    }

    let mut stdout = io::stdout();

    if let Some(line) = &args.line {
        report(&args, line, &mut stdout)?;
        return Ok(());
    }

    #[cfg(unix)]
    {
        if termion::is_tty(&io::stdin()) {
            return prompt(&args, &mut stdout);
        }
    }

    report_lines(&args, io::stdin().lock(), &mut stdout)?;
    Ok(())
}

/// Splits every line of `input`. Used when there is no terminal to prompt on.
fn report_lines<R: BufRead, W: Write>(args: &Args, input: R, out: &mut W) -> io::Result<()> {
    for line in input.lines() {
        report(args, &line?, out)?;
    }
    Ok(())
}

/// Interactive loop over lines typed at the terminal.
#[cfg(unix)]
fn prompt(args: &Args, stdout: &mut io::Stdout) -> Result<()> {
    loop {
        print!("$ ");
        stdout.flush()?;

        let Some(line) = read_line()? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        report(args, &line, stdout)?;
    }
}

/// Writes the arguments of `line` one per line in `{:?}` form, which keeps
/// empty arguments visible and escapes embedded quotes and backslashes.
fn report<W: Write>(args: &Args, line: &str, out: &mut W) -> io::Result<()> {
    if args.command {
        let (name, rest) = args.split_command(line);
        writeln!(out, "name: {:?}", name)?;
        for arg in rest {
            writeln!(out, "arg:  {:?}", arg)?;
        }
    } else {
        for arg in args.split(line) {
            writeln!(out, "{:?}", arg)?;
        }
    }
    Ok(())
}

/// Reads one line from the terminal in raw mode.
///
/// Returns `None` when the user asks to quit with Ctrl-D on an empty line.
#[cfg(unix)]
fn read_line() -> io::Result<Option<String>> {
    let mut stdout = io::stdout().into_raw_mode()?;
    let mut buffer = String::new();

    for key in io::stdin().keys() {
        match key {
            Ok(Key::Ctrl('c')) => {
                buffer.clear();
                write!(stdout, "\r\n")?;
                break;
            }
            Ok(Key::Ctrl('d')) => {
                if buffer.is_empty() {
                    write!(stdout, "\r\n")?;
                    return Ok(None);
                }
            }
            Ok(Key::Char('\n')) | Ok(Key::Char('\r')) => {
                write!(stdout, "\r\n")?;
                break;
            }
            Ok(Key::Backspace) => {
                if buffer.pop().is_some() {
                    // Move cursor back, erase char with space, move back again
                    write!(stdout, "\x08 \x08")?;
                    stdout.flush()?;
                }
            }
            Ok(Key::Char(c)) => {
                buffer.push(c);
                write!(stdout, "{}", c)?;
                stdout.flush()?;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    Ok(Some(buffer))
}
