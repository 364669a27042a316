// File: ./src/ui.rs
//! Line-oriented terminal front end.
//!
//! Reads one command per line, hands it to the controller and prints the
//! reply between two divider lines. Failures go to the error stream with the
//! same framing. Generic over the streams so sessions can be replayed in tests.
use crate::controller::TaskController;
use std::io::{self, BufRead, Write};

pub const DIVIDER: &str =
    "    ____________________________________________________________";
const INDENT: &str = "     ";
pub const WELCOME: &str = "Hello! I'm Huhhh\nWhat can I do for you?";

/// Frames `message` between dividers, indenting every line.
pub fn format_message(message: &str) -> String {
    let mut framed = String::with_capacity(message.len() + 2 * DIVIDER.len() + 8);
    framed.push_str(DIVIDER);
    framed.push('\n');
    for line in message.lines() {
        framed.push_str(INDENT);
        framed.push_str(line);
        framed.push('\n');
    }
    framed.push_str(DIVIDER);
    framed.push('\n');
    framed
}

pub struct Ui<R, W, E> {
    input: R,
    output: W,
    errors: E,
}

impl Ui<io::StdinLock<'static>, io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout(), io::stderr())
    }
}

impl<R: BufRead, W: Write, E: Write> Ui<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self {
            input,
            output,
            errors,
        }
    }

    /// Next command without its line ending. End of input reads as `bye`.
    /// Bytes that are not UTF-8 become U+FFFD instead of ending the session.
    pub fn read_command(&mut self) -> io::Result<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok("bye".to_string());
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.output.write_all(format_message(message).as_bytes())?;
        self.output.flush()
    }

    pub fn show_error(&mut self, message: &str) -> io::Result<()> {
        self.errors.write_all(format_message(message).as_bytes())?;
        self.errors.flush()
    }

    pub fn show_welcome(&mut self) -> io::Result<()> {
        self.show_message(WELCOME)
    }

    pub fn show_loading_error(&mut self, warning: &str) -> io::Result<()> {
        self.show_error(warning)
    }

    /// Runs the session until the controller sees `bye` (or input ends).
    pub fn run(&mut self, controller: &mut TaskController, welcome: bool) -> io::Result<()> {
        if let Some(warning) = controller.load_warning() {
            self.show_loading_error(warning)?;
        }
        if welcome {
            self.show_welcome()?;
        }

        while !controller.is_exit() {
            let line = self.read_command()?;
            match controller.handle(&line) {
                Ok(response) => self.show_message(&response)?,
                Err(e) => self.show_error(&e.to_string())?,
            }
        }
        Ok(())
    }

    pub fn into_parts(self) -> (R, W, E) {
        (self.input, self.output, self.errors)
    }
}
