// File: ./src/cli.rs
//! Command-line arguments and help text.
use anyhow::{Result, bail};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Task file given on the command line. Blank values count as absent.
    pub data_file: Option<PathBuf>,
    pub root: Option<PathBuf>,
    pub help: bool,
}

/// Trims UTF-8 values and drops blank ones. Other values are kept untouched.
fn non_blank_path(arg: OsString) -> Option<PathBuf> {
    if let Some(text) = arg.to_str() {
        let text = text.trim();
        return (!text.is_empty()).then(|| PathBuf::from(text));
    }
    Some(PathBuf::from(arg))
}

impl CliArgs {
    /// Parses the arguments after the binary name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.to_str() {
                Some("--help" | "-h") => parsed.help = true,
                Some("--root" | "-r") => match args.next().and_then(non_blank_path) {
                    Some(root) => parsed.root = Some(root),
                    None => bail!("--root needs a directory"),
                },
                Some(flag) if flag.starts_with('-') && flag.len() > 1 => {
                    bail!("Unknown option '{}'", flag)
                }
                _ => {
                    if parsed.data_file.is_some() {
                        bail!("Only one task file may be given");
                    }
                    parsed.data_file = non_blank_path(arg.clone());
                }
            }
        }
        Ok(parsed)
    }
}

pub fn print_help(binary_name: &str) {
    println!(
        "Huhhh v{} - A chatty personal task tracker",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>] [path/to/tasks.txt]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    <path/to/tasks.txt>   Task file to use (default: data/huhhh.txt).");
    println!("    -r, --root <path>     Use a different directory for config and logs.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("COMMANDS:");
    println!("    list                                  Show every task");
    println!("    todo <desc> [#tag...]                 Add a to-do");
    println!("    deadline <desc> /by <yyyy-mm-dd>      Add a task with a due date");
    println!("    event <desc> /from <start> /to <end>  Add an event");
    println!("    mark <n> | unmark <n>                 Set or clear the done flag");
    println!("    delete <n>                            Remove a task");
    println!("    tag <n> #tag... | untag <n> #tag...   Add or remove tags");
    println!("    find <keyword> | find #tag            Search descriptions or tags");
    println!("    bye                                   Save and quit");
    println!();
    println!("EXAMPLES:");
    println!("    todo read book #fun");
    println!("    deadline return book /by 2019-10-15");
    println!("    event project meeting /from Mon 2pm /to 4pm");
}
