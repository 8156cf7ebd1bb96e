// Text form of the UI callbacks, one command per line

use eyre::{Context, Result, eyre};

/// A single UI event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the add-prompt
    Open,
    /// Replace the draft text
    Type(String),
    /// Submit the draft
    Submit,
    /// Open, type and submit in one step
    Add(String),
    Done(usize),
    Undo(usize),
    Toggle(usize),
    Delete(usize),
    /// Redraw without mutating
    List,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Open => write!(f, "open"),
            Command::Type(text) => write!(f, "type {}", text),
            Command::Submit => write!(f, "submit"),
            Command::Add(text) => write!(f, "add {}", text),
            Command::Done(pos) => write!(f, "done {}", pos),
            Command::Undo(pos) => write!(f, "undo {}", pos),
            Command::Toggle(pos) => write!(f, "toggle {}", pos),
            Command::Delete(pos) => write!(f, "delete {}", pos),
            Command::List => write!(f, "list"),
        }
    }
}

/// Parse one line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let line = line.trim_start();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    // Text arguments keep everything after the first separator as entered
    let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let command = match keyword.to_ascii_lowercase().as_str() {
        "open" => Command::Open,
        "type" => Command::Type(rest.to_string()),
        "submit" => Command::Submit,
        "add" => Command::Add(rest.to_string()),
        "done" => Command::Done(parse_position(keyword, rest)?),
        "undo" => Command::Undo(parse_position(keyword, rest)?),
        "toggle" => Command::Toggle(parse_position(keyword, rest)?),
        "delete" | "rm" => Command::Delete(parse_position(keyword, rest)?),
        "list" | "ls" => Command::List,
        other => return Err(eyre!("Unknown command: {}", other)),
    };

    Ok(Some(command))
}

fn parse_position(keyword: &str, rest: &str) -> Result<usize> {
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(eyre!("{} needs a task position", keyword));
    }
    arg.parse::<usize>()
        .with_context(|| format!("Invalid task position for {}: {}", keyword, arg))
}
