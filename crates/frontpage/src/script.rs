//! Line-oriented interaction scripts.
//!
//! One command per line; blank lines and `#` comments are skipped.
//!
//! ```text
//! click Ouvrir la recherche
//! hover news
//! key ArrowDown
//! wait 6000
//! tree
//! ```

use platform::{Key, PageId};

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click the element with this accessible name.
    Click(String),
    /// Pointer enters the menu group of a page.
    Hover(PageId),
    /// Pointer leaves the menu group of a page.
    Leave(PageId),
    /// Key press on the focused element.
    Key(Key),
    /// Let wall-clock time pass.
    Wait(u64),
    /// Print the accessibility tree as JSON.
    Tree,
}

/// Script parse failures, with the 1-based line they occurred on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{word}`")]
    UnknownCommand { line: usize, word: String },
    #[error("line {line}: `{command}` needs an argument")]
    MissingArgument { line: usize, command: &'static str },
    #[error("line {line}: unknown page `{name}`")]
    UnknownPage { line: usize, name: String },
    #[error("line {line}: unknown key `{name}`")]
    UnknownKey { line: usize, name: String },
    #[error("line {line}: `{value}` is not a duration in milliseconds")]
    BadDuration { line: usize, value: String },
}

/// Parse a whole script.
pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (index, text) in source.lines().enumerate() {
        if let Some(command) = parse_line(text, index.saturating_add(1))? {
            commands.push(command);
        }
    }
    Ok(commands)
}

/// Parse one line; `Ok(None)` for blanks and comments.
pub fn parse_line(text: &str, line: usize) -> Result<Option<Command>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (text, ""),
    };

    let command = match word {
        "tree" => Command::Tree,
        "click" => Command::Click(argument(rest, line, "click")?.to_string()),
        "hover" => Command::Hover(page(argument(rest, line, "hover")?, line)?),
        "leave" => Command::Leave(page(argument(rest, line, "leave")?, line)?),
        "key" => {
            let name = argument(rest, line, "key")?;
            Command::Key(Key::from_name(name).ok_or_else(|| ScriptError::UnknownKey {
                line,
                name: name.to_string(),
            })?)
        }
        "wait" => {
            let value = argument(rest, line, "wait")?;
            Command::Wait(value.parse().map_err(|_| ScriptError::BadDuration {
                line,
                value: value.to_string(),
            })?)
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                word: other.to_string(),
            })
        }
    };
    Ok(Some(command))
}

fn argument<'a>(rest: &'a str, line: usize, command: &'static str) -> Result<&'a str, ScriptError> {
    if rest.is_empty() {
        Err(ScriptError::MissingArgument { line, command })
    } else {
        Ok(rest)
    }
}

fn page(name: &str, line: usize) -> Result<PageId, ScriptError> {
    name.parse().map_err(|_| ScriptError::UnknownPage {
        line,
        name: name.to_string(),
    })
}
