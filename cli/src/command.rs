//! Parsing of interactive input lines.
//!
//! Item arguments are the 1-based row numbers shown by the view.

use thiserror::Error;

/// One user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the add-form title.
    Title(String),
    /// Set the add-form quantity.
    Quantity(u32),
    /// Submit the add form, optionally filling it first (`add 12 Eggs`).
    Add(Option<(u32, String)>),
    Delete(usize),
    Select(usize),
    DeleteSelected,
    Edit(usize),
    EditTitle(String),
    EditQuantity(u32),
    Save,
    Cancel,
    Show(usize),
    Refresh,
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command `{0}` (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),
}

pub const HELP: &str = "\
commands:
  title <text>        set the new item's title
  qty <n>             set the new item's quantity
  add [<n> <title>]   add the new item
  rm <row>            delete one item
  sel <row>           toggle selection of a row
  rm-selected         delete every selected item
  edit <row>          edit a row in place
  set-title <text>    change the title being edited
  set-qty <n>         change the quantity being edited
  save | cancel       finish editing
  show <row>          fetch one item from the server
  refresh             reload the list
  dismiss             hide the error message
  quit";

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb {
            "" => Err(ParseError::Empty),
            "title" => Ok(Command::Title(rest.to_string())),
            "qty" => Ok(Command::Quantity(number(rest, "qty")?)),
            "add" if rest.is_empty() => Ok(Command::Add(None)),
            "add" => {
                let (quantity, title) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(ParseError::MissingArgument("add"))?;
                Ok(Command::Add(Some((number(quantity, "add")?, title.trim().to_string()))))
            }
            "rm" | "delete" => Ok(Command::Delete(number(rest, "rm")?)),
            "sel" | "select" => Ok(Command::Select(number(rest, "sel")?)),
            "rm-selected" => Ok(Command::DeleteSelected),
            "edit" => Ok(Command::Edit(number(rest, "edit")?)),
            "set-title" => Ok(Command::EditTitle(rest.to_string())),
            "set-qty" => Ok(Command::EditQuantity(number(rest, "set-qty")?)),
            "save" => Ok(Command::Save),
            "cancel" => Ok(Command::Cancel),
            "show" => Ok(Command::Show(number(rest, "show")?)),
            "refresh" | "ls" => Ok(Command::Refresh),
            "dismiss" => Ok(Command::Dismiss),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn number<T: std::str::FromStr>(raw: &str, verb: &'static str) -> Result<T, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::MissingArgument(verb));
    }
    raw.parse()
        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))
}
