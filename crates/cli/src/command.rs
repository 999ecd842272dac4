use budget_tracker_core::models::entry::EntryKind;
use budget_tracker_core::models::input::RawInput;

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add [inc|exp] <amount> <description...>`
    Add(RawInput),
    /// `delete <element-id>`
    Delete(String),
    /// `type <inc|exp>`
    Type(String),
    Show,
    Json,
    Help,
    Quit,
    /// Blank line
    Noop,
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  add [inc|exp] <amount> <description>   add an entry (kind defaults to the selected type)
  delete <element-id>                    delete an entry, e.g. `delete expense-0`
  type <inc|exp>                         select the default kind for `add`
  show                                   redraw the budget
  json                                   dump the ledger as JSON
  help                                   this text
  quit                                   exit";

impl Command {
    /// Parse a line. `selected` is the kind used when `add` names none.
    ///
    /// `add` arguments are passed through unvalidated; the tracker decides
    /// whether they make an entry.
    pub fn parse(line: &str, selected: EntryKind) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Command::Noop,
            "add" | "a" => Command::Add(parse_add(rest, selected)),
            "delete" | "del" | "rm" => Command::Delete(rest.to_string()),
            "type" | "t" => Command::Type(rest.to_string()),
            "show" | "ls" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(word.to_string()),
        }
    }
}

fn parse_add(args: &str, selected: EntryKind) -> RawInput {
    let mut tokens = args.split_whitespace().peekable();

    let explicit = tokens
        .peek()
        .is_some_and(|tok| tok.parse::<EntryKind>().is_ok());
    let kind = if explicit {
        tokens.next().unwrap_or_default()
    } else {
        selected.code()
    };
    let value = tokens.next().unwrap_or_default();
    let description = tokens.collect::<Vec<_>>().join(" ");

    RawInput::new(kind, description, value)
}
