use std::io::{self, BufRead, Write};

use budget_tracker_core::models::entry::EntryKind;
use budget_tracker_core::BudgetTracker;

use crate::command::{Command, HELP};
use crate::surface::TerminalSurface;

/// Read commands line by line and redraw after every change.
/// Returns at end of input or on `quit`.
pub fn run<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    tracker: &mut BudgetTracker<TerminalSurface>,
) -> io::Result<()> {
    write!(out, "{}", tracker.surface())?;

    for line in input.lines() {
        let line = line?;
        match Command::parse(&line, tracker.surface().selected()) {
            Command::Add(raw) => {
                if tracker.add_item(raw).is_some() {
                    write!(out, "{}", tracker.surface())?;
                }
            }
            Command::Delete(element_id) => {
                if tracker.delete_item(&element_id) {
                    write!(out, "{}", tracker.surface())?;
                }
            }
            Command::Type(kind) => match kind.parse::<EntryKind>() {
                Ok(kind) => {
                    tracker.change_type(kind);
                    writeln!(out, "Selected: {kind}")?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Show => write!(out, "{}", tracker.surface())?,
            Command::Json => match tracker.to_json() {
                Ok(json) => writeln!(out, "{json}")?,
                Err(e) => {
                    tracing::error!("json export failed: {e}");
                    writeln!(out, "{e}")?;
                }
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Noop => {}
            Command::Unknown(word) => writeln!(out, "Unknown command: {word} (try `help`)")?,
        }
    }

    out.flush()
}
