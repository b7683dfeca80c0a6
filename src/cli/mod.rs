//! Command handlers, one module per user command

pub mod breathe;
pub mod checkin;
pub mod export;
pub mod journal;
pub mod reframe;
pub mod review;

use std::io::{self, BufRead, Write};

/// Response when a prompt is abandoned (EOF / Ctrl-D). Nothing has been
/// mutated or saved at that point.
pub(crate) const CANCELLED: &str = "Cancelled — nothing saved.";

/// Prints `label` and reads one trimmed line from stdin. Returns None on
/// EOF so the caller can abort the command without touching the document.
pub(crate) fn prompt(label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
