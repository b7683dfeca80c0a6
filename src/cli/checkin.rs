//! Check-in command implementation

use chrono::{DateTime, Local};

use crate::error::CommandError;
use crate::score;
use crate::screen;
use crate::store::{CheckIn, Document, DocumentStore};

const DEFAULT_MOOD: u8 = 3;
const DEFAULT_STRESS: u8 = 3;
const DEFAULT_SLEEP_HOURS: f64 = 6.0;

/// Validated check-in fields. Defaults apply only to genuinely empty input;
/// anything supplied must parse and be in range — no silent clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckinInput {
    pub mood: u8,
    pub stress: u8,
    pub sleep_hours: f64,
    pub note: Option<String>,
}

impl CheckinInput {
    pub fn parse(mood: &str, stress: &str, sleep: &str, note: &str) -> Result<Self, CommandError> {
        let note = note.trim();
        Ok(Self {
            mood: parse_scale(mood, "mood", DEFAULT_MOOD)?,
            stress: parse_scale(stress, "stress", DEFAULT_STRESS)?,
            sleep_hours: parse_sleep(sleep)?,
            note: if note.is_empty() {
                None
            } else {
                Some(note.to_string())
            },
        })
    }
}

fn parse_scale(raw: &str, field: &str, default: u8) -> Result<u8, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    let value: u8 = raw.parse().map_err(|_| {
        CommandError::validation(format!("{field} must be a whole number between 1 and 5"))
    })?;
    if !(1..=5).contains(&value) {
        return Err(CommandError::validation(format!(
            "{field} must be between 1 and 5, got {value}"
        )));
    }
    Ok(value)
}

fn parse_sleep(raw: &str) -> Result<f64, CommandError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(DEFAULT_SLEEP_HOURS);
    }
    let value: f64 = raw
        .parse()
        .map_err(|_| CommandError::validation("sleep hours must be a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(CommandError::validation(format!(
            "sleep hours must be zero or more, got {value}"
        )));
    }
    Ok(value)
}

/// Appends the check-in and updates the score. The note is screened here:
/// a risk hit shows the resources banner and stores the check-in with the
/// note redacted — screening never blocks storage.
pub fn apply(doc: &mut Document, input: CheckinInput, now: DateTime<Local>) -> String {
    let mut sections = Vec::new();

    let mut note = input.note;
    let mut note_flagged = false;
    if let Some(text) = &note {
        if screen::screen(text) {
            sections.push(screen::CRISIS_RESOURCES.to_string());
            note = Some(screen::REDACTED_PLACEHOLDER.to_string());
            note_flagged = true;
        }
    }

    doc.check_ins.push(CheckIn {
        ts: now,
        mood: input.mood,
        stress: input.stress,
        sleep_hours: input.sleep_hours,
        note,
        note_flagged,
    });
    score::register_check_in(&mut doc.score, now.date_naive());

    sections.push(format!(
        "✓ Logged. Weekly score: {} | Streak: {} day(s)",
        doc.score.weekly, doc.score.streak_days
    ));
    sections.join("\n\n")
}

/// Interactive entry point: prompt, validate, apply, persist.
pub fn run(store: &DocumentStore, doc: &mut Document) -> Result<String, CommandError> {
    println!("\n— Check-in —");
    let Some(mood) = super::prompt("Mood 1–5: ")? else {
        return Ok(super::CANCELLED.to_string());
    };
    let Some(stress) = super::prompt("Stress 1–5: ")? else {
        return Ok(super::CANCELLED.to_string());
    };
    let Some(sleep) = super::prompt("Sleep hours: ")? else {
        return Ok(super::CANCELLED.to_string());
    };
    let Some(note) = super::prompt("Note (optional): ")? else {
        return Ok(super::CANCELLED.to_string());
    };

    let input = CheckinInput::parse(&mood, &stress, &sleep, &note)?;
    let response = apply(doc, input, Local::now());
    store.save(doc)?;
    Ok(response)
}
