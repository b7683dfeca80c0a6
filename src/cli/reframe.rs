//! Reframe command implementation
//!
//! Turns a negative trigger thought into an alternative view plus a concrete
//! next action. A risk hit on the thought short-circuits the whole exercise:
//! resources are shown and nothing is classified or stored.

use chrono::{DateTime, Local};

use crate::distortion;
use crate::error::CommandError;
use crate::score;
use crate::screen;
use crate::store::{Document, DocumentStore, Entry};

const DEFAULT_ALTERNATIVE: &str = "This is one data point, not a pattern.";
const DEFAULT_ACTION: &str = "Spend 10 focused minutes on the next small step.";
const DEFAULT_FALLBACK: &str = "Write down what blocked you and pick a smaller step.";

/// Structured follow-up fields collected after classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ReframeInput {
    pub alternative: String,
    pub action: String,
    pub fallback: String,
    pub done: bool,
    pub result_note: Option<String>,
}

/// Classifies the trigger, appends the Reframe entry, and scores the
/// completion flag. The trigger is assumed screened by the caller.
pub fn apply(doc: &mut Document, trigger: &str, input: ReframeInput, now: DateTime<Local>) -> String {
    let distortions: Vec<String> = distortion::classify(trigger)
        .into_iter()
        .map(str::to_string)
        .collect();

    let id = doc.allocate_entry_id();
    doc.entries.push(Entry::Reframe {
        id,
        ts: now,
        trigger: trigger.to_string(),
        distortions,
        alternative: input.alternative,
        action: input.action,
        fallback: input.fallback,
        done: input.done,
        result_note: input.result_note,
    });
    if input.done {
        score::register_completed_action(&mut doc.score);
    }

    format!(
        "✓ Reframe logged as entry #{id}. Weekly score: {}",
        doc.score.weekly
    )
}

/// Interactive entry point: screen, classify, collect fields, apply, persist.
pub fn run(store: &DocumentStore, doc: &mut Document, thought: &str) -> Result<String, CommandError> {
    let thought = thought.trim();
    if thought.is_empty() {
        return Err(CommandError::usage("Usage: /reframe <thought>"));
    }

    if screen::screen(thought) {
        // First-class branch, not an error: resources always show, and the
        // triggering thought is not classified or stored.
        return Ok(format!(
            "{}\n\nThis thought was not stored. If you want to keep a record, /journal add will save it with resources attached.",
            screen::CRISIS_RESOURCES
        ));
    }

    println!("\n🧠 Detected distortion(s): {}", distortion::classify(thought).join(", "));
    println!("Evidence check:");
    println!("• What facts support this thought?");
    println!("• What facts challenge it?");
    println!("• What would you tell a friend in the same situation?");

    let Some(alternative) = super::prompt("\nAlternative view (one sentence): ")? else {
        return Ok(super::CANCELLED.to_string());
    };
    let Some(action) = super::prompt("Next controllable action (<10 min): ")? else {
        return Ok(super::CANCELLED.to_string());
    };
    let Some(fallback) = super::prompt("IF blocked, THEN (fallback): ")? else {
        return Ok(super::CANCELLED.to_string());
    };
    let Some(start) = super::prompt("Start now? (y/N): ")? else {
        return Ok(super::CANCELLED.to_string());
    };
    let done = matches!(start.to_lowercase().as_str(), "y" | "yes");

    // Only a started action has a result to note.
    let result_note = if done {
        match super::prompt("How did it go? (optional): ")? {
            None => return Ok(super::CANCELLED.to_string()),
            Some(note) if note.is_empty() => None,
            Some(note) => Some(note),
        }
    } else {
        None
    };

    let input = ReframeInput {
        alternative: or_default(alternative, DEFAULT_ALTERNATIVE),
        action: or_default(action, DEFAULT_ACTION),
        fallback: or_default(fallback, DEFAULT_FALLBACK),
        done,
        result_note,
    };

    let response = apply(doc, thought, input, Local::now());
    store.save(doc)?;
    Ok(response)
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
