//! Review command implementation
//!
//! Aggregates the recent check-in window and recurring reframe triggers.
//! Never errors: with no data it renders a zero-filled summary.

use crate::store::{Document, Entry};

/// How many recent check-ins the review window covers.
pub const CHECKIN_WINDOW: usize = 7;
/// How many recurring triggers are reported.
pub const TOP_TRIGGERS: usize = 3;
/// Triggers are counted by their lowercased text truncated to this many chars.
const TRIGGER_KEY_CHARS: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    pub weekly: u32,
    pub streak_days: u32,
    pub checkins_counted: usize,
    pub avg_mood: f64,
    pub avg_stress: f64,
    pub avg_sleep: f64,
    /// (normalized trigger, occurrences), most frequent first; ties keep
    /// first-seen order.
    pub top_triggers: Vec<(String, usize)>,
}

pub fn summarize(doc: &Document) -> ReviewSummary {
    let start = doc.check_ins.len().saturating_sub(CHECKIN_WINDOW);
    let window = &doc.check_ins[start..];

    let (avg_mood, avg_stress, avg_sleep) = if window.is_empty() {
        (0.0, 0.0, 0.0)
    } else {
        let n = window.len() as f64;
        (
            window.iter().map(|c| f64::from(c.mood)).sum::<f64>() / n,
            window.iter().map(|c| f64::from(c.stress)).sum::<f64>() / n,
            window.iter().map(|c| c.sleep_hours).sum::<f64>() / n,
        )
    };

    // Count triggers in first-seen order, so the stable sort below breaks
    // frequency ties by first appearance.
    let mut counts: Vec<(String, usize)> = Vec::new();
    for entry in &doc.entries {
        if let Entry::Reframe { trigger, .. } = entry {
            let key = normalize_trigger(trigger);
            match counts.iter_mut().find(|(k, _)| *k == key) {
                Some((_, n)) => *n += 1,
                None => counts.push((key, 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(TOP_TRIGGERS);

    ReviewSummary {
        weekly: doc.score.weekly,
        streak_days: doc.score.streak_days,
        checkins_counted: window.len(),
        avg_mood,
        avg_stress,
        avg_sleep,
        top_triggers: counts,
    }
}

fn normalize_trigger(trigger: &str) -> String {
    trigger.to_lowercase().chars().take(TRIGGER_KEY_CHARS).collect()
}

pub fn run(doc: &Document) -> String {
    let summary = summarize(doc);

    let mut out = String::from("📊 Weekly Review\n");
    out.push_str(&format!(
        "Weekly score: {} | Streak: {} day(s)\n",
        summary.weekly, summary.streak_days
    ));
    out.push_str(&format!(
        "Avg mood: {:.1} | Avg stress: {:.1} | Avg sleep: {:.1}h  (last {} check-in(s))\n",
        summary.avg_mood, summary.avg_stress, summary.avg_sleep, summary.checkins_counted
    ));

    if !summary.top_triggers.is_empty() {
        out.push_str("Top triggers:\n");
        for (trigger, n) in &summary.top_triggers {
            out.push_str(&format!(" • {trigger} ×{n}\n"));
        }
    }
    out.push_str("Next week focus: sleep, movement, one small win per day.");
    out
}
