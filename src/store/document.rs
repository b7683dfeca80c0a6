//! Persisted document model
//!
//! The whole app state is one JSON document: profile, check-in history,
//! journal/reframe entries, and the score state. Every field has a serde
//! default so older files keep loading as fields are added — no migrations.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Root persisted object. The command loop owns one of these and threads it
/// through handlers; it is the sole unit of persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub profile: Profile,
    pub check_ins: Vec<CheckIn>,
    pub entries: Vec<Entry>,
    pub score: ScoreState,
    /// Backing counter for stable entry ids. Never reused, so deleting an
    /// entry cannot shift the ids of survivors.
    pub next_entry_id: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            check_ins: Vec::new(),
            entries: Vec::new(),
            score: ScoreState::default(),
            next_entry_id: 1,
        }
    }
}

/// Declared personal values and supports.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub values: Vec<String>,
    pub supports: Vec<String>,
}

/// One mood/stress/sleep self-report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckIn {
    pub ts: DateTime<Local>,
    /// 1–5, validated at the prompt.
    pub mood: u8,
    /// 1–5, validated at the prompt.
    pub stress: u8,
    pub sleep_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// True when the note tripped risk screening and was redacted.
    #[serde(default)]
    pub note_flagged: bool,
}

/// A stored entry: a free-text journal note or a structured reframe record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    Journal {
        id: u64,
        ts: DateTime<Local>,
        text: String,
        #[serde(default)]
        tags: Vec<String>,
        /// True when the text tripped risk screening and was redacted.
        #[serde(default)]
        risk_flagged: bool,
    },
    Reframe {
        id: u64,
        ts: DateTime<Local>,
        trigger: String,
        #[serde(default)]
        distortions: Vec<String>,
        alternative: String,
        action: String,
        fallback: String,
        #[serde(default)]
        done: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        result_note: Option<String>,
    },
}

impl Entry {
    pub fn id(&self) -> u64 {
        match self {
            Entry::Journal { id, .. } | Entry::Reframe { id, .. } => *id,
        }
    }

    pub fn ts(&self) -> &DateTime<Local> {
        match self {
            Entry::Journal { ts, .. } | Entry::Reframe { ts, .. } => ts,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self {
            Entry::Journal { .. } => "journal",
            Entry::Reframe { .. } => "reframe",
        }
    }

    /// The line of text shown in listings: journal body or reframe trigger.
    pub fn display_text(&self) -> &str {
        match self {
            Entry::Journal { text, .. } => text,
            Entry::Reframe { trigger, .. } => trigger,
        }
    }
}

/// Rolling wellness score. `weekly` is clamped to [0, 100] by the score
/// engine; `streak_days` counts consecutive check-in days.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreState {
    pub weekly: u32,
    pub streak_days: u32,
    pub last_check_date: Option<NaiveDate>,
}

impl Document {
    /// Hands out the next stable entry id.
    pub fn allocate_entry_id(&mut self) -> u64 {
        let id = self.next_entry_id;
        self.next_entry_id += 1;
        id
    }

    /// Removes the entry with `id`, returning it, or None when absent.
    /// Survivors keep their ids.
    pub fn delete_entry(&mut self, id: u64) -> Option<Entry> {
        let idx = self.entries.iter().position(|e| e.id() == id)?;
        Some(self.entries.remove(idx))
    }

    /// The most recent `n` entries, oldest first.
    pub fn recent_entries(&self, n: usize) -> &[Entry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}
