//! Cognitive distortion classification
//!
//! Fixed cue-phrase matching, not NLP. A label fires when any of its cues is
//! a case-insensitive substring of the text. All matching labels are
//! collected, in table order, so classification is deterministic.

/// Sentinel label when no cue matches.
pub const NO_MATCH_LABEL: &str = "—";

/// Ordered label → cue table. A const slice, not a map: iteration order is
/// part of the contract.
const DISTORTIONS: &[(&str, &[&str])] = &[
    ("all-or-nothing", &["always", "never", "completely", "totally"]),
    ("overgeneralization", &["everyone", "no one", "nobody", "every time"]),
    ("mind reading", &["they think", "people think", "must think"]),
    ("catastrophizing", &["disaster", "ruined", "worst", "collapse"]),
    ("labeling", &["i am a failure", "i'm stupid", "i'm weak"]),
];

/// Classifies `text`, returning every matching label in table order, or the
/// `"—"` sentinel alone when nothing matches.
pub fn classify(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    let hits: Vec<&'static str> = DISTORTIONS
        .iter()
        .filter(|(_, cues)| cues.iter().any(|cue| lowered.contains(cue)))
        .map(|(label, _)| *label)
        .collect();

    if hits.is_empty() {
        vec![NO_MATCH_LABEL]
    } else {
        hits
    }
}
