//! Box breathing guide. Display only, no document mutation.

pub fn run() -> String {
    "\
🫁 Box breathing (4•4•4•4) — 6 cycles
Inhale 4 • Hold 4 • Exhale 4 • Hold 4 — repeat.
(Count it out: 1..2..3..4)
Tip: keep shoulders down; breathe through the nose."
        .to_string()
}
