//! Export command implementation
//!
//! Two formats into the configured export directory, filenames timestamped
//! to avoid collision: `json` mirrors the full document, `csv` flattens
//! check-ins and entries into one table.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::command::ExportFormat;
use crate::error::CommandError;
use crate::store::{Document, Entry};

const CSV_HEADER: &str = "ts,type,text,distortion,action,done,tags";
const TS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn run(
    doc: &Document,
    format: ExportFormat,
    export_dir: &Path,
    now: DateTime<Local>,
) -> Result<String, CommandError> {
    fs::create_dir_all(export_dir)?;
    let path = match format {
        ExportFormat::Json => export_json(doc, export_dir, now)?,
        ExportFormat::Csv => export_csv(doc, export_dir, now)?,
    };
    log::info!("exported {format:?} to {}", path.display());
    Ok(format!("✓ Exported: {}", path.display()))
}

fn export_json(doc: &Document, dir: &Path, now: DateTime<Local>) -> Result<PathBuf, CommandError> {
    let path = dir.join(format!("wellness_export_{}.json", now.format("%Y%m%d_%H%M%S")));
    fs::write(&path, serde_json::to_string_pretty(doc)?)?;
    Ok(path)
}

fn export_csv(doc: &Document, dir: &Path, now: DateTime<Local>) -> Result<PathBuf, CommandError> {
    let path = dir.join(format!("wellness_entries_{}.csv", now.format("%Y%m%d_%H%M%S")));
    fs::write(&path, render_csv(doc))?;
    Ok(path)
}

/// One header row, then one row per check-in and per entry.
pub fn render_csv(doc: &Document) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for check_in in &doc.check_ins {
        push_row(
            &mut out,
            &[
                &check_in.ts.format(TS_FORMAT).to_string(),
                "checkin",
                check_in.note.as_deref().unwrap_or(""),
                "",
                "",
                "",
                "",
            ],
        );
    }

    for entry in &doc.entries {
        match entry {
            Entry::Journal { ts, text, tags, .. } => push_row(
                &mut out,
                &[
                    &ts.format(TS_FORMAT).to_string(),
                    "journal",
                    text,
                    "",
                    "",
                    "",
                    &tags.join(" "),
                ],
            ),
            Entry::Reframe {
                ts,
                trigger,
                distortions,
                action,
                done,
                ..
            } => push_row(
                &mut out,
                &[
                    &ts.format(TS_FORMAT).to_string(),
                    "reframe",
                    trigger,
                    &distortions.join(","),
                    action,
                    if *done { "true" } else { "false" },
                    "",
                ],
            ),
        }
    }

    out
}

fn push_row(out: &mut String, fields: &[&str]) {
    let row: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

/// Quotes a field when it contains a delimiter, quote, or newline.
fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CheckIn;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn ts() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap()
    }

    fn populated_document() -> Document {
        let mut doc = Document::default();
        for i in 0..3 {
            doc.check_ins.push(CheckIn {
                ts: ts(),
                mood: 3,
                stress: 3,
                sleep_hours: 6.0 + f64::from(i),
                note: (i == 0).then(|| "a note, with a comma".to_string()),
                note_flagged: false,
            });
        }
        for i in 0..2 {
            let id = doc.allocate_entry_id();
            doc.entries.push(Entry::Reframe {
                id,
                ts: ts(),
                trigger: format!("trigger {i}"),
                distortions: vec!["all-or-nothing".to_string(), "labeling".to_string()],
                alternative: "alt".to_string(),
                action: "act".to_string(),
                fallback: "fb".to_string(),
                done: i == 0,
                result_note: None,
            });
        }
        let id = doc.allocate_entry_id();
        doc.entries.push(Entry::Journal {
            id,
            ts: ts(),
            text: "plain note".to_string(),
            tags: vec!["work".to_string(), "sleep".to_string()],
            risk_flagged: false,
        });
        doc
    }

    #[test]
    fn test_csv_row_count_is_checkins_plus_entries_plus_header() {
        let doc = populated_document();
        let csv = render_csv(&doc);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 1 + doc.check_ins.len() + doc.entries.len());
        assert_eq!(lines[0], CSV_HEADER);
    }

    #[test]
    fn test_csv_quotes_fields_with_delimiters() {
        let doc = populated_document();
        let csv = render_csv(&doc);
        assert!(csv.contains("\"a note, with a comma\""));
        assert!(csv.contains("\"all-or-nothing,labeling\""));
    }

    #[test]
    fn test_csv_field_escapes_quotes() {
        assert_eq!(csv_field(r#"she said "no""#), r#""she said ""no""""#);
        assert_eq!(csv_field("plain"), "plain");
    }

    #[test]
    fn test_json_export_parses_back_to_document() {
        let dir = tempdir().unwrap();
        let doc = populated_document();
        let path = export_json(&doc, dir.path(), ts()).unwrap();

        let raw = fs::read_to_string(path).unwrap();
        let back: Document = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn test_run_creates_export_dir_and_file() {
        let dir = tempdir().unwrap();
        let export_dir = dir.path().join("exports");
        let response = run(&populated_document(), ExportFormat::Csv, &export_dir, ts()).unwrap();

        assert!(response.contains("wellness_entries_20240304_120000.csv"));
        assert!(export_dir.join("wellness_entries_20240304_120000.csv").exists());
    }

    #[test]
    fn test_export_does_not_mutate_document() {
        let dir = tempdir().unwrap();
        let doc = populated_document();
        let before = doc.clone();
        run(&doc, ExportFormat::Json, dir.path(), ts()).unwrap();
        assert_eq!(doc, before);
    }
}
