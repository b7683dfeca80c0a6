//! Command surface: closed enumeration plus a name → builder lookup table
//!
//! The prompt loop parses each input line through `Command::parse`, which
//! resolves the leading slash token against `COMMANDS` and lets the matched
//! row parse its own arguments. `/help` is rendered from the same table so
//! the help text cannot drift from what actually dispatches.

use crate::error::CommandError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Checkin,
    Reframe { thought: String },
    Breathe,
    Journal(JournalCmd),
    Review,
    Export(ExportFormat),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum JournalCmd {
    Add,
    List,
    Delete { id: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

type Builder = fn(&str) -> Result<Command, CommandError>;

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
    build: Builder,
}

pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "/checkin",
        usage: "/checkin",
        summary: "Quick mood/stress/sleep pulse",
        build: |_| Ok(Command::Checkin),
    },
    CommandSpec {
        name: "/reframe",
        usage: "/reframe <thought>",
        summary: "Spot distortions + build a next action",
        build: build_reframe,
    },
    CommandSpec {
        name: "/breathe",
        usage: "/breathe",
        summary: "90-second box breathing guide",
        build: |_| Ok(Command::Breathe),
    },
    CommandSpec {
        name: "/journal",
        usage: "/journal add|list|delete <id>",
        summary: "Save, list, or delete entries",
        build: build_journal,
    },
    CommandSpec {
        name: "/review",
        usage: "/review",
        summary: "Weekly snapshot",
        build: |_| Ok(Command::Review),
    },
    CommandSpec {
        name: "/export",
        usage: "/export json|csv",
        summary: "Export data",
        build: build_export,
    },
    CommandSpec {
        name: "/help",
        usage: "/help",
        summary: "Show this help",
        build: |_| Ok(Command::Help),
    },
    CommandSpec {
        name: "/quit",
        usage: "/quit",
        summary: "Exit",
        build: |_| Ok(Command::Quit),
    },
    CommandSpec {
        name: "/exit",
        usage: "/exit",
        summary: "Alias of /quit",
        build: |_| Ok(Command::Quit),
    },
];

impl Command {
    /// Parses one input line. The slash token is case-sensitive; arguments
    /// are whitespace-delimited and handled by the matched table row.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let line = line.trim();
        let (token, args) = match line.split_once(char::is_whitespace) {
            Some((token, rest)) => (token, rest.trim()),
            None => (line, ""),
        };

        if !token.starts_with('/') {
            return Err(CommandError::usage("Commands start with '/'. Try /help"));
        }

        let spec = COMMANDS
            .iter()
            .find(|spec| spec.name == token)
            .ok_or_else(|| CommandError::usage(format!("Unknown command: {token}. Try /help")))?;
        (spec.build)(args)
    }
}

fn build_reframe(args: &str) -> Result<Command, CommandError> {
    if args.is_empty() {
        return Err(CommandError::usage("Usage: /reframe <thought>"));
    }
    Ok(Command::Reframe {
        thought: args.to_string(),
    })
}

fn build_journal(args: &str) -> Result<Command, CommandError> {
    let (sub, rest) = match args.split_once(char::is_whitespace) {
        Some((sub, rest)) => (sub, rest.trim()),
        None => (args, ""),
    };

    match sub {
        // Bare `/journal` lists, matching the original tool.
        "" | "list" => Ok(Command::Journal(JournalCmd::List)),
        "add" => Ok(Command::Journal(JournalCmd::Add)),
        "delete" => {
            if rest.is_empty() {
                return Err(CommandError::usage(
                    "Usage: /journal delete <id>  (use /journal list first)",
                ));
            }
            let id = rest.parse::<u64>().map_err(|_| {
                CommandError::usage("Usage: /journal delete <id>  (use /journal list first)")
            })?;
            Ok(Command::Journal(JournalCmd::Delete { id }))
        }
        _ => Err(CommandError::usage("Usage: /journal add|list|delete <id>")),
    }
}

fn build_export(args: &str) -> Result<Command, CommandError> {
    match args {
        "json" => Ok(Command::Export(ExportFormat::Json)),
        "csv" => Ok(Command::Export(ExportFormat::Csv)),
        _ => Err(CommandError::usage("Usage: /export json|csv")),
    }
}

/// Help text rendered from the command table.
pub fn help_text() -> String {
    let mut out = String::from("📘 Commands\n");
    for spec in COMMANDS {
        out.push_str(&format!("  {:<28} {}\n", spec.usage, spec.summary));
    }
    out
}
