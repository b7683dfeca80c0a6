use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use steady::cli;
use steady::command::{self, Command, JournalCmd};
use steady::config::Config;
use steady::error::CommandError;
use steady::store::{Document, DocumentStore};

#[derive(Parser)]
#[command(name = "steady")]
#[command(about = "Local wellness check-in, journaling, and cognitive reframing CLI")]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "steady.yaml")]
    config: String,

    /// One-shot slash command, e.g. `steady /review`
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    // Load config
    let config = Config::load(&cli.config).unwrap_or_default();

    // Load the document once; the loop owns it and threads it through
    // handlers. Corrupt or missing files come back as the default document.
    let store = DocumentStore::open(config.data_path());
    let mut doc = store.load();

    // One-shot mode: run a single command and exit.
    if !cli.command.is_empty() {
        let line = cli.command.join(" ");
        dispatch(&line, &store, &mut doc, &config);
        return Ok(());
    }

    banner();
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("\nBye.");
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !dispatch(line, &store, &mut doc, &config) {
            break;
        }
    }

    Ok(())
}

fn banner() {
    println!("steady — calm wellness copilot. Not a therapist.");
    println!("Type /help to see commands, /quit to exit.\n");
}

/// Parses and runs one command line. Returns false when the loop should end.
/// Every handled error recovers to the prompt.
fn dispatch(line: &str, store: &DocumentStore, doc: &mut Document, config: &Config) -> bool {
    let parsed = match Command::parse(line) {
        Ok(parsed) => parsed,
        Err(err) => {
            report(&err);
            return true;
        }
    };

    let result = match parsed {
        Command::Checkin => cli::checkin::run(store, doc),
        Command::Reframe { thought } => cli::reframe::run(store, doc, &thought),
        Command::Breathe => Ok(cli::breathe::run()),
        Command::Journal(JournalCmd::Add) => cli::journal::add(store, doc),
        Command::Journal(JournalCmd::List) => Ok(cli::journal::list(doc)),
        Command::Journal(JournalCmd::Delete { id }) => cli::journal::delete(store, doc, id),
        Command::Review => Ok(cli::review::run(doc)),
        Command::Export(format) => {
            cli::export::run(doc, format, &config.export_dir(), chrono::Local::now())
        }
        Command::Help => Ok(command::help_text()),
        Command::Quit => {
            println!("Bye.");
            return false;
        }
    };

    match result {
        Ok(response) => println!("{response}"),
        Err(err) => report(&err),
    }
    true
}

fn report(err: &CommandError) {
    match err {
        CommandError::Usage(_) | CommandError::NotFound(_) => println!("{err}"),
        CommandError::Validation(_) => println!("Invalid input: {err}"),
        CommandError::Io(_) | CommandError::Encode(_) => {
            println!("⚠️  {err}");
            println!("Your data is still held in memory for this session; fix the path and retry.");
        }
    }
}
