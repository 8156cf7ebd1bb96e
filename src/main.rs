use clap::{Parser, Subcommand};
use eyre::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tasklist::{Format, Session, command, render};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "tasklist CLI - drive an in-memory task list with UI-style commands")]
#[command(version = env!("GIT_DESCRIBE"))]
struct Cli {
    /// Output format for the rendered list
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Only render the final list
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply commands from a script file, or stdin when omitted or "-"
    Run {
        script: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so rendered output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    match &cli.command {
        Commands::Run { script } => {
            let reader = open_input(script.as_deref())?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            run(reader, &mut out, cli.format, cli.quiet)?;
        }
    }

    Ok(())
}

fn open_input(script: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match script {
        None => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) if path == Path::new("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open script {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Feed each line into a fresh session, rendering after every command
fn run<R: BufRead, W: Write>(reader: R, out: &mut W, format: Format, quiet: bool) -> Result<()> {
    let mut session = Session::new();
    let mut applied = 0;

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let Some(cmd) = command::parse_line(&line).with_context(|| format!("line {}", line_num + 1))? else {
            continue;
        };

        let snapshot = session
            .apply(&cmd)
            .with_context(|| format!("line {}: {}", line_num + 1, cmd))?;
        applied += 1;

        if !quiet {
            write!(out, "{}", render::render(&snapshot, format)?)?;
        }
    }

    if quiet {
        write!(out, "{}", render::render(&session.snapshot(), format)?)?;
    }

    info!(commands = applied, tasks = session.list().len(), "Run complete");
    Ok(())
}
