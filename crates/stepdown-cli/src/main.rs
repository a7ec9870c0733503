use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "stepdown")]
#[command(about = "StepMania .sm chart simplifier", version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create .bak backups for every chart file under a directory
    Backup {
        /// Directory to scan for chart files
        root: PathBuf,
    },
    /// Print the target sub-chart body from every chart file (read-only)
    Extract {
        /// Directory to scan for chart files
        root: PathBuf,

        /// Sub-chart to extract, as Difficulty:Steps
        #[arg(short, long, default_value = "Beginner:2")]
        section: String,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Backup then simplify the target sub-chart in every chart file
    Process {
        /// Directory to scan for chart files
        root: PathBuf,

        /// Sub-chart to simplify, as Difficulty:Steps
        #[arg(short, long, default_value = "Beginner:2")]
        section: String,

        /// What to do with the simplified body: any value containing
        /// "replace" rewrites in place, anything else inserts a new
        /// sub-chart ("Insert Before" / "Insert After" the #ATTACKS:; line)
        #[arg(short, long, default_value = "Replace")]
        action: String,

        /// Difficulty:Steps label for the inserted sub-chart
        /// (required for insert actions)
        #[arg(short, long)]
        new_section: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("stepdown=info".parse()?)
                .add_directive("stepdown_core=info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!("stepdown starting...");

    match args.command {
        Command::Backup { root } => commands::backup::run(&root),
        Command::Extract {
            root,
            section,
            json,
            output,
        } => commands::extract::run(&root, &section, json, output.as_deref()),
        Command::Process {
            root,
            section,
            action,
            new_section,
        } => commands::process::run(&root, &section, &action, new_section.as_deref()),
    }
}
