//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without executing the commands (which would touch the filesystem).

use clap::Parser;
use std::path::PathBuf;

// Re-create the Args structure for testing since it's not publicly exported
#[derive(Parser)]
#[command(name = "stepdown")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    Backup {
        root: PathBuf,
    },
    Extract {
        root: PathBuf,
        #[arg(short, long, default_value = "Beginner:2")]
        section: String,
        #[arg(long)]
        json: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    Process {
        root: PathBuf,
        #[arg(short, long, default_value = "Beginner:2")]
        section: String,
        #[arg(short, long, default_value = "Replace")]
        action: String,
        #[arg(short, long)]
        new_section: Option<String>,
    },
}

#[test]
fn test_parse_requires_subcommand() {
    assert!(Args::try_parse_from(["stepdown"]).is_err());
}

#[test]
fn test_parse_backup() {
    let args = Args::try_parse_from(["stepdown", "backup", "songs"]).unwrap();
    match args.command {
        Command::Backup { root } => assert_eq!(root, PathBuf::from("songs")),
        _ => panic!("expected backup command"),
    }
}

#[test]
fn test_parse_extract_defaults() {
    let args = Args::try_parse_from(["stepdown", "extract", "songs"]).unwrap();
    match args.command {
        Command::Extract {
            root,
            section,
            json,
            output,
        } => {
            assert_eq!(root, PathBuf::from("songs"));
            assert_eq!(section, "Beginner:2");
            assert!(!json);
            assert!(output.is_none());
        }
        _ => panic!("expected extract command"),
    }
}

#[test]
fn test_parse_extract_json_to_file() {
    let args = Args::try_parse_from([
        "stepdown", "extract", "songs", "--json", "--output", "out.json",
    ])
    .unwrap();
    match args.command {
        Command::Extract { json, output, .. } => {
            assert!(json);
            assert_eq!(output, Some(PathBuf::from("out.json")));
        }
        _ => panic!("expected extract command"),
    }
}

#[test]
fn test_parse_process_defaults_to_replace() {
    let args = Args::try_parse_from(["stepdown", "process", "songs"]).unwrap();
    match args.command {
        Command::Process {
            section,
            action,
            new_section,
            ..
        } => {
            assert_eq!(section, "Beginner:2");
            assert_eq!(action, "Replace");
            assert!(new_section.is_none());
        }
        _ => panic!("expected process command"),
    }
}

#[test]
fn test_parse_process_insert() {
    let args = Args::try_parse_from([
        "stepdown",
        "process",
        "songs",
        "--section",
        "Beginner:2",
        "--action",
        "Insert Before",
        "--new-section",
        "Novice:1",
    ])
    .unwrap();
    match args.command {
        Command::Process {
            action,
            new_section,
            ..
        } => {
            assert_eq!(action, "Insert Before");
            assert_eq!(new_section, Some("Novice:1".to_string()));
        }
        _ => panic!("expected process command"),
    }
}
