//! Motion Archive CLI - Manage a recording directory from the command line.

use std::fs;
use std::path::PathBuf;
use std::process::exit;

use motion_archive::{
    schema::RecordingDraft,
    store::RecordingStore,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <data-dir> <command> [args]", args[0]);
        eprintln!();
        eprintln!("Manage motion recordings stored under <data-dir>.");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  list                 Print the catalog, newest first");
        eprintln!("  get <id>             Print the full recording document as JSON");
        eprintln!("  import <file.json>   Store a recording payload, print its id");
        exit(1);
    }

    let store = RecordingStore::new(PathBuf::from(&args[1])).unwrap_or_else(|e| {
        eprintln!("Error opening store: {}", e);
        exit(1);
    });

    match args[2].as_str() {
        "list" => {
            let summaries = store.list().unwrap_or_else(|e| {
                eprintln!("Error listing recordings: {}", e);
                exit(1);
            });

            if summaries.is_empty() {
                println!("No recordings.");
                return;
            }

            for summary in summaries {
                println!(
                    "{}  {}  {:>8.2}s  {}",
                    summary.created_at_iso, summary.id, summary.duration_s, summary.mode
                );
            }
        }
        "get" => {
            let id = args.get(3).unwrap_or_else(|| {
                eprintln!("Usage: {} <data-dir> get <id>", args[0]);
                exit(1);
            });

            let recording = store.get(id).unwrap_or_else(|e| {
                eprintln!("Error fetching recording: {}", e);
                exit(1);
            });

            let json = serde_json::to_string_pretty(&recording).unwrap_or_else(|e| {
                eprintln!("Error encoding recording: {}", e);
                exit(1);
            });
            println!("{}", json);
        }
        "import" => {
            let path = args.get(3).unwrap_or_else(|| {
                eprintln!("Usage: {} <data-dir> import <file.json>", args[0]);
                exit(1);
            });

            let payload = fs::read_to_string(path).unwrap_or_else(|e| {
                eprintln!("Error reading payload file: {}", e);
                exit(1);
            });

            let draft: RecordingDraft = serde_json::from_str(&payload).unwrap_or_else(|e| {
                eprintln!("Error parsing payload: {}", e);
                exit(1);
            });

            let id = store.create(draft).unwrap_or_else(|e| {
                eprintln!("Error storing recording: {}", e);
                exit(1);
            });
            println!("{}", id);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            exit(1);
        }
    }
}
