use clap::{Parser, Subcommand};
use schemars::schema_for;
use std::path::PathBuf;

use bibsort_core::{embedded, Citation, SchemeFile, Section, SectionScheme, UnclassifiedPosition};
use bibsort_processor::{load_references, load_scheme, BibliographySorter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Order a reference list into bibliography sections
    Sort {
        /// Path to the references file (YAML/JSON list or id-keyed map)
        #[arg(index = 1)]
        references: PathBuf,

        /// Path to the section scheme file; the built-in scheme applies
        /// when omitted
        #[arg(short, long)]
        scheme: Option<PathBuf>,

        /// Output the ordered ids as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a section scheme file
    Validate {
        /// Path to the scheme YAML/JSON file
        path: PathBuf,
    },
    /// Generate JSON schema for section scheme files
    Schema,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Schema => {
            let schema = schema_for!(SchemeFile);
            println!("{}", serde_json::to_string_pretty(&schema).unwrap());
        }
        Commands::Sort {
            references,
            scheme,
            json,
        } => {
            let scheme = match scheme {
                Some(path) => match load_scheme(&path) {
                    Ok(s) => s,
                    Err(e) => {
                        eprintln!("Error loading scheme: {}", e);
                        std::process::exit(1);
                    }
                },
                None => embedded::default_scheme(),
            };

            let refs = match load_references(&references) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error loading references: {}", e);
                    std::process::exit(1);
                }
            };

            let citations: Vec<Citation> = refs
                .values()
                .map(|r| Citation::bibliography(r.clone()))
                .collect();
            let sorter = BibliographySorter::new(&scheme);
            let sorted = sorter.sort(citations.iter().collect());

            if json {
                let ids: Vec<&str> = sorted
                    .iter()
                    .filter_map(|c| c.reference().and_then(|r| r.id()))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&ids).unwrap());
            } else {
                print_sections(&scheme, &sorted);
            }
        }
        Commands::Validate { path } => match load_scheme(&path) {
            Ok(scheme) => {
                println!("Section scheme is valid.");
                println!("  entries: {}", scheme.len());
                match scheme.max_section() {
                    Some(max) => println!("  highest section: {}", max),
                    None => println!("  highest section: none (every entry is unclassified)"),
                }
                let position = match scheme.unclassified_position() {
                    UnclassifiedPosition::First => "first",
                    UnclassifiedPosition::Last => "last",
                };
                println!("  unclassified position: {}", position);
            }
            Err(e) => {
                eprintln!("Validation failed: {}", e);
                std::process::exit(1);
            }
        },
    }
}

fn print_sections(scheme: &SectionScheme, sorted: &[&Citation]) {
    let mut current: Option<Section> = None;
    for citation in sorted {
        let reference = match citation.reference() {
            Some(r) => r,
            None => continue,
        };
        let section = scheme.section_of(reference);
        if current != Some(section) {
            match section {
                Section::Numbered(n) => println!("\nSECTION {}:", n),
                Section::Unclassified => println!("\nOTHER:"),
            }
            current = Some(section);
        }
        println!(
            "  [{}] {}",
            reference.id().unwrap_or("-"),
            reference.title.as_deref().unwrap_or("")
        );
    }
}
