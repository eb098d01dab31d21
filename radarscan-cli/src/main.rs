use clap::{Args, Parser, Subcommand, ValueEnum};
use radarscan::{
    render_grid, scan_library, Grid, GridParser, LibraryMatch, Matcher, MatcherConfig,
    PatternLibrary, Weights,
};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const INVADER_01: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../data/invaders/invader_01.txt"
));
const INVADER_02: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../data/invaders/invader_02.txt"
));

#[derive(Parser, Debug)]
#[command(author, version, about = "Scan a radar sample for known invader patterns")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a radar sample file for pattern matches.
    Scan(ScanArgs),
}

#[derive(Args, Debug)]
struct ScanArgs {
    /// Path to the radar sample file.
    #[arg(short, long, value_name = "FILE", default_value = "data/radar_sample.txt")]
    file: PathBuf,
    /// Also check the three rotated orientations of each pattern.
    #[arg(long)]
    rotations: bool,
    /// Acceptance threshold preset.
    #[arg(long, value_enum, default_value = "default")]
    threshold: ThresholdPreset,
    /// Emit matches as JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum ThresholdPreset {
    /// Admit rougher matches at 0.7.
    Loose,
    /// The standard threshold of 0.8.
    Default,
    /// Near-exact matches only at 0.9.
    Strict,
}

impl ThresholdPreset {
    fn value(self) -> f64 {
        match self {
            ThresholdPreset::Loose => 0.7,
            ThresholdPreset::Default => 0.8,
            ThresholdPreset::Strict => 0.9,
        }
    }
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    pattern: usize,
    rotated: bool,
    x: isize,
    y: isize,
    similarity: f64,
}

impl From<LibraryMatch> for MatchRecord {
    fn from(value: LibraryMatch) -> Self {
        Self {
            pattern: value.pattern_index + 1,
            rotated: value.rotated,
            x: value.result.x,
            y: value.result.y,
            similarity: value.result.similarity,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let Command::Scan(args) = cli.command;

    if args.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("radarscan=info".parse()?))
            .with_target(false)
            .init();
    }

    run_scan(&args)
}

fn run_scan(args: &ScanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let parser = GridParser::default();

    let mut library = PatternLibrary::new();
    for text in [INVADER_01, INVADER_02] {
        library.add_pattern(Grid::from_text(text, &parser)?);
    }

    let radar_text = fs::read_to_string(&args.file)?;
    let radar = Grid::from_text(&radar_text, &parser)?;

    if !args.json {
        println!("Scan {}...\n", args.file.display());
        println!("Loaded invader patterns:\n");
        for (index, pattern) in library.base_patterns().iter().enumerate() {
            println!("Pattern {}:", index + 1);
            println!("{}\n", render_grid(pattern, parser.alphabet()));
        }
    }

    let config = MatcherConfig::new(args.threshold.value(), Weights::default())?;
    let mut matcher = Matcher::new(config);
    let results = scan_library(&mut matcher, &library, &radar, args.rotations)?;

    if args.json {
        let records: Vec<MatchRecord> = results.into_iter().map(MatchRecord::from).collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No matches found.");
        return Ok(());
    }

    println!("Found {} potential matches:", results.len());
    for (index, found) in results.iter().enumerate() {
        println!("\nMatch {}:", index + 1);
        println!("Pattern: {}", found.pattern_index + 1);
        println!("Position: [{}, {}]", found.result.x, found.result.y);
        println!("Similarity: {:.2}%", found.result.similarity * 100.0);
    }

    Ok(())
}
