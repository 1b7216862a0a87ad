mod render;
mod theme;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crossword_core::{is_connected, Layout, LayoutConfig, LayoutEngine, NumberingMode, WordRecord};
use log::{debug, info};
use render::Renderer;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use theme::Theme;

#[derive(Parser, Debug)]
#[command(name = "crossword", version, about = "Lay out crossword grids from word lists")]
struct Cli {
    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Place a word list on a grid
    Generate(GenerateArgs),
    /// Re-check a layout JSON file produced by `generate --format json`
    Check {
        /// Layout file, or "-" for stdin
        layout: PathBuf,
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// JSON word list, or "-" for stdin
    words: PathBuf,

    /// Grid preset: compact, standard, large
    #[arg(long, default_value = "standard")]
    preset: String,

    /// Grid side length, overrides the preset
    #[arg(long)]
    size: Option<usize>,

    /// Clue numbering: placement or reading
    #[arg(long, default_value = "placement")]
    numbering: String,

    /// Shuffle input with this seed before placing
    #[arg(long, conflicts_with = "shuffle")]
    seed: Option<u64>,

    /// Shuffle input with a fresh random seed
    #[arg(long)]
    shuffle: bool,

    /// Keep the first pass even when it is incomplete
    #[arg(long)]
    no_retry: bool,

    #[arg(long, value_enum, default_value_t = Format::Grid)]
    format: Format,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long)]
    no_color: bool,

    /// Color theme: dark, light, high-contrast
    #[arg(long, default_value = "dark")]
    theme: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Grid,
    Json,
}

/// Word files are either a bare list or `{ "words": [...] }`
#[derive(Deserialize)]
#[serde(untagged)]
enum WordFile {
    List(Vec<WordRecord>),
    Wrapped { words: Vec<WordRecord> },
}

impl WordFile {
    fn into_words(self) -> Vec<WordRecord> {
        match self {
            WordFile::List(words) => words,
            WordFile::Wrapped { words } => words,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Generate(args) => generate(args),
        Command::Check { layout, no_color } => check(&layout, no_color),
    }
}

fn read_input(path: &Path) -> Result<String> {
    let mut text = String::new();
    if path == Path::new("-") {
        io::stdin().read_to_string(&mut text).context("reading stdin")?;
    } else {
        text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    }
    Ok(text)
}

fn build_config(args: &GenerateArgs) -> Result<LayoutConfig> {
    let mut config = LayoutConfig::preset(&args.preset)?;
    if let Some(size) = args.size {
        config = config.with_grid_size(size);
    }
    config = config.with_numbering(args.numbering.parse::<NumberingMode>()?);

    if let Some(seed) = args.seed {
        config = config.with_shuffle_seed(seed);
    } else if args.shuffle {
        let seed = crossword_core::random_seed();
        eprintln!("shuffle seed: {}", seed);
        config = config.with_shuffle_seed(seed);
    }
    if args.no_retry {
        config = config.without_retry();
    }
    Ok(config)
}

fn generate(args: GenerateArgs) -> Result<()> {
    let text = read_input(&args.words)?;
    let words = serde_json::from_str::<WordFile>(&text)
        .with_context(|| format!("parsing word list {}", args.words.display()))?
        .into_words();
    info!("loaded {} words", words.len());

    let config = build_config(&args)?;
    debug!("layout config: {:?}", config);
    let engine = LayoutEngine::new(config)?;
    let layout = engine.place_all(&words);

    let to_terminal = args.output.is_none() && io::stdout().is_terminal();
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path).with_context(|| format!("creating {}", path.display()))?),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &layout).context("writing layout JSON")?;
            writeln!(out)?;
        }
        Format::Grid => {
            let renderer = Renderer::new(Theme::from_name(&args.theme), to_terminal && !args.no_color);
            renderer.write_layout(&mut out, &layout)?;
        }
    }
    Ok(())
}

fn check(path: &Path, no_color: bool) -> Result<()> {
    let text = read_input(path)?;
    let layout: Layout =
        serde_json::from_str(&text).with_context(|| format!("parsing layout {}", path.display()))?;

    let violations = layout.verify();
    // Connectivity walks word cells, which is only safe on valid geometry
    let connected = violations.is_empty() && is_connected(&layout.words());

    let color = !no_color && io::stdout().is_terminal();
    let mut out = io::stdout().lock();
    Renderer::new(Theme::default(), color).write_check(&mut out, &layout, &violations, connected)?;

    if !connected {
        bail!("{} violation(s) in {}", violations.len().max(1), path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_word_file_shapes() {
        let list = r#"[{"id":"1","answer":"SOL","clue":"Star"}]"#;
        let wrapped = r#"{"words":[{"id":"1","answer":"SOL","clue":"Star","difficulty":"easy"}]}"#;

        assert_eq!(serde_json::from_str::<WordFile>(list).unwrap().into_words().len(), 1);
        let words = serde_json::from_str::<WordFile>(wrapped).unwrap().into_words();
        assert_eq!(words[0].answer, "SOL");
    }

    #[test]
    fn test_size_overrides_preset() {
        let cli = Cli::parse_from(["crossword", "generate", "words.json", "--preset", "large", "--size", "9"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let config = build_config(&args).unwrap();
        assert_eq!(config.grid_size, 9);
        assert_eq!(config.numbering, NumberingMode::PlacementOrder);
    }

    #[test]
    fn test_seed_conflicts_with_shuffle() {
        let result = Cli::try_parse_from(["crossword", "generate", "w.json", "--seed", "3", "--shuffle"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_numbering_is_an_error() {
        let cli = Cli::parse_from(["crossword", "generate", "w.json", "--numbering", "sideways"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert!(build_config(&args).is_err());
    }
}
