use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use rayon::prelude::*;
use spellfix::cli::output::{self, OutputFormat};
use spellfix::{corpus, Config, Correction, Corrector, FrequencyModel};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellfix")]
#[command(version, about = "A fast single-word spelling corrector", long_about = None)]
struct Cli {
    /// Words to correct (read from stdin when empty)
    #[arg(value_name = "WORDS")]
    words: Vec<String>,

    /// Compiled frequency model file
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Build the model from a corpus text file instead
    #[arg(short, long)]
    corpus: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some words have no known correction
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Corpus and model management
    Corpus {
        #[command(subcommand)]
        action: CorpusCommands,
    },
}

#[derive(Parser, Debug)]
enum CorpusCommands {
    /// Download the training corpus and build the default model
    Download {
        /// Fetch from this URL instead of the configured one
        #[arg(long)]
        url: Option<String>,
    },
    /// Compile a corpus text file into a model
    Compile {
        /// Corpus text file (plain or .gz)
        corpus: PathBuf,

        /// Output model path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List installed models
    List,
    /// Show model info
    Info {
        /// Model path (defaults to the installed model)
        model: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellfix", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.model.clone(), cli.corpus.clone())?;

    // Handle subcommands
    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    // Collect input words
    let words: Vec<String> = if cli.words.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read words from stdin")?
            .iter()
            .flat_map(|line| line.split_whitespace())
            .map(str::to_string)
            .collect()
    } else {
        cli.words.clone()
    };

    if words.is_empty() {
        anyhow::bail!("No words given. Use --help for usage information.");
    }

    let model = load_model(&config)?;
    let corrector = Corrector::new(&model);

    // The model is read-only after construction, so batch inputs can be
    // corrected in parallel against the shared instance
    let corrections: Vec<Correction> = words
        .par_iter()
        .map(|word| {
            let output = corrector.correct(word);
            Correction {
                known: model.contains(&word.to_lowercase()),
                input: word.clone(),
                output,
            }
        })
        .collect();

    output::print_corrections(&corrections, !cli.no_color, &cli.format);
    if matches!(cli.format, OutputFormat::Text) {
        output::print_summary(&corrections, !cli.no_color);
    }

    // Exit with appropriate code
    let unknown = corrections
        .iter()
        .filter(|c| !c.known && !c.is_changed())
        .count();
    if unknown > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn load_model(config: &Config) -> Result<FrequencyModel> {
    if let Some(corpus_path) = &config.corpus {
        let reader = corpus::manager::open_corpus_reader(corpus_path)?;
        return FrequencyModel::from_corpus(reader).with_context(|| {
            format!(
                "Failed to build model from corpus: {}",
                corpus_path.display()
            )
        });
    }

    let model_path = config
        .model_path()
        .context("Failed to locate a model file")?;

    if !model_path.exists() {
        anyhow::bail!(
            "Model not found: {}. Run `spellfix corpus download` to install one, \
             or pass --corpus <FILE> to build from a corpus.",
            model_path.display()
        );
    }

    FrequencyModel::open(&model_path)
        .with_context(|| format!("Failed to load model: {}", model_path.display()))
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Corpus { action } => match action {
            CorpusCommands::Download { url } => {
                corpus::manager::download_corpus(url.as_deref(), config)?;
            }
            CorpusCommands::Compile {
                corpus: corpus_path,
                output,
            } => {
                corpus::manager::compile_model(&corpus_path, output.as_deref())?;
            }
            CorpusCommands::List => {
                corpus::manager::list_models()?;
            }
            CorpusCommands::Info { model } => {
                corpus::manager::show_info(model.as_deref())?;
            }
        },
    }
    Ok(())
}
