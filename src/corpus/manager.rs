use crate::config::Config;
use crate::model::{ingest, FrequencyModel};
use anyhow::{Context, Result};
use colored::*;
use flate2::read::GzDecoder;
use indicatif::{ProgressBar, ProgressStyle};
use sha2::{Digest, Sha256};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

// The corpus Norvig's corrector was trained on: public-domain text from
// Project Gutenberg plus word lists, ~6MB of plain text
const CORPUS_VERSION: &str = "norvig-big-2007";

pub fn download_corpus(url: Option<&str>, config: &Config) -> Result<()> {
    let url = url.unwrap_or(&config.corpus_url);

    println!(
        "{} training corpus (version: {})...",
        "Downloading".cyan().bold(),
        CORPUS_VERSION.dimmed()
    );
    println!("Source: {}", url.dimmed());

    let cache_dir = Config::cache_dir().context("Failed to get cache directory")?;
    fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("Downloading...");

    let response = reqwest::blocking::get(url).context("Failed to download corpus")?;

    if !response.status().is_success() {
        anyhow::bail!("Failed to download corpus: HTTP {}", response.status());
    }

    let bytes = response.bytes().context("Failed to read corpus body")?;
    pb.finish_with_message("Download complete");

    println!(
        "SHA-256: {}",
        format!("{:x}", Sha256::digest(&bytes)).dimmed()
    );

    // Some mirrors serve the corpus gzipped
    let text = if url.ends_with(".gz") {
        let mut decoded = Vec::new();
        GzDecoder::new(&bytes[..])
            .read_to_end(&mut decoded)
            .context("Failed to decompress corpus")?;
        decoded
    } else {
        bytes.to_vec()
    };

    let corpus_path = cache_dir.join("corpus.txt");
    fs::write(&corpus_path, &text)
        .with_context(|| format!("Failed to save corpus: {}", corpus_path.display()))?;

    println!(
        "{} Corpus saved: {}",
        "✓".green().bold(),
        corpus_path.display().to_string().cyan()
    );

    // Build the default model right away so the tool works out of the box
    compile_model(&corpus_path, None)?;

    Ok(())
}

/// Ingest a corpus file and write the compiled frequency model.
pub fn compile_model(corpus_path: &Path, output: Option<&Path>) -> Result<PathBuf> {
    println!("{}", "Building frequency model...".cyan());

    let reader = open_corpus_reader(corpus_path)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message("Counting words...");

    let counts = ingest::count_words(reader)
        .with_context(|| format!("Failed to ingest corpus: {}", corpus_path.display()))?;
    pb.finish_with_message("Counting complete");

    if counts.is_empty() {
        anyhow::bail!(
            "Corpus contains no usable words: {}",
            corpus_path.display()
        );
    }

    let total_tokens: u64 = counts.values().sum();
    println!(
        "Found {} distinct words ({} tokens)",
        counts.len().to_string().yellow(),
        total_tokens.to_string().yellow()
    );

    let model_path = match output {
        Some(path) => path.to_path_buf(),
        None => {
            let data_dir = Config::data_dir().context("Failed to get data directory")?;
            fs::create_dir_all(&data_dir).context("Failed to create data directory")?;
            data_dir.join("en.model")
        }
    };

    FrequencyModel::compile(&counts, &model_path)
        .with_context(|| format!("Failed to write model: {}", model_path.display()))?;

    println!(
        "{} Model installed: {}",
        "✓".green().bold(),
        model_path.display().to_string().cyan()
    );

    Ok(model_path)
}

/// Open a corpus file for line-wise reading, decompressing `.gz` transparently.
pub fn open_corpus_reader(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open corpus: {}", path.display()))?;

    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

pub fn list_models() -> Result<()> {
    let data_dir = Config::data_dir().context("Failed to get data directory")?;

    if !data_dir.exists() {
        println!("{}", "No models installed.".yellow());
        println!(
            "Run {} to download a corpus and build one.",
            "spellfix corpus download".cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed models:".bold());
    println!();

    let entries = fs::read_dir(&data_dir)?;
    let mut found_any = false;

    for entry in entries {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) == Some("model") {
            found_any = true;
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown");

            let metadata = fs::metadata(&path)?;
            let size_kb = metadata.len() / 1024;

            println!(
                "  {} {} ({})",
                "✓".green(),
                name.cyan().bold(),
                format!("{}KB", size_kb).dimmed()
            );
        }
    }

    if !found_any {
        println!("{}", "No models found.".yellow());
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

pub fn show_info(model: Option<&Path>) -> Result<()> {
    let model_path = match model {
        Some(path) => path.to_path_buf(),
        None => Config::default_model_path().context("Failed to get data directory")?,
    };

    if !model_path.exists() {
        println!(
            "{} Model not found: {}",
            "✗".red().bold(),
            model_path.display()
        );
        println!(
            "Run {} to download a corpus and build it.",
            "spellfix corpus download".cyan()
        );
        return Ok(());
    }

    let metadata = fs::metadata(&model_path)?;
    let bytes = fs::read(&model_path)?;

    println!("{}", format!("Model: {}", model_path.display()).bold());
    println!("  Size: {} KB", metadata.len() / 1024);
    println!("  SHA-256: {:x}", Sha256::digest(&bytes));
    println!("  Format: FST (Finite State Transducer)");

    match FrequencyModel::open(&model_path) {
        Ok(model) => {
            println!("  Words: {}", model.len());
        }
        Err(e) => {
            println!("  {}: {}", "Error loading model".red(), e);
        }
    }

    Ok(())
}
