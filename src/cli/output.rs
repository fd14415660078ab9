use crate::Correction;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonWord {
    input: String,
    output: String,
    known: bool,
    corrected: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    words_checked: usize,
    corrected: usize,
    unknown: usize,
    words: Vec<JsonWord>,
}

pub fn print_corrections(corrections: &[Correction], colored_output: bool, format: &OutputFormat) {
    match format {
        OutputFormat::Text => print_text_corrections(corrections, colored_output),
        OutputFormat::Json => print_json_corrections(corrections),
    }
}

fn print_text_corrections(corrections: &[Correction], colored_output: bool) {
    for correction in corrections {
        if correction.known {
            if colored_output {
                println!("{} {}", correction.input.green(), "✓".green().bold());
            } else {
                println!("{} ✓", correction.input);
            }
        } else if correction.is_changed() {
            if colored_output {
                println!(
                    "{} {} {}",
                    correction.input.red().bold(),
                    "→".dimmed(),
                    correction.output.green().bold()
                );
            } else {
                println!("{} → {}", correction.input, correction.output);
            }
        } else if colored_output {
            println!(
                "{} {}",
                correction.input.yellow().bold(),
                "(no correction found)".dimmed()
            );
        } else {
            println!("{} (no correction found)", correction.input);
        }
    }
}

fn print_json_corrections(corrections: &[Correction]) {
    let words: Vec<JsonWord> = corrections
        .iter()
        .map(|c| JsonWord {
            input: c.input.clone(),
            output: c.output.clone(),
            known: c.known,
            corrected: c.is_changed(),
        })
        .collect();

    let output = JsonOutput {
        words_checked: corrections.len(),
        corrected: corrections.iter().filter(|c| c.is_changed()).count(),
        unknown: corrections
            .iter()
            .filter(|c| !c.known && !c.is_changed())
            .count(),
        words,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_summary(corrections: &[Correction], colored_output: bool) {
    let corrected = corrections.iter().filter(|c| c.is_changed()).count();
    let unknown = corrections
        .iter()
        .filter(|c| !c.known && !c.is_changed())
        .count();

    println!();
    if corrected == 0 && unknown == 0 {
        if colored_output {
            println!("{}", "✓ All words spelled correctly!".green().bold());
        } else {
            println!("✓ All words spelled correctly!");
        }
        return;
    }

    let corrected_word = if corrected == 1 {
        "correction"
    } else {
        "corrections"
    };
    if colored_output {
        print!(
            "{} {} {}",
            "✓".green().bold(),
            corrected.to_string().green().bold(),
            corrected_word
        );
    } else {
        print!("✓ {} {}", corrected, corrected_word);
    }

    if unknown > 0 {
        let unknown_word = if unknown == 1 { "word" } else { "words" };
        if colored_output {
            print!(
                ", {} {} {}",
                unknown.to_string().yellow().bold(),
                unknown_word,
                "without a known correction".yellow()
            );
        } else {
            print!(", {} {} without a known correction", unknown, unknown_word);
        }
    }

    println!(" ({} checked)", corrections.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }
}
