pub mod cli;
pub mod config;
pub mod corpus;
pub mod corrector;
pub mod model;

pub use config::Config;
pub use corrector::Corrector;
pub use model::{FrequencyModel, ModelError};

/// Outcome of correcting a single word.
#[derive(Debug, Clone)]
pub struct Correction {
    /// The word as the caller supplied it
    pub input: String,
    /// The corrector's answer (always lowercase)
    pub output: String,
    /// Whether the (lowercased) input was already a known word
    pub known: bool,
}

impl Correction {
    /// True when the corrector replaced the input with a different word.
    pub fn is_changed(&self) -> bool {
        self.output != self.input.to_lowercase()
    }
}
