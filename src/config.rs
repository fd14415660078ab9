use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Compiled frequency model to correct against
    pub model: Option<PathBuf>,

    /// Corpus text file to build the model from at startup instead
    pub corpus: Option<PathBuf>,

    /// Where `corpus download` fetches the training corpus
    #[serde(default = "default_corpus_url")]
    pub corpus_url: String,
}

fn default_corpus_url() -> String {
    "https://norvig.com/big.txt".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: None,
            corpus: None,
            corpus_url: default_corpus_url(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(model: Option<PathBuf>, corpus: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".spellfix.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        if let Some(model) = model {
            config.model = Some(model);
        }
        if let Some(corpus) = corpus {
            config.corpus = Some(corpus);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.model.is_some() {
            self.model = other.model;
        }
        if other.corpus.is_some() {
            self.corpus = other.corpus;
        }
        if other.corpus_url != default_corpus_url() {
            self.corpus_url = other.corpus_url;
        }
        self
    }

    /// The model file to use: explicit path, or the default install location.
    pub fn model_path(&self) -> Option<PathBuf> {
        self.model.clone().or_else(Self::default_model_path)
    }

    pub fn default_model_path() -> Option<PathBuf> {
        Self::data_dir().map(|dir| dir.join("en.model"))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellfix").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn cache_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellfix").map(|dirs| dirs.cache_dir().to_path_buf())
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellfix").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
