pub mod ingest;

use fst::{Map, MapBuilder};
use memmap2::Mmap;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufWriter};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model data")]
    Io(#[from] std::io::Error),

    #[error("invalid model data")]
    Fst(#[from] fst::Error),

    #[error("model contains no words")]
    EmptyModel,

    #[error("invalid model word {word:?}: words must be non-empty lowercase a-z")]
    InvalidWord { word: String },

    #[error("invalid count for {word:?}: counts must be at least 1")]
    InvalidCount { word: String },
}

enum ModelData {
    Owned(Vec<u8>),
    Mapped(Mmap),
}

impl AsRef<[u8]> for ModelData {
    fn as_ref(&self) -> &[u8] {
        match self {
            ModelData::Owned(bytes) => bytes,
            ModelData::Mapped(mmap) => mmap,
        }
    }
}

/// Immutable frequency table mapping lowercase words to occurrence counts.
///
/// Built once from a corpus (or a pre-computed count table) and read-only
/// afterwards, so one instance can be shared across threads freely.
pub struct FrequencyModel {
    map: Map<ModelData>,
}

impl FrequencyModel {
    /// Build a model from an already-counted word table.
    ///
    /// Every key must be non-empty lowercase `a`-`z` and every count at
    /// least 1. An empty table is an error: a model that knows no words
    /// would silently echo every input back.
    pub fn from_counts(counts: BTreeMap<String, u64>) -> Result<Self, ModelError> {
        if counts.is_empty() {
            return Err(ModelError::EmptyModel);
        }

        let mut builder = MapBuilder::memory();
        for (word, count) in &counts {
            if !is_valid_word(word) {
                return Err(ModelError::InvalidWord { word: word.clone() });
            }
            if *count == 0 {
                return Err(ModelError::InvalidCount { word: word.clone() });
            }
            builder.insert(word.as_bytes(), *count)?;
        }

        let bytes = builder.into_inner()?;
        let map = Map::new(ModelData::Owned(bytes))?;
        Ok(Self { map })
    }

    /// Build a model by ingesting a text corpus.
    pub fn from_corpus<R: BufRead>(reader: R) -> Result<Self, ModelError> {
        let counts = ingest::count_words(reader)?;
        Self::from_counts(counts)
    }

    /// Memory-map a compiled model file.
    pub fn open(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let map = Map::new(ModelData::Mapped(mmap))?;

        if map.is_empty() {
            return Err(ModelError::EmptyModel);
        }

        Ok(Self { map })
    }

    /// Compile a count table into a model file.
    pub fn compile(counts: &BTreeMap<String, u64>, output_path: &Path) -> Result<(), ModelError> {
        if counts.is_empty() {
            return Err(ModelError::EmptyModel);
        }

        let file = File::create(output_path)?;
        let writer = BufWriter::new(file);
        let mut builder = MapBuilder::new(writer)?;

        for (word, count) in counts {
            if !is_valid_word(word) {
                return Err(ModelError::InvalidWord { word: word.clone() });
            }
            if *count == 0 {
                return Err(ModelError::InvalidCount { word: word.clone() });
            }
            builder.insert(word.as_bytes(), *count)?;
        }

        builder.finish()?;
        Ok(())
    }

    /// Check if a word is known. Case-sensitive; callers pass lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.map.contains_key(word.as_bytes())
    }

    /// Occurrence count of a word, or `None` if it is unknown.
    /// Never returns zero: absence means "unknown", not "count zero".
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.map.get(word.as_bytes())
    }

    /// Number of distinct known words.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
