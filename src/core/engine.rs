use crate::config::AutocompleteConfig;
use crate::core::ranking::HotSentences;
use crate::core::trie::PrefixIndex;
use crate::core::types::{Symbol, Weight};
use crate::error::{AutocompleteError, Result};
use crate::learning::LearningEngine;
use log::{debug, warn};

/// One user's typing session over its own dictionary.
/// The buffer holds everything typed since the last terminator; the index only grows.
pub struct AutocompleteSession {
    index: PrefixIndex,
    buffer: String,
    config: AutocompleteConfig,
    learning_engine: LearningEngine,
}

impl AutocompleteSession {
    /// Builds a session seeded with parallel `sentences` and `weights`.
    pub fn new<S: AsRef<str>>(sentences: &[S], weights: &[Weight]) -> Result<Self> {
        Self::with_config(AutocompleteConfig::default(), sentences, weights)
    }

    pub fn with_config<S: AsRef<str>>(
        config: AutocompleteConfig,
        sentences: &[S],
        weights: &[Weight],
    ) -> Result<Self> {
        config.validate()?;
        if sentences.len() != weights.len() {
            return Err(AutocompleteError::SeedLengthMismatch {
                sentences: sentences.len(),
                weights: weights.len(),
            });
        }

        let mut index = PrefixIndex::with_max_len(config.max_sentence_len);
        for (sentence, &weight) in sentences.iter().zip(weights) {
            index.insert(sentence.as_ref(), weight)?;
        }
        debug!("seeded {} sentences into {} nodes", index.len(), index.node_count());

        Ok(Self {
            index,
            buffer: String::with_capacity(config.max_sentence_len),
            learning_engine: LearningEngine::new(config.commit_increment),
            config,
        })
    }

    /// Feeds one keystroke.
    ///
    /// The terminator commits the buffer and returns nothing. Any other
    /// symbol extends the buffer and returns up to `top_k` hot sentences
    /// starting with it. A rejected keystroke changes nothing.
    pub fn input(&mut self, c: char) -> Result<Vec<String>> {
        if c == self.config.terminator {
            self.learning_engine.learn(&mut self.index, &self.buffer)?;
            self.buffer.clear();
            return Ok(Vec::new());
        }

        if let Err(e) = Symbol::try_from(c) {
            warn!("rejected keystroke {:?}", c);
            return Err(e);
        }
        if self.buffer.len() >= self.config.max_sentence_len {
            warn!("buffer full at {} symbols", self.buffer.len());
            return Err(AutocompleteError::BufferOverflow { max: self.config.max_sentence_len });
        }
        self.buffer.push(c);

        let suggestions = self.suggest(&self.buffer)?;
        debug!("{:?} -> {:?}", self.buffer, suggestions);
        Ok(suggestions)
    }

    /// Ranks the sentences under `prefix` against the current index.
    /// Pure: neither the buffer nor the index is touched.
    pub fn suggest(&self, prefix: &str) -> Result<Vec<String>> {
        let mut hot = HotSentences::new(self.config.top_k);
        self.index
            .for_each_completion(prefix, |sentence, weight| hot.offer(sentence, weight))?;
        Ok(hot.into_ranked())
    }

    /// Drops the in-progress buffer without learning it.
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }
}
