// File: src/learning.rs
use crate::core::trie::PrefixIndex;
use crate::core::types::Weight;
use crate::error::Result;
use log::debug;

/// Applies completed sentences to the index.
pub struct LearningEngine {
    frequency_increment: Weight,
}

impl LearningEngine {
    pub fn new(frequency_increment: Weight) -> Self {
        Self { frequency_increment }
    }

    /// Records one completion of `sentence`, returning its new weight.
    /// An empty sentence is not learned and reports `None`.
    pub fn learn(&self, index: &mut PrefixIndex, sentence: &str) -> Result<Option<Weight>> {
        if sentence.is_empty() {
            debug!("terminator on empty buffer, nothing to learn");
            return Ok(None);
        }
        let updated = index.insert(sentence, self.frequency_increment)?;
        debug!("learned {:?}, weight now {}", sentence, updated);
        Ok(Some(updated))
    }
}

impl Default for LearningEngine {
    fn default() -> Self {
        Self::new(1)
    }
}
