// --- File: src/core/trie.rs
use crate::core::types::{encode, Candidate, Symbol, Weight, ALPHABET_SIZE};
use crate::error::{AutocompleteError, Result};

/// Longest sentence the index and the session buffer accept.
pub const MAX_SENTENCE_LEN: usize = 200;

type NodeId = usize;
const ROOT: NodeId = 0;

#[derive(Clone, Debug)]
struct TrieNode {
    children: [Option<NodeId>; ALPHABET_SIZE],
    is_terminal: bool,
    weight: Weight,
}

impl TrieNode {
    fn new() -> Self {
        Self { children: [None; ALPHABET_SIZE], is_terminal: false, weight: 0 }
    }
}

/// Weighted sentence dictionary over the 27-symbol alphabet.
///
/// Nodes live in a growable arena and point at their children by index, so
/// child dispatch is a single array access. The index only grows: there is
/// no removal, and re-inserting a sentence accumulates its weight on the
/// existing terminal node.
#[derive(Clone, Debug)]
pub struct PrefixIndex {
    nodes: Vec<TrieNode>,
    max_sentence_len: usize,
    sentence_count: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self::with_max_len(MAX_SENTENCE_LEN)
    }

    /// Callers pass a length already checked by `AutocompleteConfig::validate`.
    pub(crate) fn with_max_len(max_sentence_len: usize) -> Self {
        debug_assert!((1..=MAX_SENTENCE_LEN).contains(&max_sentence_len));
        Self { nodes: vec![TrieNode::new()], max_sentence_len, sentence_count: 0 }
    }

    pub fn max_sentence_len(&self) -> usize {
        self.max_sentence_len
    }

    /// Number of distinct stored sentences.
    pub fn len(&self) -> usize {
        self.sentence_count
    }

    pub fn is_empty(&self) -> bool {
        self.sentence_count == 0
    }

    /// Arena size, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Adds `weight` to `sentence`, creating its path on first insertion.
    ///
    /// The sentence, its length and the resulting weight are all checked
    /// before the first node is allocated, so a rejected insert leaves the
    /// index untouched.
    /// O(k) complexity where k is the sentence length.
    pub fn insert(&mut self, sentence: &str, weight: Weight) -> Result<Weight> {
        let symbols = encode(sentence)?;
        if symbols.len() > self.max_sentence_len {
            return Err(AutocompleteError::SentenceTooLong {
                len: symbols.len(),
                max: self.max_sentence_len,
            });
        }
        if weight == 0 {
            return Err(AutocompleteError::ZeroWeight { sentence: sentence.to_string() });
        }
        let current = self
            .follow(&symbols)
            .map(|idx| self.nodes[idx].weight)
            .unwrap_or(0);
        let updated = current
            .checked_add(weight)
            .ok_or_else(|| AutocompleteError::WeightOverflow { sentence: sentence.to_string() })?;

        let mut node_idx = ROOT;
        for symbol in symbols {
            let next_idx = if let Some(id) = self.nodes[node_idx].children[symbol.index()] {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children[symbol.index()] = Some(new_node_id);
                new_node_id
            };
            node_idx = next_idx;
        }

        let node = &mut self.nodes[node_idx];
        if !node.is_terminal {
            node.is_terminal = true;
            self.sentence_count += 1;
        }
        node.weight = updated;
        Ok(updated)
    }

    /// Accumulated weight of an exact sentence, if it was ever inserted.
    pub fn weight_of(&self, sentence: &str) -> Option<Weight> {
        let symbols = encode(sentence).ok()?;
        let node = &self.nodes[self.follow(&symbols)?];
        node.is_terminal.then_some(node.weight)
    }

    /// Returns `true` if some stored path spells `prefix`.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        encode(prefix).is_ok_and(|symbols| self.follow(&symbols).is_some())
    }

    /// Every stored sentence starting with `prefix`, with its weight.
    ///
    /// The order is traversal order, not rank order. An absent prefix yields
    /// an empty list.
    /// O(p + n) where p is the prefix length and n the nodes below it.
    pub fn collect(&self, prefix: &str) -> Result<Vec<Candidate>> {
        let mut out = Vec::new();
        self.for_each_completion(prefix, |sentence, weight| {
            out.push(Candidate { sentence: sentence.to_string(), weight });
        })?;
        Ok(out)
    }

    /// Streams the subtree under `prefix` to `visit` without materializing it.
    pub fn for_each_completion<F>(&self, prefix: &str, mut visit: F) -> Result<()>
    where
        F: FnMut(&str, Weight),
    {
        let symbols = encode(prefix)?;
        if let Some(node_idx) = self.follow(&symbols) {
            let mut spelled = String::with_capacity(self.max_sentence_len);
            spelled.push_str(prefix);
            self.dfs_collect(node_idx, &mut spelled, &mut visit);
        }
        Ok(())
    }

    fn follow(&self, symbols: &[Symbol]) -> Option<NodeId> {
        let mut node_idx = ROOT;
        for symbol in symbols {
            node_idx = self.nodes[node_idx].children[symbol.index()]?;
        }
        Some(node_idx)
    }

    fn dfs_collect<F>(&self, node_idx: NodeId, spelled: &mut String, visit: &mut F)
    where
        F: FnMut(&str, Weight),
    {
        let node = &self.nodes[node_idx];
        if node.is_terminal {
            visit(spelled.as_str(), node.weight);
        }

        for (slot, child) in node.children.iter().enumerate() {
            if let Some(child_idx) = *child {
                spelled.push(Symbol::from_index(slot).to_char());
                self.dfs_collect(child_idx, spelled, visit);
                spelled.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut candidates: Vec<Candidate>) -> Vec<(String, Weight)> {
        candidates.sort_by(|a, b| a.sentence.cmp(&b.sentence));
        candidates.into_iter().map(|c| (c.sentence, c.weight)).collect()
    }

    #[test]
    fn repeated_insert_accumulates_without_new_nodes() {
        let mut index = PrefixIndex::new();
        index.insert("island", 3).unwrap();
        let nodes = index.node_count();
        assert_eq!(index.insert("island", 2).unwrap(), 5);
        assert_eq!(index.node_count(), nodes);
        assert_eq!(index.weight_of("island"), Some(5));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn collect_returns_exactly_the_prefixed_sentences() {
        let mut index = PrefixIndex::new();
        index.insert("i love you", 5).unwrap();
        index.insert("island", 3).unwrap();
        index.insert("iroman", 2).unwrap();
        index.insert("i love leetcode", 2).unwrap();
        index.insert("ice", 1).unwrap();
        index.insert("ice", 1).unwrap();

        assert_eq!(
            sorted(index.collect("i ").unwrap()),
            vec![("i love leetcode".to_string(), 2), ("i love you".to_string(), 5)]
        );
        assert_eq!(sorted(index.collect("ic").unwrap()), vec![("ice".to_string(), 2)]);
        assert_eq!(index.collect("i").unwrap().len(), 5);
    }

    #[test]
    fn prefix_equal_to_a_sentence_includes_it() {
        let mut index = PrefixIndex::new();
        index.insert("ab", 1).unwrap();
        index.insert("abc", 4).unwrap();
        assert_eq!(
            sorted(index.collect("ab").unwrap()),
            vec![("ab".to_string(), 1), ("abc".to_string(), 4)]
        );
    }

    #[test]
    fn missing_prefix_is_empty_not_an_error() {
        let mut index = PrefixIndex::new();
        index.insert("island", 3).unwrap();
        assert!(index.collect("x").unwrap().is_empty());
        assert!(index.collect("islands").unwrap().is_empty());
        assert!(!index.contains_prefix("x"));
        assert!(index.contains_prefix("isl"));
    }

    #[test]
    fn inner_path_nodes_are_not_sentences() {
        let mut index = PrefixIndex::new();
        index.insert("island", 3).unwrap();
        assert_eq!(index.weight_of("isl"), None);
        assert_eq!(index.weight_of("nothing"), None);
    }

    #[test]
    fn rejected_inserts_leave_no_trace() {
        let mut index = PrefixIndex::new();
        assert!(matches!(
            index.insert("hello World", 1),
            Err(AutocompleteError::InvalidSymbol('W'))
        ));
        assert!(matches!(index.insert("hello", 0), Err(AutocompleteError::ZeroWeight { .. })));
        assert_eq!(index.node_count(), 1);
        assert!(index.is_empty());

        index.insert("max", Weight::MAX).unwrap();
        let nodes = index.node_count();
        assert!(matches!(
            index.insert("max", 1),
            Err(AutocompleteError::WeightOverflow { .. })
        ));
        assert_eq!(index.weight_of("max"), Some(Weight::MAX));
        assert_eq!(index.node_count(), nodes);
    }

    #[test]
    fn length_limit_is_inclusive() {
        let mut index = PrefixIndex::new();
        let longest = "a".repeat(MAX_SENTENCE_LEN);
        assert!(index.insert(&longest, 1).is_ok());
        let too_long = "a".repeat(MAX_SENTENCE_LEN + 1);
        assert!(matches!(
            index.insert(&too_long, 1),
            Err(AutocompleteError::SentenceTooLong { len: 201, max: 200 })
        ));
    }

    #[test]
    fn collect_with_invalid_prefix_fails() {
        let index = PrefixIndex::new();
        assert!(matches!(index.collect("I"), Err(AutocompleteError::InvalidSymbol('I'))));
    }
}
