// File: src/core/ranking.rs
use crate::core::types::{Candidate, Weight};
use log::trace;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Bounded top-K accumulator fed one candidate at a time during a subtree walk.
///
/// Candidates are grouped by weight and at most `k` distinct weights are kept.
/// The K best sentences under (weight desc, text asc) always live inside the
/// K highest weight groups, so nothing that can reach the output is evicted.
/// A new sentence whose weight already has a group joins it even when the
/// accumulator is full; only a strictly higher unseen weight evicts the
/// lowest group.
#[derive(Debug)]
pub struct HotSentences {
    k: usize,
    groups: BTreeMap<Weight, Vec<String>>,
}

impl HotSentences {
    pub fn new(k: usize) -> Self {
        Self { k, groups: BTreeMap::new() }
    }

    pub fn offer(&mut self, sentence: &str, weight: Weight) {
        if self.groups.len() < self.k {
            self.groups.entry(weight).or_default().push(sentence.to_string());
            return;
        }

        if let Some(group) = self.groups.get_mut(&weight) {
            group.push(sentence.to_string());
            return;
        }

        let Some((&lowest, _)) = self.groups.first_key_value() else {
            return;
        };
        if weight > lowest {
            self.groups.insert(weight, vec![sentence.to_string()]);
            self.groups.remove(&lowest);
            trace!("evicted weight group {} for {}", lowest, weight);
        }
    }

    /// Number of weight groups currently held.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Drains the accumulator into at most `k` sentences in rank order.
    ///
    /// Only the retained groups are sorted, never the whole candidate set.
    pub fn into_ranked(self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.k);
        for (_, mut sentences) in self.groups.into_iter().rev() {
            sentences.sort();
            let room = self.k - result.len();
            result.extend(sentences.into_iter().take(room));
            if result.len() == self.k {
                break;
            }
        }
        result
    }
}

pub fn compare_weight_desc_then_text_asc(a: &Candidate, b: &Candidate) -> Ordering {
    b.weight.cmp(&a.weight).then_with(|| a.sentence.cmp(&b.sentence))
}

/// Ranks by sorting the full candidate set. Same output as `HotSentences`.
pub fn rank_by_sort(mut candidates: Vec<Candidate>, k: usize) -> Vec<String> {
    candidates.sort_by(compare_weight_desc_then_text_asc);
    candidates.into_iter().take(k).map(|c| c.sentence).collect()
}
