pub mod engine;
pub mod ranking;
pub mod trie;
pub mod types;
