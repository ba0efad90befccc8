// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod learning;
pub use crate::config::AutocompleteConfig;
pub use crate::core::engine::AutocompleteSession;
pub use crate::core::trie::PrefixIndex;
pub use crate::error::{AutocompleteError, Result};
