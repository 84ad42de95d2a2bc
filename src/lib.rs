//! Prefix-based word prediction over a dictionary of lowercase ASCII words.
//!
//! A [`trie::Trie`] is built once from a word list, usually through
//! [`dictionary::load_path`], and a [`predictor::Predictor`] answers every
//! query against it without mutating it.
pub mod dictionary;
pub mod predictor;
pub mod trie;
