//! Wordbank generation and maintenance for the word-guessing game.
//!
//! A frequency-ranked word list is filtered against a legal-word lexicon and a
//! plural-form classifier, then split into one bank per word length. Each bank
//! tracks which words gameplay has already consumed.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;
