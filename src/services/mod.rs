pub mod classifier;
pub mod filter;
pub mod lexicon;
pub mod merger;
pub mod partitioner;
pub mod rejection_log;
pub mod store;
pub mod tagger;
pub mod verifier;
