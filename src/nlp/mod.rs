//! Text normalization
//!
//! - [`tokenizer`]: lowercase alphabetic word splitting

pub mod tokenizer;
