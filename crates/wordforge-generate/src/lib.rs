//! Wordlist generation engine for Wordforge.
//!
//! Input words are expanded into case and substitution variants, assembled
//! into pattern-formatted and concatenated permutations, optionally unioned
//! with randomly synthesized words, then deduplicated and sorted.

pub mod assembler;
pub mod engine;
pub mod errors;
pub mod merge;
pub mod model;
pub mod output;
pub mod random;
pub mod variants;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, RandomReport};
