//! Core contracts for Wordforge.
//!
//! This crate defines the configuration types consumed by the generation
//! engine, the raw request form supplied by input shells, and the error type
//! shared across the workspace.

pub mod error;
pub mod pattern;
pub mod request;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use pattern::Pattern;
pub use request::{GenerationRequest, RandomForm, RequestForm};
pub use types::{
    DEFAULT_DIGITS, DEFAULT_PATTERNS, DEFAULT_SYMBOLS, GenerationConfig, RandomConfig,
    SUBSTITUTIONS, Wordlist, substitutions_for, text_len,
};
pub use validation::{validate_generation_config, validate_random_config};
