use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pattern::Pattern;
use crate::types::{DEFAULT_PATTERNS, DEFAULT_SYMBOLS, GenerationConfig, RandomConfig};
use crate::validation::{validate_generation_config, validate_random_config};

/// Raw values collected by an input shell before any parsing.
///
/// Numeric fields stay as text so that a malformed value is reported as
/// [`Error::InvalidNumericInput`] instead of being rejected by the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestForm {
    pub first_name: String,
    pub last_name: String,
    pub birth_year: String,
    pub city: String,
    /// Free text split on whitespace into extra input words.
    pub extra_words: String,
    pub min_len: String,
    pub max_len: String,
    pub use_symbols: bool,
    pub use_replacements: bool,
    pub patterns: Vec<String>,
    /// Overrides the decoration symbols when non-empty.
    pub decoration_symbols: String,
    pub preview: bool,
    pub random: RandomForm,
}

/// Random synthesis section of a [`RequestForm`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomForm {
    pub enabled: bool,
    pub count: String,
    pub use_upper: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
    pub prefix: String,
    pub suffix: String,
    pub digits: String,
    pub symbols: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RequestForm {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            birth_year: String::new(),
            city: String::new(),
            extra_words: String::new(),
            min_len: "6".to_string(),
            max_len: "16".to_string(),
            use_symbols: true,
            use_replacements: true,
            patterns: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            decoration_symbols: String::new(),
            preview: false,
            random: RandomForm::default(),
        }
    }
}

impl Default for RandomForm {
    fn default() -> Self {
        Self {
            enabled: false,
            count: "50".to_string(),
            use_upper: true,
            use_digits: true,
            use_symbols: true,
            prefix: String::new(),
            suffix: String::new(),
            digits: String::new(),
            symbols: String::new(),
            seed: None,
        }
    }
}

/// Parsed, validated request handed to the generation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Input words in form order: first, last, year, city, extras.
    pub inputs: Vec<String>,
    pub generation: GenerationConfig,
    /// Present only when random synthesis is enabled.
    pub random: Option<RandomConfig>,
    pub preview: bool,
}

impl RequestForm {
    /// Non-blank input words, trimmed, in form order.
    pub fn input_words(&self) -> Vec<String> {
        let mut inputs: Vec<String> = [
            &self.first_name,
            &self.last_name,
            &self.birth_year,
            &self.city,
        ]
        .into_iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect();
        inputs.extend(self.extra_words.split_whitespace().map(str::to_string));
        inputs
    }

    /// Parse numeric fields and build the request.
    ///
    /// All three numeric fields are parsed even when random synthesis is
    /// disabled, so a malformed random count rejects the whole request. A
    /// negative count parses and yields no random words.
    pub fn parse(&self) -> Result<GenerationRequest> {
        let min_len = parse_int("min_len", &self.min_len)?;
        let max_len = parse_int("max_len", &self.max_len)?;
        let count = parse_int("random.count", &self.random.count)?;

        let min_len = to_len("min_len", min_len)?;
        let max_len = to_len("max_len", max_len)?;

        let patterns = self
            .patterns
            .iter()
            .map(|template| Pattern::parse(template))
            .collect::<Result<Vec<_>>>()?;

        let decoration = self.decoration_symbols.trim();
        let symbols = if decoration.is_empty() {
            DEFAULT_SYMBOLS.to_vec()
        } else {
            decoration.chars().filter(|ch| !ch.is_whitespace()).collect()
        };

        let generation = GenerationConfig {
            min_len,
            max_len,
            use_symbols: self.use_symbols,
            use_replacements: self.use_replacements,
            patterns,
            symbols,
        };
        validate_generation_config(&generation)?;

        let random = if self.random.enabled {
            let random = RandomConfig {
                count: usize::try_from(count).unwrap_or(0),
                min_len,
                max_len,
                use_upper: self.random.use_upper,
                use_digits: self.random.use_digits,
                use_symbols: self.random.use_symbols,
                prefix: self.random.prefix.trim().to_string(),
                suffix: self.random.suffix.trim().to_string(),
                custom_digits: self.random.digits.trim().to_string(),
                custom_symbols: self.random.symbols.trim().to_string(),
                seed: self.random.seed,
            };
            validate_random_config(&random)?;
            Some(random)
        } else {
            None
        };

        Ok(GenerationRequest {
            inputs: self.input_words(),
            generation,
            random,
            preview: self.preview,
        })
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i64> {
    let ascii: String = value.trim().chars().map(ascii_digit).collect();
    ascii
        .parse::<i64>()
        .map_err(|_| Error::InvalidNumericInput {
            field,
            value: value.to_string(),
        })
}

/// Fold Arabic-Indic and Extended Arabic-Indic digits onto ASCII.
fn ascii_digit(ch: char) -> char {
    let zero = match ch {
        '\u{0660}'..='\u{0669}' => 0x0660,
        '\u{06F0}'..='\u{06F9}' => 0x06F0,
        _ => return ch,
    };
    char::from_u32(u32::from('0') + (u32::from(ch) - zero)).unwrap_or(ch)
}

fn to_len(field: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| Error::InvalidConfig(format!("{field} must be >= 1, got {value}")))
}
