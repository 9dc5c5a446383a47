use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Placeholder marking one slot in a pattern template.
pub const SLOT: &str = "{}";

/// Template with positional `{}` slots filled during assembly.
///
/// Text outside the slots is copied literally; brace escapes are not
/// interpreted, so `{{}}` is a slot surrounded by literal braces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern {
    template: String,
    segments: Vec<String>,
}

impl Pattern {
    /// Parse a template; at least one slot is required.
    pub fn parse(template: &str) -> Result<Self> {
        let segments: Vec<String> = template.split(SLOT).map(str::to_string).collect();
        if segments.len() < 2 {
            return Err(Error::InvalidPattern(format!(
                "'{template}' has no {SLOT} placeholder"
            )));
        }
        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Number of `{}` slots in the template.
    pub fn slots(&self) -> usize {
        self.segments.len() - 1
    }

    /// Fill the slots positionally. Missing parts are left empty and extra
    /// parts are ignored.
    pub fn fill<S: AsRef<str>>(&self, parts: &[S]) -> String {
        let mut out = String::with_capacity(
            self.template.len() + parts.iter().map(|part| part.as_ref().len()).sum::<usize>(),
        );
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0
                && let Some(part) = parts.get(index - 1)
            {
                out.push_str(part.as_ref());
            }
            out.push_str(segment);
        }
        out
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

impl TryFrom<String> for Pattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Pattern::parse(&value)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.template
    }
}
