use serde::{Deserialize, Serialize};

/// A single parsed argument, along with how it was quoted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Payload, trimmed if it was unquoted
    pub argument: String,
    /// Payload exactly as it was accumulated
    pub untrimmed_argument: String,
    /// Produced while inside a quoted section
    pub wrapped_in_quotes: bool,
    /// Input ended mid-section (strict mode only)
    pub non_closed_quote_section: bool,
    /// The slice of the input this token was read from, including whichever
    /// quote characters delimited it
    pub source: String,
}

impl Token {
    pub(crate) fn unquoted(argument: impl Into<String>, untrimmed: String) -> Self {
        Self {
            argument: argument.into(),
            source: untrimmed.clone(),
            untrimmed_argument: untrimmed,
            wrapped_in_quotes: false,
            non_closed_quote_section: false,
        }
    }

    /// True for a token that was opened and closed by quotes
    pub fn is_closed_quote(&self) -> bool {
        self.wrapped_in_quotes && !self.non_closed_quote_section
    }
}

/// How quoted sections split the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteSections {
    /// Quoted and unquoted runs may be interleaved; whitespace never splits
    Flexible,
    /// Every argument must be a complete quoted section
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Keep the quote characters inside the arguments
    pub show_quote_characters: bool,
    /// `None` splits unquoted text on spaces
    pub quote_sections: Option<QuoteSections>,
}

impl TokenizerConfig {
    pub fn flexible() -> Self {
        Self {
            quote_sections: Some(QuoteSections::Flexible),
            ..Self::default()
        }
    }

    pub fn strict() -> Self {
        Self {
            quote_sections: Some(QuoteSections::Strict),
            ..Self::default()
        }
    }

    pub fn with_quote_characters(mut self) -> Self {
        self.show_quote_characters = true;
        self
    }

    pub(crate) fn is_strict(&self) -> bool {
        self.quote_sections == Some(QuoteSections::Strict)
    }
}

/// Result of peeling free text off the front of quoted arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreeText {
    pub free_text: String,
    pub remainder: Vec<Token>,
}

/// Keywords stripped from the front of the input, and what was left
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadingOptions {
    pub matched: Vec<String>,
    pub rest: String,
}
