use pest::{Parser, iterators::Pair};
use pest_derive::Parser;

use crate::error::Result;

#[derive(Parser)]
#[grammar = "src/label.pest"]
pub struct LabelParser;

/// A reaction emote found at the start of a label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emote<'a> {
    Unicode(&'a str),
    /// Server emote, written as `<:name:id>` or `<a:name:id>`
    Custom {
        lexeme: &'a str,
        name: &'a str,
        id: &'a str,
        animated: bool,
    },
}

impl<'a> Emote<'a> {
    /// The emote as it was written
    pub fn as_str(&self) -> &'a str {
        match self {
            Emote::Unicode(s) => s,
            Emote::Custom { lexeme, .. } => lexeme,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLabel<'a> {
    pub emote: Option<Emote<'a>>,
    pub text: &'a str,
}

impl LabelParser {
    /// Split a label into its leading emote (if any) and the trimmed text
    pub fn parse_label(input: &str) -> Result<OptionLabel<'_>> {
        let pairs = LabelParser::parse(Rule::label, input).map_err(Box::new)?;

        let mut label = OptionLabel {
            emote: None,
            text: "",
        };
        for pair in pairs.flat_map(Pair::into_inner) {
            match pair.as_rule() {
                Rule::custom_emote => label.emote = Some(Self::parse_custom_emote(pair)),
                Rule::unicode_emote => label.emote = Some(Emote::Unicode(pair.as_str())),
                Rule::text => label.text = pair.as_str().trim(),
                _ => {}
            }
        }

        Ok(label)
    }

    fn parse_custom_emote(pair: Pair<Rule>) -> Emote {
        let lexeme = pair.as_str();
        let mut name = "";
        let mut id = "";
        let mut animated = false;

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::animated => animated = true,
                Rule::emote_name => name = inner.as_str(),
                Rule::emote_id => id = inner.as_str(),
                _ => {}
            }
        }

        Emote::Custom {
            lexeme,
            name,
            id,
            animated,
        }
    }
}
