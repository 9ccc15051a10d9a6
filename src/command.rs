use log::debug;

use crate::ast::TokenizerConfig;
use crate::error::Result;
use crate::parser::LabelParser;
use crate::tokenizer;

/// Arguments of `<subcommand> <command id> <contents...>`, as used when
/// adding or editing a custom command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCommandArgs {
    pub subcommand: String,
    pub command_id: String,
    /// Everything after the command id, trimmed
    pub content: String,
    /// `content` split with flexible quote sections
    pub args: Vec<String>,
}

impl CustomCommandArgs {
    /// `None` if either the subcommand or the command id is missing
    pub fn parse(content: &str) -> Option<Self> {
        let mut words = tokenizer::args(content, &TokenizerConfig::default()).into_iter();
        let subcommand = words.next()?;
        let command_id = words.next()?;

        let rest = content
            .replacen(&subcommand, "", 1)
            .replacen(&command_id, "", 1)
            .trim()
            .to_owned();
        let args = tokenizer::args(&rest, &TokenizerConfig::flexible());

        debug!("custom command {subcommand} {command_id}: {rest:?} -> {args:?}");

        Some(Self {
            subcommand,
            command_id,
            content: rest,
            args,
        })
    }
}

/// `<command> <group>`, where the group may lead with its emote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupAssignment {
    pub command: String,
    pub group_emote: Option<String>,
    pub group: String,
}

impl GroupAssignment {
    pub fn parse(content: &str) -> Result<Option<Self>> {
        let args = tokenizer::args(content, &TokenizerConfig::flexible());
        let [command, group, ..] = args.as_slice() else {
            return Ok(None);
        };

        let label = LabelParser::parse_label(group)?;
        Ok(Some(Self {
            command: command.clone(),
            group_emote: label.emote.map(|emote| emote.as_str().to_owned()),
            group: label.text.to_owned(),
        }))
    }
}
