//! Poll requests: `[single] <question> ["option" ...]`
//!
//! The leading keywords pick the poll's voting mode, the free text in front
//! of the quoted options is the question, and each option may start with the
//! emote that should be used as its reaction.

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::ast::FreeText;
use crate::error::{PollError, Result};
use crate::parser::LabelParser;
use crate::processor::{extract_free_text, split_leading_option};
use crate::tokenizer::simplify;

/// Most reactions a single message can carry
pub const MAX_REACTIONS: usize = 20;

pub const DEFAULT_OPTION_LIMIT: usize = 10;

/// Reactions for a poll that only has a question
pub const SIMPLE_POLL_EMOTES: [&str; 3] = ["👍", "👎", "🤷"];

/// Reactions handed out by position to options without their own emote
pub const OPTION_EMOTES: [&str; MAX_REACTIONS] = [
    "🇦", "🇧", "🇨", "🇩", "🇪", "🇫", "🇬", "🇭", "🇮", "🇯",
    "🇰", "🇱", "🇲", "🇳", "🇴", "🇵", "🇶", "🇷", "🇸", "🇹",
];

const SINGLE_VOTE_KEYWORDS: [&str; 3] = ["one", "once", "single"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PollSettings {
    /// Maximum amount of options, capped at [`MAX_REACTIONS`]
    pub limit: usize,
    /// Keywords accepted in front of the question
    pub keywords: Vec<String>,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_OPTION_LIMIT,
            keywords: ["one", "once", "multi", "multiple", "single"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl PollSettings {
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn option_limit(&self) -> usize {
        self.limit.min(MAX_REACTIONS)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollKind {
    /// Only a question, voted on with [`SIMPLE_POLL_EMOTES`]
    Simple,
    /// A question with options
    Options,
    /// Nothing to make a poll from
    Empty,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollRequest {
    pub question: String,
    /// Leading keywords, in the order they were given
    pub modifiers: Vec<String>,
    pub options: Vec<String>,
}

/// One option of a poll and the reaction used to vote for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollChoice {
    pub emote: String,
    pub label: String,
}

/// Parse the arguments of a poll command.
///
/// Falls back to using the whole input as the question if the free text
/// can't be separated from the options.
pub fn parse(content: &str, settings: &PollSettings) -> PollRequest {
    let leading = split_leading_option(content.trim(), &settings.keywords);

    let (mut question, mut options) =
        match extract_free_text(&leading.rest) {
            Ok(FreeText {
                free_text,
                remainder,
            }) => (free_text, simplify(&remainder)),
            Err(err) => {
                error!("{err}, using {:?} as the question", leading.rest);
                (leading.rest.trim().to_owned(), Vec::new())
            }
        };

    // a fully quoted poll carries its question as the first option, unless
    // there are exactly two, which reads as two options without a question
    if question.is_empty() && options.len() != 2 && !options.is_empty() {
        question = options.remove(0);
    }

    debug!(
        "poll: question {question:?}, modifiers {:?}, options {options:?}",
        leading.matched
    );

    PollRequest {
        question,
        modifiers: leading.matched,
        options,
    }
}

impl PollRequest {
    pub fn kind(&self) -> PollKind {
        if !self.options.is_empty() {
            PollKind::Options
        } else if !self.question.is_empty() {
            PollKind::Simple
        } else {
            PollKind::Empty
        }
    }

    /// Voters may only pick a single option
    pub fn single_vote(&self) -> bool {
        self.modifiers
            .iter()
            .any(|m| SINGLE_VOTE_KEYWORDS.contains(&m.as_str()))
    }

    /// Work out the reaction for every option, checking that the poll can
    /// actually be created.
    pub fn choices(&self, settings: &PollSettings) -> Result<Vec<PollChoice>> {
        match self.kind() {
            PollKind::Empty => return Ok(Vec::new()),
            PollKind::Simple => {
                return Ok(SIMPLE_POLL_EMOTES
                    .iter()
                    .map(|emote| PollChoice {
                        emote: emote.to_string(),
                        label: String::new(),
                    })
                    .collect());
            }
            PollKind::Options => {}
        }

        let count = self.options.len();
        let limit = settings.option_limit();
        if self.question.is_empty() {
            return Err(PollError::MissingQuestion { options: count }.into());
        } else if count == 1 {
            return Err(PollError::SingleOption.into());
        } else if count > limit {
            return Err(PollError::TooManyOptions { limit, count }.into());
        }

        let mut choices: Vec<PollChoice> = Vec::with_capacity(count);
        for (i, option) in self.options.iter().enumerate() {
            if option.is_empty() {
                continue;
            }

            let label = LabelParser::parse_label(option)?;
            let emote = match label.emote {
                Some(emote) => emote.as_str().to_owned(),
                None => OPTION_EMOTES[i].to_owned(),
            };

            if choices.iter().any(|choice| choice.emote == emote) {
                return Err(PollError::DuplicateEmote(emote).into());
            }
            choices.push(PollChoice {
                emote,
                label: label.text.to_owned(),
            });
        }

        Ok(choices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn parse_default(content: &str) -> PollRequest {
        parse(content, &PollSettings::default())
    }

    #[test]
    fn test_simple_poll() {
        let poll = parse_default("Do you like pancakes?");
        assert_eq!(poll.question, "Do you like pancakes?");
        assert!(poll.options.is_empty());
        assert_eq!(poll.kind(), PollKind::Simple);

        let choices = poll.choices(&PollSettings::default()).unwrap();
        let emotes: Vec<_> = choices.iter().map(|c| c.emote.as_str()).collect();
        assert_eq!(emotes, SIMPLE_POLL_EMOTES);
    }

    #[test]
    fn test_question_with_options() {
        let poll = parse_default(r#"Best Doki? "Monika" "Just Monika""#);
        assert_eq!(poll.question, "Best Doki?");
        assert_eq!(poll.options, vec!["Monika", "Just Monika"]);
        assert_eq!(poll.kind(), PollKind::Options);
        assert!(!poll.single_vote());
    }

    #[test]
    fn test_quoted_question_with_modifier() {
        let poll = parse_default(r#"single "ANIME'S REAL, RIGHT?" "Real" "Not real""#);
        assert_eq!(poll.modifiers, vec!["single"]);
        assert_eq!(poll.question, "ANIME'S REAL, RIGHT?");
        assert_eq!(poll.options, vec!["Real", "Not real"]);
        assert!(poll.single_vote());
    }

    #[test]
    fn test_multiple_is_not_single_vote() {
        let poll = parse_default(r#"multiple Toppings? "Ham" "Pineapple""#);
        assert_eq!(poll.modifiers, vec!["multiple"]);
        assert!(!poll.single_vote());
    }

    #[test]
    fn test_empty_poll() {
        let poll = parse_default("   ");
        assert_eq!(poll.kind(), PollKind::Empty);
        assert!(poll.choices(&PollSettings::default()).unwrap().is_empty());
    }

    #[test]
    fn test_smart_quoted_options() {
        let poll = parse_default("Lunch? “Pizza” “Tacos”");
        assert_eq!(poll.question, "Lunch?");
        assert_eq!(poll.options, vec!["Pizza", "Tacos"]);
    }

    #[test]
    fn test_two_options_without_question() {
        let poll = parse_default(r#""A" "B""#);
        assert_eq!(poll.question, "");
        let err = poll.choices(&PollSettings::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Poll(PollError::MissingQuestion { options: 2 })
        ));
    }

    #[test]
    fn test_single_option() {
        let poll = parse_default(r#"Q? "only""#);
        let err = poll.choices(&PollSettings::default()).unwrap_err();
        assert!(matches!(err, Error::Poll(PollError::SingleOption)));
    }

    #[test]
    fn test_too_many_options() {
        let settings = PollSettings {
            limit: 3,
            ..PollSettings::default()
        };
        let poll = parse(r#"Q? "a" "b" "c" "d""#, &settings);
        let err = poll.choices(&settings).unwrap_err();
        assert!(matches!(
            err,
            Error::Poll(PollError::TooManyOptions { limit: 3, count: 4 })
        ));
    }

    #[test]
    fn test_duplicate_emotes() {
        let poll = parse_default(r#"Lunch? "🍕 Pizza" "🍕 More pizza""#);
        let err = poll.choices(&PollSettings::default()).unwrap_err();
        assert_eq!(err.to_string(), "you can't have a duplicate emote (🍕) for a reaction");
    }

    #[test]
    fn test_unprintable_option_label() {
        let poll = parse_default("Q? \"ok\" \"bell\u{7}\"");
        assert_eq!(poll.options.len(), 2);
        let err = poll.choices(&PollSettings::default()).unwrap_err();
        assert!(matches!(err, Error::Label(_)));
    }

    #[test]
    fn test_choices_with_emotes() {
        let poll = parse_default(r#"Mood? "Happy" "<:pepe:1234> Sad" "🤔 Unsure""#);
        let choices = poll.choices(&PollSettings::default()).unwrap();
        assert_eq!(
            choices,
            vec![
                PollChoice {
                    emote: "🇦".into(),
                    label: "Happy".into()
                },
                PollChoice {
                    emote: "<:pepe:1234>".into(),
                    label: "Sad".into()
                },
                PollChoice {
                    emote: "🤔".into(),
                    label: "Unsure".into()
                },
            ]
        );
    }

    #[test]
    fn test_falls_back_to_question() {
        let content = (0..120)
            .map(|i| format!("f{i}"))
            .collect::<Vec<_>>()
            .join("\"");
        let poll = parse_default(&content);
        assert_eq!(poll.question, content);
        assert!(poll.options.is_empty());
    }

    #[test]
    fn test_settings_from_toml() {
        let settings = PollSettings::from_toml("limit = 50\nkeywords = [\"once\"]").unwrap();
        assert_eq!(settings.option_limit(), MAX_REACTIONS);
        assert_eq!(settings.keywords, vec!["once"]);

        let settings = PollSettings::from_toml("").unwrap();
        assert_eq!(settings, PollSettings::default());

        let err = PollSettings::from_toml("limit = \"ten\"").unwrap_err();
        assert!(matches!(err, Error::Settings(_)));
    }
}
