use std::mem;

use log::trace;

use crate::ast::{Token, TokenizerConfig};

/// Characters that open or close a quoted section
const QUOTE_CHARACTERS: [char; 3] = ['"', '“', '”'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Quoted,
    Unquoted,
}

/// Split `content` into arguments, keeping track of how each one was quoted.
///
/// Backticks toggle a codeblock, inside of which quote characters are plain
/// text. A quote preceded by `\` never opens or closes a section.
///
/// In strict mode the result is empty when anything sits outside of a closed
/// quoted section.
pub fn tokenize(content: &str, config: &TokenizerConfig) -> Vec<Token> {
    let chars: Vec<char> = content.chars().collect();
    let strict = config.is_strict();

    let mut tokens = Vec::new();
    let mut state = State::Unquoted;
    let mut has_code_block = false;

    let mut arg = String::new();
    let mut untrimmed = String::new();
    // raw input of the current token, delimiting quotes included
    let mut source = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        let is_quote = QUOTE_CHARACTERS.contains(&ch);
        let is_space = ch == ' ';
        let is_escaped = i > 0 && chars[i - 1] == '\\';
        let is_end = i + 1 == chars.len();

        if ch == '`' {
            has_code_block = !has_code_block;
        }

        let mut state_changed = false;
        let mut unquote_later = false;
        let mut just_started_quote = false;

        if is_quote && !(is_escaped || has_code_block) {
            state_changed = true;
            match state {
                // the closing quote is still processed as part of the quoted section
                State::Quoted => unquote_later = true,
                State::Unquoted => {
                    state = State::Quoted;
                    just_started_quote = true;
                }
            }
        }

        match state {
            State::Unquoted => {
                // spaces are kept when quote sections decide the boundaries
                if !is_space || config.quote_sections.is_some() || has_code_block {
                    if strict {
                        if !is_space && !is_quote {
                            trace!("strict parse rejected at {i}: {ch:?} outside of quotes");
                            return Vec::new();
                        }
                    } else {
                        arg.push(ch);
                        untrimmed.push(ch);
                        source.push(ch);
                    }
                } else if !arg.is_empty() {
                    tokens.push(Token::unquoted(arg.trim(), mem::take(&mut untrimmed)));
                    arg.clear();
                    source.clear();
                }
            }
            State::Quoted if just_started_quote => {
                if ch == '"' && config.show_quote_characters {
                    arg.push(ch);
                    untrimmed.push(ch);
                } else {
                    // carryover from the unquoted section before this quote
                    if !arg.trim().is_empty() {
                        tokens.push(Token::unquoted(arg.trim(), mem::take(&mut untrimmed)));
                    }
                    arg.clear();
                    untrimmed.clear();
                    source.clear();
                }
                source.push(ch);
            }
            State::Quoted => {
                if config.show_quote_characters || !is_quote || is_escaped || has_code_block {
                    arg.push(ch);
                    untrimmed.push(ch);
                }
                source.push(ch);
            }
        }

        if (state_changed && !just_started_quote) || (is_end && !arg.is_empty()) {
            let non_closed_quote_section = is_end && !arg.is_empty() && strict && !is_quote;
            if non_closed_quote_section {
                trace!("strict parse rejected: input ended inside {arg:?}");
                return Vec::new();
            }

            let wrapped_in_quotes = state == State::Quoted;
            let argument = if wrapped_in_quotes {
                mem::take(&mut arg)
            } else {
                arg.trim().to_owned()
            };

            trace!("token {argument:?} (quoted: {wrapped_in_quotes})");
            tokens.push(Token {
                argument,
                untrimmed_argument: mem::take(&mut untrimmed),
                wrapped_in_quotes,
                non_closed_quote_section,
                source: mem::take(&mut source),
            });
            arg.clear();
        }

        if unquote_later {
            state = State::Unquoted;
        }
    }

    tokens
}

/// Drop the quoting metadata, keeping only the arguments
pub fn simplify(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|token| token.argument.clone()).collect()
}

/// Tokenize and simplify in one go
pub fn args(content: &str, config: &TokenizerConfig) -> Vec<String> {
    simplify(&tokenize(content, config))
}
