use log::debug;

use crate::ast::*;
use crate::error::{Error, Result};
use crate::tokenizer::tokenize;

/// Upper bound on peeling rounds before giving up on the input
pub const MAX_ITERATIONS: usize = 100;

/// Recover a leading run of free text in front of quoted arguments.
///
/// The content is tokenized with flexible quote sections. While any token is
/// unquoted (or left open), the first token is moved into the free text in
/// its original form and removed from the content, which is then tokenized
/// again. What remains are the fully quoted arguments.
///
/// Quote characters are never kept: a shown opening quote would glue the free
/// text onto the first quoted argument.
pub fn extract_free_text(content: &str) -> Result<FreeText> {
    let config = TokenizerConfig::flexible();

    let mut content = content.to_owned();
    let mut free_text = String::new();
    let mut last_quoted = false;
    let mut iterations = 0;

    let mut tokens = tokenize(&content, &config);
    while !tokens.iter().all(Token::is_closed_quote) {
        let first = tokens.remove(0);
        let fragment = first.source;

        // keep two quoted phrases from being glued together
        if last_quoted && first.wrapped_in_quotes {
            free_text.push(' ');
        }
        free_text.push_str(&fragment);
        content = content.replacen(&fragment, "", 1);
        last_quoted = first.wrapped_in_quotes;

        iterations += 1;
        if iterations > MAX_ITERATIONS {
            return Err(Error::ParseLoopExceeded(MAX_ITERATIONS));
        }
        debug!("round {iterations}: free text {free_text:?}, content left {content:?}");

        if tokens.is_empty() {
            break;
        }
        tokens = tokenize(&content, &config);
    }

    Ok(FreeText {
        free_text: free_text.trim().to_owned(),
        remainder: tokens,
    })
}

/// Strip known keywords off the front of `content`.
///
/// Each pass takes the first keyword, in the given order, that is followed by
/// a space or makes up the rest of the content. The keyword and at most one
/// space after it are removed. Passes repeat until nothing matches.
pub fn split_leading_option<S: AsRef<str>>(content: &str, known_options: &[S]) -> LeadingOptions {
    let mut matched = Vec::new();
    let mut rest = content;

    while let Some(option) = known_options
        .iter()
        .map(AsRef::as_ref)
        .find(|option| leads_with(rest, option))
    {
        matched.push(option.to_owned());
        rest = &rest[option.len()..];
        rest = rest.strip_prefix(' ').unwrap_or(rest);
    }

    LeadingOptions {
        matched,
        rest: rest.to_owned(),
    }
}

fn leads_with(content: &str, option: &str) -> bool {
    !option.is_empty()
        && content
            .strip_prefix(option)
            .is_some_and(|after| after.is_empty() || after.starts_with(' '))
}
