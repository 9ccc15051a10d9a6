pub mod ast;
pub mod command;
pub mod error;
pub mod parser;
pub mod poll;
pub mod processor;
pub mod tokenizer;

pub use ast::{FreeText, LeadingOptions, QuoteSections, Token, TokenizerConfig};
pub use error::{Error, PollError, Result};
pub use processor::{extract_free_text, split_leading_option};
pub use tokenizer::{args, simplify, tokenize};
