//! Flag-style configuration for one-off calls.
//!
//! [`SplitOptions`] maps each flag onto the stage that implements it, so
//! `split_sentence(&model, text, &options)` behaves exactly like a
//! [`WordSplitter`](crate::splitter::WordSplitter) built with the same flags.

use crate::{
    model::CostModel,
    pipeline::Pipeline,
    splitter::{SplitError, apply_token_stages, split_chunks},
    stage::{camel_case_split::CamelCaseSplit, capitalize_first_letter::CapitalizeFirstLetter},
};
use std::{borrow::Cow, fmt};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitOptions {
    /// Treat camel-case humps as separators before splitting.
    pub camel_case_splitter: bool,
    /// Upper-case the first character of every token.
    pub capitalize_first_letter: bool,
    /// Return one space-joined string instead of a token list.
    pub join_words: bool,
}

/// Result of [`split_sentence`]: tokens, or tokens joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Split {
    Tokens(Vec<String>),
    Joined(String),
}

impl Split {
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            Split::Tokens(tokens) => tokens,
            Split::Joined(joined) => joined
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    pub fn into_joined(self) -> String {
        match self {
            Split::Tokens(tokens) => tokens.join(" "),
            Split::Joined(joined) => joined,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Tokens(tokens) => f.write_str(&tokens.join(" ")),
            Split::Joined(joined) => f.write_str(joined),
        }
    }
}

impl SplitOptions {
    pub(crate) fn text_stages(&self) -> Pipeline {
        let mut stages = Pipeline::new();
        if self.camel_case_splitter {
            stages.push(CamelCaseSplit);
        }
        stages
    }

    pub(crate) fn token_stages(&self) -> Pipeline {
        let mut stages = Pipeline::new();
        if self.capitalize_first_letter {
            stages.push(CapitalizeFirstLetter);
        }
        stages
    }
}

pub fn split_sentence(
    model: &CostModel,
    text: &str,
    options: &SplitOptions,
) -> Result<Split, SplitError> {
    let text = options.text_stages().process(Cow::Borrowed(text))?;
    let tokens = apply_token_stages(&options.token_stages(), split_chunks(model, &text))?;
    Ok(if options.join_words {
        Split::Joined(tokens.join(" "))
    } else {
        Split::Tokens(tokens)
    })
}
