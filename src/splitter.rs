use thiserror::Error;
use tracing::trace;

use crate::{
    chunk::chunks,
    model::{CostModel, SharedModel},
    pipeline::Pipeline,
    segmenter::split_words,
    stage::{
        Stage, StageError, camel_case_split::CamelCaseSplit,
        capitalize_first_letter::CapitalizeFirstLetter,
    },
};
use std::{borrow::Cow, sync::Arc};

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

/// Segment every separator-delimited chunk of `text` and concatenate the results.
pub fn split_chunks(model: &CostModel, text: &str) -> Vec<String> {
    chunks(text)
        .flat_map(|chunk| split_words(model, chunk))
        .collect()
}

/// Sentence-level splitter: text stages → chunking → segmentation → token stages.
///
/// Holds a [`SharedModel`]; segmentation takes the read lock, vocabulary
/// extension the write lock, so one splitter can serve many threads.
#[derive(Debug, Clone)]
pub struct WordSplitter {
    model: SharedModel,
    text_stages: Pipeline,
    token_stages: Pipeline,
}

impl WordSplitter {
    pub fn builder(model: SharedModel) -> WordSplitterBuilder {
        WordSplitterBuilder::new(model)
    }

    /// Plain splitter with no extra stages.
    pub fn new(model: CostModel) -> Self {
        Self::builder(model.into_shared()).build()
    }

    pub fn model(&self) -> &SharedModel {
        &self.model
    }

    pub fn split_sentence(&self, text: &str) -> Result<Vec<String>, SplitError> {
        let text = self.text_stages.process(Cow::Borrowed(text))?;
        let raw = {
            let model = self.model.read();
            split_chunks(&model, &text)
        };
        trace!(tokens = raw.len(), "split sentence");
        Ok(apply_token_stages(&self.token_stages, raw)?)
    }

    /// [`WordSplitter::split_sentence`] joined with single spaces.
    pub fn join_sentence(&self, text: &str) -> Result<String, SplitError> {
        Ok(self.split_sentence(text)?.join(" "))
    }

    /// Segment one separator-free token. No stages run here.
    pub fn split_words(&self, token: &str) -> Vec<String> {
        split_words(&self.model.read(), token)
    }

    pub fn add_word(&self, word: &str) {
        self.model.write().extend_one(word);
    }

    pub fn add_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.model.write().extend(words);
    }
}

pub(crate) fn apply_token_stages(
    stages: &Pipeline,
    tokens: Vec<String>,
) -> Result<Vec<String>, StageError> {
    if stages.is_empty() {
        return Ok(tokens);
    }
    tokens
        .into_iter()
        .map(|token| stages.process(Cow::Owned(token)).map(Cow::into_owned))
        .collect()
}

pub struct WordSplitterBuilder {
    model: SharedModel,
    text_stages: Pipeline,
    token_stages: Pipeline,
}

impl WordSplitterBuilder {
    pub fn new(model: SharedModel) -> Self {
        Self {
            model,
            text_stages: Pipeline::new(),
            token_stages: Pipeline::new(),
        }
    }

    /// Add a stage that runs on the whole text before separator splitting.
    pub fn text_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.text_stages.push(stage);
        self
    }

    /// Add a stage that runs on every emitted token.
    pub fn token_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.token_stages.push(stage);
        self
    }

    pub fn text_stage_arc(mut self, stage: Arc<dyn Stage>) -> Self {
        self.text_stages.push_arc(stage);
        self
    }

    pub fn token_stage_arc(mut self, stage: Arc<dyn Stage>) -> Self {
        self.token_stages.push_arc(stage);
        self
    }

    pub fn camel_case_splitter(self, enabled: bool) -> Self {
        if enabled {
            self.text_stage(CamelCaseSplit)
        } else {
            self
        }
    }

    pub fn capitalize_first_letter(self, enabled: bool) -> Self {
        if enabled {
            self.token_stage(CapitalizeFirstLetter)
        } else {
            self
        }
    }

    pub fn build(self) -> WordSplitter {
        WordSplitter {
            model: self.model,
            text_stages: self.text_stages,
            token_stages: self.token_stages,
        }
    }
}
