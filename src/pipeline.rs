// src/pipeline.rs
use crate::stage::{Stage, StageError};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::sync::Arc;

/// Ordered chain of stages, run first to last.
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: SmallVec<[Arc<dyn Stage>; 4]>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push<T: Stage + 'static>(&mut self, stage: T) {
        self.stages.push(Arc::new(stage));
    }

    pub fn push_arc(&mut self, stage: Arc<dyn Stage>) {
        self.stages.push(stage);
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }

    pub fn process<'a>(&self, text: Cow<'a, str>) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            // Fast path: skip if no mutation needed
            if !stage.needs_apply(&current)? {
                continue;
            }
            current = stage.apply(current)?;
        }

        Ok(current)
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}
