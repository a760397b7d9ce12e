use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;
use std::sync::Arc;
use tracing::trace;

pub struct Pipeline {
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Arc<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn process<'a>(
        &self,
        text: Cow<'a, str>,
        ctx: &Context,
    ) -> Result<Cow<'a, str>, StageError> {
        let mut current = text;

        for stage in &self.stages {
            if !stage.needs_apply(&current, ctx)? {
                trace!(stage = stage.name(), "skipped");
                continue;
            }
            current = stage.apply(current, ctx)?;
        }

        Ok(current)
    }
}
