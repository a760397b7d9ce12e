//! Core transformation stage abstraction.
//!
//! A stage is one pass over the whole text: translation or transliteration.
//! Stages are checked with `needs_apply` first so a pass disabled by the
//! call settings, or one with nothing to do, costs no allocation.

pub mod translate;
pub mod transliterate;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("transformation failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single transformation step.
pub trait Stage: Send + Sync {
    /// Human-readable name, used for tracing and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct on its own,
    /// independent of `needs_apply`.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
