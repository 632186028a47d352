use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::SharedBuildContext;

/// A discrete style-sheet transformation unit, referenced by name with
/// per-step parameters the downstream pipeline loader interprets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineStep {
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub options: Option<serde_json::Value>,
}

impl PipelineStep {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), options: None }
  }

  pub fn with_options(name: impl Into<String>, options: serde_json::Value) -> Self {
    Self { name: name.into(), options: Some(options) }
  }
}

impl From<&str> for PipelineStep {
  fn from(value: &str) -> Self {
    Self::new(value)
  }
}

pub type StepFactory = Arc<dyn Fn(&SharedBuildContext) -> Vec<PipelineStep> + Send + Sync>;

/// The `steps` option: an ordered list, a factory of the build context, or a
/// raw JSON value as it arrives from a configuration file. `Raw` is validated
/// during option normalization; `Factory` is resolved only when the pipeline
/// provider runs, because the build context exists only then.
#[derive(Clone)]
pub enum PipelineSteps {
  List(Vec<PipelineStep>),
  Factory(StepFactory),
  Raw(serde_json::Value),
}

impl From<Vec<PipelineStep>> for PipelineSteps {
  fn from(value: Vec<PipelineStep>) -> Self {
    Self::List(value)
  }
}

impl fmt::Debug for PipelineSteps {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::List(steps) => f.debug_tuple("List").field(steps).finish(),
      Self::Factory(_) => f.write_str("Factory(..)"),
      Self::Raw(value) => f.debug_tuple("Raw").field(value).finish(),
    }
  }
}
