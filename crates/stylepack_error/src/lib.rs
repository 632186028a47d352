use std::path::PathBuf;

use thiserror::Error;

/// Failures the composer and its host adapters can surface.
///
/// `InvalidSteps` is raised synchronously while the composer validates its
/// options, before the bundler configuration is touched. The remaining
/// variants wrap errors surfaced by the host build context and are delivered
/// through the failing step's completion path.
#[derive(Debug, Error)]
pub enum ComposeError {
  #[error("invalid `steps` option: expected an array of pipeline steps or a factory, got {actual}")]
  InvalidSteps { actual: String },

  #[error("failed to resolve \"{specifier}\" from {base}")]
  Resolve {
    specifier: String,
    base: PathBuf,
    #[source]
    source: anyhow::Error,
  },

  #[error("failed to load module \"{request}\"")]
  LoadModule {
    request: String,
    #[source]
    source: anyhow::Error,
  },

  #[error("failed to evaluate module \"{request}\"")]
  ModuleEval {
    request: String,
    #[source]
    source: anyhow::Error,
  },
}

impl ComposeError {
  pub fn is_config_error(&self) -> bool {
    matches!(self, Self::InvalidSteps { .. })
  }
}

pub type ComposeResult<T> = Result<T, ComposeError>;
