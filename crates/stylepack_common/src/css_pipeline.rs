use std::{
  fmt,
  path::{Path, PathBuf},
  sync::Arc,
};

use futures::future::BoxFuture;
use stylepack_error::ComposeResult;

use crate::{PipelineStep, SharedBuildContext};

/// Dependency-notify adapter: called with the files an import inlined.
pub type OnImport = Arc<dyn Fn(&[PathBuf]) + Send + Sync>;

/// Path-resolution adapter: `(specifier, base dir)` to an on-disk path.
pub type ResolveId = Arc<dyn Fn(&str, &Path) -> ComposeResult<PathBuf> + Send + Sync>;

/// Module-evaluation adapter: loads and evaluates a module at build time.
pub type RequireModule =
  Arc<dyn Fn(String) -> BoxFuture<'static, ComposeResult<serde_json::Value>> + Send + Sync>;

/// Import-resolution step, bridged onto the build context.
#[derive(Clone)]
pub struct ImportStep {
  pub on_import: OnImport,
  pub resolve: ResolveId,
}

impl fmt::Debug for ImportStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ImportStep").finish_non_exhaustive()
  }
}

/// Build-time constant substitution step; `require` evaluates the referenced
/// module through the host.
#[derive(Clone)]
pub struct ConstantsStep {
  pub require: RequireModule,
}

impl fmt::Debug for ConstantsStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ConstantsStep").finish_non_exhaustive()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoprefixerStep {
  pub browsers: Vec<String>,
}

/// One entry of the provider's resolved step list, in pipeline order.
#[derive(Debug, Clone)]
pub enum ResolvedStep {
  Import(ImportStep),
  Constants(ConstantsStep),
  Plugin(PipelineStep),
  Autoprefixer(AutoprefixerStep),
}

impl ResolvedStep {
  pub fn name(&self) -> &str {
    match self {
      Self::Import(_) => "import",
      Self::Constants(_) => "constants",
      Self::Plugin(step) => &step.name,
      Self::Autoprefixer(_) => "autoprefixer",
    }
  }
}

/// The processing-step provider registered in the configuration and queried
/// lazily by the downstream pipeline loader, once a build context exists.
#[derive(Clone)]
pub struct CssPipeline {
  provider: Arc<dyn Fn(&SharedBuildContext) -> Vec<ResolvedStep> + Send + Sync>,
}

impl CssPipeline {
  pub fn new(
    provider: impl Fn(&SharedBuildContext) -> Vec<ResolvedStep> + Send + Sync + 'static,
  ) -> Self {
    Self { provider: Arc::new(provider) }
  }

  pub fn steps(&self, ctx: &SharedBuildContext) -> Vec<ResolvedStep> {
    (self.provider)(ctx)
  }
}

impl fmt::Debug for CssPipeline {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CssPipeline").finish_non_exhaustive()
  }
}
