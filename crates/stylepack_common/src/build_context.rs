use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use futures::future::BoxFuture;

/// Host-supplied port giving the pipeline steps access to dependency
/// tracking, module resolution and module evaluation during a build.
///
/// The composer never constructs one; the downstream pipeline loader hands
/// one in when it invokes the registered [`crate::CssPipeline`]. Resolution
/// is synchronous and module loading is asynchronous, which is the one
/// contract this crate supports.
pub trait BuildContext: Send + Sync {
  /// Register `path` as a build dependency so the watcher re-triggers when
  /// it changes.
  fn add_dependency(&self, path: &Path);

  /// Resolve `specifier` relative to `base` to an on-disk module path.
  fn resolve(&self, base: &Path, specifier: &str) -> anyhow::Result<PathBuf>;

  /// Load the source of `request`. The host registers the dependency itself.
  fn load_module(&self, request: &str) -> BoxFuture<'_, anyhow::Result<String>>;

  /// Evaluate previously loaded `source` in the host sandbox and return the
  /// module's value.
  fn exec(&self, source: &str, request: &str) -> anyhow::Result<serde_json::Value>;
}

pub type SharedBuildContext = Arc<dyn BuildContext>;
