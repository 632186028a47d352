use std::{
  collections::HashMap,
  path::{Path, PathBuf},
  sync::Mutex,
};

use futures::future::BoxFuture;
use stylepack_common::BuildContext;

/// Build context double: resolves relative specifiers under the base dir,
/// serves module sources from an in-memory map, and "evaluates" a module by
/// parsing its source as JSON.
#[derive(Default)]
pub struct RecordingContext {
  pub dependencies: Mutex<Vec<PathBuf>>,
  modules: HashMap<String, String>,
  fail_exec: bool,
}

impl RecordingContext {
  pub fn with_module(mut self, request: &str, source: &str) -> Self {
    self.modules.insert(request.to_string(), source.to_string());
    self
  }

  pub fn with_failing_exec(mut self) -> Self {
    self.fail_exec = true;
    self
  }
}

impl BuildContext for RecordingContext {
  fn add_dependency(&self, path: &Path) {
    self.dependencies.lock().unwrap().push(path.to_path_buf());
  }

  fn resolve(&self, base: &Path, specifier: &str) -> anyhow::Result<PathBuf> {
    if specifier.starts_with('.') {
      Ok(base.join(specifier))
    } else {
      Err(anyhow::anyhow!("module not found: {specifier}"))
    }
  }

  fn load_module(&self, request: &str) -> BoxFuture<'_, anyhow::Result<String>> {
    let result = self
      .modules
      .get(request)
      .cloned()
      .ok_or_else(|| anyhow::anyhow!("module not found: {request}"));
    Box::pin(async move { result })
  }

  fn exec(&self, source: &str, request: &str) -> anyhow::Result<serde_json::Value> {
    if self.fail_exec {
      anyhow::bail!("evaluation of {request} failed");
    }
    Ok(serde_json::from_str(source)?)
  }
}
