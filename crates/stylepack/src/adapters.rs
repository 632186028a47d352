use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use futures::future::BoxFuture;
use stylepack_common::{OnImport, RequireModule, ResolveId, SharedBuildContext};
use stylepack_error::{ComposeError, ComposeResult};

/// Dependency-notify adapter: registers every file the import step inlined
/// so the bundler's watch logic re-triggers when one changes.
pub fn on_import_adapter(ctx: &SharedBuildContext) -> OnImport {
  let ctx = Arc::clone(ctx);
  Arc::new(move |files: &[PathBuf]| {
    for file in files {
      ctx.add_dependency(file);
    }
  })
}

/// Path-resolution adapter: bridges the import step's `(specifier, base)`
/// lookups onto the build context, surfacing resolution failure as a build
/// error.
pub fn resolve_adapter(ctx: &SharedBuildContext) -> ResolveId {
  let ctx = Arc::clone(ctx);
  Arc::new(move |specifier: &str, base: &Path| {
    ctx.resolve(base, specifier).map_err(|source| ComposeError::Resolve {
      specifier: specifier.to_string(),
      base: base.to_path_buf(),
      source,
    })
  })
}

/// Module-evaluation adapter: loads a module's source through the host
/// (which registers the dependency itself), evaluates it in the host
/// sandbox, and unwraps the conventional default-export wrapper. Failures
/// are returned through the future, never thrown.
pub fn require_adapter(ctx: &SharedBuildContext) -> RequireModule {
  let ctx = Arc::clone(ctx);
  Arc::new(move |request: String| -> BoxFuture<'static, ComposeResult<serde_json::Value>> {
    let ctx = Arc::clone(&ctx);
    Box::pin(async move {
      let source = ctx
        .load_module(&request)
        .await
        .map_err(|source| ComposeError::LoadModule { request: request.clone(), source })?;

      let value = ctx
        .exec(&source, &request)
        .map_err(|source| ComposeError::ModuleEval { request: request.clone(), source })?;

      Ok(unwrap_default_export(value))
    })
  })
}

fn unwrap_default_export(value: serde_json::Value) -> serde_json::Value {
  match value {
    serde_json::Value::Object(mut object) => {
      let is_esm = object.get("__esModule").and_then(serde_json::Value::as_bool).unwrap_or(false);
      if is_esm {
        if let Some(default) = object.remove("default") {
          return default;
        }
      }
      serde_json::Value::Object(object)
    }
    other => other,
  }
}

#[cfg(test)]
use crate::testing::RecordingContext;

#[test]
fn test_on_import_registers_each_file_in_order() {
  let inner = Arc::new(RecordingContext::default());
  let ctx: SharedBuildContext = inner.clone();

  let on_import = on_import_adapter(&ctx);
  on_import(&[PathBuf::from("a.css"), PathBuf::from("b.css")]);

  let dependencies = inner.dependencies.lock().unwrap();
  assert_eq!(*dependencies, [PathBuf::from("a.css"), PathBuf::from("b.css")]);
}

#[test]
fn test_resolve_adapter_success_and_failure() {
  let inner = Arc::new(RecordingContext::default());
  let ctx: SharedBuildContext = inner.clone();

  let resolve = resolve_adapter(&ctx);
  let resolved = resolve("./base.css", Path::new("/srv/styles")).unwrap();
  assert_eq!(resolved, PathBuf::from("/srv/styles/./base.css"));

  let error = resolve("missing-package", Path::new("/srv/styles")).unwrap_err();
  assert!(matches!(error, ComposeError::Resolve { .. }));
  assert!(error.to_string().contains("missing-package"));
}

#[cfg(test)]
#[tokio::test]
async fn test_require_adapter_evaluates_module() {
  let inner = Arc::new(
    RecordingContext::default().with_module("./constants.js", r##"{ "accent": "#ff0066" }"##),
  );
  let ctx: SharedBuildContext = inner;

  let require = require_adapter(&ctx);
  let value = require("./constants.js".to_string()).await.unwrap();
  assert_eq!(value["accent"], "#ff0066");
}

#[cfg(test)]
#[tokio::test]
async fn test_require_adapter_unwraps_default_export() {
  let source = r##"{ "__esModule": true, "default": { "accent": "#ff0066" } }"##;
  let inner = Arc::new(RecordingContext::default().with_module("./constants.js", source));
  let ctx: SharedBuildContext = inner;

  let require = require_adapter(&ctx);
  let value = require("./constants.js".to_string()).await.unwrap();
  assert_eq!(value["accent"], "#ff0066");
}

#[cfg(test)]
#[tokio::test]
async fn test_require_adapter_surfaces_load_failure() {
  let ctx: SharedBuildContext = Arc::new(RecordingContext::default());

  let require = require_adapter(&ctx);
  let error = require("./nope.js".to_string()).await.unwrap_err();
  assert!(matches!(error, ComposeError::LoadModule { .. }));
}

#[cfg(test)]
#[tokio::test]
async fn test_require_adapter_surfaces_eval_failure() {
  let inner = Arc::new(
    RecordingContext::default().with_module("./constants.js", "{}").with_failing_exec(),
  );
  let ctx: SharedBuildContext = inner;

  let require = require_adapter(&ctx);
  let error = require("./constants.js".to_string()).await.unwrap_err();
  assert!(matches!(error, ComposeError::ModuleEval { .. }));
}
