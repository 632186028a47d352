use stylepack_common::{
  AutoprefixerStep, ConstantsStep, CssPipeline, ImportStep, NormalizedComposerOptions,
  PipelineSteps, ResolvedStep, SharedBuildContext,
};

use crate::adapters::{on_import_adapter, require_adapter, resolve_adapter};

/// Build the processing-step provider registered in the configuration. The
/// provider runs once the downstream pipeline loader has a build context;
/// only then can the `Factory` form of the user steps be resolved and the
/// adapters be bridged onto the host.
pub fn css_pipeline(options: &NormalizedComposerOptions) -> CssPipeline {
  let steps = options.steps.clone();
  let autoprefixer = options.autoprefixer.clone();

  CssPipeline::new(move |ctx: &SharedBuildContext| {
    let user_steps = match &steps {
      PipelineSteps::List(list) => list.clone(),
      PipelineSteps::Factory(factory) => factory(ctx),
      // `Raw` never survives option normalization.
      PipelineSteps::Raw(_) => Vec::new(),
    };

    let mut resolved = Vec::with_capacity(user_steps.len() + 3);

    // Imports must be inlined before the user steps see the content.
    resolved.push(ResolvedStep::Import(ImportStep {
      on_import: on_import_adapter(ctx),
      resolve: resolve_adapter(ctx),
    }));
    resolved.push(ResolvedStep::Constants(ConstantsStep { require: require_adapter(ctx) }));

    resolved.extend(user_steps.into_iter().map(ResolvedStep::Plugin));

    // Vendor prefixing sees the fully expanded, user-transformed output.
    if let Some(browsers) = &autoprefixer {
      resolved.push(ResolvedStep::Autoprefixer(AutoprefixerStep { browsers: browsers.clone() }));
    }

    resolved
  })
}

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use stylepack_common::{
  AutoprefixerOptions, BuildEnv, ComposerOptions, PipelineStep,
};

#[cfg(test)]
use crate::{testing::RecordingContext, utils::normalize_options::normalize_options};

#[cfg(test)]
fn pipeline_for(raw: ComposerOptions) -> CssPipeline {
  css_pipeline(&normalize_options(raw, BuildEnv::default()).unwrap())
}

#[test]
fn test_user_steps_are_bracketed() {
  let raw = ComposerOptions {
    steps: Some(PipelineSteps::List(vec![
      PipelineStep::new("nesting"),
      PipelineStep::new("custom-media"),
    ])),
    ..Default::default()
  };
  let ctx: SharedBuildContext = Arc::new(RecordingContext::default());

  let steps = pipeline_for(raw).steps(&ctx);
  let names: Vec<&str> = steps.iter().map(ResolvedStep::name).collect();
  assert_eq!(names, ["import", "constants", "nesting", "custom-media", "autoprefixer"]);
}

#[test]
fn test_factory_steps_resolve_with_the_build_context() {
  let raw = ComposerOptions {
    steps: Some(PipelineSteps::Factory(Arc::new(|_ctx| vec![PipelineStep::new("derived")]))),
    ..Default::default()
  };
  let ctx: SharedBuildContext = Arc::new(RecordingContext::default());

  let steps = pipeline_for(raw).steps(&ctx);
  let names: Vec<&str> = steps.iter().map(ResolvedStep::name).collect();
  assert_eq!(names, ["import", "constants", "derived", "autoprefixer"]);
}

#[test]
fn test_autoprefixer_can_be_disabled() {
  let raw =
    ComposerOptions { autoprefixer: Some(AutoprefixerOptions::Disabled), ..Default::default() };
  let ctx: SharedBuildContext = Arc::new(RecordingContext::default());

  let steps = pipeline_for(raw).steps(&ctx);
  let names: Vec<&str> = steps.iter().map(ResolvedStep::name).collect();
  assert_eq!(names, ["import", "constants"]);
}

#[test]
fn test_autoprefixer_carries_the_target_list() {
  let raw = ComposerOptions {
    autoprefixer: Some(AutoprefixerOptions::Browsers(vec![">0.2%".to_string()])),
    ..Default::default()
  };
  let ctx: SharedBuildContext = Arc::new(RecordingContext::default());

  let steps = pipeline_for(raw).steps(&ctx);
  match steps.last().unwrap() {
    ResolvedStep::Autoprefixer(AutoprefixerStep { browsers }) => {
      assert_eq!(browsers, &[">0.2%".to_string()]);
    }
    other => panic!("expected autoprefixer last, got {other:?}"),
  }
}
