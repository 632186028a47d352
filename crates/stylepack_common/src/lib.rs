mod build_context;
mod bundler_config;
mod composer_options;
mod css_pipeline;
mod env;

pub use crate::{
  build_context::{BuildContext, SharedBuildContext},
  bundler_config::{
    BundlerConfig,
    filename_template::FilenameTemplate,
    loader::{
      CSS_JS_LOADER, CSS_LOADER, CSS_LOCALS_LOADER, CSS_PIPELINE_LOADER, EXTRACT_DEFER_ID,
      Loader, STYLE_LOADER, render_chain,
    },
    module_rule::ModuleRule,
    platform::Platform,
    plugin::{BundlerPlugin, ExtractCssPlugin},
  },
  composer_options::{
    ComposerOptions, autoprefixer_options::AutoprefixerOptions, extract_options::ExtractOptions,
    normalized_composer_options::NormalizedComposerOptions,
    pipeline_steps::{PipelineStep, PipelineSteps, StepFactory},
  },
  css_pipeline::{
    AutoprefixerStep, ConstantsStep, CssPipeline, ImportStep, OnImport, RequireModule, ResolveId,
    ResolvedStep,
  },
  env::{BuildEnv, BuildMode},
};
