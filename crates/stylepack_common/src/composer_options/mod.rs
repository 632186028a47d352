pub mod autoprefixer_options;
pub mod extract_options;
pub mod normalized_composer_options;
pub mod pipeline_steps;

use crate::{AutoprefixerOptions, ExtractOptions, PipelineSteps};

/// Declarative input of the composer. Every field is optional; defaults are
/// derived from the [`crate::BuildEnv`] during normalization.
#[derive(Debug, Default, Clone)]
pub struct ComposerOptions {
  // --- Pipeline
  pub steps: Option<PipelineSteps>,
  pub autoprefixer: Option<AutoprefixerOptions>,

  // --- Extraction
  pub extract: Option<ExtractOptions>,
  /// Alternative spelling of the extraction target; an explicit `extract`
  /// wins.
  pub filename: Option<String>,

  // --- Css modules
  pub modules: Option<bool>,
  pub local_ident_name: Option<String>,

  // --- Output
  pub minimize: Option<bool>,
}
