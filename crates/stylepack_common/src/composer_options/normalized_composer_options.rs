use crate::{FilenameTemplate, PipelineSteps, Platform};

/// Composer options after validation and environment-derived defaults.
/// `steps` is never the `Raw` variant past this point.
#[derive(Debug, Clone)]
pub struct NormalizedComposerOptions {
  pub steps: PipelineSteps,
  pub autoprefixer: Option<Vec<String>>,
  pub extract: Option<FilenameTemplate>,
  pub minimize: bool,
  pub modules: bool,
  pub local_ident_name: String,
}

impl NormalizedComposerOptions {
  /// External extraction happens only for browser builds with an extraction
  /// target configured.
  pub fn external_extraction(&self, platform: Platform) -> bool {
    self.extract.is_some() && platform.is_browser()
  }
}
