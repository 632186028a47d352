pub mod filename_template;
pub mod loader;
pub mod module_rule;
pub mod platform;
pub mod plugin;

use crate::{BundlerPlugin, CssPipeline, ModuleRule, Platform};

/// The bundler's own nested settings value. The composer reads `platform`
/// and returns a new configuration with amended `rules` and `plugins` and
/// the pipeline provider registered under `css_pipeline`.
#[derive(Debug, Default, Clone)]
pub struct BundlerConfig {
  pub platform: Option<Platform>,
  pub rules: Vec<ModuleRule>,
  pub plugins: Vec<BundlerPlugin>,
  pub css_pipeline: Option<CssPipeline>,
}
