use std::sync::LazyLock;

use regex::Regex;

use stylepack_common::{
  BuildEnv, BundlerConfig, BundlerPlugin, CSS_JS_LOADER, ComposerOptions, ExtractCssPlugin,
  Loader, ModuleRule, NormalizedComposerOptions, Platform,
};
use stylepack_error::ComposeResult;

use crate::{
  loader_chain::build_loader_chain, pipeline::css_pipeline,
  utils::normalize_options::normalize_options,
};

static IS_STYLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.(scss|sass|css)$").unwrap());
static IS_CSS_JS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.css\.js$").unwrap());

/// Wires a CSS-preprocessing pipeline into a bundler configuration: a style
/// rule with the assembled loader chain, the lazily-consumed processing-step
/// provider, and the extraction plugin when a browser build extracts.
#[derive(Debug)]
pub struct Composer {
  options: NormalizedComposerOptions,
}

impl Composer {
  /// Build a composer, classifying the build from the process environment.
  pub fn new(options: ComposerOptions) -> ComposeResult<Self> {
    Self::with_env(options, BuildEnv::from_process_env())
  }

  pub fn with_env(options: ComposerOptions, env: BuildEnv) -> ComposeResult<Self> {
    Ok(Self { options: normalize_options(options, env)? })
  }

  /// Transform `config`. Pure: identical inputs produce structurally
  /// identical output. Implemented as ordered builder steps, each consuming
  /// and returning the configuration value.
  pub fn apply(&self, config: BundlerConfig) -> BundlerConfig {
    let platform = config.platform.unwrap_or_default();
    let external = self.options.external_extraction(platform);

    let config = self.append_style_rules(config, platform, external);
    let config = self.register_pipeline(config);
    self.append_extract_plugin(config, external)
  }

  fn append_style_rules(
    &self,
    mut config: BundlerConfig,
    platform: Platform,
    external: bool,
  ) -> BundlerConfig {
    let chain = build_loader_chain(&self.options, platform, external);

    config.rules.push(ModuleRule::new("stylepack", IS_STYLE.clone(), chain.clone()));

    // Embedded styles: the trailing handler runs first, feeding evaluated
    // `.css.js` modules into the pipeline.
    let mut css_js_chain = chain;
    css_js_chain.push(Loader::new(CSS_JS_LOADER));
    config.rules.push(ModuleRule::new("css-js", IS_CSS_JS.clone(), css_js_chain));

    config
  }

  fn register_pipeline(&self, mut config: BundlerConfig) -> BundlerConfig {
    config.css_pipeline = Some(css_pipeline(&self.options));
    config
  }

  fn append_extract_plugin(&self, mut config: BundlerConfig, external: bool) -> BundlerConfig {
    if !external {
      return config;
    }
    if let Some(filename) = &self.options.extract {
      config.plugins.push(BundlerPlugin::ExtractCss(ExtractCssPlugin::new(filename.clone())));
    }
    config
  }
}

/// The functional form of the contract: `compose(options)` yields the
/// transformation the host build pipeline invokes once per configuration.
pub fn compose(
  options: ComposerOptions,
) -> ComposeResult<impl Fn(BundlerConfig) -> BundlerConfig> {
  let composer = Composer::new(options)?;
  Ok(move |config| composer.apply(config))
}

#[cfg(test)]
use stylepack_common::{
  BuildMode, CSS_PIPELINE_LOADER, EXTRACT_DEFER_ID, FilenameTemplate, PipelineSteps,
  STYLE_LOADER,
};

#[cfg(test)]
fn browser_config() -> BundlerConfig {
  BundlerConfig { platform: Some(Platform::Browser), ..Default::default() }
}

#[cfg(test)]
fn composer(options: ComposerOptions, mode: BuildMode, hot: bool) -> Composer {
  Composer::with_env(options, BuildEnv::new(mode, hot)).unwrap()
}

#[test]
fn test_production_browser_appends_one_extract_plugin() {
  let config =
    composer(ComposerOptions::default(), BuildMode::Production, false).apply(browser_config());

  let expected = BundlerPlugin::ExtractCss(ExtractCssPlugin::new(FilenameTemplate::new(
    "[name].[hash].css",
  )));
  assert_eq!(config.plugins, [expected]);
  assert_eq!(config.rules[0].loaders[0].path, EXTRACT_DEFER_ID);
}

#[test]
fn test_hot_development_keeps_styles_inline() {
  let config =
    composer(ComposerOptions::default(), BuildMode::Development, true).apply(browser_config());

  assert!(config.plugins.is_empty());
  assert_eq!(config.rules[0].loaders[0].path, STYLE_LOADER);
}

#[test]
fn test_non_browser_platform_never_injects_styles() {
  for (mode, hot) in [(BuildMode::Production, false), (BuildMode::Development, true)] {
    let input = BundlerConfig { platform: Some(Platform::Node), ..Default::default() };
    let config = composer(ComposerOptions::default(), mode, hot).apply(input);

    assert!(config.plugins.is_empty());
    for rule in &config.rules {
      assert!(rule.loaders.iter().all(|loader| loader.path != STYLE_LOADER));
    }
  }
}

#[test]
fn test_missing_platform_defaults_to_browser() {
  let config =
    composer(ComposerOptions::default(), BuildMode::Production, false)
      .apply(BundlerConfig::default());
  assert_eq!(config.plugins.len(), 1);
}

#[test]
fn test_filename_option_scenario() {
  let options =
    ComposerOptions { filename: Some("out.css".to_string()), ..Default::default() };
  let config = composer(options, BuildMode::Production, false).apply(browser_config());

  let style_rule = &config.rules[0];
  assert!(style_rule.matches("app.scss"));
  assert!(style_rule.matches("app.sass"));
  assert!(style_rule.matches("app.css"));
  assert!(!style_rule.matches("app.css.js"));
  assert_eq!(style_rule.loaders.first().unwrap().path, EXTRACT_DEFER_ID);
  assert_eq!(style_rule.loaders.last().unwrap().path, CSS_PIPELINE_LOADER);

  let expected =
    BundlerPlugin::ExtractCss(ExtractCssPlugin::new(FilenameTemplate::new("out.css")));
  assert_eq!(config.plugins, [expected]);
}

#[test]
fn test_css_js_rule_prepends_embedded_style_handler() {
  let config =
    composer(ComposerOptions::default(), BuildMode::Production, false).apply(browser_config());

  let css_js_rule = &config.rules[1];
  assert!(css_js_rule.matches("theme.css.js"));
  assert!(!css_js_rule.matches("theme.css"));
  // Last listed handler runs first: `.css.js` evaluation precedes the
  // pipeline in composition order.
  assert_eq!(css_js_rule.loaders.last().unwrap().path, CSS_JS_LOADER);
  let len = css_js_rule.loaders.len();
  assert_eq!(css_js_rule.loaders[len - 2].path, CSS_PIPELINE_LOADER);
}

#[test]
fn test_existing_rules_and_plugins_are_preserved() {
  let input = BundlerConfig {
    platform: Some(Platform::Browser),
    rules: vec![ModuleRule::new("js", Regex::new(r"\.js$").unwrap(), Vec::new())],
    plugins: vec![BundlerPlugin::Custom("define".to_string())],
    css_pipeline: None,
  };
  let config = composer(ComposerOptions::default(), BuildMode::Production, false).apply(input);

  assert_eq!(config.rules[0].name, "js");
  assert_eq!(config.rules.len(), 3);
  assert_eq!(config.plugins[0], BundlerPlugin::Custom("define".to_string()));
  assert_eq!(config.plugins.len(), 2);
}

#[test]
fn test_apply_is_pure() {
  let composer = composer(ComposerOptions::default(), BuildMode::Production, false);
  let first = composer.apply(browser_config());
  let second = composer.apply(browser_config());

  assert_eq!(first.rules, second.rules);
  assert_eq!(first.plugins, second.plugins);
  assert!(first.css_pipeline.is_some() && second.css_pipeline.is_some());
}

#[test]
fn test_invalid_steps_fail_before_the_config_is_touched() {
  let options = ComposerOptions {
    steps: Some(PipelineSteps::Raw(serde_json::json!({ "plugins": [] }))),
    ..Default::default()
  };
  let error = Composer::with_env(options, BuildEnv::default()).unwrap_err();
  assert!(error.is_config_error());
}

#[test]
fn test_compose_returns_the_partial_application() {
  let options = ComposerOptions { filename: Some("out.css".to_string()), ..Default::default() };
  // `compose` reads the process environment; only the shape is asserted.
  let partial = compose(options).unwrap();
  let config = partial(browser_config());
  assert_eq!(config.rules.len(), 2);
  assert!(config.css_pipeline.is_some());
}
