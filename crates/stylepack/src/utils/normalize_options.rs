use stylepack_common::{
  AutoprefixerOptions, BuildEnv, ComposerOptions, ExtractOptions, FilenameTemplate,
  NormalizedComposerOptions, PipelineStep, PipelineSteps,
};
use stylepack_error::{ComposeError, ComposeResult};

/// Validate raw options and fill environment-derived defaults. The only
/// failure is a malformed `steps` value, surfaced before any configuration
/// is touched.
pub fn normalize_options(
  mut raw: ComposerOptions,
  env: BuildEnv,
) -> ComposeResult<NormalizedComposerOptions> {
  let steps = match raw.steps.take() {
    None => PipelineSteps::List(Vec::new()),
    Some(PipelineSteps::Raw(value)) => validate_raw_steps(value)?,
    Some(steps) => steps,
  };

  let extract = match raw.extract {
    Some(ExtractOptions::Disabled) => None,
    Some(ExtractOptions::Filename(filename)) => Some(FilenameTemplate::new(filename)),
    None => match raw.filename {
      Some(filename) => Some(FilenameTemplate::new(filename)),
      None => default_extract(env),
    },
  };

  let autoprefixer = match raw.autoprefixer {
    Some(AutoprefixerOptions::Disabled) => None,
    Some(AutoprefixerOptions::Browsers(browsers)) => Some(browsers),
    None => Some(vec!["last 2 versions".to_string()]),
  };

  Ok(NormalizedComposerOptions {
    steps,
    autoprefixer,
    extract,
    minimize: raw.minimize.unwrap_or(env.mode.is_production()),
    modules: raw.modules.unwrap_or(true),
    local_ident_name: raw.local_ident_name.unwrap_or_else(|| default_local_ident_name(env)),
  })
}

fn default_extract(env: BuildEnv) -> Option<FilenameTemplate> {
  if env.mode.is_production() {
    Some(FilenameTemplate::new("[name].[hash].css"))
  } else if env.hot {
    // Hot reload needs styles inlined so updates can be swapped in place.
    None
  } else {
    Some(FilenameTemplate::new("[name].css"))
  }
}

fn default_local_ident_name(env: BuildEnv) -> String {
  if env.mode.is_production() {
    "[hash:base64]".to_string()
  } else {
    "[path]--[local]--[hash:base64:5]".to_string()
  }
}

fn validate_raw_steps(value: serde_json::Value) -> ComposeResult<PipelineSteps> {
  if !value.is_array() {
    return Err(ComposeError::InvalidSteps { actual: json_type_name(&value).to_string() });
  }

  let steps: Vec<PipelineStep> = serde_json::from_value(value).map_err(|_| {
    ComposeError::InvalidSteps { actual: "an array with malformed entries".to_string() }
  })?;

  Ok(PipelineSteps::List(steps))
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
  match value {
    serde_json::Value::Null => "null",
    serde_json::Value::Bool(_) => "a boolean",
    serde_json::Value::Number(_) => "a number",
    serde_json::Value::String(_) => "a string",
    serde_json::Value::Array(_) => "an array",
    serde_json::Value::Object(_) => "an object",
  }
}

#[cfg(test)]
use stylepack_common::BuildMode;

#[test]
fn test_production_defaults() {
  let env = BuildEnv::new(BuildMode::Production, false);
  let options = normalize_options(ComposerOptions::default(), env).unwrap();

  assert_eq!(options.extract, Some(FilenameTemplate::new("[name].[hash].css")));
  assert!(options.minimize);
  assert!(options.modules);
  assert_eq!(options.local_ident_name, "[hash:base64]");
  assert_eq!(options.autoprefixer.as_deref(), Some(&["last 2 versions".to_string()][..]));
}

#[test]
fn test_development_defaults() {
  let env = BuildEnv::new(BuildMode::Development, false);
  let options = normalize_options(ComposerOptions::default(), env).unwrap();

  assert_eq!(options.extract, Some(FilenameTemplate::new("[name].css")));
  assert!(!options.minimize);
  assert_eq!(options.local_ident_name, "[path]--[local]--[hash:base64:5]");
}

#[test]
fn test_hot_development_disables_extraction() {
  let env = BuildEnv::new(BuildMode::Development, true);
  let options = normalize_options(ComposerOptions::default(), env).unwrap();
  assert_eq!(options.extract, None);
}

#[test]
fn test_explicit_extract_beats_filename_and_env() {
  let env = BuildEnv::new(BuildMode::Development, true);
  let raw = ComposerOptions {
    extract: Some(ExtractOptions::Filename("styles.css".to_string())),
    filename: Some("ignored.css".to_string()),
    ..Default::default()
  };
  let options = normalize_options(raw, env).unwrap();
  assert_eq!(options.extract, Some(FilenameTemplate::new("styles.css")));
}

#[test]
fn test_raw_steps_array_is_accepted() {
  let raw = ComposerOptions {
    steps: Some(PipelineSteps::Raw(serde_json::json!([
      { "name": "nesting" },
      { "name": "custom-media", "options": { "preserve": true } },
    ]))),
    ..Default::default()
  };
  let options = normalize_options(raw, BuildEnv::default()).unwrap();

  match options.steps {
    PipelineSteps::List(steps) => {
      assert_eq!(steps.len(), 2);
      assert_eq!(steps[0], PipelineStep::new("nesting"));
      assert_eq!(steps[1].name, "custom-media");
    }
    _ => panic!("expected a validated list"),
  }
}

#[test]
fn test_raw_steps_non_array_is_rejected() {
  let raw = ComposerOptions {
    steps: Some(PipelineSteps::Raw(serde_json::json!("nesting"))),
    ..Default::default()
  };
  let error = normalize_options(raw, BuildEnv::default()).unwrap_err();

  assert!(error.is_config_error());
  assert!(error.to_string().contains("a string"));
}
