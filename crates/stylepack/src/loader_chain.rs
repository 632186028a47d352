use serde_json::json;
use stylepack_common::{
  CSS_LOADER, CSS_LOCALS_LOADER, CSS_PIPELINE_LOADER, EXTRACT_DEFER_ID, Loader,
  NormalizedComposerOptions, Platform, STYLE_LOADER,
};

/// Assemble the handler chain for the style rule. Three shapes exist:
/// browser builds inject styles at runtime, extraction builds defer the
/// injection to a separately compiled file, and non-browser builds only need
/// the class-name mapping. Every shape ends with the pipeline loader, which
/// queries the registered processing-step provider.
pub fn build_loader_chain(
  options: &NormalizedComposerOptions,
  platform: Platform,
  external: bool,
) -> Vec<Loader> {
  let query = css_loader_query(options);

  if platform.is_browser() {
    let mut chain = if external {
      vec![Loader::new(EXTRACT_DEFER_ID), Loader::new(STYLE_LOADER)]
    } else {
      vec![Loader::new(STYLE_LOADER)]
    };
    chain.push(Loader::with_query(CSS_LOADER, query));
    chain.push(Loader::new(CSS_PIPELINE_LOADER));
    return chain;
  }

  vec![Loader::with_query(CSS_LOCALS_LOADER, query), Loader::new(CSS_PIPELINE_LOADER)]
}

fn css_loader_query(options: &NormalizedComposerOptions) -> serde_json::Value {
  json!({
    "importLoaders": 1,
    "sourceMap": true,
    "localIdentName": options.local_ident_name,
    "minimize": options.minimize,
    "modules": options.modules,
  })
}

#[cfg(test)]
use stylepack_common::{BuildEnv, BuildMode, ComposerOptions};

#[cfg(test)]
fn production_options() -> NormalizedComposerOptions {
  crate::utils::normalize_options::normalize_options(
    ComposerOptions::default(),
    BuildEnv::new(BuildMode::Production, false),
  )
  .unwrap()
}

#[test]
fn test_browser_external_chain() {
  let chain = build_loader_chain(&production_options(), Platform::Browser, true);
  let paths: Vec<&str> = chain.iter().map(|loader| loader.path.as_str()).collect();
  assert_eq!(paths, [EXTRACT_DEFER_ID, STYLE_LOADER, CSS_LOADER, CSS_PIPELINE_LOADER]);
}

#[test]
fn test_browser_inline_chain() {
  let chain = build_loader_chain(&production_options(), Platform::Browser, false);
  let paths: Vec<&str> = chain.iter().map(|loader| loader.path.as_str()).collect();
  assert_eq!(paths, [STYLE_LOADER, CSS_LOADER, CSS_PIPELINE_LOADER]);
}

#[test]
fn test_non_browser_chain_has_no_injection() {
  for platform in [Platform::Node, Platform::Neutral] {
    // Extraction flags are irrelevant off the browser target.
    for external in [false, true] {
      let chain = build_loader_chain(&production_options(), platform, external);
      let paths: Vec<&str> = chain.iter().map(|loader| loader.path.as_str()).collect();
      assert_eq!(paths, [CSS_LOCALS_LOADER, CSS_PIPELINE_LOADER]);
    }
  }
}

#[test]
fn test_css_loader_query_carries_module_settings() {
  let chain = build_loader_chain(&production_options(), Platform::Browser, false);
  let query = chain[1].query.as_ref().unwrap();

  assert_eq!(query["importLoaders"], 1);
  assert_eq!(query["sourceMap"], true);
  assert_eq!(query["localIdentName"], "[hash:base64]");
  assert_eq!(query["minimize"], true);
  assert_eq!(query["modules"], true);
}
