use arcstr::ArcStr;
use itertools::Itertools;

/// Injects compiled styles into the document at runtime.
pub const STYLE_LOADER: &str = "style-loader";
/// Turns a style sheet into a module exporting its class-name mapping.
pub const CSS_LOADER: &str = "css-loader";
/// `css-loader` variant emitting only the class-name mapping, no styles.
pub const CSS_LOCALS_LOADER: &str = "css-loader/locals";
/// Runs the registered [`crate::CssPipeline`] over the style sheet.
pub const CSS_PIPELINE_LOADER: &str = "css-pipeline-loader";
/// Evaluates `.css.js` modules into plain CSS.
pub const CSS_JS_LOADER: &str = "css-js-loader";
/// Marker telling the extraction machinery to compile the chain's output
/// into a standalone file instead of injecting it.
pub const EXTRACT_DEFER_ID: &str = "stylepack:extract-defer";

/// One handler in a module rule's chain: a loader path plus its parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Loader {
  pub path: ArcStr,
  pub query: Option<serde_json::Value>,
}

impl Loader {
  pub fn new(path: impl Into<ArcStr>) -> Self {
    Self { path: path.into(), query: None }
  }

  pub fn with_query(path: impl Into<ArcStr>, query: serde_json::Value) -> Self {
    Self { path: path.into(), query: Some(query) }
  }

  /// Render the `path?{json}` form the loader runner consumes.
  pub fn pack(&self) -> String {
    match &self.query {
      Some(query) => format!("{}?{query}", self.path),
      None => self.path.to_string(),
    }
  }
}

/// Render a whole chain in the `a!b?{}!c` wire format.
pub fn render_chain(chain: &[Loader]) -> String {
  chain.iter().map(Loader::pack).join("!")
}

#[test]
fn test_pack() {
  let loader = Loader::with_query(CSS_LOADER, serde_json::json!({ "modules": true }));
  assert_eq!(loader.pack(), "css-loader?{\"modules\":true}");
  assert_eq!(Loader::new(STYLE_LOADER).pack(), "style-loader");
}

#[test]
fn test_render_chain() {
  let chain = [Loader::new(STYLE_LOADER), Loader::new(CSS_PIPELINE_LOADER)];
  assert_eq!(render_chain(&chain), "style-loader!css-pipeline-loader");
}
