use regex::Regex;

use crate::Loader;

/// A module-processing rule: files matching `test` are passed through
/// `loaders`, last listed handler first.
#[derive(Debug, Clone)]
pub struct ModuleRule {
  pub name: String,
  pub test: Regex,
  pub loaders: Vec<Loader>,
}

impl ModuleRule {
  pub fn new(name: impl Into<String>, test: Regex, loaders: Vec<Loader>) -> Self {
    Self { name: name.into(), test, loaders }
  }

  pub fn matches(&self, path: &str) -> bool {
    self.test.is_match(path)
  }
}

impl PartialEq for ModuleRule {
  fn eq(&self, other: &Self) -> bool {
    self.name == other.name
      && self.test.as_str() == other.test.as_str()
      && self.loaders == other.loaders
  }
}
