use std::fmt::Display;

/// Output filename carrying `[name]` and `[hash]` placeholders, substituted
/// by the extraction machinery when the file is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate(String);

impl FilenameTemplate {
  pub fn new(template: impl Into<String>) -> Self {
    Self(template.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  pub fn has_hash(&self) -> bool {
    self.0.contains("[hash")
  }
}

impl From<&str> for FilenameTemplate {
  fn from(value: &str) -> Self {
    Self(value.to_string())
  }
}

impl From<String> for FilenameTemplate {
  fn from(value: String) -> Self {
    Self(value)
  }
}

impl Display for FilenameTemplate {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

#[test]
fn test_has_hash() {
  assert!(FilenameTemplate::new("[name].[hash].css").has_hash());
  assert!(FilenameTemplate::new("[name].[hash:8].css").has_hash());
  assert!(!FilenameTemplate::new("[name].css").has_hash());
}
