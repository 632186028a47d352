/// Extraction target: a filename template, or disabled to keep styles
/// runtime-injected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOptions {
  Disabled,
  Filename(String),
}

impl From<&str> for ExtractOptions {
  fn from(value: &str) -> Self {
    Self::Filename(value.to_string())
  }
}
