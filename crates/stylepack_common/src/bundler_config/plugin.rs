use crate::FilenameTemplate;

/// Compiles the styles a chain defers via [`crate::EXTRACT_DEFER_ID`] into a
/// standalone output file instead of runtime-injecting them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractCssPlugin {
  pub filename: FilenameTemplate,
}

impl ExtractCssPlugin {
  pub fn new(filename: FilenameTemplate) -> Self {
    Self { filename }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundlerPlugin {
  ExtractCss(ExtractCssPlugin),
  /// Opaque descriptor for plugins this crate does not configure.
  Custom(String),
}

impl BundlerPlugin {
  pub fn name(&self) -> &str {
    match self {
      Self::ExtractCss(_) => "extract-css",
      Self::Custom(name) => name,
    }
  }

  #[inline]
  pub fn is_extract_css(&self) -> bool {
    matches!(self, Self::ExtractCss(_))
  }
}
