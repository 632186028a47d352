/// Vendor-prefixing configuration: a browserslist-style target list, or
/// disabled to drop the prefixing step entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoprefixerOptions {
  Disabled,
  Browsers(Vec<String>),
}
