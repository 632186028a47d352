use std::{fmt::Display, str::FromStr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  /// The browser target, `web` in bundler configurations.
  #[default]
  Browser,
  Node,
  Neutral,
}

impl Platform {
  #[inline]
  pub fn is_browser(self) -> bool {
    matches!(self, Self::Browser)
  }
}

impl FromStr for Platform {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "browser" | "web" => Ok(Self::Browser),
      "node" => Ok(Self::Node),
      "neutral" => Ok(Self::Neutral),
      _ => Err(format!("Invalid platform \"{s}\".")),
    }
  }
}

impl Display for Platform {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Browser => write!(f, "browser"),
      Self::Node => write!(f, "node"),
      Self::Neutral => write!(f, "neutral"),
    }
  }
}

#[test]
fn test_platform_from_str() {
  assert_eq!("web".parse(), Ok(Platform::Browser));
  assert_eq!("browser".parse(), Ok(Platform::Browser));
  assert_eq!("node".parse(), Ok(Platform::Node));
  assert!("electron".parse::<Platform>().is_err());
}
