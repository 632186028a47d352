use std::{fmt::Display, str::FromStr};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
  #[default]
  Development,
  Production,
}

impl BuildMode {
  #[inline]
  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

impl FromStr for BuildMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "development" => Ok(Self::Development),
      "production" => Ok(Self::Production),
      _ => Err(format!("Invalid build mode \"{s}\".")),
    }
  }
}

impl Display for BuildMode {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Development => write!(f, "development"),
      Self::Production => write!(f, "production"),
    }
  }
}

/// Build classification the composer derives its option defaults from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildEnv {
  pub mode: BuildMode,
  pub hot: bool,
}

impl BuildEnv {
  pub fn new(mode: BuildMode, hot: bool) -> Self {
    Self { mode, hot }
  }

  /// Classify the build from `NODE_ENV` and `HOT`. Only outermost entry
  /// points read the process environment; everything below takes an explicit
  /// [`BuildEnv`].
  pub fn from_process_env() -> Self {
    let mode = std::env::var("NODE_ENV").ok().and_then(|v| v.parse().ok()).unwrap_or_default();
    let hot = std::env::var("HOT").is_ok_and(|v| v == "1" || v == "true");
    Self { mode, hot }
  }
}

#[test]
fn test_build_mode_from_str() {
  assert_eq!("production".parse(), Ok(BuildMode::Production));
  assert_eq!("development".parse(), Ok(BuildMode::Development));
  assert!("staging".parse::<BuildMode>().is_err());
}
