use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum BuildMode {
  Development,
  Production,
}

impl From<BuildMode> for stylepack::BuildMode {
  fn from(value: BuildMode) -> Self {
    match value {
      BuildMode::Development => stylepack::BuildMode::Development,
      BuildMode::Production => stylepack::BuildMode::Production,
    }
  }
}
