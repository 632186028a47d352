use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Platform {
  Browser,
  Node,
  Neutral,
}

impl From<Platform> for stylepack::Platform {
  fn from(value: Platform) -> Self {
    match value {
      Platform::Browser => stylepack::Platform::Browser,
      Platform::Node => stylepack::Platform::Node,
      Platform::Neutral => stylepack::Platform::Neutral,
    }
  }
}
