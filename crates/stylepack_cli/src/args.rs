use clap::Args;

use crate::types::{build_mode::BuildMode, platform::Platform};

#[derive(Args)]
pub struct PipelineArgs {
  /// Named processing steps, appended between import resolution and vendor
  /// prefixing in the given order.
  #[clap(long, action = clap::ArgAction::Append)]
  pub step: Option<Vec<String>>,

  #[clap(long)]
  pub no_autoprefixer: bool,
}

#[derive(Args)]
pub struct ExtractArgs {
  /// Filename template the extracted styles are compiled into.
  #[clap(long)]
  pub extract: Option<String>,

  #[clap(long)]
  pub no_extract: bool,

  #[clap(long, short = 'm')]
  pub minimize: Option<bool>,
}

#[derive(Args)]
pub struct CssModulesArgs {
  #[clap(long)]
  pub modules: Option<bool>,

  #[clap(long)]
  pub local_ident_name: Option<String>,
}

#[derive(Args)]
pub struct EnvArgs {
  #[clap(long, short)]
  pub platform: Option<Platform>,

  #[clap(long)]
  pub mode: Option<BuildMode>,

  #[clap(long)]
  pub hot: bool,
}
