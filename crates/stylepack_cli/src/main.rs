mod args;
mod types;

use ansi_term::Colour;
use args::{CssModulesArgs, EnvArgs, ExtractArgs, PipelineArgs};
use clap::Parser;

use stylepack::{
  AutoprefixerOptions, BuildEnv, BundlerConfig, BundlerPlugin, Composer, ComposerOptions,
  ExtractOptions, PipelineStep, PipelineSteps, render_chain,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  pipeline: PipelineArgs,

  #[clap(flatten)]
  extract: ExtractArgs,

  #[clap(flatten)]
  modules: CssModulesArgs,

  #[clap(flatten)]
  env: EnvArgs,
}

fn print_config(config: &BundlerConfig) {
  let dim = Colour::White.dimmed();

  for rule in &config.rules {
    println!(
      "{} {}",
      Colour::Cyan.paint(rule.name.clone()),
      dim.paint(rule.test.as_str().to_string())
    );
    println!("  {}", render_chain(&rule.loaders));
  }

  for plugin in &config.plugins {
    match plugin {
      BundlerPlugin::ExtractCss(extract) => {
        println!("{} extract-css {}", Colour::Green.paint("plugin"), extract.filename);
      }
      BundlerPlugin::Custom(name) => {
        println!("{} {name}", Colour::Green.paint("plugin"));
      }
    }
  }
}

fn main() {
  let args = Commands::parse();

  let mut env = BuildEnv::from_process_env();
  if let Some(mode) = args.env.mode {
    env.mode = mode.into();
  }
  if args.env.hot {
    env.hot = true;
  }

  let extract = if args.extract.no_extract {
    Some(ExtractOptions::Disabled)
  } else {
    args.extract.extract.map(ExtractOptions::Filename)
  };

  let steps = args.pipeline.step.map(|names| {
    PipelineSteps::List(names.iter().map(|name| PipelineStep::new(name.as_str())).collect())
  });

  let options = ComposerOptions {
    steps,
    autoprefixer: args.pipeline.no_autoprefixer.then_some(AutoprefixerOptions::Disabled),
    extract,
    filename: None,
    modules: args.modules.modules,
    local_ident_name: args.modules.local_ident_name,
    minimize: args.extract.minimize,
  };

  let composer = match Composer::with_env(options, env) {
    Ok(composer) => composer,
    Err(error) => {
      eprintln!("{} {error}", Colour::Red.paint("Error:"));
      std::process::exit(1);
    }
  };

  let platform = args.env.platform.map(Into::into).unwrap_or_default();
  let config = composer.apply(BundlerConfig { platform: Some(platform), ..Default::default() });

  print_config(&config);
}
