use stylepack::{
  BuildEnv, BuildMode, BundlerConfig, Composer, ComposerOptions, Platform, render_chain,
};

fn main() {
  let composer = Composer::with_env(
    ComposerOptions { filename: Some("bundle.css".to_string()), ..Default::default() },
    BuildEnv::new(BuildMode::Production, false),
  )
  .expect("options are valid");

  let config =
    composer.apply(BundlerConfig { platform: Some(Platform::Browser), ..Default::default() });

  for rule in &config.rules {
    println!("{} ({}): {}", rule.name, rule.test.as_str(), render_chain(&rule.loaders));
  }
  for plugin in &config.plugins {
    println!("plugin: {}", plugin.name());
  }
}
