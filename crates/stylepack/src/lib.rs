mod adapters;
mod composer;
mod loader_chain;
mod pipeline;
#[cfg(test)]
mod testing;
mod utils;

pub use crate::{
  adapters::{on_import_adapter, require_adapter, resolve_adapter},
  composer::{Composer, compose},
  loader_chain::build_loader_chain,
};
pub use stylepack_common::*;
pub use stylepack_error::{ComposeError, ComposeResult};
