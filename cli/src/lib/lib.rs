pub mod common;
pub mod driver;

use clap::Parser;

use crate::common::PathArg;

/// Compiles Jack source files to Hack VM code.
#[derive(Debug, Parser)]
#[clap(name = "jackc", version)]
pub struct Cli {
  #[clap(flatten)]
  path: PathArg,
}

impl Cli {
  pub fn run(self) -> anyhow::Result<()> {
    driver::run(self.path)
  }
}
