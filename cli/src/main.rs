use clap::Parser;
use jackc_cli::Cli;

fn main() -> anyhow::Result<()> {
  Cli::parse().run()
}
