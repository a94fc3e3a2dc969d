use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Args;

/// The single positional argument: a `.jack` file, or a directory of them.
#[derive(Clone, Debug, Args)]
pub struct PathArg {
  #[arg(value_name = "PATH")]
  path: PathBuf,
}

impl PathArg {
  /// Resolves the argument into the list of source files to translate.
  ///
  /// A file is translated as-is; a directory yields every direct child
  /// whose name ends in `.jack`, in sorted order, without recursing into
  /// subdirectories.
  pub fn sources(&self) -> anyhow::Result<Vec<PathBuf>> {
    let meta = std::fs::metadata(&self.path)
      .with_context(|| format!("cannot access {}", self.path.display()))?;

    if meta.is_file() {
      return Ok(vec![self.path.clone()]);
    }

    if meta.is_dir() {
      let mut files: Vec<PathBuf> = std::fs::read_dir(&self.path)
        .with_context(|| format!("cannot read directory {}", self.path.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.extension().map(|ext| ext == "jack").unwrap_or(false))
        .filter(|p| p.is_file())
        .collect();
      files.sort();
      return Ok(files);
    }

    bail!("{} is neither a file nor a directory", self.path.display());
  }
}
