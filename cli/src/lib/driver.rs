use std::path::Path;

use crate::common::PathArg;

/// Translates every resolved source file, reporting each failure to stderr
/// and continuing with the rest. Returns an error iff at least one file
/// failed, so the process exit status reflects the batch result.
pub fn run(path: PathArg) -> anyhow::Result<()> {
  let sources = path.sources()?;

  let mut any_failed = false;
  for src_path in &sources {
    if !translate_one(src_path) {
      any_failed = true;
    }
  }

  if any_failed {
    anyhow::bail!("one or more files failed to compile");
  }
  Ok(())
}

/// Translates a single file, writing diagnostics to stderr on failure.
/// Never panics on a bad input: every failure mode is reported and turned
/// into `false` so the caller can move on to the next file.
fn translate_one(src_path: &Path) -> bool {
  let source = match std::fs::read_to_string(src_path) {
    Ok(source) => source,
    Err(e) => {
      eprintln!("{}: {e}", src_path.display());
      return false;
    }
  };

  let mut out = Vec::new();
  if let Err(e) = jackc::compile(&source, &mut out) {
    let name = src_path.display().to_string();
    let use_color = supports_color::on(supports_color::Stream::Stderr)
      .map(|c| c.has_basic)
      .unwrap_or(false);
    eprint!("{}", e.report(diag::Source::file(name, source), use_color));
    return false;
  }

  let dest = src_path.with_extension("vm");
  if let Err(e) = std::fs::write(&dest, out) {
    eprintln!("{}: {e}", dest.display());
    return false;
  }

  true
}
