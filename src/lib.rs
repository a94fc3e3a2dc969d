//! Single-pass compiler front end for the Jack language: reads one class's
//! source and emits the equivalent stack-machine VM code.
//!
//! The three pieces that matter are [`symtab`] (name resolution),
//! [`vmwriter`] (instruction formatting) and [`translator`] (the
//! recursive-descent walker that drives both). [`error`] carries the
//! taxonomy every one of them can raise.

pub mod error;
pub mod symtab;
pub mod translator;
pub mod vmwriter;

pub use error::Error;
pub use symtab::{Kind, SymbolTable};
pub use translator::Translator;
pub use vmwriter::VmWriter;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Translate one class's Jack source into VM code, writing instructions to
/// `out`. `out` is flushed before this returns.
pub fn compile(src: &str, out: impl std::io::Write) -> Result<()> {
  let mut translator = Translator::new(src, out)?;
  translator.compile_class()?;
  translator.into_inner()?;
  Ok(())
}

#[cfg(test)]
mod tests;
