//! A pure formatter for the nine VM instruction forms. It validates nothing
//! and buffers nothing beyond what `io::Write` itself buffers.

use std::io::{self, Write};

pub struct VmWriter<W> {
  out: W,
}

impl<W: Write> VmWriter<W> {
  pub fn new(out: W) -> Self {
    VmWriter { out }
  }

  pub fn write_push(&mut self, segment: &str, index: u16) -> io::Result<()> {
    writeln!(self.out, "push {segment} {index}")
  }

  pub fn write_pop(&mut self, segment: &str, index: u16) -> io::Result<()> {
    writeln!(self.out, "pop {segment} {index}")
  }

  pub fn write_arithmetic(&mut self, command: &str) -> io::Result<()> {
    writeln!(self.out, "{command}")
  }

  pub fn write_label(&mut self, label: &str) -> io::Result<()> {
    writeln!(self.out, "label {label}")
  }

  pub fn write_goto(&mut self, label: &str) -> io::Result<()> {
    writeln!(self.out, "goto {label}")
  }

  pub fn write_if(&mut self, label: &str) -> io::Result<()> {
    writeln!(self.out, "if-goto {label}")
  }

  pub fn write_call(&mut self, name: &str, n_args: u16) -> io::Result<()> {
    writeln!(self.out, "call {name} {n_args}")
  }

  pub fn write_function(&mut self, name: &str, n_vars: u16) -> io::Result<()> {
    writeln!(self.out, "function {name} {n_vars}")
  }

  pub fn write_return(&mut self) -> io::Result<()> {
    writeln!(self.out, "return")
  }

  /// Flush the underlying stream and hand it back.
  pub fn into_inner(mut self) -> io::Result<W> {
    self.out.flush()?;
    Ok(self.out)
  }
}

#[cfg(test)]
mod tests;
