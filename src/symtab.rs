//! Two-scope name resolution: one table for class-level declarations
//! (`static`/`field`), one for subroutine-level ones (`argument`/`local`).

use indexmap::IndexMap;
use span::Span;

use crate::error::{Error, Result};

/// A declaration category. `None` is not a storage kind — it exists only so
/// [`SymbolTable::define`] has something to reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
  Static,
  Field,
  Arg,
  Local,
  None,
}

impl Kind {
  /// The VM memory segment a variable of this kind lives in.
  ///
  /// Panics on `Kind::None`, which is never assigned to a live entry.
  pub fn segment(self) -> &'static str {
    match self {
      Kind::Static => "static",
      Kind::Field => "this",
      Kind::Arg => "argument",
      Kind::Local => "local",
      Kind::None => unreachable!("Kind::None is never stored in a symbol table entry"),
    }
  }
}

#[derive(Clone, Debug)]
struct Entry {
  ty: String,
  kind: Kind,
  index: u16,
}

/// A single scope: class-level or subroutine-level, never both at once.
/// The translator keeps one of each.
#[derive(Default)]
pub struct SymbolTable {
  entries: IndexMap<String, Entry>,
  counts: [u16; 4],
}

impl SymbolTable {
  pub fn new() -> Self {
    Self::default()
  }

  /// Clear every entry and zero every per-kind counter.
  pub fn reset(&mut self) {
    self.entries.clear();
    self.counts = [0; 4];
  }

  /// Insert a new entry, assigning it the next index for `kind`.
  ///
  /// `span` is only used to locate the error it might report; it is not
  /// stored with the entry.
  pub fn define(&mut self, name: &str, ty: &str, kind: Kind, span: Span) -> Result<()> {
    if kind == Kind::None {
      return Err(Error::syntax("cannot define a variable of kind NONE", span));
    }
    if self.entries.contains_key(name) {
      return Err(Error::duplicate(name, span));
    }
    let index = self.counts[Self::slot(kind)];
    self.bump(kind);
    self.entries.insert(
      name.to_string(),
      Entry {
        ty: ty.to_string(),
        kind,
        index,
      },
    );
    Ok(())
  }

  fn bump(&mut self, kind: Kind) {
    self.counts[Self::slot(kind)] += 1;
  }

  fn slot(kind: Kind) -> usize {
    match kind {
      Kind::Static => 0,
      Kind::Field => 1,
      Kind::Arg => 2,
      Kind::Local => 3,
      Kind::None => unreachable!("Kind::None has no counter slot"),
    }
  }

  /// The number of entries of `kind` defined so far.
  pub fn count(&self, kind: Kind) -> u16 {
    if kind == Kind::None {
      return 0;
    }
    self.counts[Self::slot(kind)]
  }

  pub fn exists(&self, name: &str) -> bool {
    self.entries.contains_key(name)
  }

  pub fn kind_of(&self, name: &str, span: Span) -> Result<Kind> {
    self
      .entries
      .get(name)
      .map(|e| e.kind)
      .ok_or_else(|| Error::undefined(name, span))
  }

  pub fn type_of(&self, name: &str, span: Span) -> Result<&str> {
    self
      .entries
      .get(name)
      .map(|e| e.ty.as_str())
      .ok_or_else(|| Error::undefined(name, span))
  }

  pub fn index_of(&self, name: &str, span: Span) -> Result<u16> {
    self
      .entries
      .get(name)
      .map(|e| e.index)
      .ok_or_else(|| Error::undefined(name, span))
  }
}

#[cfg(test)]
mod tests;
