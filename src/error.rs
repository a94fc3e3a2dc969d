//! The five-way error taxonomy shared by every stage of the compiler.

use beef::lean::Cow;
use span::Span;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Every way a single file's translation can fail. All are fatal: on any of
/// these the current file's translation stops, but sibling files are
/// unaffected.
#[derive(Debug, Error)]
pub enum Error {
  #[error("{0}")]
  Io(#[from] std::io::Error),

  #[error("{}", .0.message)]
  Lex(#[from] syntax::Error),

  #[error("{message}")]
  Syntax { message: Cow<'static, str>, span: Span },

  #[error("undefined name `{name}`")]
  Undefined { name: String, span: Span },

  #[error("`{name}` is already defined in this scope")]
  Duplicate { name: String, span: Span },
}

impl Error {
  pub fn syntax(message: impl Into<Cow<'static, str>>, span: impl Into<Span>) -> Self {
    Error::Syntax {
      message: message.into(),
      span: span.into(),
    }
  }

  pub fn undefined(name: impl Into<String>, span: impl Into<Span>) -> Self {
    Error::Undefined {
      name: name.into(),
      span: span.into(),
    }
  }

  pub fn duplicate(name: impl Into<String>, span: impl Into<Span>) -> Self {
    Error::Duplicate {
      name: name.into(),
      span: span.into(),
    }
  }

  /// The span to underline when rendering this error as a diagnostic.
  ///
  /// `Io` has none: it never refers to a position in the source text.
  pub fn span(&self) -> Option<Span> {
    match self {
      Error::Io(_) => None,
      Error::Lex(e) => Some(e.span),
      Error::Syntax { span, .. } => Some(*span),
      Error::Undefined { span, .. } => Some(*span),
      Error::Duplicate { span, .. } => Some(*span),
    }
  }

  /// Render this error as a [`diag::Report`] against `source`, falling back
  /// to a bare message for errors with no span (currently just `Io`).
  pub fn report<'a>(&self, source: impl Into<diag::Source<'a>>, use_color: bool) -> String {
    match self.span() {
      Some(span) => diag::Report::error()
        .source(source)
        .message(self.to_string())
        .span(span)
        .color(use_color)
        .build()
        .emit_to_string()
        .unwrap_or_else(|_| self.to_string()),
      None => self.to_string(),
    }
  }
}

#[cfg(test)]
mod tests;
