//! Recursive-descent translator: parses Jack source and emits VM code in the
//! same pass. Productions below correspond 1:1 to the grammar; each consumes
//! exactly the lexemes it expects and aborts translation on the first
//! structural violation.

mod expr;
mod stmt;

use std::io::Write;

use span::Span;
use syntax::{Keyword, Lexer, Token, TokenKind};

use crate::error::{Error, Result};
use crate::symtab::{Kind, SymbolTable};
use crate::vmwriter::VmWriter;

pub struct Translator<'src, W> {
  lexer: Lexer<'src>,
  writer: VmWriter<W>,
  current_class: String,
  label_counter: u32,
  class_table: SymbolTable,
  subroutine_table: SymbolTable,
}

impl<'src, W: Write> Translator<'src, W> {
  pub fn new(src: &'src str, out: W) -> Result<Self> {
    let lexer = Lexer::new(src)?;
    Ok(Translator {
      lexer,
      writer: VmWriter::new(out),
      current_class: String::new(),
      label_counter: 0,
      class_table: SymbolTable::new(),
      subroutine_table: SymbolTable::new(),
    })
  }

  /// Flush and hand back the output stream.
  pub fn into_inner(self) -> Result<W> {
    Ok(self.writer.into_inner()?)
  }

  /// `class <Name> { classVarDec* subroutineDec* }`
  pub fn compile_class(&mut self) -> Result<()> {
    self.class_table.reset();
    self.expect_keyword(Keyword::Class)?;
    self.current_class = self.expect_identifier()?;
    self.expect_symbol('{')?;
    while self.at_keyword(Keyword::Static) || self.at_keyword(Keyword::Field) {
      self.compile_class_var_dec()?;
    }
    while self.at_keyword(Keyword::Constructor)
      || self.at_keyword(Keyword::Function)
      || self.at_keyword(Keyword::Method)
    {
      self.compile_subroutine_dec()?;
    }
    self.expect_symbol('}')?;
    Ok(())
  }

  /// `(static|field) type varName (, varName)* ;`
  fn compile_class_var_dec(&mut self) -> Result<()> {
    let kind = if self.at_keyword(Keyword::Static) {
      self.bump()?;
      Kind::Static
    } else {
      self.expect_keyword(Keyword::Field)?;
      Kind::Field
    };
    let ty = self.expect_type()?;
    self.define_class_var(&ty, kind)?;
    while self.at_symbol(',') {
      self.bump()?;
      self.define_class_var(&ty, kind)?;
    }
    self.expect_symbol(';')?;
    Ok(())
  }

  fn define_class_var(&mut self, ty: &str, kind: Kind) -> Result<()> {
    let span = self.span();
    let name = self.expect_identifier()?;
    self.class_table.define(&name, ty, kind, span)
  }

  /// `(constructor|function|method) (void|type) name ( parameterList ) subroutineBody`
  fn compile_subroutine_dec(&mut self) -> Result<()> {
    self.subroutine_table.reset();
    let kind = match self.current().kind {
      TokenKind::Keyword(kw @ (Keyword::Constructor | Keyword::Function | Keyword::Method)) => kw,
      _ => return Err(self.syntax_error("expected constructor, function or method")),
    };
    if kind == Keyword::Method {
      let span = self.span();
      self
        .subroutine_table
        .define("this", &self.current_class, Kind::Arg, span)?;
    }
    self.bump()?; // constructor | function | method
    self.expect_return_type()?;
    let name = self.expect_identifier()?;
    self.expect_symbol('(')?;
    self.compile_parameter_list()?;
    self.expect_symbol(')')?;

    self.expect_symbol('{')?;
    while self.at_keyword(Keyword::Var) {
      self.compile_var_dec()?;
    }

    let n_locals = self.subroutine_table.count(Kind::Local);
    self
      .writer
      .write_function(&format!("{}.{}", self.current_class, name), n_locals)?;

    match kind {
      Keyword::Constructor => {
        let n_fields = self.class_table.count(Kind::Field);
        self.writer.write_push("constant", n_fields)?;
        self.writer.write_call("Memory.alloc", 1)?;
        self.writer.write_pop("pointer", 0)?;
      }
      Keyword::Method => {
        self.writer.write_push("argument", 0)?;
        self.writer.write_pop("pointer", 0)?;
      }
      Keyword::Function => {}
      _ => unreachable!(),
    }

    self.compile_statements()?;
    self.expect_symbol('}')?;
    Ok(())
  }

  /// `void` or a type name.
  fn expect_return_type(&mut self) -> Result<()> {
    if self.at_keyword(Keyword::Void) {
      self.bump()
    } else {
      self.expect_type().map(|_| ())
    }
  }

  /// `((type varName) (, type varName)*)?`
  fn compile_parameter_list(&mut self) -> Result<()> {
    if !self.at_symbol(')') {
      self.compile_parameter()?;
      while self.at_symbol(',') {
        self.bump()?;
        self.compile_parameter()?;
      }
    }
    Ok(())
  }

  fn compile_parameter(&mut self) -> Result<()> {
    let ty = self.expect_type()?;
    let span = self.span();
    let name = self.expect_identifier()?;
    self.subroutine_table.define(&name, &ty, Kind::Arg, span)
  }

  /// `var type name (, name)* ;`
  fn compile_var_dec(&mut self) -> Result<()> {
    self.expect_keyword(Keyword::Var)?;
    let ty = self.expect_type()?;
    self.define_local(&ty)?;
    while self.at_symbol(',') {
      self.bump()?;
      self.define_local(&ty)?;
    }
    self.expect_symbol(';')?;
    Ok(())
  }

  fn define_local(&mut self, ty: &str) -> Result<()> {
    let span = self.span();
    let name = self.expect_identifier()?;
    self.subroutine_table.define(&name, ty, Kind::Local, span)
  }

  // --- lexeme helpers -------------------------------------------------

  fn current(&self) -> &Token<'src> {
    self.lexer.current()
  }

  fn span(&self) -> Span {
    self.current().span
  }

  fn bump(&mut self) -> Result<()> {
    Ok(self.lexer.bump()?)
  }

  fn at_symbol(&self, c: char) -> bool {
    matches!(self.current().kind, TokenKind::Symbol(s) if s == c)
  }

  fn at_keyword(&self, kw: Keyword) -> bool {
    matches!(self.current().kind, TokenKind::Keyword(k) if k == kw)
  }

  fn expect_keyword(&mut self, kw: Keyword) -> Result<()> {
    if self.at_keyword(kw) {
      self.bump()
    } else {
      Err(self.syntax_error(format!("expected keyword `{}`", kw.as_str())))
    }
  }

  fn expect_symbol(&mut self, c: char) -> Result<()> {
    if self.at_symbol(c) {
      self.bump()
    } else {
      Err(self.syntax_error(format!("expected `{c}`")))
    }
  }

  fn expect_identifier(&mut self) -> Result<String> {
    match self.current().kind {
      TokenKind::Identifier => {
        let name = self.current().lexeme.to_string();
        self.bump()?;
        Ok(name)
      }
      _ => Err(self.syntax_error("expected an identifier")),
    }
  }

  /// A primitive keyword (`int`/`char`/`boolean`) or a class identifier.
  fn expect_type(&mut self) -> Result<String> {
    match self.current().kind {
      TokenKind::Keyword(Keyword::Int) => {
        self.bump()?;
        Ok("int".into())
      }
      TokenKind::Keyword(Keyword::Char) => {
        self.bump()?;
        Ok("char".into())
      }
      TokenKind::Keyword(Keyword::Boolean) => {
        self.bump()?;
        Ok("boolean".into())
      }
      TokenKind::Identifier => self.expect_identifier(),
      _ => Err(self.syntax_error("expected a type")),
    }
  }

  fn syntax_error(&self, message: impl Into<beef::lean::Cow<'static, str>>) -> Error {
    Error::syntax(message, self.span())
  }

  // --- combined symbol lookup -----------------------------------------

  /// Resolve `name` across both scopes, subroutine scope first: a local
  /// `var` shadows a same-named `field`.
  fn resolve(&self, name: &str, span: Span) -> Result<(Kind, String, u16)> {
    let table = if self.subroutine_table.exists(name) {
      &self.subroutine_table
    } else if self.class_table.exists(name) {
      &self.class_table
    } else {
      return Err(Error::undefined(name, span));
    };
    Ok((
      table.kind_of(name, span)?,
      table.type_of(name, span)?.to_string(),
      table.index_of(name, span)?,
    ))
  }

  fn exists_anywhere(&self, name: &str) -> bool {
    self.subroutine_table.exists(name) || self.class_table.exists(name)
  }

  fn emit_push_var(&mut self, name: &str, span: Span) -> Result<()> {
    let (kind, _, index) = self.resolve(name, span)?;
    self.writer.write_push(kind.segment(), index)?;
    Ok(())
  }

  fn emit_pop_var(&mut self, name: &str, span: Span) -> Result<()> {
    let (kind, _, index) = self.resolve(name, span)?;
    self.writer.write_pop(kind.segment(), index)?;
    Ok(())
  }

  /// Mint the next pair of unique `if`/`while` labels. The counter is
  /// per-file, not per-subroutine: it only ever increases.
  fn next_labels(&mut self) -> (String, String) {
    let k = self.label_counter;
    self.label_counter += 1;
    (format!("L{}", 2 * k), format!("L{}", 2 * k + 1))
  }
}

/// Compile one class's worth of source to a VM-code string. Used directly by
/// the public API and by every translator test, at any submodule depth.
#[cfg(test)]
pub(crate) fn compile_to_string(src: &str) -> Result<String> {
  let mut t = Translator::new(src, Vec::new())?;
  t.compile_class()?;
  Ok(String::from_utf8(t.into_inner()?).unwrap())
}
