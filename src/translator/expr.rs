use std::io::Write;

use span::Span;
use syntax::{Keyword, TokenKind};

use super::Translator;
use crate::error::Result;

impl<'src, W: Write> Translator<'src, W> {
  /// `term (op term)*` — left-associative, no operator precedence.
  pub(super) fn compile_expression(&mut self) -> Result<()> {
    self.compile_term()?;
    loop {
      let op = match self.current().kind {
        TokenKind::Symbol(c @ ('+' | '-' | '*' | '/' | '&' | '|' | '<' | '>' | '=')) => c,
        _ => break,
      };
      self.bump()?;
      self.compile_term()?;
      match op {
        '+' => self.writer.write_arithmetic("add")?,
        '-' => self.writer.write_arithmetic("sub")?,
        '*' => self.writer.write_call("Math.multiply", 2)?,
        '/' => self.writer.write_call("Math.divide", 2)?,
        '&' => self.writer.write_arithmetic("and")?,
        '|' => self.writer.write_arithmetic("or")?,
        '<' => self.writer.write_arithmetic("lt")?,
        '>' => self.writer.write_arithmetic("gt")?,
        '=' => self.writer.write_arithmetic("eq")?,
        _ => unreachable!("guarded above"),
      }
    }
    Ok(())
  }

  fn compile_term(&mut self) -> Result<()> {
    match self.current().kind {
      TokenKind::IntConst(n) => {
        self.writer.write_push("constant", n)?;
        self.bump()?;
      }
      TokenKind::StringConst => self.compile_string_const()?,
      TokenKind::Keyword(Keyword::True) => {
        self.writer.write_push("constant", 0)?;
        self.writer.write_arithmetic("not")?;
        self.bump()?;
      }
      TokenKind::Keyword(Keyword::False) | TokenKind::Keyword(Keyword::Null) => {
        self.writer.write_push("constant", 0)?;
        self.bump()?;
      }
      TokenKind::Keyword(Keyword::This) => {
        self.writer.write_push("pointer", 0)?;
        self.bump()?;
      }
      TokenKind::Identifier => self.compile_identifier_term()?,
      TokenKind::Symbol('(') => {
        self.bump()?;
        self.compile_expression()?;
        self.expect_symbol(')')?;
      }
      TokenKind::Symbol(c @ ('-' | '~')) => {
        self.bump()?;
        self.compile_term()?;
        self.writer.write_arithmetic(if c == '-' { "neg" } else { "not" })?;
      }
      _ => return Err(self.syntax_error("expected a term")),
    }
    Ok(())
  }

  fn compile_string_const(&mut self) -> Result<()> {
    let s = self.current().lexeme.to_string();
    self.writer.write_push("constant", s.len() as u16)?;
    self.writer.write_call("String.new", 1)?;
    for byte in s.bytes() {
      self.writer.write_push("constant", byte as u16)?;
      self.writer.write_call("String.appendChar", 2)?;
    }
    self.bump()?;
    Ok(())
  }

  /// An identifier term: a bare variable, an array read, or one of the two
  /// call forms.
  fn compile_identifier_term(&mut self) -> Result<()> {
    let span = self.span();
    let name = self.expect_identifier()?;
    if self.at_symbol('(') {
      self.compile_current_object_call(&name)
    } else if self.at_symbol('.') {
      self.compile_qualified_call(&name, span)
    } else if self.at_symbol('[') {
      self.emit_push_var(&name, span)?;
      self.bump()?; // [
      self.compile_expression()?;
      self.expect_symbol(']')?;
      self.writer.write_arithmetic("add")?;
      self.writer.write_pop("pointer", 1)?;
      self.writer.write_push("that", 0)?;
      Ok(())
    } else {
      self.emit_push_var(&name, span)
    }
  }

  /// A call whose target has already been consumed. Used both by `do`
  /// statements and by call terms in expressions.
  pub(super) fn compile_subroutine_call(&mut self) -> Result<()> {
    let span = self.span();
    let name = self.expect_identifier()?;
    if self.at_symbol('.') {
      self.compile_qualified_call(&name, span)
    } else {
      self.compile_current_object_call(&name)
    }
  }

  /// `name(args)` — a call on the current object (`pointer 0` as receiver).
  fn compile_current_object_call(&mut self, name: &str) -> Result<()> {
    self.writer.write_push("pointer", 0)?;
    self.expect_symbol('(')?;
    let n_args = self.compile_expression_list()?;
    self.expect_symbol(')')?;
    self
      .writer
      .write_call(&format!("{}.{}", self.current_class, name), n_args + 1)?;
    Ok(())
  }

  /// `A.b(args)` — `A` is either a known variable (instance call) or a
  /// class name (static call).
  fn compile_qualified_call(&mut self, name: &str, span: Span) -> Result<()> {
    let is_instance = self.exists_anywhere(name);
    let callee_class = if is_instance {
      let (kind, ty, index) = self.resolve(name, span)?;
      self.writer.write_push(kind.segment(), index)?;
      ty
    } else {
      name.to_string()
    };
    self.expect_symbol('.')?;
    let method = self.expect_identifier()?;
    self.expect_symbol('(')?;
    let n_args = self.compile_expression_list()?;
    self.expect_symbol(')')?;
    let n_args = if is_instance { n_args + 1 } else { n_args };
    self
      .writer
      .write_call(&format!("{callee_class}.{method}"), n_args)?;
    Ok(())
  }

  fn compile_expression_list(&mut self) -> Result<u16> {
    let mut n = 0;
    if !self.at_symbol(')') {
      self.compile_expression()?;
      n += 1;
      while self.at_symbol(',') {
        self.bump()?;
        self.compile_expression()?;
        n += 1;
      }
    }
    Ok(n)
  }
}
