use std::io::Write;

use syntax::{Keyword, TokenKind};

use super::Translator;
use crate::error::{Error, Result};

impl<'src, W: Write> Translator<'src, W> {
  fn is_statement_start(&self) -> bool {
    matches!(
      self.current().kind,
      TokenKind::Keyword(
        Keyword::Let | Keyword::If | Keyword::While | Keyword::Do | Keyword::Return
      )
    )
  }

  pub(super) fn compile_statements(&mut self) -> Result<()> {
    while self.is_statement_start() {
      match self.current().kind {
        TokenKind::Keyword(Keyword::Let) => self.compile_let()?,
        TokenKind::Keyword(Keyword::If) => self.compile_if()?,
        TokenKind::Keyword(Keyword::While) => self.compile_while()?,
        TokenKind::Keyword(Keyword::Do) => self.compile_do()?,
        TokenKind::Keyword(Keyword::Return) => self.compile_return()?,
        _ => unreachable!("guarded by is_statement_start"),
      }
    }
    Ok(())
  }

  /// `let name (= expr | [ idx ] = expr) ;`
  fn compile_let(&mut self) -> Result<()> {
    self.expect_keyword(Keyword::Let)?;
    let span = self.span();
    let name = self.expect_identifier()?;
    if !self.exists_anywhere(&name) {
      return Err(Error::undefined(name, span));
    }

    if self.at_symbol('[') {
      self.emit_push_var(&name, span)?;
      self.bump()?; // [
      self.compile_expression()?;
      self.expect_symbol(']')?;
      self.writer.write_arithmetic("add")?;
      self.expect_symbol('=')?;
      self.compile_expression()?;
      self.writer.write_pop("temp", 0)?;
      self.writer.write_pop("pointer", 1)?;
      self.writer.write_push("temp", 0)?;
      self.writer.write_pop("that", 0)?;
    } else {
      self.expect_symbol('=')?;
      self.compile_expression()?;
      self.emit_pop_var(&name, span)?;
    }

    self.expect_symbol(';')?;
    Ok(())
  }

  /// `if ( expr ) { stmts } (else { stmts })?`
  fn compile_if(&mut self) -> Result<()> {
    self.expect_keyword(Keyword::If)?;
    self.expect_symbol('(')?;
    self.compile_expression()?;
    self.expect_symbol(')')?;

    let (l_true, l_end) = self.next_labels();
    self.writer.write_arithmetic("not")?;
    self.writer.write_if(&l_true)?;

    self.expect_symbol('{')?;
    self.compile_statements()?;
    self.expect_symbol('}')?;
    self.writer.write_goto(&l_end)?;

    self.writer.write_label(&l_true)?;
    if self.at_keyword(Keyword::Else) {
      self.bump()?;
      self.expect_symbol('{')?;
      self.compile_statements()?;
      self.expect_symbol('}')?;
    }
    self.writer.write_label(&l_end)?;
    Ok(())
  }

  /// `while ( expr ) { stmts }`
  fn compile_while(&mut self) -> Result<()> {
    let (l_head, l_exit) = self.next_labels();
    self.writer.write_label(&l_head)?;

    self.expect_keyword(Keyword::While)?;
    self.expect_symbol('(')?;
    self.compile_expression()?;
    self.expect_symbol(')')?;
    self.writer.write_arithmetic("not")?;
    self.writer.write_if(&l_exit)?;

    self.expect_symbol('{')?;
    self.compile_statements()?;
    self.expect_symbol('}')?;
    self.writer.write_goto(&l_head)?;
    self.writer.write_label(&l_exit)?;
    Ok(())
  }

  /// A subroutine call whose return value is discarded.
  fn compile_do(&mut self) -> Result<()> {
    self.expect_keyword(Keyword::Do)?;
    self.compile_subroutine_call()?;
    self.expect_symbol(';')?;
    self.writer.write_pop("temp", 0)?;
    Ok(())
  }

  /// `return expr? ;` — a bare `return;` still pushes a value, since every
  /// subroutine in the source language returns something.
  fn compile_return(&mut self) -> Result<()> {
    self.expect_keyword(Keyword::Return)?;
    if self.at_symbol(';') {
      self.writer.write_push("constant", 0)?;
    } else {
      self.compile_expression()?;
    }
    self.expect_symbol(';')?;
    self.writer.write_return()?;
    Ok(())
  }
}

#[cfg(test)]
mod tests;
