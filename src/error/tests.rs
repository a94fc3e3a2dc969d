use super::*;

#[test]
fn undefined_carries_name_and_span() {
  let err = Error::undefined("foo", 3..6);
  assert_eq!(err.to_string(), "undefined name `foo`");
  assert_eq!(err.span(), Some(Span::from(3..6)));
}

#[test]
fn duplicate_carries_name_and_span() {
  let err = Error::duplicate("x", 0..1);
  assert_eq!(err.to_string(), "`x` is already defined in this scope");
}

#[test]
fn io_error_has_no_span() {
  let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
  let err = Error::from(io);
  assert_eq!(err.span(), None);
}

#[test]
fn lex_error_converts_and_keeps_span() {
  let lex = syntax::Error::new("bad token", 1..2);
  let err = Error::from(lex);
  assert_eq!(err.span(), Some(Span::from(1..2)));
}

#[test]
fn report_renders_a_snippet_for_spanned_errors() {
  let src = "let x = 1;";
  let err = Error::undefined("x", 4..5);
  let rendered = err.report(src, false);
  assert!(rendered.contains("undefined name `x`"));
  assert!(rendered.contains("let x = 1;"));
}
