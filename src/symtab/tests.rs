use super::*;

fn span() -> Span {
  (0..0).into()
}

#[test]
fn indices_are_contiguous_per_kind() {
  let mut t = SymbolTable::new();
  t.define("a", "int", Kind::Static, span()).unwrap();
  t.define("b", "int", Kind::Static, span()).unwrap();
  t.define("c", "int", Kind::Field, span()).unwrap();

  assert_eq!(t.index_of("a", span()).unwrap(), 0);
  assert_eq!(t.index_of("b", span()).unwrap(), 1);
  assert_eq!(t.index_of("c", span()).unwrap(), 0);
  assert_eq!(t.count(Kind::Static), 2);
  assert_eq!(t.count(Kind::Field), 1);
}

#[test]
fn redeclaration_in_same_scope_is_a_duplicate_error() {
  let mut t = SymbolTable::new();
  t.define("x", "int", Kind::Arg, span()).unwrap();
  let err = t.define("x", "int", Kind::Arg, span()).unwrap_err();
  assert!(matches!(err, Error::Duplicate { .. }));
}

#[test]
fn kind_none_is_rejected() {
  let mut t = SymbolTable::new();
  let err = t.define("x", "int", Kind::None, span()).unwrap_err();
  assert!(matches!(err, Error::Syntax { .. }));
}

#[test]
fn lookup_of_unknown_name_is_undefined() {
  let t = SymbolTable::new();
  assert!(!t.exists("nope"));
  assert!(matches!(
    t.kind_of("nope", span()).unwrap_err(),
    Error::Undefined { .. }
  ));
}

#[test]
fn reset_clears_entries_and_counters() {
  let mut t = SymbolTable::new();
  t.define("x", "int", Kind::Local, span()).unwrap();
  t.reset();
  assert!(!t.exists("x"));
  assert_eq!(t.count(Kind::Local), 0);
}

#[test]
fn kind_to_segment_mapping() {
  assert_eq!(Kind::Static.segment(), "static");
  assert_eq!(Kind::Field.segment(), "this");
  assert_eq!(Kind::Arg.segment(), "argument");
  assert_eq!(Kind::Local.segment(), "local");
}
