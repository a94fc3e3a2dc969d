use indoc::indoc;

use super::*;

#[test]
fn compile_writes_to_any_writer() {
  let src = indoc! {"
    class Main {
      function void main() {
        do Output.printInt(1+2);
        return;
      }
    }
  "};
  let mut buf = Vec::new();
  compile(src, &mut buf).unwrap();
  let out = String::from_utf8(buf).unwrap();
  assert_eq!(
    out,
    concat!(
      "function Main.main 0\n",
      "push constant 1\n",
      "push constant 2\n",
      "add\n",
      "call Output.printInt 1\n",
      "pop temp 0\n",
      "push constant 0\n",
      "return\n",
    )
  );
}

#[test]
fn a_lex_error_surfaces_through_compile() {
  let src = "class Main { function void f() { return 99999; } }";
  let mut buf = Vec::new();
  let err = compile(src, &mut buf).unwrap_err();
  assert!(matches!(err, Error::Lex(_)));
}
