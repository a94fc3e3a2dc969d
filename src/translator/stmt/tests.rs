use indoc::indoc;

use crate::translator::compile_to_string;

#[test]
fn while_loop_label_order() {
  let src = indoc! {"
    class Main {
      function void f() {
        var boolean done;
        while (done) {
          let done = false;
        }
        return;
      }
    }
  "};
  let out = compile_to_string(src).unwrap();
  let expected = concat!(
    "function Main.f 1\n",
    "label L0\n",
    "push local 0\n",
    "not\n",
    "if-goto L1\n",
    "push constant 0\n",
    "pop local 0\n",
    "goto L0\n",
    "label L1\n",
    "push constant 0\n",
    "return\n",
  );
  assert_eq!(out, expected);
}

#[test]
fn bare_return_still_pushes_a_value() {
  let src = indoc! {"
    class Main {
      function void f() {
        return;
      }
    }
  "};
  let out = compile_to_string(src).unwrap();
  assert!(out.ends_with("push constant 0\nreturn\n"));
}
